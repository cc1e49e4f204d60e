pub mod reconstructor;

// Re-export main types
pub use reconstructor::{reconstruct_lines, LayoutReconstructor};
