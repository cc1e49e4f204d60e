use async_trait::async_trait;

use super::engine::{OcrEngine, OcrOutput};

/// Built-in demo menu, returned when no real OCR backend is wired in.
/// Also the reference fixture for pipeline tests.
pub const DEMO_MENU_TEXT: &str = "APPETIZERS
Caesar Salad
Fresh romaine lettuce with parmesan
$12.95

Tomato Soup
Creamy tomato basil soup
$8.95

ENTREES
Grilled Salmon
Atlantic salmon with herbs
$24.95

Beef Ribeye Steak
Prime cut with garlic butter
$32.95

Chicken Parmesan
Breaded chicken with marinara
$19.95

DESSERTS
Chocolate Cake
Rich chocolate layer cake
$7.95

Apple Pie
Traditional apple pie with cinnamon
$6.95

BEVERAGES
Coffee
Freshly brewed house blend
$3.95

Orange Juice
Freshly squeezed
$4.95";

/// Offline OCR stand-in serving the demo menu for any image reference
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoOcr;

#[async_trait]
impl OcrEngine for DemoOcr {
    async fn extract(&self, _image_ref: &str) -> Result<OcrOutput, String> {
        Ok(OcrOutput::from_text(DEMO_MENU_TEXT))
    }

    fn is_available(&self) -> bool {
        true
    }
}
