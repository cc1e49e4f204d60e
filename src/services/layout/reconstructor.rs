use crate::models::config::LayoutConfig;
use crate::models::token::TextToken;
use std::cmp::Ordering;
use tracing::debug;

/// A horizontal run of tokens judged to share one text row
struct Row {
    tokens: Vec<TextToken>,
    y_sum: f64,
}

impl Row {
    fn new(token: TextToken) -> Self {
        let y_sum = token.y;
        Self {
            tokens: vec![token],
            y_sum,
        }
    }

    /// Running average Y of the row's tokens
    fn average_y(&self) -> f64 {
        self.y_sum / self.tokens.len() as f64
    }

    fn push(&mut self, token: TextToken) {
        self.y_sum += token.y;
        self.tokens.push(token);
    }
}

/// Rebuilds the logical reading order of a photographed menu page from
/// per-token OCR bounding boxes.
///
/// Multi-column pages are read down the first column completely before
/// proceeding to the next, matching how a person reads a printed menu —
/// not the raster order OCR naturally returns.
pub struct LayoutReconstructor {
    config: LayoutConfig,
}

impl Default for LayoutReconstructor {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl LayoutReconstructor {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Reorder OCR tokens into plain text lines in reading order.
    ///
    /// Degrades gracefully: empty input produces no lines, and pages with
    /// too few tokens or no clear column gutter are emitted in natural
    /// top-to-bottom order. Never fails.
    pub fn reconstruct_lines(&self, tokens: &[TextToken]) -> Vec<String> {
        let usable: Vec<TextToken> = tokens.iter().filter(|t| t.is_usable()).cloned().collect();
        if usable.is_empty() {
            return Vec::new();
        }

        let boundaries = self.detect_column_boundaries(&usable);

        if boundaries.is_empty() {
            let rows = self.group_into_rows(usable);
            debug!(rows = rows.len(), "single-column page");
            return rows.iter().map(|r| self.render_row(r)).collect();
        }

        debug!(columns = boundaries.len() + 1, "multi-column page");

        // Partition tokens by column, then rebuild rows within each column
        // so one column is fully emitted before the next begins. A row is
        // built inside exactly one column and is never split.
        let mut columns: Vec<Vec<TextToken>> = (0..=boundaries.len()).map(|_| Vec::new()).collect();
        for token in usable {
            let center = token.x + token.width / 2.0;
            let idx = boundaries
                .iter()
                .position(|b| center < *b)
                .unwrap_or(boundaries.len());
            columns[idx].push(token);
        }

        let mut lines = Vec::new();
        for column in columns {
            let rows = self.group_into_rows(column);
            lines.extend(rows.iter().map(|r| self.render_row(r)));
        }
        lines
    }

    /// Find the X positions of column gutters.
    ///
    /// Walks tokens left to right tracking the rightmost edge seen so far;
    /// a stretch of the X axis that no token crosses is a gutter. Gaps
    /// above the minor threshold are candidates, but only gaps above the
    /// major threshold count as true boundaries. Returns gutter midpoints.
    fn detect_column_boundaries(&self, tokens: &[TextToken]) -> Vec<f64> {
        // Sparse pages do not carry enough signal for column detection
        if tokens.len() < self.config.min_tokens_for_columns {
            return Vec::new();
        }

        let mut sorted: Vec<&TextToken> = tokens.iter().collect();
        sorted.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));

        let mut candidates: Vec<(f64, f64)> = Vec::new(); // (midpoint, gap width)
        let mut max_right = sorted[0].right();
        for token in &sorted[1..] {
            let gap = token.x - max_right;
            if gap > self.config.minor_column_gap {
                candidates.push(((max_right + token.x) / 2.0, gap));
            }
            max_right = max_right.max(token.right());
        }

        let mut boundaries: Vec<f64> = candidates
            .iter()
            .filter(|(_, gap)| *gap > self.config.major_column_gap)
            .map(|(mid, _)| *mid)
            .collect();

        // Merge boundaries that landed on the same gutter
        boundaries.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        let mut merged: Vec<f64> = Vec::new();
        for b in boundaries {
            match merged.last() {
                Some(last) if b - last < self.config.boundary_merge_distance => {}
                _ => merged.push(b),
            }
        }

        // Cap the column count to avoid runaway fragmentation on noise
        merged.truncate(self.config.max_columns.saturating_sub(1));
        merged
    }

    /// Cluster tokens into rows by vertical proximity.
    ///
    /// A token joins the first row whose running average Y is within
    /// tolerance, otherwise it starts a new row. Tokens within a row are
    /// ordered left to right; rows are ordered top to bottom.
    fn group_into_rows(&self, tokens: Vec<TextToken>) -> Vec<Row> {
        let mut rows: Vec<Row> = Vec::new();

        for token in tokens {
            let target = rows
                .iter()
                .position(|r| (r.average_y() - token.y).abs() <= self.config.line_y_tolerance);
            match target {
                Some(i) => rows[i].push(token),
                None => rows.push(Row::new(token)),
            }
        }

        for row in &mut rows {
            row.tokens
                .sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));
        }
        rows.sort_by(|a, b| {
            a.average_y()
                .partial_cmp(&b.average_y())
                .unwrap_or(Ordering::Equal)
        });
        rows
    }

    /// Join a row's tokens into one text line.
    ///
    /// Close gaps get a single space, wide gaps a triple space (a probable
    /// distinct field such as a price), and sub-word kerning gaps nothing.
    fn render_row(&self, row: &Row) -> String {
        let mut out = String::new();
        let mut prev_right: Option<f64> = None;

        for token in &row.tokens {
            if let Some(right) = prev_right {
                let gap = token.x - right;
                if gap > self.config.field_gap {
                    out.push_str("   ");
                } else if gap >= self.config.kern_gap {
                    out.push(' ');
                }
            }
            out.push_str(token.text.trim());
            prev_right = Some(token.right());
        }

        out
    }
}

/// Reconstruct reading order with default thresholds.
pub fn reconstruct_lines(tokens: &[TextToken]) -> Vec<String> {
    LayoutReconstructor::default().reconstruct_lines(tokens)
}
