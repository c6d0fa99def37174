use crate::config::PageGeometry;

/// Bounding box of the word associated with an event, any side possibly
/// unrecorded
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WordBox {
    pub left: Option<f64>,
    pub top: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
}

impl WordBox {
    /// A box counts as present when its anchor corner is recorded
    pub fn is_present(&self) -> bool {
        self.left.is_some() && self.top.is_some()
    }
}

/// Spatial categories of one event row.
///
/// Categories are not mutually exclusive; the corrector applies them in a
/// fixed precedence over a snapshot taken before any transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowClass {
    /// Recorded x is negative (off the left edge)
    pub negative: bool,

    /// Box present and the click landed inside the text area; only the box
    /// needs re-anchoring
    pub only_word_fix: bool,

    /// negative OR only_word_fix; receives the line-wrap/margin box fix
    pub combined: bool,

    /// Click recorded box-relative; needs translation to page coordinates
    pub normal: bool,

    /// Click in the blank region with nothing local to anchor to
    pub blank: bool,
}

/// Classify one event row from its recorded coordinates and word box.
///
/// Comparisons against a missing bound are false. The height check runs
/// without the box-presence guard; corrected outputs depend on the looser
/// match, so the grouping must stay exactly as written.
pub fn classify(x: f64, y: f64, word_box: &WordBox, geometry: &PageGeometry) -> RowClass {
    let has_box = word_box.is_present();

    let negative = x < 0.0;
    let only_word_fix = has_box && x > geometry.left_margin && y > geometry.blank_max_y;
    let combined = negative || only_word_fix;

    let within_width = match (word_box.left, word_box.right) {
        (Some(left), Some(right)) => x <= right - left,
        _ => false,
    };
    let within_height = match (word_box.top, word_box.bottom) {
        (Some(top), Some(bottom)) => y <= bottom - top,
        _ => false,
    };
    let normal = (has_box && within_width) || within_height;

    let blank =
        x < geometry.blank_max_x && y < geometry.blank_max_y && !(combined || normal);

    RowClass {
        negative,
        only_word_fix,
        combined,
        normal,
        blank,
    }
}
