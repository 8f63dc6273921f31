//! Shared overlay configuration: font size, filename toggle, orientation and
//! the label lines of both panels.

use super::PanelSide;
use crate::config::{DEFAULT_FONT_SIZE, LABEL_SLOTS, MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::render::Orientation;

/// One configurable label line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSlot {
    pub enabled: bool,
    pub text: String,
}

impl LabelSlot {
    pub fn new(enabled: bool, text: impl Into<String>) -> Self {
        Self {
            enabled,
            text: text.into(),
        }
    }

    /// Trimmed text if the slot is checked and not blank.
    pub fn active_text(&self) -> Option<&str> {
        let text = self.text.trim();
        (self.enabled && !text.is_empty()).then_some(text)
    }
}

/// Badges to draw on one image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayConfig {
    pub show_filename: bool,
    pub labels: Vec<String>,
}

impl OverlayConfig {
    pub fn is_empty(&self) -> bool {
        !self.show_filename && self.labels.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlaySettings {
    font_size: u32,
    embed_filenames: bool,
    orientation: Orientation,
    labels: [[LabelSlot; LABEL_SLOTS]; 2],
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            embed_filenames: false,
            orientation: Orientation::Horizontal,
            labels: Default::default(),
        }
    }
}

impl OverlaySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    /// Sets the font size, clamped to the supported range.
    pub fn set_font_size(&mut self, size: i64) {
        self.font_size = size.clamp(MIN_FONT_SIZE as i64, MAX_FONT_SIZE as i64) as u32;
    }

    pub fn embed_filenames(&self) -> bool {
        self.embed_filenames
    }

    pub fn set_embed_filenames(&mut self, embed: bool) {
        self.embed_filenames = embed;
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Updates one label line. Returns `false` for an unknown slot.
    pub fn set_label(&mut self, side: PanelSide, slot: usize, label: LabelSlot) -> bool {
        match self.labels[side.index()].get_mut(slot) {
            Some(existing) => {
                *existing = label;
                true
            }
            None => false,
        }
    }

    /// Active label texts of `side`, in slot order.
    pub fn active_labels(&self, side: PanelSide) -> Vec<String> {
        self.labels[side.index()]
            .iter()
            .filter_map(LabelSlot::active_text)
            .map(str::to_owned)
            .collect()
    }

    /// Badges that apply to the image shown in `side`.
    pub fn overlay_for(&self, side: PanelSide) -> OverlayConfig {
        OverlayConfig {
            show_filename: self.embed_filenames,
            labels: self.active_labels(side),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_needs_check_and_non_blank_text() {
        assert_eq!(LabelSlot::new(true, "  hello ").active_text(), Some("hello"));
        assert_eq!(LabelSlot::new(false, "hello").active_text(), None);
        assert_eq!(LabelSlot::new(true, "   ").active_text(), None);
        assert_eq!(LabelSlot::new(true, "").active_text(), None);
    }

    #[test]
    fn overlay_lists_active_labels_in_slot_order() {
        let mut settings = OverlaySettings::new();
        settings.set_label(PanelSide::Left, 2, LabelSlot::new(true, "third"));
        settings.set_label(PanelSide::Left, 0, LabelSlot::new(true, "first"));
        settings.set_label(PanelSide::Left, 1, LabelSlot::new(false, "second"));
        settings.set_label(PanelSide::Right, 1, LabelSlot::new(true, "right"));

        let left = settings.overlay_for(PanelSide::Left);
        assert_eq!(left.labels, vec!["first", "third"]);
        assert!(!left.show_filename);

        let right = settings.overlay_for(PanelSide::Right);
        assert_eq!(right.labels, vec!["right"]);
    }

    #[test]
    fn embed_toggle_applies_to_both_sides() {
        let mut settings = OverlaySettings::new();
        settings.set_embed_filenames(true);

        assert!(settings.overlay_for(PanelSide::Left).show_filename);
        assert!(settings.overlay_for(PanelSide::Right).show_filename);
    }

    #[test]
    fn unknown_slot_is_rejected() {
        let mut settings = OverlaySettings::new();
        assert!(!settings.set_label(PanelSide::Left, LABEL_SLOTS, LabelSlot::new(true, "x")));
        assert!(settings.overlay_for(PanelSide::Left).is_empty());
    }

    #[test]
    fn font_size_is_clamped() {
        let mut settings = OverlaySettings::new();
        assert_eq!(settings.font_size(), DEFAULT_FONT_SIZE);

        settings.set_font_size(2);
        assert_eq!(settings.font_size(), MIN_FONT_SIZE);
        settings.set_font_size(500);
        assert_eq!(settings.font_size(), MAX_FONT_SIZE);
        settings.set_font_size(24);
        assert_eq!(settings.font_size(), 24);
    }
}
