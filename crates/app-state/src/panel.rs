//! JSON panel layout state: open flag and resizable width.

use tpl_common::PanelConfig;

/// Pure UI layout state for the JSON panel. Not part of the document.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelLayout {
    json_open: bool,
    json_width: f32,
    min_width: f32,
}

impl PanelLayout {
    pub fn new(config: &PanelConfig) -> Self {
        Self {
            json_open: false,
            json_width: config.default_width,
            min_width: config.min_width,
        }
    }

    pub fn is_json_open(&self) -> bool {
        self.json_open
    }

    pub fn set_json_open(&mut self, open: bool) {
        self.json_open = open;
    }

    pub fn width(&self) -> f32 {
        self.json_width
    }

    /// Resize the panel; the width never goes below the configured minimum.
    pub fn set_width(&mut self, width: f32) {
        self.json_width = width.max(self.min_width);
    }
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self::new(&PanelConfig::default())
    }
}
