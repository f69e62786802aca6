//! Fixed catalog of canvas format presets.

use std::fmt;

/// A named canvas format the user can apply to the template.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FormatPreset {
    pub label: &'static str,
    pub width: u32,
    pub height: u32,
}

impl FormatPreset {
    pub const YOUTUBE_SHORT: Self = Self {
        label: "YouTube Short (9:16)",
        width: 720,
        height: 1280,
    };
    pub const HD_LANDSCAPE: Self = Self {
        label: "HD 16:9 (1920x1080)",
        width: 1920,
        height: 1080,
    };
    pub const HD_PORTRAIT: Self = Self {
        label: "HD 9:16 (1080x1920)",
        width: 1080,
        height: 1920,
    };
    pub const SQUARE: Self = Self {
        label: "Square (1:1)",
        width: 1080,
        height: 1080,
    };
    pub const STANDARD: Self = Self {
        label: "Standard 16:9 (1280x720)",
        width: 1280,
        height: 720,
    };

    /// The catalog, in menu order.
    pub const ALL: [Self; 5] = [
        Self::YOUTUBE_SHORT,
        Self::HD_LANDSCAPE,
        Self::HD_PORTRAIT,
        Self::SQUARE,
        Self::STANDARD,
    ];
}

impl fmt::Display for FormatPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_five_presets() {
        assert_eq!(FormatPreset::ALL.len(), 5);
        assert_eq!(FormatPreset::ALL[0], FormatPreset::YOUTUBE_SHORT);
    }

    #[test]
    fn preset_dimensions() {
        assert_eq!(FormatPreset::YOUTUBE_SHORT.width, 720);
        assert_eq!(FormatPreset::YOUTUBE_SHORT.height, 1280);
        assert_eq!(FormatPreset::SQUARE.width, FormatPreset::SQUARE.height);
        assert_eq!(FormatPreset::HD_LANDSCAPE.to_string(), "HD 16:9 (1920x1080)");
    }

    #[test]
    fn labels_are_unique() {
        for (i, a) in FormatPreset::ALL.iter().enumerate() {
            for b in &FormatPreset::ALL[i + 1..] {
                assert_ne!(a.label, b.label);
            }
        }
    }
}
