//! Which field-definition attributes a file type uses.
//!
//! Screens look the capabilities up here instead of comparing file type
//! strings inline.

pub const YML: &str = "YML";
pub const FIXED_WIDTH_TOKENIZED: &str = "FIXED_WIDTH_TOKENIZED";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileTypeCapabilities {
    /// `path` is shown and sent.
    pub shows_path: bool,
    /// `startPosition` / `endPosition` are shown and sent.
    pub shows_positions: bool,
}

const TABLE: &[(&str, FileTypeCapabilities)] = &[
    (
        YML,
        FileTypeCapabilities {
            shows_path: true,
            shows_positions: false,
        },
    ),
    (
        FIXED_WIDTH_TOKENIZED,
        FileTypeCapabilities {
            shows_path: false,
            shows_positions: true,
        },
    ),
];

/// Anything the table does not name shows every attribute.
const DEFAULT: FileTypeCapabilities = FileTypeCapabilities {
    shows_path: true,
    shows_positions: true,
};

pub fn capabilities_for(file_type: &str) -> FileTypeCapabilities {
    TABLE
        .iter()
        .find(|(name, _)| *name == file_type)
        .map(|(_, caps)| *caps)
        .unwrap_or(DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yml_hides_positions() {
        let caps = capabilities_for("YML");
        assert!(caps.shows_path);
        assert!(!caps.shows_positions);
    }

    #[test]
    fn fixed_width_hides_path() {
        let caps = capabilities_for("FIXED_WIDTH_TOKENIZED");
        assert!(!caps.shows_path);
        assert!(caps.shows_positions);
    }

    #[test]
    fn unknown_and_empty_types_show_everything() {
        assert_eq!(capabilities_for("CSV"), DEFAULT);
        assert_eq!(capabilities_for(""), DEFAULT);
    }
}
