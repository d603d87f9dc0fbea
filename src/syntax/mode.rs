//! Editing modes and their file-extension associations.

use std::path::Path;

use crate::base::constants::{BATCH_EXT, CRYPTOL_EXT};
use crate::parser::keywords::{BATCH_COMMENT_START, LINE_COMMENT_START};

/// Editing mode selected for a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Full syntax mode for `.cry` sources
    Cryptol,
    /// Keyword-only mode for `.scr` batch scripts
    Batch,
}

/// A file-name pattern and the mode it activates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeAssociation {
    pub pattern: &'static str,
    pub mode: Mode,
}

impl ModeAssociation {
    /// Match a `*.ext` style pattern against a file name (case-sensitive).
    pub fn matches(&self, file_name: &str) -> bool {
        match self.pattern.strip_prefix('*') {
            Some(suffix) => file_name.len() > suffix.len() && file_name.ends_with(suffix),
            None => file_name == self.pattern,
        }
    }
}

/// Extension → mode table consumed by the host's file-open dispatch.
pub const MODE_ASSOCIATIONS: &[ModeAssociation] = &[
    ModeAssociation {
        pattern: "*.cry",
        mode: Mode::Cryptol,
    },
    ModeAssociation {
        pattern: "*.scr",
        mode: Mode::Batch,
    },
];

impl Mode {
    /// Mode for a file path, if any association matches its file name.
    pub fn for_path(path: &Path) -> Option<Mode> {
        let file_name = path.file_name()?.to_str()?;
        MODE_ASSOCIATIONS
            .iter()
            .find(|assoc| assoc.matches(file_name))
            .map(|assoc| assoc.mode)
    }

    /// Mode for a bare extension (without the dot).
    pub fn for_extension(ext: &str) -> Option<Mode> {
        match ext {
            CRYPTOL_EXT => Some(Mode::Cryptol),
            BATCH_EXT => Some(Mode::Batch),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Mode::Cryptol => CRYPTOL_EXT,
            Mode::Batch => BATCH_EXT,
        }
    }

    pub fn comment_start(self) -> &'static str {
        match self {
            Mode::Cryptol => LINE_COMMENT_START,
            Mode::Batch => BATCH_COMMENT_START,
        }
    }

    /// Display name for mode lines and menus.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Cryptol => "Cryptol",
            Mode::Batch => "Cryptol-Batch",
        }
    }
}
