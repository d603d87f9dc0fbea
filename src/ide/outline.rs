//! Theorem outline for document navigation.
//!
//! A declaration line starts with `theorem`, then one or more spaces, then a
//! name running up to the first `:` on the line. Nothing else is parsed:
//! multi-line declarations and names containing a colon are not supported.

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use crate::base::LineCol;
use crate::base::constants::THEOREM_KW;

/// A theorem found by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration {
    /// The raw captured name (not validated as an identifier).
    pub name: SmolStr,
    /// Byte offset of the first character of the name.
    pub offset: TextSize,
}

impl Declaration {
    /// Byte range of the name.
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.name.as_str()))
    }
}

/// An outline entry for the host's navigation UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    pub declaration: Declaration,
    /// Position of the name (0-indexed, byte column).
    pub position: LineCol,
}

/// Scan `text` for theorem declarations.
///
/// # Returns
/// One entry per matching line, in ascending offset order. Duplicate names
/// are kept.
pub fn scan_declarations(text: &str) -> Vec<Declaration> {
    scan(text).map(|(_, declaration)| declaration).collect()
}

/// Build the document outline for `text`.
pub fn document_outline(text: &str) -> Vec<OutlineEntry> {
    let entries: Vec<OutlineEntry> = scan(text)
        .map(|(position, declaration)| OutlineEntry {
            position,
            declaration,
        })
        .collect();

    tracing::trace!(declarations = entries.len(), "scanned outline");
    entries
}

/// Yields the name position and declaration for every matching line.
fn scan(text: &str) -> impl Iterator<Item = (LineCol, Declaration)> + '_ {
    let mut line_start = 0usize;

    text.split_inclusive('\n')
        .enumerate()
        .filter_map(move |(line_no, line)| {
            let start = line_start;
            line_start += line.len();

            let content = line.strip_suffix('\n').unwrap_or(line);
            let (column, name) = match_theorem_line(content)?;
            Some((
                LineCol::new(line_no as u32, column as u32),
                Declaration {
                    name: SmolStr::new(name),
                    offset: TextSize::new((start + column) as u32),
                },
            ))
        })
}

/// Match one line (without its newline) against the declaration pattern.
///
/// Returns the column where the name starts and the name itself.
fn match_theorem_line(line: &str) -> Option<(usize, &str)> {
    let rest = line.strip_prefix(THEOREM_KW)?;
    let name_part = rest.trim_start_matches(' ');
    if name_part.len() == rest.len() {
        return None;
    }

    let colon = name_part.find(':')?;
    Some((line.len() - name_part.len(), &name_part[..colon]))
}
