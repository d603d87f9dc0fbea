//! Static literal tables for every highlighting category.
//!
//! The logos token enums in [`super::lexer`] and [`super::batch`] mirror
//! these tables; the tests there check that every literal here lexes to the
//! category it is listed under.

use super::TokenCategory;

/// Opening quote of a string literal.
pub const STRING_MARKER: &str = "\"";

const STRING_MARKERS: &[&str] = &[STRING_MARKER];

pub const BUILTIN_SYMBOLS: &[&str] = &["[", "]", ",", "{", "}", "@", "#"];

/// Longest first.
pub const OPERATOR_SYMBOLS: &[&str] = &["=>", "->", "|", ":"];

pub const CONSTANT_KEYWORDS: &[&str] = &["True", "False"];

pub const TYPE_KEYWORDS: &[&str] = &["Bit", "inf", "fin"];

pub const CONTROL_KEYWORDS: &[&str] = &[
    "module", "theorem", "where", "include", "let", "if", "else", "then", "type",
];

/// Interpreter commands recognised in batch scripts.
pub const BATCH_KEYWORDS: &[&str] = &[
    "autotrace",
    "bind_file",
    "browse",
    "cd",
    "check",
    "compile",
    "config",
    "definition",
    "deltr",
    "edit",
    "equals",
    "exhaust",
    "fm",
    "genTests",
    "getserial",
    "help",
    "info",
    "install-runtime",
    "isabelle",
    "isabelle-b",
    "isabelle-i",
    "let",
    "load",
    "print",
    "prove",
    "quit",
    "reload",
    "runWith",
    "safe",
    "sat",
    "script",
    "sendserial",
    "set",
    "sfm",
    "showtr",
    "trace",
    "translate",
    "type",
    "version",
];

/// Line comment marker in batch scripts.
pub const BATCH_COMMENT_START: &str = "#";

/// Line comment marker in full source files.
pub const LINE_COMMENT_START: &str = "//";

/// Full-mode literal tables paired with their category, in priority order.
pub fn category_tables() -> [(TokenCategory, &'static [&'static str]); 6] {
    [
        (TokenCategory::StringMarker, STRING_MARKERS),
        (TokenCategory::BuiltinSymbol, BUILTIN_SYMBOLS),
        (TokenCategory::OperatorSymbol, OPERATOR_SYMBOLS),
        (TokenCategory::ConstantKeyword, CONSTANT_KEYWORDS),
        (TokenCategory::TypeKeyword, TYPE_KEYWORDS),
        (TokenCategory::ControlKeyword, CONTROL_KEYWORDS),
    ]
}

/// Look up the category a full-mode literal is listed under.
pub fn category_of(literal: &str) -> Option<TokenCategory> {
    category_tables()
        .into_iter()
        .find(|(_, table)| table.contains(&literal))
        .map(|(category, _)| category)
}
