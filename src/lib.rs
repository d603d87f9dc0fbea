//! # cryptol-mode
//!
//! Editor support for Cryptol: lexical highlighting, a theorem outline, and
//! one interpreter REPL per open document.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! host      → Declarative registration table for editor hosts
//!   ↓
//! repl      → REPL sessions, compile commands, backend cache
//!   ↓
//! ide       → Highlight spans, theorem outline
//!   ↓
//! syntax    → Editing modes and file associations
//!   ↓
//! parser    → Logos lexers, token categories, literal tables
//!   ↓
//! base      → Primitives (TextRange, LineCol, constants)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → ide → repl → host)
// ============================================================================

/// Foundation types: TextRange, LineCol, constants
pub mod base;

/// Lexers: logos token enums, categories, literal tables
pub mod parser;

/// Editing modes and their file associations
pub mod syntax;

/// IDE features: highlighting, outline
pub mod ide;

/// Interpreter and editing configuration
pub mod config;

/// Interpreter integration: sessions, compile commands, backends
pub mod repl;

/// Registration table consumed by editor hosts
pub mod host;

// Re-export commonly needed items
pub use parser::keywords;

pub use base::{LineCol, TextRange, TextSize};
pub use config::Config;
pub use parser::TokenCategory;
pub use syntax::Mode;
