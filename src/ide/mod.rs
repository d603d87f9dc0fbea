//! IDE features — High-level APIs for editor hosts.
//!
//! Each function corresponds to a host request and is a pure function of
//! the document text.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take text in, return data out
//! 2. **No host types**: Uses our own types, converted at the host boundary
//! 3. **Total**: No operation here can fail; no match is an empty result
//!
//! ## Usage
//!
//! ```
//! use cryptol_mode::ide::{document_outline, highlight};
//!
//! let text = "theorem foo: True\n";
//! let outline = document_outline(text);
//! assert_eq!(outline[0].declaration.name, "foo");
//!
//! let spans = highlight(text);
//! assert_eq!(spans[0].text(text), "theorem");
//! ```

mod highlight;
mod outline;

pub use highlight::{HighlightSpan, classify_literal, highlight, highlight_mode, highlight_range};
pub use outline::{Declaration, OutlineEntry, document_outline, scan_declarations};
