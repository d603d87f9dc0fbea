//! Foundation types for the Cryptol editor toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`] - Line/column positions for outline navigation
//! - Domain constants (file extensions, interpreter defaults)
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
mod position;

pub use position::{LineCol, line_col};

pub use text_size::{TextRange, TextSize};

// Re-export text-size for hosts that build their own ranges
pub use text_size;
