//! Logos-based lexers for Cryptol sources and batch scripts
//!
//! Highlighting is lexical only: there is no parse tree. Each mode has a
//! logos token enum whose variants mirror the literal tables in
//! [`keywords`], and a shared [`Lexer`] adapter that maps every token to an
//! optional [`TokenCategory`].
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with Option<TokenCategory>, tiling the input
//!     ↓
//! ide::highlight → coalesced HighlightSpans
//! ```

mod batch;
pub mod keywords;
mod lexer;
mod token_category;

pub use batch::{BatchToken, tokenize_batch};
pub use lexer::{Classify, CryptolToken, Lexer, Token, tokenize};
pub use token_category::TokenCategory;
