//! Logos-based lexer for interpreter batch scripts (`*.scr`)
//!
//! Batch scripts are flat lists of interpreter commands. Only the command
//! vocabulary, `#` comments, `:` and `@` are highlighted.

use super::lexer::{Classify, Lexer, Token};
use super::token_category::TokenCategory;
use logos::Logos;

/// Tokenize a batch script into a Vec
pub fn tokenize_batch(input: &str) -> Vec<Token> {
    Lexer::<BatchToken>::new(input).collect()
}

/// Logos token enum for batch scripts
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchToken {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"#[^\n]*")]
    Comment,

    // Hyphens are word characters here so `install-runtime` and `isabelle-b`
    // stay whole.
    #[regex(r"[A-Za-z0-9_][A-Za-z0-9_'-]*")]
    Word,

    #[token(":")]
    Colon,
    #[token("@")]
    At,

    // =========================================================================
    // COMMANDS (longest first where one is a prefix of another)
    // =========================================================================
    #[token("install-runtime")]
    InstallRuntime,
    #[token("isabelle-b")]
    IsabelleB,
    #[token("isabelle-i")]
    IsabelleI,
    #[token("isabelle")]
    Isabelle,
    #[token("sendserial")]
    SendSerial,
    #[token("definition")]
    Definition,
    #[token("getserial")]
    GetSerial,
    #[token("bind_file")]
    BindFile,
    #[token("translate")]
    Translate,
    #[token("autotrace")]
    AutoTrace,
    #[token("genTests")]
    GenTests,
    #[token("compile")]
    Compile,
    #[token("version")]
    Version,
    #[token("exhaust")]
    Exhaust,
    #[token("runWith")]
    RunWith,
    #[token("config")]
    Config,
    #[token("equals")]
    Equals,
    #[token("browse")]
    Browse,
    #[token("reload")]
    Reload,
    #[token("script")]
    Script,
    #[token("showtr")]
    ShowTr,
    #[token("check")]
    Check,
    #[token("deltr")]
    DelTr,
    #[token("print")]
    Print,
    #[token("prove")]
    Prove,
    #[token("trace")]
    Trace,
    #[token("edit")]
    Edit,
    #[token("help")]
    Help,
    #[token("info")]
    Info,
    #[token("load")]
    Load,
    #[token("quit")]
    Quit,
    #[token("safe")]
    Safe,
    #[token("type")]
    Type,
    #[token("let")]
    Let,
    #[token("sat")]
    Sat,
    #[token("set")]
    Set,
    #[token("sfm")]
    Sfm,
    #[token("cd")]
    Cd,
    #[token("fm")]
    Fm,
}

impl Classify for BatchToken {
    fn category(self) -> Option<TokenCategory> {
        match self {
            BatchToken::Whitespace | BatchToken::Word => None,
            BatchToken::Comment => Some(TokenCategory::Comment),
            BatchToken::Colon => Some(TokenCategory::BuiltinSymbol),
            BatchToken::At => Some(TokenCategory::OperatorSymbol),
            _ => Some(TokenCategory::ControlKeyword),
        }
    }
}
