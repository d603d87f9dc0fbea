//! Highlighting categories produced by the lexers.

/// Syntactic category of a highlighted token.
///
/// Declaration order is the category priority order: when two categories
/// could claim the same text, the earlier one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenCategory {
    /// Opening quote of a string literal
    StringMarker,
    /// Structural punctuation: brackets, braces, comma, `@`, `#`
    BuiltinSymbol,
    /// `|`, `=>`, `->`, `:`
    OperatorSymbol,
    /// `True`, `False`
    ConstantKeyword,
    /// `Bit`, `inf`, `fin`
    TypeKeyword,
    /// `module`, `theorem`, `where`, ... and batch-script commands
    ControlKeyword,
    /// `#` line comment (batch scripts only)
    Comment,
}

impl TokenCategory {
    /// The six categories of the full language mode, in priority order.
    pub const PRIORITY: [TokenCategory; 6] = [
        TokenCategory::StringMarker,
        TokenCategory::BuiltinSymbol,
        TokenCategory::OperatorSymbol,
        TokenCategory::ConstantKeyword,
        TokenCategory::TypeKeyword,
        TokenCategory::ControlKeyword,
    ];

    /// Stable name for host-side highlight groups.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StringMarker => "string",
            Self::BuiltinSymbol => "builtin",
            Self::OperatorSymbol => "operator",
            Self::ConstantKeyword => "constant",
            Self::TypeKeyword => "type",
            Self::ControlKeyword => "keyword",
            Self::Comment => "comment",
        }
    }

    /// Index into a host's highlight-group legend.
    pub fn to_highlight_index(self) -> u32 {
        self as u32
    }

    /// Whether the category is a word-boundary-anchored keyword class.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::ConstantKeyword | Self::TypeKeyword | Self::ControlKeyword
        )
    }
}

impl std::fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
