//! Reserved identifier spellings.

use crate::token::TokenKind;

/// Every reserved word and the kind it lexes to.
pub const KEYWORDS: &[(&str, TokenKind)] = &[("fn", TokenKind::Function), ("let", TokenKind::Let)];

/// Try to match an identifier string to a keyword.
pub fn keyword_from_str(ident: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(spelling, _)| *spelling == ident)
        .map(|&(_, kind)| kind)
}

/// Classify a scanned identifier: its keyword kind, or `Ident`.
pub fn lookup_ident(ident: &str) -> TokenKind {
    keyword_from_str(ident).unwrap_or(TokenKind::Ident)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_words() {
        assert_eq!(lookup_ident("fn"), TokenKind::Function);
        assert_eq!(lookup_ident("let"), TokenKind::Let);
    }

    #[test]
    fn everything_else_is_an_identifier() {
        for ident in ["letx", "fnx", "Let", "FN", "_", "five", ""] {
            assert_eq!(lookup_ident(ident), TokenKind::Ident, "{ident:?}");
        }
    }

    #[test]
    fn table_only_holds_keyword_kinds() {
        assert!(KEYWORDS.iter().all(|(_, kind)| kind.is_keyword()));
    }
}
