use crate::{error::Error, token::Token};

/// Parse `0x`-prefixed hex or plain decimal into a byte.
///
/// No sign, no whitespace and no other prefix is accepted.
pub fn parse_literal(s: &str) -> Option<u8> {
    let (digits, radix) = match s.strip_prefix("0x") {
        Some(hex) => (hex, 16),
        None => (s, 10),
    };
    // from_str_radix would take a leading `+`
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u8::from_str_radix(digits, radix).ok()
}

pub fn parse_number(token: &Token) -> Result<u8, Error> {
    parse_literal(&token.value).ok_or_else(|| Error::InvalidNumber {
        value: token.value.clone(),
        line: token.line,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    #[test]
    fn decimal() {
        assert_eq!(parse_literal("0"), Some(0));
        assert_eq!(parse_literal("42"), Some(42));
        assert_eq!(parse_literal("255"), Some(255));
        assert_eq!(parse_literal("007"), Some(7));
        assert_eq!(parse_literal("256"), None);
    }

    #[test]
    fn hex() {
        assert_eq!(parse_literal("0xFF"), Some(255));
        assert_eq!(parse_literal("0xff"), Some(255));
        assert_eq!(parse_literal("0x10"), Some(16));
        assert_eq!(parse_literal("0x100"), None);
        assert_eq!(parse_literal("0x"), None);
        assert_eq!(parse_literal("0xG1"), None);
    }

    #[test]
    fn malformed() {
        assert_eq!(parse_literal(""), None);
        assert_eq!(parse_literal("+1"), None);
        assert_eq!(parse_literal("-1"), None);
        assert_eq!(parse_literal("12ab"), None);
        assert_eq!(parse_literal("0b101"), None);
        assert_eq!(parse_literal("0X10"), None);
    }

    #[test]
    fn error_carries_line() {
        let token = Token::new(TokenKind::Number, "256", 7);
        match parse_number(&token) {
            Err(Error::InvalidNumber { value, line }) => {
                assert_eq!(value, "256");
                assert_eq!(line, 7);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
