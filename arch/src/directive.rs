use strum::{Display, EnumString};

/// Assembler directives.
///
/// Each one takes exactly one operand token.
/// - `DB n`: emit one cell holding `n`
/// - `DS n`: reserve `n` zeroed cells
/// - `ORG n`: set the program counter to `n`
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
pub enum Directive {
    DB,
    DS,
    ORG,
}

impl Directive {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }
}

#[test]
fn test() {
    assert_eq!(Directive::parse("DB"), Some(Directive::DB));
    assert_eq!(Directive::parse("ORG"), Some(Directive::ORG));
    assert_eq!(Directive::parse("DS"), Some(Directive::DS));
    assert_eq!(Directive::parse("db"), None);
    assert_eq!(Directive::ORG.to_string(), "ORG");
}
