use indexmap::IndexMap;
use neander::directive::Directive;

use crate::{
    error::Error,
    number::parse_number,
    token::{Cursor, Token, TokenKind},
};

/// A label bound more than once. The later binding wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redefinition {
    pub name: String,
    pub previous: u8,
    pub current: u8,
    /// line of the overridden binding
    pub first_line: usize,
    pub line: usize,
}

// name -> (address, line of binding)
pub struct Labels {
    labels: IndexMap<String, (u8, usize)>,
    pc: u8,
    redefined: Vec<Redefinition>,
}

impl Labels {
    pub fn new() -> Self {
        Labels {
            labels: IndexMap::new(),
            pc: 0,
            redefined: vec![],
        }
    }

    pub fn insert(&mut self, name: String, addr: u8, line: usize) -> Option<(u8, usize)> {
        self.labels.insert(name, (addr, line))
    }

    pub fn get_val(&self, name: &str) -> Option<u8> {
        self.labels.get(name).map(|(addr, _)| *addr)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.labels
            .iter()
            .map(|(name, (addr, _))| (name.as_str(), *addr))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Program counter after the whole token stream
    pub fn pc(&self) -> u8 {
        self.pc
    }

    pub fn redefined(&self) -> &[Redefinition] {
        &self.redefined
    }

    /// Pass 1: simulate the program counter and bind every variable to it.
    ///
    /// Instructions, numbers and `DB` take one cell each and move the PC
    /// by 2, `DS n` moves it by `2n`, `ORG n` sets it. All arithmetic wraps
    /// modulo 256.
    pub fn collect(tokens: &[Token]) -> Result<Labels, Error> {
        let mut labels = Labels::new();
        let mut cursor = Cursor::new(tokens);

        while let Some((_, token)) = cursor.next() {
            match token.kind {
                TokenKind::Variable => labels.bind(token),
                TokenKind::Instruction | TokenKind::Number => labels.advance(1),
                TokenKind::Define => match Directive::parse(&token.value) {
                    Some(Directive::DB) => {
                        let (_, operand) = cursor.operand(Directive::DB, token)?;
                        parse_number(operand)?;
                        labels.advance(1);
                    }
                    Some(Directive::DS) => {
                        let (_, operand) = cursor.operand(Directive::DS, token)?;
                        let cells = parse_number(operand)?;
                        labels.advance(cells);
                    }
                    Some(Directive::ORG) => {
                        let (_, operand) = cursor.operand(Directive::ORG, token)?;
                        labels.pc = parse_number(operand)?;
                        log::trace!("ORG -> pc = 0x{:02X}", labels.pc);
                    }
                    None => log::warn!("line {}: ignored directive `{}`", token.line + 1, token.value),
                },
                TokenKind::Unknown => {
                    log::warn!("line {}: ignored token `{}`", token.line + 1, token.value)
                }
                TokenKind::Section | TokenKind::EndOfInput => {}
            }
        }

        log::debug!(
            "pass 1: {} labels, final pc = 0x{:02X}",
            labels.len(),
            labels.pc
        );
        Ok(labels)
    }

    fn bind(&mut self, token: &Token) {
        let addr = self.pc;
        log::trace!("bind `{}` = 0x{:02X}", token.value, addr);
        if let Some((previous, first_line)) = self.insert(token.value.clone(), addr, token.line) {
            self.redefined.push(Redefinition {
                name: token.value.clone(),
                previous,
                current: addr,
                first_line,
                line: token.line,
            });
        }
    }

    fn advance(&mut self, cells: u8) {
        let next = u16::from(self.pc) + 2 * u16::from(cells);
        if next > 0xFF {
            log::debug!("pc wrapped past 0xFF at 0x{:02X}", self.pc);
        }
        self.pc = next as u8;
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn collect(src: &str) -> Labels {
        Labels::collect(&tokenize(src)).unwrap()
    }

    #[test]
    fn nop_moves_pc() {
        let labels = collect("NOP");
        assert_eq!(labels.pc(), 2);
        assert!(labels.is_empty());
    }

    #[test]
    fn binds_before_advance() {
        let labels = collect("NOP\nstart: LDA\nHLT");
        assert_eq!(labels.get_val("start"), Some(2));
        assert_eq!(labels.pc(), 6);
    }

    #[test]
    fn org_sets_pc() {
        let labels = collect("ORG 0x10\nhere: NOP");
        assert_eq!(labels.get_val("here"), Some(0x10));
        assert_eq!(labels.pc(), 0x12);
    }

    #[test]
    fn db_and_ds() {
        let labels = collect("DB 1\na:\nDS 3\nb:");
        assert_eq!(labels.get_val("a"), Some(2));
        assert_eq!(labels.get_val("b"), Some(8));
    }

    #[test]
    fn pc_wraps() {
        let labels = collect("ORG 0xFF\nNOP");
        assert_eq!(labels.pc(), 0x01);

        let labels = collect("ORG 250\nDS 10");
        assert_eq!(labels.pc(), 250u8.wrapping_add(20));
    }

    #[test]
    fn last_binding_wins() {
        let labels = collect("x:\nNOP\nx:");
        assert_eq!(labels.get_val("x"), Some(2));
        assert_eq!(labels.len(), 1);
        assert_eq!(
            labels.redefined(),
            &[Redefinition {
                name: "x".to_string(),
                previous: 0,
                current: 2,
                first_line: 0,
                line: 2,
            }]
        );
    }

    #[test]
    fn missing_operand() {
        let tokens = tokenize("NOP\nNOP\nNOP\nORG");
        match Labels::collect(&tokens) {
            Err(Error::MissingOperand { directive, line }) => {
                assert_eq!(directive, Directive::ORG);
                assert_eq!(line, 3);
            }
            other => panic!("unexpected: {:?}", other.map(|l| l.pc())),
        }
    }

    #[test]
    fn missing_operand_at_end() {
        for (src, expect) in [("DB", Directive::DB), ("DS", Directive::DS), ("x: ORG ; end", Directive::ORG)] {
            match Labels::collect(&tokenize(src)) {
                Err(Error::MissingOperand { directive, line }) => {
                    assert_eq!(directive, expect);
                    assert_eq!(line, 0);
                }
                other => panic!("{src:?}: unexpected: {:?}", other.map(|l| l.pc())),
            }
        }
    }

    #[test]
    fn invalid_ds() {
        assert!(matches!(
            Labels::collect(&tokenize("DS 0x100")),
            Err(Error::InvalidNumber { ref value, line: 0 }) if value == "0x100"
        ));
    }

    #[test]
    fn invalid_org() {
        let tokens = tokenize("ORG 0x100");
        assert!(matches!(
            Labels::collect(&tokens),
            Err(Error::InvalidNumber { .. })
        ));
    }

    #[test]
    fn ignores_section_and_unknown() {
        let labels = collect(".data\n?? NOP");
        assert_eq!(labels.pc(), 2);
    }
}
