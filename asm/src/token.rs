use neander::directive::Directive;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Section,     // .data
    EndOfInput,  //
    Instruction, // LDA
    Number,      // 0x10
    Variable,    // loop:
    Define,      // ORG
    Unknown,     // ?!
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    /// 0-based source line
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, line: usize) -> Self {
        Token {
            kind,
            value: value.into(),
            line,
        }
    }
}

/// Walks a token slice by position.
pub struct Cursor<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Cursor<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Take the token following `directive` as its operand.
    /// `EndOfInput` is never an operand and is left in place.
    pub fn operand(
        &mut self,
        directive: Directive,
        at: &Token,
    ) -> Result<(usize, &'t Token), Error> {
        match self.tokens.get(self.pos) {
            Some(token) if token.kind != TokenKind::EndOfInput => {
                let idx = self.pos;
                self.pos += 1;
                Ok((idx, token))
            }
            _ => Err(Error::MissingOperand {
                directive,
                line: at.line,
            }),
        }
    }
}

impl<'t> Iterator for Cursor<'t> {
    type Item = (usize, &'t Token);

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokens.get(self.pos)?;
        let idx = self.pos;
        self.pos += 1;
        Some((idx, token))
    }
}
