use std::collections::BTreeMap;

use neander::{directive::Directive, mem};

use crate::{
    assembler::{OrgMode, Options},
    error::Error,
    label::Labels,
    number::parse_number,
    table,
    token::{Cursor, Token, TokenKind},
};

/// Output buffer of pass 2.
#[derive(Debug, Default)]
pub struct Output {
    bytes: Vec<u8>,
    // byte offset of a cell -> index of the token that produced it
    origins: BTreeMap<usize, usize>,
    cursor: usize,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Emitted cells as (byte offset, token index), ordered by offset
    pub fn origins(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.origins.iter().map(|(&offset, &idx)| (offset, idx))
    }

    fn emit(&mut self, value: u8, origin: usize) {
        let end = self.cursor + mem::CELL_SIZE;
        if self.bytes.len() < end {
            self.bytes.resize(end, 0x00);
        }
        self.bytes[self.cursor..end].copy_from_slice(&mem::cell(value));
        self.origins.insert(self.cursor, origin);
        self.cursor = end;
    }

    fn seek(&mut self, offset: usize) {
        self.cursor = offset;
    }
}

/// Pass 2: encode every token into cells using the finished label table.
pub fn generate(tokens: &[Token], labels: &Labels, options: &Options) -> Result<Output, Error> {
    let mut output = Output::new();
    let mut cursor = Cursor::new(tokens);

    while let Some((idx, token)) = cursor.next() {
        match token.kind {
            TokenKind::Instruction => {
                let opcode =
                    table::opcode(&token.value).ok_or_else(|| Error::UnknownInstruction {
                        mnemonic: token.value.clone(),
                        line: token.line,
                    })?;
                output.emit(opcode, idx);
            }
            TokenKind::Number => output.emit(parse_number(token)?, idx),
            TokenKind::Variable => {
                let addr = labels
                    .get_val(&token.value)
                    .ok_or_else(|| Error::UndefinedLabel {
                        label: token.value.clone(),
                        line: token.line,
                    })?;
                output.emit(addr, idx);
            }
            TokenKind::Define => match Directive::parse(&token.value) {
                Some(Directive::DB) => {
                    let (_, operand) = cursor.operand(Directive::DB, token)?;
                    output.emit(parse_number(operand)?, idx);
                }
                Some(Directive::DS) => {
                    let (_, operand) = cursor.operand(Directive::DS, token)?;
                    for _ in 0..parse_number(operand)? {
                        output.emit(0x00, idx);
                    }
                }
                Some(Directive::ORG) => {
                    let (_, operand) = cursor.operand(Directive::ORG, token)?;
                    if options.org == OrgMode::Place {
                        output.seek(usize::from(parse_number(operand)?));
                    }
                }
                None => {}
            },
            TokenKind::Section | TokenKind::EndOfInput | TokenKind::Unknown => {}
        }
    }

    log::debug!("pass 2: emitted {} bytes", output.len());
    Ok(output)
}
