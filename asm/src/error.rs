use color_print::cprintln;
use neander::{directive::Directive, mem::DATA_LEN};
use thiserror::Error;

use crate::msg::Msg;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Argument(String),

    #[error("Expected an operand after `{directive}`")]
    MissingOperand { directive: Directive, line: usize },

    #[error("Invalid number: `{value}`")]
    InvalidNumber { value: String, line: usize },

    #[error("Unknown instruction: `{mnemonic}`")]
    UnknownInstruction { mnemonic: String, line: usize },

    #[error("Undefined label: `{label}`")]
    UndefinedLabel { label: String, line: usize },

    #[error("Program needs {0} bytes but memory holds {max}", max = DATA_LEN)]
    ImageOverflow(usize),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}

impl Error {
    /// 0-based source line of the offending token, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::MissingOperand { line, .. }
            | Error::InvalidNumber { line, .. }
            | Error::UnknownInstruction { line, .. }
            | Error::UndefinedLabel { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag(&self, file: &str, source: &str) {
        let msg = Msg::Error(self.to_string());
        match self.line() {
            Some(line) => msg.diag(file, line, source),
            None => msg.print(),
        }
        if let Some(cause) = std::error::Error::source(self) {
            cprintln!("      <blue>=</> <bold>caused by</>: {}", cause);
        }
    }
}
