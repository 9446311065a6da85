pub mod assembler;
pub mod codegen;
pub mod error;
pub mod image;
pub mod label;
pub mod lexer;
pub mod msg;
pub mod number;
pub mod table;
pub mod token;
pub mod util;

pub use assembler::{Assembled, Assembler, OrgMode, Options};
pub use error::Error;
