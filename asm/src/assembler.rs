use crate::{
    codegen::{self, Output},
    error::Error,
    image::Image,
    label::Labels,
    lexer::tokenize,
    token::Token,
};

/// How `ORG` affects where pass 2 writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OrgMode {
    /// Only renumber labels, cells keep following each other
    #[default]
    Address,
    /// Also move the write position to the given byte offset
    Place,
}

#[derive(Debug, Clone, Default)]
pub struct Options {
    pub org: OrgMode,
}

pub struct Assembled {
    pub labels: Labels,
    pub output: Output,
    pub image: Image,
}

pub struct Assembler {
    tokens: Vec<Token>,
    options: Options,
}

impl Assembler {
    pub fn new(tokens: Vec<Token>, options: Options) -> Self {
        Assembler { tokens, options }
    }

    pub fn from_source(source: &str, options: Options) -> Self {
        Self::new(tokenize(source), options)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn first_pass(&self) -> Result<Labels, Error> {
        Labels::collect(&self.tokens)
    }

    pub fn second_pass(&self, labels: &Labels) -> Result<Output, Error> {
        codegen::generate(&self.tokens, labels, &self.options)
    }

    /// Run both passes and build the image. Nothing touches the filesystem.
    pub fn assemble(&self) -> Result<Assembled, Error> {
        let labels = self.first_pass()?;
        let output = self.second_pass(&labels)?;
        let image = Image::new(output.bytes())?;
        Ok(Assembled {
            labels,
            output,
            image,
        })
    }
}
