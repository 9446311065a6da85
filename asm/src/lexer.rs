use neander::directive::Directive;

use crate::token::{Token, TokenKind};

pub struct LineLexer<'a> {
    line: &'a str,
    line_idx: usize,
}

impl<'a> LineLexer<'a> {
    pub fn new(line: &'a str, line_idx: usize) -> Self {
        LineLexer { line, line_idx }
    }

    pub fn parse(&self) -> Vec<Token> {
        // Drop comment
        let code = match self.line.split_once(';') {
            Some((code, _)) => code,
            None => self.line,
        };

        let mut tokens = vec![];
        // Set once the line has its instruction or directive
        let mut stmt = false;
        for word in code
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|w| !w.is_empty())
        {
            let kind = classify(word, &mut stmt);
            let value = match kind {
                TokenKind::Variable => word.strip_suffix(':').unwrap_or(word),
                _ => word,
            };
            tokens.push(Token::new(kind, value, self.line_idx));
        }
        tokens
    }
}

fn classify(word: &str, stmt: &mut bool) -> TokenKind {
    if word.starts_with('.') {
        return TokenKind::Section;
    }
    if let Some(stem) = word.strip_suffix(':') {
        return if is_ident(stem) {
            TokenKind::Variable
        } else {
            TokenKind::Unknown
        };
    }
    if Directive::parse(word).is_some() {
        *stmt = true;
        return TokenKind::Define;
    }
    if word.starts_with(|c: char| c.is_ascii_digit()) {
        return TokenKind::Number;
    }
    if is_ident(word) {
        return if *stmt {
            TokenKind::Variable
        } else {
            *stmt = true;
            TokenKind::Instruction
        };
    }
    TokenKind::Unknown
}

fn is_ident(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(head) if head.is_ascii_alphabetic() || head == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Tokenize a whole source file. The result always ends with `EndOfInput`.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = vec![];
    let mut lines = 0;
    for (idx, line) in source.lines().enumerate() {
        tokens.extend(LineLexer::new(line, idx).parse());
        lines = idx + 1;
    }
    tokens.push(Token::new(TokenKind::EndOfInput, "", lines));
    log::debug!("tokenized {} lines into {} tokens", lines, tokens.len());
    tokens
}
