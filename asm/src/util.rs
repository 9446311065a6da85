use color_print::cformat;

use crate::{
    codegen::Output,
    label::Labels,
    table,
    token::{Token, TokenKind},
};

pub fn print_dump(tokens: &[Token], labels: &Labels, output: &Output) {
    println!("{}+------[labels]{}", "-".repeat(19), "-".repeat(39));
    for (name, addr) in labels.iter() {
        println!("{:19}| {}", "", cformat!("<g>{}</> = <y>0x{:02X}</>", name, addr));
    }

    println!("{}+------[cells]{}", "-".repeat(19), "-".repeat(40));
    let bytes = output.bytes();
    for (offset, idx) in output.origins() {
        let (lo, hi) = (bytes[offset], bytes[offset + 1]);
        let token = &tokens[idx];
        let body = match token.kind {
            TokenKind::Instruction => match table::mnemonic(lo) {
                Some(mnemonic) => cformat!("<red>{}</>", mnemonic),
                None => cformat!("<r,s>{}</>", token.value),
            },
            TokenKind::Variable => cformat!("<g>{}</>", token.value),
            TokenKind::Number => cformat!("<y>{}</>", token.value),
            TokenKind::Define => cformat!("<c>{}</>", token.value),
            _ => token.value.clone(),
        };
        println!(
            "[{:04X}] {:02X} {:02X}      | {:>4}: {}",
            offset,
            lo,
            hi,
            token.line + 1,
            body
        );
    }
    println!("-------------------+-----------------------------------------------------");
}
