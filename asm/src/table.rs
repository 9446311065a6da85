use bimap::BiMap;
use neander::op::Op;
use once_cell::sync::Lazy;
use strum::IntoEnumIterator;

/// mnemonic <-> opcode
pub static OPCODES: Lazy<BiMap<&'static str, u8>> =
    Lazy::new(|| Op::iter().map(|op| (op.mnemonic(), op.opcode())).collect());

pub fn opcode(mnemonic: &str) -> Option<u8> {
    OPCODES.get_by_left(mnemonic).copied()
}

pub fn mnemonic(opcode: u8) -> Option<&'static str> {
    OPCODES.get_by_right(&opcode).copied()
}

#[test]
fn test() {
    assert_eq!(OPCODES.len(), 11);
    assert_eq!(opcode("NOP"), Some(0x00));
    assert_eq!(opcode("STA"), Some(0x10));
    assert_eq!(opcode("LDA"), Some(0x20));
    assert_eq!(opcode("ADD"), Some(0x30));
    assert_eq!(opcode("OR"), Some(0x40));
    assert_eq!(opcode("AND"), Some(0x50));
    assert_eq!(opcode("NOT"), Some(0x60));
    assert_eq!(opcode("JMP"), Some(0x80));
    assert_eq!(opcode("JN"), Some(0x90));
    assert_eq!(opcode("JZ"), Some(0xA0));
    assert_eq!(opcode("HLT"), Some(0xF0));
    assert_eq!(opcode("FOO"), None);
    assert_eq!(mnemonic(0xF0), Some("HLT"));
    assert_eq!(mnemonic(0x70), None);
}
