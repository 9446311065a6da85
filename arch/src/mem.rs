// Layout of a `.mem` image as read by the Neander simulator
//
// +--------+------------------------------------------+
// | 0..4   | magic `03 4E 44 52`                      |
// | 4..516 | 256 cells, 2 bytes each, high byte = 0   |
// +--------+------------------------------------------+

pub const MAGIC: [u8; 4] = [0x03, 0x4E, 0x44, 0x52];

/// Number of addressable memory cells.
pub const CELLS: usize = 256;

/// Bytes per cell in the image. Only the low byte carries data.
pub const CELL_SIZE: usize = 2;

/// Size of the cell area following the header.
pub const DATA_LEN: usize = CELLS * CELL_SIZE;

/// Total size of an image file.
pub const IMAGE_LEN: usize = MAGIC.len() + DATA_LEN;

/// Encode an 8-bit value as one cell.
pub fn cell(value: u8) -> [u8; CELL_SIZE] {
    [value, 0x00]
}

#[test]
fn test() {
    assert_eq!(DATA_LEN, 512);
    assert_eq!(IMAGE_LEN, 516);
    assert_eq!(cell(0xFF), [0xFF, 0x00]);
}
