pub mod instruction;


pub type Word = u16;

pub const BYTES_PER_WORD: usize = 2;

pub type Register = usize;

pub const REGISTER_COUNT: usize = 16;

pub fn word_to_bytes(word: Word) -> [u8; BYTES_PER_WORD] {
    [((word & 0xFF00) >> 8) as u8, (word & 0x00FF) as u8]
}

pub fn bytes_to_word(bytes: [u8; BYTES_PER_WORD]) -> Word {
    (bytes[0] as u16) << 8 | (bytes[1] as u16)
}

/// High nibble (bits 12-15), selects the instruction family.
pub fn family(word: Word) -> u8 {
    ((word & 0xF000) >> 12) as u8
}

/// Low 12 bits, an address or wide immediate.
pub fn addr(word: Word) -> Word {
    word & 0x0FFF
}

/// Second nibble (bits 8-11), usually the Vx register index.
pub fn reg_x(word: Word) -> Register {
    ((word & 0x0F00) >> 8) as Register
}

/// Third nibble (bits 4-7), usually the Vy register index.
pub fn reg_y(word: Word) -> Register {
    ((word & 0x00F0) >> 4) as Register
}

/// Low nibble (bits 0-3), a short immediate or sub-opcode selector.
pub fn nibble(word: Word) -> u8 {
    (word & 0x000F) as u8
}

/// Low byte (bits 0-7), a byte immediate or sub-opcode selector.
pub fn byte(word: Word) -> u8 {
    (word & 0x00FF) as u8
}
