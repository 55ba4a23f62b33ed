use std::fmt::Display;

use kind::InstructionKind;

use crate::{Register, Word};

pub mod kind;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    /// General purpose register, rendered as `V` plus the decimal index.
    Reg(Register),
    /// 12-bit address field, rendered as `0x`-prefixed lowercase hex.
    Addr(Word),
    /// Byte immediate.
    Byte(u8),
    /// 4-bit immediate.
    Nibble(u8),
    /// A whole instruction word, used by the raw-hex fallback.
    Word(Word),

    /// The index register `I`.
    Index,
    /// Memory pointed to by the index register, `[I]`.
    IndexIndirect,
    /// Delay timer register, `DT`.
    DelayTimer,
    /// Sound timer register, `ST`.
    SoundTimer,
    /// Key press placeholder, `_KEY_`.
    Key,
    /// Built-in font sprite placeholder, `_CHAR_`.
    Char,
    /// BCD conversion placeholder, `_BCD_`.
    Bcd,
}

impl Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reg(index) => f.write_fmt(format_args!("V{}", index)),
            Self::Addr(addr) => f.write_fmt(format_args!("{:#x}", addr)),
            Self::Byte(byte) => f.write_fmt(format_args!("{:#x}", byte)),
            Self::Nibble(nibble) => f.write_fmt(format_args!("{:#x}", nibble)),
            Self::Word(word) => f.write_fmt(format_args!("{:#x}", word)),
            Self::Index => f.write_str("I"),
            Self::IndexIndirect => f.write_str("[I]"),
            Self::DelayTimer => f.write_str("DT"),
            Self::SoundTimer => f.write_str("ST"),
            Self::Key => f.write_str("_KEY_"),
            Self::Char => f.write_str("_CHAR_"),
            Self::Bcd => f.write_str("_BCD_"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    pub kind: InstructionKind,
    pub operand_a: Option<Operand>,
    pub operand_b: Option<Operand>,
    pub operand_c: Option<Operand>,
}

impl Instruction {
    pub const fn new(kind: InstructionKind) -> Self {
        Self {
            kind,
            operand_a: None,
            operand_b: None,
            operand_c: None,
        }
    }

    pub const fn with_operand_a(mut self, operand: Operand) -> Self {
        self.operand_a = Some(operand);
        self
    }

    pub const fn with_operand_b(mut self, operand: Operand) -> Self {
        self.operand_b = Some(operand);
        self
    }

    pub const fn with_operand_c(mut self, operand: Operand) -> Self {
        self.operand_c = Some(operand);
        self
    }

    const fn raw(word: Word) -> Self {
        Self::new(InstructionKind::Raw).with_operand_a(Operand::Word(word))
    }

    /// Decodes a single instruction word. Total over the whole 16-bit space:
    /// reserved and unrecognized encodings come back as [`InstructionKind::Raw`]
    /// instead of an error, since arbitrary binary input may legally contain
    /// them.
    pub fn deassemble_word(word: Word) -> Self {
        let x = Operand::Reg(crate::reg_x(word));
        let y = Operand::Reg(crate::reg_y(word));
        let addr = Operand::Addr(crate::addr(word));
        let byte = Operand::Byte(crate::byte(word));

        match crate::family(word) {
            0x0 => match crate::byte(word) {
                0xE0 => Self::new(InstructionKind::Cls),
                0xEE => Self::new(InstructionKind::Ret),
                _ => Self::new(InstructionKind::Sys).with_operand_a(addr),
            },
            0x1 => Self::new(InstructionKind::Jp).with_operand_a(addr),
            0x2 => Self::new(InstructionKind::Call).with_operand_a(addr),
            0x3 => Self::new(InstructionKind::Se)
                .with_operand_a(x)
                .with_operand_b(byte),
            0x4 => Self::new(InstructionKind::Sne)
                .with_operand_a(x)
                .with_operand_b(byte),
            0x5 => Self::new(InstructionKind::Se)
                .with_operand_a(x)
                .with_operand_b(y),
            0x6 => Self::new(InstructionKind::Ld)
                .with_operand_a(x)
                .with_operand_b(byte),
            0x7 => Self::new(InstructionKind::Add)
                .with_operand_a(x)
                .with_operand_b(byte),
            0x8 => {
                let kind = match crate::nibble(word) {
                    0x0 => InstructionKind::Ld,
                    0x1 => InstructionKind::Or,
                    0x2 => InstructionKind::And,
                    0x3 => InstructionKind::Xor,
                    0x4 => InstructionKind::Add,
                    0x5 => InstructionKind::Sub,
                    0x6 => InstructionKind::Shr,
                    0x7 => InstructionKind::Subn,
                    0xE => InstructionKind::Shl,
                    _ => return Self::raw(word),
                };

                Self::new(kind).with_operand_a(x).with_operand_b(y)
            }
            0x9 => Self::new(InstructionKind::Sne)
                .with_operand_a(x)
                .with_operand_b(y),
            0xA => Self::new(InstructionKind::Ld)
                .with_operand_a(Operand::Index)
                .with_operand_b(addr),
            // Family 0xB is the jump with V0 offset; the listing keeps the LD
            // spelling for compatibility with existing dumps.
            0xB => Self::new(InstructionKind::Ld)
                .with_operand_a(Operand::Reg(0))
                .with_operand_b(addr),
            0xC => Self::new(InstructionKind::Rnd)
                .with_operand_a(x)
                .with_operand_b(byte),
            0xD => Self::new(InstructionKind::Drw)
                .with_operand_a(x)
                .with_operand_b(y)
                .with_operand_c(Operand::Nibble(crate::nibble(word))),
            0xE => match crate::byte(word) {
                0x9E => Self::new(InstructionKind::Skp).with_operand_a(x),
                0xA1 => Self::new(InstructionKind::Sknp).with_operand_a(x),
                _ => Self::raw(word),
            },
            0xF => match crate::byte(word) {
                0x07 => Self::new(InstructionKind::Ld)
                    .with_operand_a(x)
                    .with_operand_b(Operand::DelayTimer),
                0x0A => Self::new(InstructionKind::Ld)
                    .with_operand_a(x)
                    .with_operand_b(Operand::Key),
                0x15 => Self::new(InstructionKind::Ld)
                    .with_operand_a(Operand::DelayTimer)
                    .with_operand_b(x),
                0x18 => Self::new(InstructionKind::Ld)
                    .with_operand_a(Operand::SoundTimer)
                    .with_operand_b(x),
                0x1E => Self::new(InstructionKind::Add)
                    .with_operand_a(Operand::Index)
                    .with_operand_b(x),
                0x29 => Self::new(InstructionKind::Ld)
                    .with_operand_a(Operand::Char)
                    .with_operand_b(x),
                0x33 => Self::new(InstructionKind::Ld)
                    .with_operand_a(Operand::Bcd)
                    .with_operand_b(x),
                0x55 => Self::new(InstructionKind::Ld)
                    .with_operand_a(Operand::IndexIndirect)
                    .with_operand_b(x),
                0x65 => Self::new(InstructionKind::Ld)
                    .with_operand_a(x)
                    .with_operand_b(Operand::IndexIndirect),
                _ => Self::raw(word),
            },
            _ => Self::raw(word),
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The fallback renders as the bare word, with no mnemonic in front.
        if self.kind == InstructionKind::Raw {
            if let Some(operand) = self.operand_a {
                return f.write_fmt(format_args!("{}", operand));
            }
        }

        f.write_fmt(format_args!("{}", self.kind))?;

        if let Some(operand) = self.operand_a {
            f.write_fmt(format_args!(" {}", operand))?;
        }

        if let Some(operand) = self.operand_b {
            if self.kind.has_optional_reg_operand() {
                f.write_fmt(format_args!("{{, {}}}", operand))?;
            } else {
                f.write_fmt(format_args!(", {}", operand))?;
            }
        }

        if let Some(operand) = self.operand_c {
            f.write_fmt(format_args!(", {}", operand))?;
        }

        Ok(())
    }
}
