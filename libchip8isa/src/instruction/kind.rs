use std::fmt::Display;

use bimap::BiMap;
use lazy_static::lazy_static;

lazy_static! {
    static ref KIND_MNEMONIC_BIMAP: BiMap<InstructionKind, &'static str> = BiMap::from_iter([
        (InstructionKind::Cls, "CLS"),
        (InstructionKind::Ret, "RET"),
        (InstructionKind::Sys, "SYS"),
        (InstructionKind::Jp, "JP"),
        (InstructionKind::Call, "CALL"),
        (InstructionKind::Se, "SE"),
        (InstructionKind::Sne, "SNE"),
        (InstructionKind::Ld, "LD"),
        (InstructionKind::Add, "ADD"),
        (InstructionKind::Or, "OR"),
        (InstructionKind::And, "AND"),
        (InstructionKind::Xor, "XOR"),
        (InstructionKind::Sub, "SUB"),
        (InstructionKind::Subn, "SUBN"),
        (InstructionKind::Shr, "SHR"),
        (InstructionKind::Shl, "SHL"),
        (InstructionKind::Rnd, "RND"),
        (InstructionKind::Drw, "DRW"),
        (InstructionKind::Skp, "SKP"),
        (InstructionKind::Sknp, "SKNP"),
        (InstructionKind::Raw, "RAW"),
    ]);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionKind {
    Cls,
    Ret,
    Sys,

    Jp,
    Call,

    Se,
    Sne,

    Ld,
    Add,

    Or,
    And,
    Xor,
    Sub,
    Subn,
    Shr,
    Shl,

    Rnd,
    Drw,

    Skp,
    Sknp,

    /// Fallback for reserved or unrecognized encodings. Displays as the bare
    /// instruction word in hex rather than as a mnemonic.
    Raw,
}

impl InstructionKind {
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        KIND_MNEMONIC_BIMAP.get_by_right(&mnemonic).copied()
    }

    pub fn mnemonic(&self) -> &'static str {
        KIND_MNEMONIC_BIMAP
            .get_by_left(self)
            .expect("No mnemonic mapping for instruction kind")
    }

    /// The 8xy6/8xyE shift instructions document their source register as an
    /// optional operand, rendered inside a braced group.
    pub fn has_optional_reg_operand(&self) -> bool {
        matches!(self, Self::Shr | Self::Shl)
    }
}

impl Display for InstructionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}
