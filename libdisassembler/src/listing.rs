use std::fmt::Display;

use libchip8isa::{instruction::Instruction, Word};

pub const LISTING_HEADER: &str = "[OFFSET]   [INSTRUCTION]";

/// One decoded instruction at its memory offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingEntry {
    pub offset: Word,
    pub instruction: Instruction,
}

impl Display for ListingEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("[{:#x}]    {}", self.offset, self.instruction))
    }
}

/// An ordered dump of a whole scan. Offsets increase strictly by one word,
/// starting at the program base.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Listing {
    pub entries: Vec<ListingEntry>,
}

impl Listing {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ListingEntry> {
        self.entries.iter()
    }
}

impl Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}\n\n", LISTING_HEADER))?;

        for entry in &self.entries {
            f.write_fmt(format_args!("{}\n", entry))?;
        }

        Ok(())
    }
}
