use libchip8isa::{instruction::Instruction, Word};
use listing::{Listing, ListingEntry};
use memory::{LoadError, Memory, PROGRAM_BASE};

pub mod listing;
pub mod memory;


/// A single disassembly session over one loaded program image.
pub struct Disassembler {
    memory: Memory,
}

impl Disassembler {
    /// Loads the program into a fresh memory image. Fails if the program
    /// doesn't fit past the load base; no scanning happens in that case.
    pub fn new(program: &[u8]) -> Result<Self, LoadError> {
        Ok(Self {
            memory: Memory::load(program)?,
        })
    }

    /// Walks memory a word at a time from the program base, decoding as it
    /// goes. An all-zero word acts as an implicit end-of-program marker and is
    /// not emitted. This is a content heuristic, so genuine 0x0000 data also
    /// stops the scan. The walk never runs past the bytes the loader actually
    /// wrote.
    pub fn disassemble(&self) -> Listing {
        let mut entries = Vec::new();
        let mut pc = PROGRAM_BASE;

        while let Some(word) = self.memory.loaded_word(pc) {
            if word == 0x0000 {
                log::debug!("Zero word at {:#x}, stopping scan", pc);
                break;
            }

            let instruction = Instruction::deassemble_word(word);
            log::trace!("{:#x}: {:#06x} -> {}", pc, word, instruction);

            entries.push(ListingEntry {
                offset: pc,
                instruction,
            });

            pc += libchip8isa::BYTES_PER_WORD as Word;
        }

        log::debug!("Scan produced {} entries", entries.len());

        Listing { entries }
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }
}
