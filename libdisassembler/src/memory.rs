use libchip8isa::Word;
use thiserror::Error;

/// Chip-8 machines address 4K of memory.
pub const MEMORY_SIZE: usize = 4096;

/// Programs load at 0x200; the space below is reserved for the interpreter.
pub const PROGRAM_BASE: Word = 0x200;

/// Bytes available for program data past the load base.
pub const PROGRAM_CAPACITY: usize = MEMORY_SIZE - PROGRAM_BASE as usize;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LoadError {
    #[error("program of {len} bytes doesn't fit into the {capacity} bytes past the load base")]
    CapacityExceeded { len: usize, capacity: usize },
}

#[derive(Debug, PartialEq)]
pub struct Memory {
    data: [u8; MEMORY_SIZE],
    loaded_end: usize,
}

impl Memory {
    /// Loads a program image at [`PROGRAM_BASE`], leaving the rest of the
    /// address space zeroed. Programs larger than [`PROGRAM_CAPACITY`] are
    /// rejected rather than truncated.
    pub fn load(program: &[u8]) -> Result<Self, LoadError> {
        if program.len() > PROGRAM_CAPACITY {
            return Err(LoadError::CapacityExceeded {
                len: program.len(),
                capacity: PROGRAM_CAPACITY,
            });
        }

        let base = PROGRAM_BASE as usize;
        let loaded_end = base + program.len();

        let mut data = [0; MEMORY_SIZE];
        data[base..loaded_end].copy_from_slice(program);

        log::debug!("Loaded {} program bytes at {:#x}", program.len(), PROGRAM_BASE);

        Ok(Self { data, loaded_end })
    }

    pub fn byte(&self, addr: Word) -> Option<u8> {
        self.data.get(addr as usize).copied()
    }

    pub fn word(&self, addr: Word) -> Option<Word> {
        let first_byte = self.byte(addr)?;
        let second_byte = self.byte(addr.checked_add(1)?)?;

        Some(libchip8isa::bytes_to_word([first_byte, second_byte]))
    }

    /// Like [`Memory::word`], but only succeeds while both bytes were written
    /// by the loader. Keeps a scan from wandering into the zeroed remainder of
    /// the address space when the program has no terminator.
    pub fn loaded_word(&self, addr: Word) -> Option<Word> {
        if (addr as usize).checked_add(libchip8isa::BYTES_PER_WORD)? > self.loaded_end {
            return None;
        }

        self.word(addr)
    }

    /// One past the highest address written by the loader.
    pub fn loaded_end(&self) -> usize {
        self.loaded_end
    }
}
