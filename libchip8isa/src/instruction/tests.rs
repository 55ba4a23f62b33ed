use super::{kind::InstructionKind, Instruction, Operand};

#[test]
fn cls_and_ret() {
    assert_eq!(
        Instruction::deassemble_word(0x00E0),
        Instruction::new(InstructionKind::Cls)
    );
    assert_eq!(
        Instruction::deassemble_word(0x00EE),
        Instruction::new(InstructionKind::Ret)
    );
}

#[test]
fn sys_catches_the_rest_of_family_zero() {
    assert_eq!(
        Instruction::deassemble_word(0x0123),
        Instruction::new(InstructionKind::Sys).with_operand_a(Operand::Addr(0x123))
    );
}

#[test]
fn jump_and_call() {
    let jp = Instruction::deassemble_word(0x1234);

    assert_eq!(
        jp,
        Instruction::new(InstructionKind::Jp).with_operand_a(Operand::Addr(0x234))
    );
    assert_eq!(jp.to_string(), "JP 0x234");

    assert_eq!(
        Instruction::deassemble_word(0x2ABC).to_string(),
        "CALL 0xabc"
    );
}

#[test]
fn register_operands_render_in_decimal() {
    let instruction = Instruction::deassemble_word(0x6A07);

    assert_eq!(
        instruction,
        Instruction::new(InstructionKind::Ld)
            .with_operand_a(Operand::Reg(10))
            .with_operand_b(Operand::Byte(0x07))
    );
    assert_eq!(instruction.to_string(), "LD V10, 0x7");
}

#[test]
fn skip_instructions() {
    assert_eq!(Instruction::deassemble_word(0x3144).to_string(), "SE V1, 0x44");
    assert_eq!(Instruction::deassemble_word(0x4144).to_string(), "SNE V1, 0x44");
    assert_eq!(Instruction::deassemble_word(0x5120).to_string(), "SE V1, V2");
    assert_eq!(Instruction::deassemble_word(0x9120).to_string(), "SNE V1, V2");
    assert_eq!(Instruction::deassemble_word(0xE19E).to_string(), "SKP V1");
    assert_eq!(Instruction::deassemble_word(0xE1A1).to_string(), "SKNP V1");
}

#[test]
fn alu_family() {
    assert_eq!(
        Instruction::deassemble_word(0x8123),
        Instruction::new(InstructionKind::Xor)
            .with_operand_a(Operand::Reg(1))
            .with_operand_b(Operand::Reg(2))
    );

    assert_eq!(Instruction::deassemble_word(0x8120).to_string(), "LD V1, V2");
    assert_eq!(Instruction::deassemble_word(0x8121).to_string(), "OR V1, V2");
    assert_eq!(Instruction::deassemble_word(0x8122).to_string(), "AND V1, V2");
    assert_eq!(Instruction::deassemble_word(0x8124).to_string(), "ADD V1, V2");
    assert_eq!(Instruction::deassemble_word(0x8125).to_string(), "SUB V1, V2");
    assert_eq!(Instruction::deassemble_word(0x8127).to_string(), "SUBN V1, V2");
}

#[test]
fn shifts_brace_their_source_register() {
    assert_eq!(Instruction::deassemble_word(0x8126).to_string(), "SHR V1{, V2}");
    assert_eq!(Instruction::deassemble_word(0x812E).to_string(), "SHL V1{, V2}");
}

#[test]
fn index_loads() {
    assert_eq!(Instruction::deassemble_word(0xA123).to_string(), "LD I, 0x123");
    assert_eq!(Instruction::deassemble_word(0xF51E).to_string(), "ADD I, V5");
}

// Bnnn is semantically a jump with V0 offset, but the listing text prints it
// as a load.
#[test]
fn jump_with_offset_prints_as_load() {
    assert_eq!(Instruction::deassemble_word(0xB123).to_string(), "LD V0, 0x123");
}

#[test]
fn draw_and_random() {
    assert_eq!(
        Instruction::deassemble_word(0xD125),
        Instruction::new(InstructionKind::Drw)
            .with_operand_a(Operand::Reg(1))
            .with_operand_b(Operand::Reg(2))
            .with_operand_c(Operand::Nibble(5))
    );
    assert_eq!(Instruction::deassemble_word(0xD125).to_string(), "DRW V1, V2, 0x5");
    assert_eq!(Instruction::deassemble_word(0xC1FF).to_string(), "RND V1, 0xff");
}

#[test]
fn timer_key_and_memory_loads() {
    assert_eq!(Instruction::deassemble_word(0xF507).to_string(), "LD V5, DT");
    assert_eq!(Instruction::deassemble_word(0xF50A).to_string(), "LD V5, _KEY_");
    assert_eq!(Instruction::deassemble_word(0xF515).to_string(), "LD DT, V5");
    assert_eq!(Instruction::deassemble_word(0xF518).to_string(), "LD ST, V5");
    assert_eq!(Instruction::deassemble_word(0xF529).to_string(), "LD _CHAR_, V5");
    assert_eq!(Instruction::deassemble_word(0xF533).to_string(), "LD _BCD_, V5");
    assert_eq!(Instruction::deassemble_word(0xF555).to_string(), "LD [I], V5");
    assert_eq!(Instruction::deassemble_word(0xF565).to_string(), "LD V5, [I]");
}

#[test]
fn bcd_load_keeps_register_zero() {
    assert_eq!(Instruction::deassemble_word(0xF033).to_string(), "LD _BCD_, V0");
}

#[test]
fn reserved_encodings_fall_back_to_raw_hex() {
    for word in [0x8008, 0xE000, 0xF0FF] {
        let instruction = Instruction::deassemble_word(word);

        assert_eq!(instruction.kind, InstructionKind::Raw);
        assert_eq!(instruction.to_string(), format!("{:#x}", word));
    }
}

#[test]
fn every_word_deassembles_to_something() {
    for word in 0..=u16::MAX {
        let instruction = Instruction::deassemble_word(word);

        assert!(!instruction.kind.mnemonic().is_empty());
        assert!(
            !instruction.to_string().is_empty(),
            "word {:#06x} rendered as an empty string",
            word
        );
    }
}

#[test]
fn mnemonic_mapping_roundtrips() {
    assert_eq!(InstructionKind::from_mnemonic("JP"), Some(InstructionKind::Jp));
    assert_eq!(InstructionKind::from_mnemonic("jp"), None);
    assert_eq!(InstructionKind::Jp.mnemonic(), "JP");
}
