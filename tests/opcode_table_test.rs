//! Opcode table validation tests
//!
//! Verifies that the 65C02 opcode table is complete and internally consistent.

use bus65c02::{is_reserved, lookup, AddressingMode, OPCODE_TABLE};

#[test]
fn test_opcode_table_completeness() {
    assert_eq!(
        OPCODE_TABLE.len(),
        256,
        "Opcode table must have exactly 256 entries"
    );

    for (opcode, entry) in OPCODE_TABLE.iter().enumerate() {
        assert!(
            !entry.mnemonic.is_empty(),
            "Opcode 0x{:02X} has empty mnemonic",
            opcode
        );
    }
}

#[test]
fn test_opcode_table_length_validation() {
    for (opcode, entry) in OPCODE_TABLE.iter().enumerate() {
        assert!(
            entry.length >= 1 && entry.length <= 3,
            "Opcode 0x{:02X} has invalid length: {} (must be 1-3)",
            opcode,
            entry.length
        );
    }
}

#[test]
fn test_length_matches_addressing_mode() {
    for (opcode, entry) in OPCODE_TABLE.iter().enumerate() {
        assert_eq!(
            entry.length,
            1 + entry.addressing_mode.operand_bytes(),
            "Opcode 0x{:02X} ({}) length does not match {:?}",
            opcode,
            entry.mnemonic,
            entry.addressing_mode
        );
    }
}

#[test]
fn test_lookup_agrees_with_table() {
    for opcode in 0..=255u8 {
        assert_eq!(lookup(opcode), &OPCODE_TABLE[opcode as usize]);
    }
}

#[test]
fn test_reserved_opcodes_decode_as_nop() {
    let reserved: Vec<u8> = (0..=255u8)
        .filter(|&opcode| is_reserved(opcode))
        .collect();

    assert_eq!(reserved.len(), 44);
    assert!(reserved.iter().all(|&opcode| lookup(opcode).mnemonic == "NOP"));
    assert!(!reserved.contains(&0xEA));
    assert!(reserved.contains(&0x02));

    // Every xxxx0011 slot is a single-byte NOP
    for high in 0..16u8 {
        let opcode = (high << 4) | 0x03;
        assert_eq!(lookup(opcode).mnemonic, "NOP");
        assert_eq!(lookup(opcode).length, 1);
    }

    assert_eq!(lookup(0x02).length, 2);
    assert_eq!(lookup(0x44).length, 2);
    assert_eq!(lookup(0x54).length, 2);
    assert_eq!(lookup(0x5C).length, 3);
    assert_eq!(lookup(0xDC).length, 3);
    assert_eq!(lookup(0xFC).length, 3);
}

#[test]
fn test_bit_manipulation_instructions() {
    for bit in 0..8u8 {
        let rmb = lookup(bit << 4 | 0x07);
        assert_eq!(rmb.mnemonic, format!("RMB{}", bit));
        assert_eq!(rmb.addressing_mode, AddressingMode::ZeroPage);
        assert_eq!(rmb.length, 2);

        let smb = lookup(0x80 | bit << 4 | 0x07);
        assert_eq!(smb.mnemonic, format!("SMB{}", bit));
        assert_eq!(smb.length, 2);

        let bbr = lookup(bit << 4 | 0x0F);
        assert_eq!(bbr.mnemonic, format!("BBR{}", bit));
        assert_eq!(bbr.addressing_mode, AddressingMode::ZeroPageRelative);
        assert_eq!(bbr.length, 3);

        let bbs = lookup(0x80 | bit << 4 | 0x0F);
        assert_eq!(bbs.mnemonic, format!("BBS{}", bit));
        assert_eq!(bbs.length, 3);
    }
}

#[test]
fn test_65c02_additions() {
    let cases: &[(u8, &str, AddressingMode, u8)] = &[
        (0x12, "ORA", AddressingMode::ZeroPageIndirect, 2),
        (0x1A, "INC", AddressingMode::Accumulator, 1),
        (0x3A, "DEC", AddressingMode::Accumulator, 1),
        (0x5A, "PHY", AddressingMode::Implied, 1),
        (0x64, "STZ", AddressingMode::ZeroPage, 2),
        (0x7C, "JMP", AddressingMode::AbsoluteIndexedIndirect, 3),
        (0x80, "BRA", AddressingMode::Relative, 2),
        (0x89, "BIT", AddressingMode::Immediate, 2),
        (0x9E, "STZ", AddressingMode::AbsoluteX, 3),
        (0xCB, "WAI", AddressingMode::Implied, 1),
        (0xDB, "STP", AddressingMode::Implied, 1),
        (0xFA, "PLX", AddressingMode::Implied, 1),
    ];

    for &(opcode, mnemonic, mode, length) in cases {
        let entry = lookup(opcode);
        assert_eq!(entry.mnemonic, mnemonic, "opcode 0x{:02X}", opcode);
        assert_eq!(entry.addressing_mode, mode, "opcode 0x{:02X}", opcode);
        assert_eq!(entry.length, length, "opcode 0x{:02X}", opcode);
    }
}

#[test]
fn test_common_instructions() {
    assert_eq!(lookup(0xEA).mnemonic, "NOP");
    assert_eq!(lookup(0xEA).length, 1);
    assert_eq!(lookup(0x4C).mnemonic, "JMP");
    assert_eq!(lookup(0x4C).length, 3);
    assert_eq!(lookup(0x6C).addressing_mode, AddressingMode::Indirect);
    assert_eq!(lookup(0xA9).mnemonic, "LDA");
    assert_eq!(lookup(0xA9).length, 2);
    assert_eq!(lookup(0x20).mnemonic, "JSR");
    assert_eq!(lookup(0x60).mnemonic, "RTS");
}
