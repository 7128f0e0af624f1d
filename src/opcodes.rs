//! # Opcode Table
//!
//! This module contains the complete 256-entry opcode table for the WDC 65C02.
//! The bus decoder uses it to turn a fetched opcode byte into a mnemonic and
//! the total instruction length.
//!
//! The table covers:
//! - **212 defined instructions**, including the Rockwell/WDC bit-manipulation
//!   instructions (RMBn, SMBn, BBRn, BBSn) and WAI/STP
//! - **44 reserved encodings**, which the 65C02 executes as NOPs of 1, 2 or 3
//!   bytes and which decode here as `NOP` with that length
//!
//! There are no holes: every byte value has an entry, so [`lookup`] never fails.

use crate::addressing::AddressingMode;

/// Static description of a single 65C02 opcode.
///
/// # Fields
///
/// - `mnemonic`: Instruction name (e.g., "LDA", "RMB3", "NOP")
/// - `addressing_mode`: How the instruction interprets operand bytes
/// - `length`: Total instruction size including opcode and operands (1-3 bytes)
///
/// # Examples
///
/// ```
/// use bus65c02::{lookup, AddressingMode};
///
/// let jmp = lookup(0x4C);
/// assert_eq!(jmp.mnemonic, "JMP");
/// assert_eq!(jmp.addressing_mode, AddressingMode::Absolute);
/// assert_eq!(jmp.length, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeEntry {
    /// Instruction mnemonic.
    pub mnemonic: &'static str,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Total instruction size in bytes (opcode + operands).
    ///
    /// This is the conventional program-space length, not the number of bus
    /// cycles the instruction takes.
    pub length: u8,
}

/// Look up the table entry for an opcode byte.
///
/// Total over all 256 values and O(1).
///
/// ```
/// use bus65c02::lookup;
///
/// assert_eq!(lookup(0xEA).mnemonic, "NOP");
/// assert_eq!(lookup(0xEA).length, 1);
/// ```
#[inline]
pub fn lookup(opcode: u8) -> &'static OpcodeEntry {
    &OPCODE_TABLE[opcode as usize]
}

/// Whether `opcode` is one of the reserved encodings that execute as NOP.
///
/// 0xEA is the documented NOP and is not reserved.
///
/// ```
/// use bus65c02::is_reserved;
///
/// assert!(is_reserved(0x5C));
/// assert!(!is_reserved(0xEA));
/// assert!(!is_reserved(0xA9));
/// ```
pub fn is_reserved(opcode: u8) -> bool {
    opcode != 0xEA && lookup(opcode).mnemonic == "NOP"
}

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// # Data Source
///
/// Transcribed from the WDC W65C02S datasheet opcode matrix. Reserved slots
/// use the NOP lengths the datasheet documents for them.
pub const OPCODE_TABLE: [OpcodeEntry; 256] = [
    // 0x00
    OpcodeEntry {
        mnemonic: "BRK",
        addressing_mode: AddressingMode::Interrupt,
        length: 2,
    },
    // 0x01
    OpcodeEntry {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::IndirectX,
        length: 2,
    },
    // 0x02 - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Immediate,
        length: 2,
    },
    // 0x03 - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x04
    OpcodeEntry {
        mnemonic: "TSB",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0x05
    OpcodeEntry {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0x06
    OpcodeEntry {
        mnemonic: "ASL",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0x07
    OpcodeEntry {
        mnemonic: "RMB0",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0x08
    OpcodeEntry {
        mnemonic: "PHP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x09
    OpcodeEntry {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::Immediate,
        length: 2,
    },
    // 0x0A
    OpcodeEntry {
        mnemonic: "ASL",
        addressing_mode: AddressingMode::Accumulator,
        length: 1,
    },
    // 0x0B - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x0C
    OpcodeEntry {
        mnemonic: "TSB",
        addressing_mode: AddressingMode::Absolute,
        length: 3,
    },
    // 0x0D
    OpcodeEntry {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::Absolute,
        length: 3,
    },
    // 0x0E
    OpcodeEntry {
        mnemonic: "ASL",
        addressing_mode: AddressingMode::Absolute,
        length: 3,
    },
    // 0x0F
    OpcodeEntry {
        mnemonic: "BBR0",
        addressing_mode: AddressingMode::ZeroPageRelative,
        length: 3,
    },
    // 0x10
    OpcodeEntry {
        mnemonic: "BPL",
        addressing_mode: AddressingMode::Relative,
        length: 2,
    },
    // 0x11
    OpcodeEntry {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::IndirectY,
        length: 2,
    },
    // 0x12
    OpcodeEntry {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::ZeroPageIndirect,
        length: 2,
    },
    // 0x13 - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x14
    OpcodeEntry {
        mnemonic: "TRB",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0x15
    OpcodeEntry {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::ZeroPageX,
        length: 2,
    },
    // 0x16
    OpcodeEntry {
        mnemonic: "ASL",
        addressing_mode: AddressingMode::ZeroPageX,
        length: 2,
    },
    // 0x17
    OpcodeEntry {
        mnemonic: "RMB1",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0x18
    OpcodeEntry {
        mnemonic: "CLC",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x19
    OpcodeEntry {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::AbsoluteY,
        length: 3,
    },
    // 0x1A
    OpcodeEntry {
        mnemonic: "INC",
        addressing_mode: AddressingMode::Accumulator,
        length: 1,
    },
    // 0x1B - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x1C
    OpcodeEntry {
        mnemonic: "TRB",
        addressing_mode: AddressingMode::Absolute,
        length: 3,
    },
    // 0x1D
    OpcodeEntry {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::AbsoluteX,
        length: 3,
    },
    // 0x1E
    OpcodeEntry {
        mnemonic: "ASL",
        addressing_mode: AddressingMode::AbsoluteX,
        length: 3,
    },
    // 0x1F
    OpcodeEntry {
        mnemonic: "BBR1",
        addressing_mode: AddressingMode::ZeroPageRelative,
        length: 3,
    },
    // 0x20
    OpcodeEntry {
        mnemonic: "JSR",
        addressing_mode: AddressingMode::Absolute,
        length: 3,
    },
    // 0x21
    OpcodeEntry {
        mnemonic: "AND",
        addressing_mode: AddressingMode::IndirectX,
        length: 2,
    },
    // 0x22 - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Immediate,
        length: 2,
    },
    // 0x23 - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x24
    OpcodeEntry {
        mnemonic: "BIT",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0x25
    OpcodeEntry {
        mnemonic: "AND",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0x26
    OpcodeEntry {
        mnemonic: "ROL",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0x27
    OpcodeEntry {
        mnemonic: "RMB2",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0x28
    OpcodeEntry {
        mnemonic: "PLP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x29
    OpcodeEntry {
        mnemonic: "AND",
        addressing_mode: AddressingMode::Immediate,
        length: 2,
    },
    // 0x2A
    OpcodeEntry {
        mnemonic: "ROL",
        addressing_mode: AddressingMode::Accumulator,
        length: 1,
    },
    // 0x2B - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x2C
    OpcodeEntry {
        mnemonic: "BIT",
        addressing_mode: AddressingMode::Absolute,
        length: 3,
    },
    // 0x2D
    OpcodeEntry {
        mnemonic: "AND",
        addressing_mode: AddressingMode::Absolute,
        length: 3,
    },
    // 0x2E
    OpcodeEntry {
        mnemonic: "ROL",
        addressing_mode: AddressingMode::Absolute,
        length: 3,
    },
    // 0x2F
    OpcodeEntry {
        mnemonic: "BBR2",
        addressing_mode: AddressingMode::ZeroPageRelative,
        length: 3,
    },
    // 0x30
    OpcodeEntry {
        mnemonic: "BMI",
        addressing_mode: AddressingMode::Relative,
        length: 2,
    },
    // 0x31
    OpcodeEntry {
        mnemonic: "AND",
        addressing_mode: AddressingMode::IndirectY,
        length: 2,
    },
    // 0x32
    OpcodeEntry {
        mnemonic: "AND",
        addressing_mode: AddressingMode::ZeroPageIndirect,
        length: 2,
    },
    // 0x33 - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x34
    OpcodeEntry {
        mnemonic: "BIT",
        addressing_mode: AddressingMode::ZeroPageX,
        length: 2,
    },
    // 0x35
    OpcodeEntry {
        mnemonic: "AND",
        addressing_mode: AddressingMode::ZeroPageX,
        length: 2,
    },
    // 0x36
    OpcodeEntry {
        mnemonic: "ROL",
        addressing_mode: AddressingMode::ZeroPageX,
        length: 2,
    },
    // 0x37
    OpcodeEntry {
        mnemonic: "RMB3",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0x38
    OpcodeEntry {
        mnemonic: "SEC",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x39
    OpcodeEntry {
        mnemonic: "AND",
        addressing_mode: AddressingMode::AbsoluteY,
        length: 3,
    },
    // 0x3A
    OpcodeEntry {
        mnemonic: "DEC",
        addressing_mode: AddressingMode::Accumulator,
        length: 1,
    },
    // 0x3B - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x3C
    OpcodeEntry {
        mnemonic: "BIT",
        addressing_mode: AddressingMode::AbsoluteX,
        length: 3,
    },
    // 0x3D
    OpcodeEntry {
        mnemonic: "AND",
        addressing_mode: AddressingMode::AbsoluteX,
        length: 3,
    },
    // 0x3E
    OpcodeEntry {
        mnemonic: "ROL",
        addressing_mode: AddressingMode::AbsoluteX,
        length: 3,
    },
    // 0x3F
    OpcodeEntry {
        mnemonic: "BBR3",
        addressing_mode: AddressingMode::ZeroPageRelative,
        length: 3,
    },
    // 0x40
    OpcodeEntry {
        mnemonic: "RTI",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x41
    OpcodeEntry {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::IndirectX,
        length: 2,
    },
    // 0x42 - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Immediate,
        length: 2,
    },
    // 0x43 - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x44 - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0x45
    OpcodeEntry {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0x46
    OpcodeEntry {
        mnemonic: "LSR",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0x47
    OpcodeEntry {
        mnemonic: "RMB4",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0x48
    OpcodeEntry {
        mnemonic: "PHA",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x49
    OpcodeEntry {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::Immediate,
        length: 2,
    },
    // 0x4A
    OpcodeEntry {
        mnemonic: "LSR",
        addressing_mode: AddressingMode::Accumulator,
        length: 1,
    },
    // 0x4B - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x4C
    OpcodeEntry {
        mnemonic: "JMP",
        addressing_mode: AddressingMode::Absolute,
        length: 3,
    },
    // 0x4D
    OpcodeEntry {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::Absolute,
        length: 3,
    },
    // 0x4E
    OpcodeEntry {
        mnemonic: "LSR",
        addressing_mode: AddressingMode::Absolute,
        length: 3,
    },
    // 0x4F
    OpcodeEntry {
        mnemonic: "BBR4",
        addressing_mode: AddressingMode::ZeroPageRelative,
        length: 3,
    },
    // 0x50
    OpcodeEntry {
        mnemonic: "BVC",
        addressing_mode: AddressingMode::Relative,
        length: 2,
    },
    // 0x51
    OpcodeEntry {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::IndirectY,
        length: 2,
    },
    // 0x52
    OpcodeEntry {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::ZeroPageIndirect,
        length: 2,
    },
    // 0x53 - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x54 - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::ZeroPageX,
        length: 2,
    },
    // 0x55
    OpcodeEntry {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::ZeroPageX,
        length: 2,
    },
    // 0x56
    OpcodeEntry {
        mnemonic: "LSR",
        addressing_mode: AddressingMode::ZeroPageX,
        length: 2,
    },
    // 0x57
    OpcodeEntry {
        mnemonic: "RMB5",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0x58
    OpcodeEntry {
        mnemonic: "CLI",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x59
    OpcodeEntry {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::AbsoluteY,
        length: 3,
    },
    // 0x5A
    OpcodeEntry {
        mnemonic: "PHY",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x5B - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x5C - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Absolute,
        length: 3,
    },
    // 0x5D
    OpcodeEntry {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::AbsoluteX,
        length: 3,
    },
    // 0x5E
    OpcodeEntry {
        mnemonic: "LSR",
        addressing_mode: AddressingMode::AbsoluteX,
        length: 3,
    },
    // 0x5F
    OpcodeEntry {
        mnemonic: "BBR5",
        addressing_mode: AddressingMode::ZeroPageRelative,
        length: 3,
    },
    // 0x60
    OpcodeEntry {
        mnemonic: "RTS",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x61
    OpcodeEntry {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::IndirectX,
        length: 2,
    },
    // 0x62 - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Immediate,
        length: 2,
    },
    // 0x63 - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x64
    OpcodeEntry {
        mnemonic: "STZ",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0x65
    OpcodeEntry {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0x66
    OpcodeEntry {
        mnemonic: "ROR",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0x67
    OpcodeEntry {
        mnemonic: "RMB6",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0x68
    OpcodeEntry {
        mnemonic: "PLA",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x69
    OpcodeEntry {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::Immediate,
        length: 2,
    },
    // 0x6A
    OpcodeEntry {
        mnemonic: "ROR",
        addressing_mode: AddressingMode::Accumulator,
        length: 1,
    },
    // 0x6B - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x6C
    OpcodeEntry {
        mnemonic: "JMP",
        addressing_mode: AddressingMode::Indirect,
        length: 3,
    },
    // 0x6D
    OpcodeEntry {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::Absolute,
        length: 3,
    },
    // 0x6E
    OpcodeEntry {
        mnemonic: "ROR",
        addressing_mode: AddressingMode::Absolute,
        length: 3,
    },
    // 0x6F
    OpcodeEntry {
        mnemonic: "BBR6",
        addressing_mode: AddressingMode::ZeroPageRelative,
        length: 3,
    },
    // 0x70
    OpcodeEntry {
        mnemonic: "BVS",
        addressing_mode: AddressingMode::Relative,
        length: 2,
    },
    // 0x71
    OpcodeEntry {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::IndirectY,
        length: 2,
    },
    // 0x72
    OpcodeEntry {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::ZeroPageIndirect,
        length: 2,
    },
    // 0x73 - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x74
    OpcodeEntry {
        mnemonic: "STZ",
        addressing_mode: AddressingMode::ZeroPageX,
        length: 2,
    },
    // 0x75
    OpcodeEntry {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::ZeroPageX,
        length: 2,
    },
    // 0x76
    OpcodeEntry {
        mnemonic: "ROR",
        addressing_mode: AddressingMode::ZeroPageX,
        length: 2,
    },
    // 0x77
    OpcodeEntry {
        mnemonic: "RMB7",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0x78
    OpcodeEntry {
        mnemonic: "SEI",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x79
    OpcodeEntry {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::AbsoluteY,
        length: 3,
    },
    // 0x7A
    OpcodeEntry {
        mnemonic: "PLY",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x7B - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x7C
    OpcodeEntry {
        mnemonic: "JMP",
        addressing_mode: AddressingMode::AbsoluteIndexedIndirect,
        length: 3,
    },
    // 0x7D
    OpcodeEntry {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::AbsoluteX,
        length: 3,
    },
    // 0x7E
    OpcodeEntry {
        mnemonic: "ROR",
        addressing_mode: AddressingMode::AbsoluteX,
        length: 3,
    },
    // 0x7F
    OpcodeEntry {
        mnemonic: "BBR7",
        addressing_mode: AddressingMode::ZeroPageRelative,
        length: 3,
    },
    // 0x80
    OpcodeEntry {
        mnemonic: "BRA",
        addressing_mode: AddressingMode::Relative,
        length: 2,
    },
    // 0x81
    OpcodeEntry {
        mnemonic: "STA",
        addressing_mode: AddressingMode::IndirectX,
        length: 2,
    },
    // 0x82 - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Immediate,
        length: 2,
    },
    // 0x83 - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x84
    OpcodeEntry {
        mnemonic: "STY",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0x85
    OpcodeEntry {
        mnemonic: "STA",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0x86
    OpcodeEntry {
        mnemonic: "STX",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0x87
    OpcodeEntry {
        mnemonic: "SMB0",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0x88
    OpcodeEntry {
        mnemonic: "DEY",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x89
    OpcodeEntry {
        mnemonic: "BIT",
        addressing_mode: AddressingMode::Immediate,
        length: 2,
    },
    // 0x8A
    OpcodeEntry {
        mnemonic: "TXA",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x8B - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x8C
    OpcodeEntry {
        mnemonic: "STY",
        addressing_mode: AddressingMode::Absolute,
        length: 3,
    },
    // 0x8D
    OpcodeEntry {
        mnemonic: "STA",
        addressing_mode: AddressingMode::Absolute,
        length: 3,
    },
    // 0x8E
    OpcodeEntry {
        mnemonic: "STX",
        addressing_mode: AddressingMode::Absolute,
        length: 3,
    },
    // 0x8F
    OpcodeEntry {
        mnemonic: "BBS0",
        addressing_mode: AddressingMode::ZeroPageRelative,
        length: 3,
    },
    // 0x90
    OpcodeEntry {
        mnemonic: "BCC",
        addressing_mode: AddressingMode::Relative,
        length: 2,
    },
    // 0x91
    OpcodeEntry {
        mnemonic: "STA",
        addressing_mode: AddressingMode::IndirectY,
        length: 2,
    },
    // 0x92
    OpcodeEntry {
        mnemonic: "STA",
        addressing_mode: AddressingMode::ZeroPageIndirect,
        length: 2,
    },
    // 0x93 - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x94
    OpcodeEntry {
        mnemonic: "STY",
        addressing_mode: AddressingMode::ZeroPageX,
        length: 2,
    },
    // 0x95
    OpcodeEntry {
        mnemonic: "STA",
        addressing_mode: AddressingMode::ZeroPageX,
        length: 2,
    },
    // 0x96
    OpcodeEntry {
        mnemonic: "STX",
        addressing_mode: AddressingMode::ZeroPageY,
        length: 2,
    },
    // 0x97
    OpcodeEntry {
        mnemonic: "SMB1",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0x98
    OpcodeEntry {
        mnemonic: "TYA",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x99
    OpcodeEntry {
        mnemonic: "STA",
        addressing_mode: AddressingMode::AbsoluteY,
        length: 3,
    },
    // 0x9A
    OpcodeEntry {
        mnemonic: "TXS",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x9B - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0x9C
    OpcodeEntry {
        mnemonic: "STZ",
        addressing_mode: AddressingMode::Absolute,
        length: 3,
    },
    // 0x9D
    OpcodeEntry {
        mnemonic: "STA",
        addressing_mode: AddressingMode::AbsoluteX,
        length: 3,
    },
    // 0x9E
    OpcodeEntry {
        mnemonic: "STZ",
        addressing_mode: AddressingMode::AbsoluteX,
        length: 3,
    },
    // 0x9F
    OpcodeEntry {
        mnemonic: "BBS1",
        addressing_mode: AddressingMode::ZeroPageRelative,
        length: 3,
    },
    // 0xA0
    OpcodeEntry {
        mnemonic: "LDY",
        addressing_mode: AddressingMode::Immediate,
        length: 2,
    },
    // 0xA1
    OpcodeEntry {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::IndirectX,
        length: 2,
    },
    // 0xA2
    OpcodeEntry {
        mnemonic: "LDX",
        addressing_mode: AddressingMode::Immediate,
        length: 2,
    },
    // 0xA3 - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0xA4
    OpcodeEntry {
        mnemonic: "LDY",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0xA5
    OpcodeEntry {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0xA6
    OpcodeEntry {
        mnemonic: "LDX",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0xA7
    OpcodeEntry {
        mnemonic: "SMB2",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0xA8
    OpcodeEntry {
        mnemonic: "TAY",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0xA9
    OpcodeEntry {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::Immediate,
        length: 2,
    },
    // 0xAA
    OpcodeEntry {
        mnemonic: "TAX",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0xAB - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0xAC
    OpcodeEntry {
        mnemonic: "LDY",
        addressing_mode: AddressingMode::Absolute,
        length: 3,
    },
    // 0xAD
    OpcodeEntry {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::Absolute,
        length: 3,
    },
    // 0xAE
    OpcodeEntry {
        mnemonic: "LDX",
        addressing_mode: AddressingMode::Absolute,
        length: 3,
    },
    // 0xAF
    OpcodeEntry {
        mnemonic: "BBS2",
        addressing_mode: AddressingMode::ZeroPageRelative,
        length: 3,
    },
    // 0xB0
    OpcodeEntry {
        mnemonic: "BCS",
        addressing_mode: AddressingMode::Relative,
        length: 2,
    },
    // 0xB1
    OpcodeEntry {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::IndirectY,
        length: 2,
    },
    // 0xB2
    OpcodeEntry {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::ZeroPageIndirect,
        length: 2,
    },
    // 0xB3 - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0xB4
    OpcodeEntry {
        mnemonic: "LDY",
        addressing_mode: AddressingMode::ZeroPageX,
        length: 2,
    },
    // 0xB5
    OpcodeEntry {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::ZeroPageX,
        length: 2,
    },
    // 0xB6
    OpcodeEntry {
        mnemonic: "LDX",
        addressing_mode: AddressingMode::ZeroPageY,
        length: 2,
    },
    // 0xB7
    OpcodeEntry {
        mnemonic: "SMB3",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0xB8
    OpcodeEntry {
        mnemonic: "CLV",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0xB9
    OpcodeEntry {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::AbsoluteY,
        length: 3,
    },
    // 0xBA
    OpcodeEntry {
        mnemonic: "TSX",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0xBB - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0xBC
    OpcodeEntry {
        mnemonic: "LDY",
        addressing_mode: AddressingMode::AbsoluteX,
        length: 3,
    },
    // 0xBD
    OpcodeEntry {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::AbsoluteX,
        length: 3,
    },
    // 0xBE
    OpcodeEntry {
        mnemonic: "LDX",
        addressing_mode: AddressingMode::AbsoluteY,
        length: 3,
    },
    // 0xBF
    OpcodeEntry {
        mnemonic: "BBS3",
        addressing_mode: AddressingMode::ZeroPageRelative,
        length: 3,
    },
    // 0xC0
    OpcodeEntry {
        mnemonic: "CPY",
        addressing_mode: AddressingMode::Immediate,
        length: 2,
    },
    // 0xC1
    OpcodeEntry {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::IndirectX,
        length: 2,
    },
    // 0xC2 - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Immediate,
        length: 2,
    },
    // 0xC3 - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0xC4
    OpcodeEntry {
        mnemonic: "CPY",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0xC5
    OpcodeEntry {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0xC6
    OpcodeEntry {
        mnemonic: "DEC",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0xC7
    OpcodeEntry {
        mnemonic: "SMB4",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0xC8
    OpcodeEntry {
        mnemonic: "INY",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0xC9
    OpcodeEntry {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::Immediate,
        length: 2,
    },
    // 0xCA
    OpcodeEntry {
        mnemonic: "DEX",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0xCB
    OpcodeEntry {
        mnemonic: "WAI",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0xCC
    OpcodeEntry {
        mnemonic: "CPY",
        addressing_mode: AddressingMode::Absolute,
        length: 3,
    },
    // 0xCD
    OpcodeEntry {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::Absolute,
        length: 3,
    },
    // 0xCE
    OpcodeEntry {
        mnemonic: "DEC",
        addressing_mode: AddressingMode::Absolute,
        length: 3,
    },
    // 0xCF
    OpcodeEntry {
        mnemonic: "BBS4",
        addressing_mode: AddressingMode::ZeroPageRelative,
        length: 3,
    },
    // 0xD0
    OpcodeEntry {
        mnemonic: "BNE",
        addressing_mode: AddressingMode::Relative,
        length: 2,
    },
    // 0xD1
    OpcodeEntry {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::IndirectY,
        length: 2,
    },
    // 0xD2
    OpcodeEntry {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::ZeroPageIndirect,
        length: 2,
    },
    // 0xD3 - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0xD4 - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::ZeroPageX,
        length: 2,
    },
    // 0xD5
    OpcodeEntry {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::ZeroPageX,
        length: 2,
    },
    // 0xD6
    OpcodeEntry {
        mnemonic: "DEC",
        addressing_mode: AddressingMode::ZeroPageX,
        length: 2,
    },
    // 0xD7
    OpcodeEntry {
        mnemonic: "SMB5",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0xD8
    OpcodeEntry {
        mnemonic: "CLD",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0xD9
    OpcodeEntry {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::AbsoluteY,
        length: 3,
    },
    // 0xDA
    OpcodeEntry {
        mnemonic: "PHX",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0xDB
    OpcodeEntry {
        mnemonic: "STP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0xDC - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Absolute,
        length: 3,
    },
    // 0xDD
    OpcodeEntry {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::AbsoluteX,
        length: 3,
    },
    // 0xDE
    OpcodeEntry {
        mnemonic: "DEC",
        addressing_mode: AddressingMode::AbsoluteX,
        length: 3,
    },
    // 0xDF
    OpcodeEntry {
        mnemonic: "BBS5",
        addressing_mode: AddressingMode::ZeroPageRelative,
        length: 3,
    },
    // 0xE0
    OpcodeEntry {
        mnemonic: "CPX",
        addressing_mode: AddressingMode::Immediate,
        length: 2,
    },
    // 0xE1
    OpcodeEntry {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::IndirectX,
        length: 2,
    },
    // 0xE2 - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Immediate,
        length: 2,
    },
    // 0xE3 - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0xE4
    OpcodeEntry {
        mnemonic: "CPX",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0xE5
    OpcodeEntry {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0xE6
    OpcodeEntry {
        mnemonic: "INC",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0xE7
    OpcodeEntry {
        mnemonic: "SMB6",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0xE8
    OpcodeEntry {
        mnemonic: "INX",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0xE9
    OpcodeEntry {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::Immediate,
        length: 2,
    },
    // 0xEA
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0xEB - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0xEC
    OpcodeEntry {
        mnemonic: "CPX",
        addressing_mode: AddressingMode::Absolute,
        length: 3,
    },
    // 0xED
    OpcodeEntry {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::Absolute,
        length: 3,
    },
    // 0xEE
    OpcodeEntry {
        mnemonic: "INC",
        addressing_mode: AddressingMode::Absolute,
        length: 3,
    },
    // 0xEF
    OpcodeEntry {
        mnemonic: "BBS6",
        addressing_mode: AddressingMode::ZeroPageRelative,
        length: 3,
    },
    // 0xF0
    OpcodeEntry {
        mnemonic: "BEQ",
        addressing_mode: AddressingMode::Relative,
        length: 2,
    },
    // 0xF1
    OpcodeEntry {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::IndirectY,
        length: 2,
    },
    // 0xF2
    OpcodeEntry {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::ZeroPageIndirect,
        length: 2,
    },
    // 0xF3 - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0xF4 - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::ZeroPageX,
        length: 2,
    },
    // 0xF5
    OpcodeEntry {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::ZeroPageX,
        length: 2,
    },
    // 0xF6
    OpcodeEntry {
        mnemonic: "INC",
        addressing_mode: AddressingMode::ZeroPageX,
        length: 2,
    },
    // 0xF7
    OpcodeEntry {
        mnemonic: "SMB7",
        addressing_mode: AddressingMode::ZeroPage,
        length: 2,
    },
    // 0xF8
    OpcodeEntry {
        mnemonic: "SED",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0xF9
    OpcodeEntry {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::AbsoluteY,
        length: 3,
    },
    // 0xFA
    OpcodeEntry {
        mnemonic: "PLX",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0xFB - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implied,
        length: 1,
    },
    // 0xFC - Reserved, executes as NOP
    OpcodeEntry {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Absolute,
        length: 3,
    },
    // 0xFD
    OpcodeEntry {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::AbsoluteX,
        length: 3,
    },
    // 0xFE
    OpcodeEntry {
        mnemonic: "INC",
        addressing_mode: AddressingMode::AbsoluteX,
        length: 3,
    },
    // 0xFF
    OpcodeEntry {
        mnemonic: "BBS7",
        addressing_mode: AddressingMode::ZeroPageRelative,
        length: 3,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_nop() {
        let nop = lookup(0xEA);
        assert_eq!(nop.mnemonic, "NOP");
        assert_eq!(nop.addressing_mode, AddressingMode::Implied);
        assert_eq!(nop.length, 1);
        assert!(!is_reserved(0xEA));
    }

    #[test]
    fn test_lookup_bit_branch() {
        let bbr0 = lookup(0x0F);
        assert_eq!(bbr0.mnemonic, "BBR0");
        assert_eq!(bbr0.addressing_mode, AddressingMode::ZeroPageRelative);
        assert_eq!(bbr0.length, 3);
    }

    #[test]
    fn test_reserved_slot_is_nop() {
        let entry = lookup(0x5C);
        assert_eq!(entry.mnemonic, "NOP");
        assert_eq!(entry.length, 3);
        assert!(is_reserved(0x5C));
        assert!(is_reserved(0x02));
    }

    #[test]
    fn test_brk_carries_signature_byte() {
        let brk = lookup(0x00);
        assert_eq!(brk.mnemonic, "BRK");
        assert_eq!(brk.addressing_mode, AddressingMode::Interrupt);
        assert_eq!(brk.length, 2);
    }
}
