//! # Addressing Modes
//!
//! This module defines the addressing modes of the WDC 65C02. On top of the
//! 13 NMOS 6502 modes the 65C02 adds zero page indirect, absolute indexed
//! indirect and the zero page relative form used by the BBRn/BBSn
//! bit-branch instructions.

/// 65C02 addressing mode enumeration.
///
/// The decoder never evaluates operands; the mode is carried so that a
/// decoded instruction can be classified, and so the opcode table can be
/// checked for internal consistency.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Interrupt, Immediate, ZeroPage, ZeroPageX, ZeroPageY,
///   ZeroPageIndirect, IndirectX, IndirectY, Relative
/// - **2 bytes**: ZeroPageRelative, Absolute, AbsoluteX, AbsoluteY,
///   Indirect, AbsoluteIndexedIndirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, PHX, WAI
    Implied,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, INC A, DEC A
    Accumulator,

    /// Software interrupt followed by a signature byte.
    ///
    /// Only used by BRK. The signature byte is skipped by the CPU but still
    /// occupies program space.
    Interrupt,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80, RMB3 $80
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// 16-bit pointer stored in zero page, no indexing.
    ///
    /// Example: LDA ($40)
    ZeroPageIndirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BRA label
    Relative,

    /// Zero page address to test followed by a signed branch offset.
    ///
    /// Example: BBR0 $12,label
    ZeroPageRelative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: STZ $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indirect jump through 16-bit pointer.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indirect jump through a 16-bit pointer indexed by X.
    ///
    /// Example: JMP ($1234,X)
    AbsoluteIndexedIndirect,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode in this mode.
    pub const fn operand_bytes(self) -> u8 {
        use AddressingMode::*;

        match self {
            Implied | Accumulator => 0,
            Interrupt | Immediate | ZeroPage | ZeroPageX | ZeroPageY | ZeroPageIndirect
            | IndirectX | IndirectY | Relative => 1,
            ZeroPageRelative | Absolute | AbsoluteX | AbsoluteY | Indirect
            | AbsoluteIndexedIndirect => 2,
        }
    }
}
