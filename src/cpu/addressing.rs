/*!
addressing.rs - 6502 addressing modes and effective-address resolution

Overview
========
`AddressingMode` is the closed set of 13 operand rules an opcode can use.
`resolve` turns a mode plus the current registers into an effective address,
reading the operand bytes that follow the opcode at PC (PC itself is not
moved; `step` advances it by the instruction length afterwards).

Resolution Rules
================
- Implicit / Accumulator: no address.
- Immediate: PC + 1 (the operand byte itself).
- Zero page (,X ,Y): operand (+ index), wrapped inside page 0.
- Absolute (,X ,Y): 16-bit operand (+ index), page cross reported for indexed forms.
- (zp,X): pointer read from zero page at operand + X, both bytes wrapped in page 0.
- (zp),Y: pointer read from zero page at operand, plus Y; page cross reported.
- Indirect (JMP only): pointer at the absolute operand, with the page-wrap bug.
- Relative: PC + 2 + signed offset; page cross is measured against PC + 2.

Page-cross reporting is data only here. `Cpu::resolve_operand` charges the
cycle when the opcode's table entry asks for it.
*/

use crate::bus::Bus;
use crate::cpu::state::CpuState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AddressingMode {
    Implicit,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    /// Pre-indexed indirect, `($nn,X)`.
    IndexedIndirect,
    /// Post-indexed indirect, `($nn),Y`.
    IndirectIndexed,
    Relative,
}

impl AddressingMode {
    pub const ALL: [AddressingMode; 13] = [
        AddressingMode::Implicit,
        AddressingMode::Accumulator,
        AddressingMode::Immediate,
        AddressingMode::ZeroPage,
        AddressingMode::ZeroPageX,
        AddressingMode::ZeroPageY,
        AddressingMode::Absolute,
        AddressingMode::AbsoluteX,
        AddressingMode::AbsoluteY,
        AddressingMode::Indirect,
        AddressingMode::IndexedIndirect,
        AddressingMode::IndirectIndexed,
        AddressingMode::Relative,
    ];

    /// Total instruction length (opcode + operand bytes) for this mode.
    pub const fn instruction_len(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 1,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::IndexedIndirect
            | AddressingMode::IndirectIndexed
            | AddressingMode::Relative => 2,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 3,
        }
    }

    /// Short mnemonic-style tag, as printed in trace output.
    pub const fn short_name(self) -> &'static str {
        match self {
            AddressingMode::Implicit => "imp",
            AddressingMode::Accumulator => "acc",
            AddressingMode::Immediate => "imm",
            AddressingMode::ZeroPage => "zp",
            AddressingMode::ZeroPageX => "zpx",
            AddressingMode::ZeroPageY => "zpy",
            AddressingMode::Absolute => "abs",
            AddressingMode::AbsoluteX => "abx",
            AddressingMode::AbsoluteY => "aby",
            AddressingMode::Indirect => "ind",
            AddressingMode::IndexedIndirect => "izx",
            AddressingMode::IndirectIndexed => "izy",
            AddressingMode::Relative => "rel",
        }
    }

    /// True for the modes that never touch memory for their operand.
    #[inline]
    pub const fn is_register_only(self) -> bool {
        matches!(self, AddressingMode::Implicit | AddressingMode::Accumulator)
    }
}

/// Outcome of resolving an operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    /// Effective address, `None` for implicit/accumulator operands.
    pub addr: Option<u16>,
    /// Indexing (or a relative branch) left the page of the base address.
    pub page_crossed: bool,
}

impl Resolved {
    #[inline]
    fn at(addr: u16) -> Self {
        Self {
            addr: Some(addr),
            page_crossed: false,
        }
    }

    #[inline]
    fn indexed(base: u16, addr: u16) -> Self {
        Self {
            addr: Some(addr),
            page_crossed: pages_differ(base, addr),
        }
    }
}

#[inline]
pub fn pages_differ(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

/// Compute the effective address for `mode` with PC at the opcode byte.
pub(crate) fn resolve(state: &CpuState, bus: &mut Bus, mode: AddressingMode) -> Resolved {
    let pc = state.pc;
    match mode {
        AddressingMode::Implicit | AddressingMode::Accumulator => Resolved {
            addr: None,
            page_crossed: false,
        },
        AddressingMode::Immediate => Resolved::at(pc.wrapping_add(1)),
        AddressingMode::ZeroPage => Resolved::at(operand_byte(bus, pc) as u16),
        AddressingMode::ZeroPageX => {
            Resolved::at(operand_byte(bus, pc).wrapping_add(state.x) as u16)
        }
        AddressingMode::ZeroPageY => {
            Resolved::at(operand_byte(bus, pc).wrapping_add(state.y) as u16)
        }
        AddressingMode::Absolute => Resolved::at(operand_word(bus, pc)),
        AddressingMode::AbsoluteX => {
            let base = operand_word(bus, pc);
            Resolved::indexed(base, base.wrapping_add(state.x as u16))
        }
        AddressingMode::AbsoluteY => {
            let base = operand_word(bus, pc);
            Resolved::indexed(base, base.wrapping_add(state.y as u16))
        }
        AddressingMode::Indirect => {
            let ptr = operand_word(bus, pc);
            Resolved::at(read_word_indirect_bug(bus, ptr))
        }
        AddressingMode::IndexedIndirect => {
            let zp = operand_byte(bus, pc).wrapping_add(state.x);
            Resolved::at(read_word_zp(bus, zp))
        }
        AddressingMode::IndirectIndexed => {
            let zp = operand_byte(bus, pc);
            let base = read_word_zp(bus, zp);
            Resolved::indexed(base, base.wrapping_add(state.y as u16))
        }
        AddressingMode::Relative => {
            let offset = operand_byte(bus, pc) as i8;
            let next = pc.wrapping_add(2);
            Resolved::indexed(next, next.wrapping_add_signed(offset as i16))
        }
    }
}

// -------------------------
// Operand fetch
// -------------------------

/// First operand byte (the byte after the opcode).
#[inline]
pub(crate) fn operand_byte(bus: &mut Bus, pc: u16) -> u8 {
    bus.read(pc.wrapping_add(1))
}

/// Little-endian operand word following the opcode.
#[inline]
pub(crate) fn operand_word(bus: &mut Bus, pc: u16) -> u16 {
    let lo = bus.read(pc.wrapping_add(1)) as u16;
    let hi = bus.read(pc.wrapping_add(2)) as u16;
    (hi << 8) | lo
}

// -------------------------
// Low-level word helpers
// -------------------------

/// Read a 16-bit little-endian pointer from zero page; the high byte wraps to $00.
#[inline]
pub(crate) fn read_word_zp(bus: &mut Bus, base: u8) -> u16 {
    let lo = bus.read(base as u16) as u16;
    let hi = bus.read(base.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

/// JMP (indirect) pointer fetch: when the pointer's low byte is $FF the high
/// byte comes from the start of the same page.
#[inline]
pub(crate) fn read_word_indirect_bug(bus: &mut Bus, addr: u16) -> u16 {
    let lo = bus.read(addr) as u16;
    let hi_addr = (addr & 0xFF00) | (addr.wrapping_add(1) & 0x00FF);
    let hi = bus.read(hi_addr) as u16;
    (hi << 8) | lo
}
