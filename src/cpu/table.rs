/*!
table.rs - The 256-entry opcode table.

Purpose
=======
Maps every opcode byte to an `Instruction`: mnemonic, addressing mode,
length in bytes, base cycle cost, whether indexed page crossing costs an
extra cycle, and the handler implementing the semantics.

Design
------
- `OPCODES` is a compile-time literal, so all 256 slots exist by construction.
  A const check additionally fails the build if an entry's length disagrees
  with its addressing mode.
- Several opcodes share one handler (all `LDA` forms funnel into `lda`);
  handlers consult the entry's mode through `Cpu::resolve_operand`.
- Undocumented opcodes carry `illegal: true` and route to the NMOS
  combined-operation handlers in `dispatch::illegal`; the twelve `KIL`
  slots jam the CPU.
- For relative (branch) entries the page-cross flag means "a taken branch
  pays the page-cross cycle"; the branch helper charges it.
*/

use crate::cpu::addressing::AddressingMode;
use crate::cpu::core::Cpu;
use crate::cpu::dispatch::arithmetic::{adc, dec, dex, dey, inc, inx, iny, sbc};
use crate::cpu::dispatch::branches::{bcc, bcs, beq, bmi, bne, bpl, bvc, bvs};
use crate::cpu::dispatch::compare::{cmp, cpx, cpy};
use crate::cpu::dispatch::control_flow::{brk, jmp, jsr, rti, rts};
use crate::cpu::dispatch::illegal::{
    ahx, alr, anc, arr, axs, dcp, isc, kil, las, lax, rla, rra, sax, shx, shy, slo, sre, tas,
    xaa,
};
use crate::cpu::dispatch::load_store::{lda, ldx, ldy, sta, stx, sty};
use crate::cpu::dispatch::logical::{and, bit, eor, ora};
use crate::cpu::dispatch::misc::{
    clc, cld, cli, clv, nop, pha, php, pla, plp, sec, sed, sei, tax, tay, tsx, txa, txs, tya,
};
use crate::cpu::dispatch::rmw::{asl, lsr, rol, ror};

/// Instruction handler. PC points at the opcode while it runs.
pub type OpHandler = fn(&mut Cpu);

#[derive(Debug, Clone, Copy)]
pub struct Instruction {
    pub mnemonic: &'static str,
    pub mode: AddressingMode,
    /// Length in bytes, opcode included.
    pub bytes: u8,
    /// Base cycle cost before page-cross and branch penalties.
    pub cycles: u8,
    pub page_cross_penalty: bool,
    /// Undocumented NMOS opcode.
    pub illegal: bool,
    pub handler: OpHandler,
}

macro_rules! op {
    ($name:literal, $mode:ident, $bytes:literal, $cycles:literal, $page:literal, $handler:ident) => {
        Instruction {
            mnemonic: $name,
            mode: AddressingMode::$mode,
            bytes: $bytes,
            cycles: $cycles,
            page_cross_penalty: $page,
            illegal: false,
            handler: $handler,
        }
    };
}

macro_rules! ill {
    ($name:literal, $mode:ident, $bytes:literal, $cycles:literal, $page:literal, $handler:ident) => {
        Instruction {
            illegal: true,
            ..op!($name, $mode, $bytes, $cycles, $page, $handler)
        }
    };
}

#[rustfmt::skip]
const TABLE: [Instruction; 256] = [
    /* 00 */ op!("BRK", Implicit, 1, 7, false, brk),
    /* 01 */ op!("ORA", IndexedIndirect, 2, 6, false, ora),
    /* 02 */ ill!("KIL", Implicit, 1, 2, false, kil),
    /* 03 */ ill!("SLO", IndexedIndirect, 2, 8, false, slo),
    /* 04 */ ill!("NOP", ZeroPage, 2, 3, false, nop),
    /* 05 */ op!("ORA", ZeroPage, 2, 3, false, ora),
    /* 06 */ op!("ASL", ZeroPage, 2, 5, false, asl),
    /* 07 */ ill!("SLO", ZeroPage, 2, 5, false, slo),
    /* 08 */ op!("PHP", Implicit, 1, 3, false, php),
    /* 09 */ op!("ORA", Immediate, 2, 2, false, ora),
    /* 0A */ op!("ASL", Accumulator, 1, 2, false, asl),
    /* 0B */ ill!("ANC", Immediate, 2, 2, false, anc),
    /* 0C */ ill!("NOP", Absolute, 3, 4, false, nop),
    /* 0D */ op!("ORA", Absolute, 3, 4, false, ora),
    /* 0E */ op!("ASL", Absolute, 3, 6, false, asl),
    /* 0F */ ill!("SLO", Absolute, 3, 6, false, slo),
    /* 10 */ op!("BPL", Relative, 2, 2, true, bpl),
    /* 11 */ op!("ORA", IndirectIndexed, 2, 5, true, ora),
    /* 12 */ ill!("KIL", Implicit, 1, 2, false, kil),
    /* 13 */ ill!("SLO", IndirectIndexed, 2, 8, false, slo),
    /* 14 */ ill!("NOP", ZeroPageX, 2, 4, false, nop),
    /* 15 */ op!("ORA", ZeroPageX, 2, 4, false, ora),
    /* 16 */ op!("ASL", ZeroPageX, 2, 6, false, asl),
    /* 17 */ ill!("SLO", ZeroPageX, 2, 6, false, slo),
    /* 18 */ op!("CLC", Implicit, 1, 2, false, clc),
    /* 19 */ op!("ORA", AbsoluteY, 3, 4, true, ora),
    /* 1A */ ill!("NOP", Implicit, 1, 2, false, nop),
    /* 1B */ ill!("SLO", AbsoluteY, 3, 7, false, slo),
    /* 1C */ ill!("NOP", AbsoluteX, 3, 4, true, nop),
    /* 1D */ op!("ORA", AbsoluteX, 3, 4, true, ora),
    /* 1E */ op!("ASL", AbsoluteX, 3, 7, false, asl),
    /* 1F */ ill!("SLO", AbsoluteX, 3, 7, false, slo),
    /* 20 */ op!("JSR", Absolute, 3, 6, false, jsr),
    /* 21 */ op!("AND", IndexedIndirect, 2, 6, false, and),
    /* 22 */ ill!("KIL", Implicit, 1, 2, false, kil),
    /* 23 */ ill!("RLA", IndexedIndirect, 2, 8, false, rla),
    /* 24 */ op!("BIT", ZeroPage, 2, 3, false, bit),
    /* 25 */ op!("AND", ZeroPage, 2, 3, false, and),
    /* 26 */ op!("ROL", ZeroPage, 2, 5, false, rol),
    /* 27 */ ill!("RLA", ZeroPage, 2, 5, false, rla),
    /* 28 */ op!("PLP", Implicit, 1, 4, false, plp),
    /* 29 */ op!("AND", Immediate, 2, 2, false, and),
    /* 2A */ op!("ROL", Accumulator, 1, 2, false, rol),
    /* 2B */ ill!("ANC", Immediate, 2, 2, false, anc),
    /* 2C */ op!("BIT", Absolute, 3, 4, false, bit),
    /* 2D */ op!("AND", Absolute, 3, 4, false, and),
    /* 2E */ op!("ROL", Absolute, 3, 6, false, rol),
    /* 2F */ ill!("RLA", Absolute, 3, 6, false, rla),
    /* 30 */ op!("BMI", Relative, 2, 2, true, bmi),
    /* 31 */ op!("AND", IndirectIndexed, 2, 5, true, and),
    /* 32 */ ill!("KIL", Implicit, 1, 2, false, kil),
    /* 33 */ ill!("RLA", IndirectIndexed, 2, 8, false, rla),
    /* 34 */ ill!("NOP", ZeroPageX, 2, 4, false, nop),
    /* 35 */ op!("AND", ZeroPageX, 2, 4, false, and),
    /* 36 */ op!("ROL", ZeroPageX, 2, 6, false, rol),
    /* 37 */ ill!("RLA", ZeroPageX, 2, 6, false, rla),
    /* 38 */ op!("SEC", Implicit, 1, 2, false, sec),
    /* 39 */ op!("AND", AbsoluteY, 3, 4, true, and),
    /* 3A */ ill!("NOP", Implicit, 1, 2, false, nop),
    /* 3B */ ill!("RLA", AbsoluteY, 3, 7, false, rla),
    /* 3C */ ill!("NOP", AbsoluteX, 3, 4, true, nop),
    /* 3D */ op!("AND", AbsoluteX, 3, 4, true, and),
    /* 3E */ op!("ROL", AbsoluteX, 3, 7, false, rol),
    /* 3F */ ill!("RLA", AbsoluteX, 3, 7, false, rla),
    /* 40 */ op!("RTI", Implicit, 1, 6, false, rti),
    /* 41 */ op!("EOR", IndexedIndirect, 2, 6, false, eor),
    /* 42 */ ill!("KIL", Implicit, 1, 2, false, kil),
    /* 43 */ ill!("SRE", IndexedIndirect, 2, 8, false, sre),
    /* 44 */ ill!("NOP", ZeroPage, 2, 3, false, nop),
    /* 45 */ op!("EOR", ZeroPage, 2, 3, false, eor),
    /* 46 */ op!("LSR", ZeroPage, 2, 5, false, lsr),
    /* 47 */ ill!("SRE", ZeroPage, 2, 5, false, sre),
    /* 48 */ op!("PHA", Implicit, 1, 3, false, pha),
    /* 49 */ op!("EOR", Immediate, 2, 2, false, eor),
    /* 4A */ op!("LSR", Accumulator, 1, 2, false, lsr),
    /* 4B */ ill!("ALR", Immediate, 2, 2, false, alr),
    /* 4C */ op!("JMP", Absolute, 3, 3, false, jmp),
    /* 4D */ op!("EOR", Absolute, 3, 4, false, eor),
    /* 4E */ op!("LSR", Absolute, 3, 6, false, lsr),
    /* 4F */ ill!("SRE", Absolute, 3, 6, false, sre),
    /* 50 */ op!("BVC", Relative, 2, 2, true, bvc),
    /* 51 */ op!("EOR", IndirectIndexed, 2, 5, true, eor),
    /* 52 */ ill!("KIL", Implicit, 1, 2, false, kil),
    /* 53 */ ill!("SRE", IndirectIndexed, 2, 8, false, sre),
    /* 54 */ ill!("NOP", ZeroPageX, 2, 4, false, nop),
    /* 55 */ op!("EOR", ZeroPageX, 2, 4, false, eor),
    /* 56 */ op!("LSR", ZeroPageX, 2, 6, false, lsr),
    /* 57 */ ill!("SRE", ZeroPageX, 2, 6, false, sre),
    /* 58 */ op!("CLI", Implicit, 1, 2, false, cli),
    /* 59 */ op!("EOR", AbsoluteY, 3, 4, true, eor),
    /* 5A */ ill!("NOP", Implicit, 1, 2, false, nop),
    /* 5B */ ill!("SRE", AbsoluteY, 3, 7, false, sre),
    /* 5C */ ill!("NOP", AbsoluteX, 3, 4, true, nop),
    /* 5D */ op!("EOR", AbsoluteX, 3, 4, true, eor),
    /* 5E */ op!("LSR", AbsoluteX, 3, 7, false, lsr),
    /* 5F */ ill!("SRE", AbsoluteX, 3, 7, false, sre),
    /* 60 */ op!("RTS", Implicit, 1, 6, false, rts),
    /* 61 */ op!("ADC", IndexedIndirect, 2, 6, false, adc),
    /* 62 */ ill!("KIL", Implicit, 1, 2, false, kil),
    /* 63 */ ill!("RRA", IndexedIndirect, 2, 8, false, rra),
    /* 64 */ ill!("NOP", ZeroPage, 2, 3, false, nop),
    /* 65 */ op!("ADC", ZeroPage, 2, 3, false, adc),
    /* 66 */ op!("ROR", ZeroPage, 2, 5, false, ror),
    /* 67 */ ill!("RRA", ZeroPage, 2, 5, false, rra),
    /* 68 */ op!("PLA", Implicit, 1, 4, false, pla),
    /* 69 */ op!("ADC", Immediate, 2, 2, false, adc),
    /* 6A */ op!("ROR", Accumulator, 1, 2, false, ror),
    /* 6B */ ill!("ARR", Immediate, 2, 2, false, arr),
    /* 6C */ op!("JMP", Indirect, 3, 5, false, jmp),
    /* 6D */ op!("ADC", Absolute, 3, 4, false, adc),
    /* 6E */ op!("ROR", Absolute, 3, 6, false, ror),
    /* 6F */ ill!("RRA", Absolute, 3, 6, false, rra),
    /* 70 */ op!("BVS", Relative, 2, 2, true, bvs),
    /* 71 */ op!("ADC", IndirectIndexed, 2, 5, true, adc),
    /* 72 */ ill!("KIL", Implicit, 1, 2, false, kil),
    /* 73 */ ill!("RRA", IndirectIndexed, 2, 8, false, rra),
    /* 74 */ ill!("NOP", ZeroPageX, 2, 4, false, nop),
    /* 75 */ op!("ADC", ZeroPageX, 2, 4, false, adc),
    /* 76 */ op!("ROR", ZeroPageX, 2, 6, false, ror),
    /* 77 */ ill!("RRA", ZeroPageX, 2, 6, false, rra),
    /* 78 */ op!("SEI", Implicit, 1, 2, false, sei),
    /* 79 */ op!("ADC", AbsoluteY, 3, 4, true, adc),
    /* 7A */ ill!("NOP", Implicit, 1, 2, false, nop),
    /* 7B */ ill!("RRA", AbsoluteY, 3, 7, false, rra),
    /* 7C */ ill!("NOP", AbsoluteX, 3, 4, true, nop),
    /* 7D */ op!("ADC", AbsoluteX, 3, 4, true, adc),
    /* 7E */ op!("ROR", AbsoluteX, 3, 7, false, ror),
    /* 7F */ ill!("RRA", AbsoluteX, 3, 7, false, rra),
    /* 80 */ ill!("NOP", Immediate, 2, 2, false, nop),
    /* 81 */ op!("STA", IndexedIndirect, 2, 6, false, sta),
    /* 82 */ ill!("NOP", Immediate, 2, 2, false, nop),
    /* 83 */ ill!("SAX", IndexedIndirect, 2, 6, false, sax),
    /* 84 */ op!("STY", ZeroPage, 2, 3, false, sty),
    /* 85 */ op!("STA", ZeroPage, 2, 3, false, sta),
    /* 86 */ op!("STX", ZeroPage, 2, 3, false, stx),
    /* 87 */ ill!("SAX", ZeroPage, 2, 3, false, sax),
    /* 88 */ op!("DEY", Implicit, 1, 2, false, dey),
    /* 89 */ ill!("NOP", Immediate, 2, 2, false, nop),
    /* 8A */ op!("TXA", Implicit, 1, 2, false, txa),
    /* 8B */ ill!("XAA", Immediate, 2, 2, false, xaa),
    /* 8C */ op!("STY", Absolute, 3, 4, false, sty),
    /* 8D */ op!("STA", Absolute, 3, 4, false, sta),
    /* 8E */ op!("STX", Absolute, 3, 4, false, stx),
    /* 8F */ ill!("SAX", Absolute, 3, 4, false, sax),
    /* 90 */ op!("BCC", Relative, 2, 2, true, bcc),
    /* 91 */ op!("STA", IndirectIndexed, 2, 6, false, sta),
    /* 92 */ ill!("KIL", Implicit, 1, 2, false, kil),
    /* 93 */ ill!("AHX", IndirectIndexed, 2, 6, false, ahx),
    /* 94 */ op!("STY", ZeroPageX, 2, 4, false, sty),
    /* 95 */ op!("STA", ZeroPageX, 2, 4, false, sta),
    /* 96 */ op!("STX", ZeroPageY, 2, 4, false, stx),
    /* 97 */ ill!("SAX", ZeroPageY, 2, 4, false, sax),
    /* 98 */ op!("TYA", Implicit, 1, 2, false, tya),
    /* 99 */ op!("STA", AbsoluteY, 3, 5, false, sta),
    /* 9A */ op!("TXS", Implicit, 1, 2, false, txs),
    /* 9B */ ill!("TAS", AbsoluteY, 3, 5, false, tas),
    /* 9C */ ill!("SHY", AbsoluteX, 3, 5, false, shy),
    /* 9D */ op!("STA", AbsoluteX, 3, 5, false, sta),
    /* 9E */ ill!("SHX", AbsoluteY, 3, 5, false, shx),
    /* 9F */ ill!("AHX", AbsoluteY, 3, 5, false, ahx),
    /* A0 */ op!("LDY", Immediate, 2, 2, false, ldy),
    /* A1 */ op!("LDA", IndexedIndirect, 2, 6, false, lda),
    /* A2 */ op!("LDX", Immediate, 2, 2, false, ldx),
    /* A3 */ ill!("LAX", IndexedIndirect, 2, 6, false, lax),
    /* A4 */ op!("LDY", ZeroPage, 2, 3, false, ldy),
    /* A5 */ op!("LDA", ZeroPage, 2, 3, false, lda),
    /* A6 */ op!("LDX", ZeroPage, 2, 3, false, ldx),
    /* A7 */ ill!("LAX", ZeroPage, 2, 3, false, lax),
    /* A8 */ op!("TAY", Implicit, 1, 2, false, tay),
    /* A9 */ op!("LDA", Immediate, 2, 2, false, lda),
    /* AA */ op!("TAX", Implicit, 1, 2, false, tax),
    /* AB */ ill!("LAX", Immediate, 2, 2, false, lax),
    /* AC */ op!("LDY", Absolute, 3, 4, false, ldy),
    /* AD */ op!("LDA", Absolute, 3, 4, false, lda),
    /* AE */ op!("LDX", Absolute, 3, 4, false, ldx),
    /* AF */ ill!("LAX", Absolute, 3, 4, false, lax),
    /* B0 */ op!("BCS", Relative, 2, 2, true, bcs),
    /* B1 */ op!("LDA", IndirectIndexed, 2, 5, true, lda),
    /* B2 */ ill!("KIL", Implicit, 1, 2, false, kil),
    /* B3 */ ill!("LAX", IndirectIndexed, 2, 5, true, lax),
    /* B4 */ op!("LDY", ZeroPageX, 2, 4, false, ldy),
    /* B5 */ op!("LDA", ZeroPageX, 2, 4, false, lda),
    /* B6 */ op!("LDX", ZeroPageY, 2, 4, false, ldx),
    /* B7 */ ill!("LAX", ZeroPageY, 2, 4, false, lax),
    /* B8 */ op!("CLV", Implicit, 1, 2, false, clv),
    /* B9 */ op!("LDA", AbsoluteY, 3, 4, true, lda),
    /* BA */ op!("TSX", Implicit, 1, 2, false, tsx),
    /* BB */ ill!("LAS", AbsoluteY, 3, 4, true, las),
    /* BC */ op!("LDY", AbsoluteX, 3, 4, true, ldy),
    /* BD */ op!("LDA", AbsoluteX, 3, 4, true, lda),
    /* BE */ op!("LDX", AbsoluteY, 3, 4, true, ldx),
    /* BF */ ill!("LAX", AbsoluteY, 3, 4, true, lax),
    /* C0 */ op!("CPY", Immediate, 2, 2, false, cpy),
    /* C1 */ op!("CMP", IndexedIndirect, 2, 6, false, cmp),
    /* C2 */ ill!("NOP", Immediate, 2, 2, false, nop),
    /* C3 */ ill!("DCP", IndexedIndirect, 2, 8, false, dcp),
    /* C4 */ op!("CPY", ZeroPage, 2, 3, false, cpy),
    /* C5 */ op!("CMP", ZeroPage, 2, 3, false, cmp),
    /* C6 */ op!("DEC", ZeroPage, 2, 5, false, dec),
    /* C7 */ ill!("DCP", ZeroPage, 2, 5, false, dcp),
    /* C8 */ op!("INY", Implicit, 1, 2, false, iny),
    /* C9 */ op!("CMP", Immediate, 2, 2, false, cmp),
    /* CA */ op!("DEX", Implicit, 1, 2, false, dex),
    /* CB */ ill!("AXS", Immediate, 2, 2, false, axs),
    /* CC */ op!("CPY", Absolute, 3, 4, false, cpy),
    /* CD */ op!("CMP", Absolute, 3, 4, false, cmp),
    /* CE */ op!("DEC", Absolute, 3, 6, false, dec),
    /* CF */ ill!("DCP", Absolute, 3, 6, false, dcp),
    /* D0 */ op!("BNE", Relative, 2, 2, true, bne),
    /* D1 */ op!("CMP", IndirectIndexed, 2, 5, true, cmp),
    /* D2 */ ill!("KIL", Implicit, 1, 2, false, kil),
    /* D3 */ ill!("DCP", IndirectIndexed, 2, 8, false, dcp),
    /* D4 */ ill!("NOP", ZeroPageX, 2, 4, false, nop),
    /* D5 */ op!("CMP", ZeroPageX, 2, 4, false, cmp),
    /* D6 */ op!("DEC", ZeroPageX, 2, 6, false, dec),
    /* D7 */ ill!("DCP", ZeroPageX, 2, 6, false, dcp),
    /* D8 */ op!("CLD", Implicit, 1, 2, false, cld),
    /* D9 */ op!("CMP", AbsoluteY, 3, 4, true, cmp),
    /* DA */ ill!("NOP", Implicit, 1, 2, false, nop),
    /* DB */ ill!("DCP", AbsoluteY, 3, 7, false, dcp),
    /* DC */ ill!("NOP", AbsoluteX, 3, 4, true, nop),
    /* DD */ op!("CMP", AbsoluteX, 3, 4, true, cmp),
    /* DE */ op!("DEC", AbsoluteX, 3, 7, false, dec),
    /* DF */ ill!("DCP", AbsoluteX, 3, 7, false, dcp),
    /* E0 */ op!("CPX", Immediate, 2, 2, false, cpx),
    /* E1 */ op!("SBC", IndexedIndirect, 2, 6, false, sbc),
    /* E2 */ ill!("NOP", Immediate, 2, 2, false, nop),
    /* E3 */ ill!("ISC", IndexedIndirect, 2, 8, false, isc),
    /* E4 */ op!("CPX", ZeroPage, 2, 3, false, cpx),
    /* E5 */ op!("SBC", ZeroPage, 2, 3, false, sbc),
    /* E6 */ op!("INC", ZeroPage, 2, 5, false, inc),
    /* E7 */ ill!("ISC", ZeroPage, 2, 5, false, isc),
    /* E8 */ op!("INX", Implicit, 1, 2, false, inx),
    /* E9 */ op!("SBC", Immediate, 2, 2, false, sbc),
    /* EA */ op!("NOP", Implicit, 1, 2, false, nop),
    /* EB */ ill!("SBC", Immediate, 2, 2, false, sbc),
    /* EC */ op!("CPX", Absolute, 3, 4, false, cpx),
    /* ED */ op!("SBC", Absolute, 3, 4, false, sbc),
    /* EE */ op!("INC", Absolute, 3, 6, false, inc),
    /* EF */ ill!("ISC", Absolute, 3, 6, false, isc),
    /* F0 */ op!("BEQ", Relative, 2, 2, true, beq),
    /* F1 */ op!("SBC", IndirectIndexed, 2, 5, true, sbc),
    /* F2 */ ill!("KIL", Implicit, 1, 2, false, kil),
    /* F3 */ ill!("ISC", IndirectIndexed, 2, 8, false, isc),
    /* F4 */ ill!("NOP", ZeroPageX, 2, 4, false, nop),
    /* F5 */ op!("SBC", ZeroPageX, 2, 4, false, sbc),
    /* F6 */ op!("INC", ZeroPageX, 2, 6, false, inc),
    /* F7 */ ill!("ISC", ZeroPageX, 2, 6, false, isc),
    /* F8 */ op!("SED", Implicit, 1, 2, false, sed),
    /* F9 */ op!("SBC", AbsoluteY, 3, 4, true, sbc),
    /* FA */ ill!("NOP", Implicit, 1, 2, false, nop),
    /* FB */ ill!("ISC", AbsoluteY, 3, 7, false, isc),
    /* FC */ ill!("NOP", AbsoluteX, 3, 4, true, nop),
    /* FD */ op!("SBC", AbsoluteX, 3, 4, true, sbc),
    /* FE */ op!("INC", AbsoluteX, 3, 7, false, inc),
    /* FF */ ill!("ISC", AbsoluteX, 3, 7, false, isc),
];

const _: () = {
    let mut i = 0;
    while i < TABLE.len() {
        let entry = &TABLE[i];
        assert!(
            entry.bytes == entry.mode.instruction_len(),
            "opcode length disagrees with its addressing mode"
        );
        assert!(entry.cycles >= 2, "every opcode costs at least two cycles");
        i += 1;
    }
};

/// Opcode table, indexed by opcode byte.
pub static OPCODES: [Instruction; 256] = TABLE;

#[inline]
pub fn lookup(opcode: u8) -> &'static Instruction {
    &OPCODES[opcode as usize]
}
