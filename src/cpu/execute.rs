/*!
execute.rs - 6502 ALU helpers shared by the instruction handlers

Purpose
=======
Pure register/flag semantics, free of bus access and addressing. Handlers in
`dispatch::*` fetch operands through the `Cpu` and delegate the arithmetic
here, so documented and undocumented opcodes (SLO = ASL + ORA, ISC = INC +
SBC, ...) reuse exactly the same flag rules.

Conventions
===========
- Every helper computes its result first and then updates flags from that
  value with `CpuState::update_flags`/`update_zn`.
- Shift/rotate/inc/dec helpers return the new value; the caller decides
  whether it lands in A or in memory.
- Decimal mode is ignored: ADC/SBC are always binary.
*/

use crate::cpu::state::{CARRY, CpuState, NEGATIVE, OVERFLOW, ZERO};

// ---------------------------------------------------------------------------
// Loads / logic
// ---------------------------------------------------------------------------

/// Pass a loaded value through ZERO/NEGATIVE.
#[inline]
pub(crate) fn load(s: &mut CpuState, v: u8) -> u8 {
    s.update_zn(v);
    v
}

#[inline]
pub(crate) fn and(s: &mut CpuState, v: u8) {
    let r = s.a & v;
    s.a = r;
    s.update_zn(r);
}

#[inline]
pub(crate) fn ora(s: &mut CpuState, v: u8) {
    let r = s.a | v;
    s.a = r;
    s.update_zn(r);
}

#[inline]
pub(crate) fn eor(s: &mut CpuState, v: u8) {
    let r = s.a ^ v;
    s.a = r;
    s.update_zn(r);
}

/// BIT: Z from A & M, N and V copied from bits 7 and 6 of M.
#[inline]
pub(crate) fn bit(s: &mut CpuState, v: u8) {
    let masked = s.a & v;
    s.update_flags(ZERO, || masked == 0);
    s.update_flags(OVERFLOW, || v & 0x40 != 0);
    s.update_flags(NEGATIVE, || v & 0x80 != 0);
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

pub(crate) fn adc(s: &mut CpuState, v: u8) {
    let a = s.a;
    let carry_in = s.test_flags(CARRY) as u16;
    let sum16 = a as u16 + v as u16 + carry_in;
    let result = sum16 as u8;

    s.update_flags(CARRY, || sum16 > 0xFF);
    // Overflow: operands share a sign that the result does not
    s.update_flags(OVERFLOW, || (!(a ^ v) & (a ^ result) & 0x80) != 0);
    s.a = result;
    s.update_zn(result);
}

/// A - M - (1 - C); carry set when no borrow occurred.
#[inline]
pub(crate) fn sbc(s: &mut CpuState, v: u8) {
    adc(s, v ^ 0xFF);
}

/// CMP/CPX/CPY core: flags from `reg - v`, register untouched.
#[inline]
pub(crate) fn compare(s: &mut CpuState, reg: u8, v: u8) {
    let diff = reg.wrapping_sub(v);
    s.update_flags(CARRY, || reg >= v);
    s.update_zn(diff);
}

#[inline]
pub(crate) fn increment(s: &mut CpuState, v: u8) -> u8 {
    let r = v.wrapping_add(1);
    s.update_zn(r);
    r
}

#[inline]
pub(crate) fn decrement(s: &mut CpuState, v: u8) -> u8 {
    let r = v.wrapping_sub(1);
    s.update_zn(r);
    r
}

// ---------------------------------------------------------------------------
// Shifts / rotates
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn asl(s: &mut CpuState, v: u8) -> u8 {
    let r = v << 1;
    s.update_flags(CARRY, || v & 0x80 != 0);
    s.update_zn(r);
    r
}

#[inline]
pub(crate) fn lsr(s: &mut CpuState, v: u8) -> u8 {
    let r = v >> 1;
    s.update_flags(CARRY, || v & 0x01 != 0);
    s.update_zn(r);
    r
}

#[inline]
pub(crate) fn rol(s: &mut CpuState, v: u8) -> u8 {
    let r = (v << 1) | s.test_flags(CARRY) as u8;
    s.update_flags(CARRY, || v & 0x80 != 0);
    s.update_zn(r);
    r
}

#[inline]
pub(crate) fn ror(s: &mut CpuState, v: u8) -> u8 {
    let r = (v >> 1) | ((s.test_flags(CARRY) as u8) << 7);
    s.update_flags(CARRY, || v & 0x01 != 0);
    s.update_zn(r);
    r
}
