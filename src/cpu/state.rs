/*!
state.rs - 6502 architectural state (registers + status flags) and the
flag/stack primitives every instruction handler builds on.

Overview
========
`CpuState` holds the architecturally visible registers plus the jam latch set
by the KIL opcodes. Bus wiring, decode and cycle accounting live in higher
layers (`core`, `dispatch`, `table`). The struct is `Copy`, so harnesses can
snapshot and compare it freely.

Status Register Bit Layout
==========================
Bit: 7 6 5 4 3 2 1 0
     N V 1 B D I Z C
Where:
  N = NEGATIVE
  V = OVERFLOW
  1 = UNUSED (kept set in the register and on every push)
  B = BREAK (only present in bytes pushed by PHP/BRK)
  D = DECIMAL (stored and toggled, never consulted by ADC/SBC)
  I = IRQ_DISABLE
  Z = ZERO
  C = CARRY

Flag Primitives
===============
`add_flags`, `remove_flags`, `test_flags` and `update_flags` are the four
operations handlers use. `update_flags` takes its predicate as `FnOnce`, so it
is evaluated exactly once; handlers compute the result first and pass a
closure over that value, never over the register being written.
*/

use crate::bus::Bus;

/// Processor status flag bit masks.
pub const CARRY: u8 = 0b0000_0001;
pub const ZERO: u8 = 0b0000_0010;
pub const IRQ_DISABLE: u8 = 0b0000_0100;
pub const DECIMAL: u8 = 0b0000_1000;
pub const BREAK: u8 = 0b0001_0000;
pub const UNUSED: u8 = 0b0010_0000;
pub const OVERFLOW: u8 = 0b0100_0000;
pub const NEGATIVE: u8 = 0b1000_0000;

/// Base address of the hardware stack page.
pub const STACK_PAGE: u16 = 0x0100;

/// Stack pointer value after reset.
pub const RESET_SP: u8 = 0xFD;

/// Status value after reset.
pub const RESET_STATUS: u8 = IRQ_DISABLE | UNUSED;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CpuState {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: u8,
    /// Set by a KIL opcode; only a reset clears it.
    pub jammed: bool,
}

impl Default for CpuState {
    fn default() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: RESET_SP,
            pc: 0x0000,
            status: RESET_STATUS,
            jammed: false,
        }
    }
}

impl CpuState {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------------------------------------------------------------
    // Program Counter
    // ---------------------------------------------------------------------

    /// Advance PC by `delta` (wrapping at 16 bits).
    #[inline]
    pub fn advance_pc(&mut self, delta: u16) {
        self.pc = self.pc.wrapping_add(delta);
    }

    // ---------------------------------------------------------------------
    // Flag Operations
    // ---------------------------------------------------------------------

    /// Set every bit of `mask`.
    #[inline]
    pub fn add_flags(&mut self, mask: u8) {
        self.status |= mask;
    }

    /// Clear every bit of `mask`.
    #[inline]
    pub fn remove_flags(&mut self, mask: u8) {
        self.status &= !mask;
    }

    /// True if any bit of `mask` is set.
    #[inline]
    pub fn test_flags(&self, mask: u8) -> bool {
        (self.status & mask) != 0
    }

    /// Set `mask` if `value`, clear it otherwise.
    #[inline]
    pub fn assign_flag(&mut self, mask: u8, value: bool) {
        if value {
            self.add_flags(mask);
        } else {
            self.remove_flags(mask);
        }
    }

    /// Conditional update: evaluates `predicate` once and assigns `mask` from it.
    #[inline]
    pub fn update_flags<F: FnOnce() -> bool>(&mut self, mask: u8, predicate: F) {
        let set = predicate();
        self.assign_flag(mask, set);
    }

    /// ZERO + NEGATIVE from a freshly computed 8-bit result.
    #[inline]
    pub fn update_zn(&mut self, result: u8) {
        self.update_flags(ZERO, || result == 0);
        self.update_flags(NEGATIVE, || result & 0x80 != 0);
    }

    /// Status byte as pushed by PHP/BRK (`brk = true`) or IRQ/NMI (`brk = false`).
    ///
    /// Bit 5 is always set in the pushed byte.
    pub fn compose_status_for_push(&self, brk: bool) -> u8 {
        let v = self.status | UNUSED;
        if brk { v | BREAK } else { v & !BREAK }
    }

    /// Load the register from a byte pulled by PLP/RTI. BREAK does not exist
    /// as a register bit and bit 5 always reads back set.
    #[inline]
    pub fn restore_status(&mut self, pulled: u8) {
        self.status = (pulled | UNUSED) & !BREAK;
    }

    // ---------------------------------------------------------------------
    // Stack
    // ---------------------------------------------------------------------
    //
    // The stack lives on page 0x0100; SP wraps within it:
    //   Push: write at 0x0100 | SP, then SP = SP - 1
    //   Pull: SP = SP + 1, then read at 0x0100 | SP

    #[inline]
    pub fn push_u8(&mut self, bus: &mut Bus, value: u8) {
        bus.write(STACK_PAGE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    #[inline]
    pub fn pop_u8(&mut self, bus: &mut Bus) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        bus.read(STACK_PAGE | self.sp as u16)
    }

    /// Push a word high byte first, so it sits little-endian in memory.
    #[inline]
    pub fn push_u16(&mut self, bus: &mut Bus, value: u16) {
        self.push_u8(bus, (value >> 8) as u8);
        self.push_u8(bus, value as u8);
    }

    #[inline]
    pub fn pop_u16(&mut self, bus: &mut Bus) -> u16 {
        let lo = self.pop_u8(bus) as u16;
        let hi = self.pop_u8(bus) as u16;
        (hi << 8) | lo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_power_up() {
        let s = CpuState::new();
        assert_eq!(s.a, 0);
        assert_eq!(s.x, 0);
        assert_eq!(s.y, 0);
        assert_eq!(s.sp, 0xFD);
        assert_eq!(s.status, 0x24);
        assert!(s.test_flags(IRQ_DISABLE));
        assert!(s.test_flags(UNUSED));
        assert!(!s.jammed);
    }

    #[test]
    fn flag_assignment() {
        let mut s = CpuState::new();
        s.remove_flags(IRQ_DISABLE);
        assert!(!s.test_flags(IRQ_DISABLE));
        s.add_flags(IRQ_DISABLE | CARRY);
        assert!(s.test_flags(IRQ_DISABLE));
        assert!(s.test_flags(CARRY));
        s.assign_flag(DECIMAL, true);
        assert!(s.test_flags(DECIMAL));
        s.assign_flag(DECIMAL, false);
        assert!(!s.test_flags(DECIMAL));
    }

    #[test]
    fn update_flags_evaluates_predicate_once() {
        let mut s = CpuState::new();
        let mut calls = 0;
        s.update_flags(CARRY, || {
            calls += 1;
            true
        });
        assert_eq!(calls, 1);
        assert!(s.test_flags(CARRY));
        s.update_flags(CARRY | OVERFLOW, || false);
        assert!(!s.test_flags(CARRY));
        assert!(!s.test_flags(OVERFLOW));
    }

    #[test]
    fn update_zn_behavior() {
        let mut s = CpuState::new();
        s.update_zn(0x00);
        assert!(s.test_flags(ZERO));
        assert!(!s.test_flags(NEGATIVE));
        s.update_zn(0x80);
        assert!(!s.test_flags(ZERO));
        assert!(s.test_flags(NEGATIVE));
        s.update_zn(0x7F);
        assert!(!s.test_flags(ZERO));
        assert!(!s.test_flags(NEGATIVE));
    }

    #[test]
    fn pc_advance_wraps() {
        let mut s = CpuState::new();
        s.pc = 0xFFFE;
        s.advance_pc(3);
        assert_eq!(s.pc, 0x0001);
    }

    #[test]
    fn stack_push_pop_round_trip() {
        let mut bus = Bus::new();
        let mut s = CpuState::new();
        let start = s.sp;
        s.push_u8(&mut bus, 0xAB);
        assert_eq!(bus.read(0x01FD), 0xAB);
        assert_eq!(s.sp, start.wrapping_sub(1));
        assert_eq!(s.pop_u8(&mut bus), 0xAB);
        assert_eq!(s.sp, start);
    }

    #[test]
    fn stack_pointer_wraps_inside_page_one() {
        let mut bus = Bus::new();
        let mut s = CpuState::new();
        s.sp = 0x00;
        s.push_u8(&mut bus, 0x11);
        assert_eq!(bus.read(0x0100), 0x11);
        assert_eq!(s.sp, 0xFF);
        s.push_u8(&mut bus, 0x22);
        assert_eq!(bus.read(0x01FF), 0x22);
        assert_eq!(s.pop_u8(&mut bus), 0x22);
        assert_eq!(s.pop_u8(&mut bus), 0x11);
        assert_eq!(s.sp, 0x00);
    }

    #[test]
    fn word_push_is_high_byte_first() {
        let mut bus = Bus::new();
        let mut s = CpuState::new();
        s.push_u16(&mut bus, 0x1234);
        assert_eq!(bus.read(0x01FD), 0x12);
        assert_eq!(bus.read(0x01FC), 0x34);
        assert_eq!(s.pop_u16(&mut bus), 0x1234);
    }

    #[test]
    fn compose_status_break_flag_behavior() {
        let mut s = CpuState::new();
        s.status = NEGATIVE | CARRY;
        assert_eq!(s.compose_status_for_push(true), NEGATIVE | UNUSED | BREAK | CARRY);
        assert_eq!(s.compose_status_for_push(false), NEGATIVE | UNUSED | CARRY);
    }

    #[test]
    fn restore_status_masks_break_and_forces_unused() {
        let mut s = CpuState::new();
        s.restore_status(0xFF);
        assert_eq!(s.status, 0xEF);
        s.restore_status(0x00);
        assert_eq!(s.status, UNUSED);
    }
}
