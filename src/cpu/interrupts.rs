/*!
interrupts.rs - NMI/IRQ latches, vectors and the shared entry sequence.

Overview
========
Interrupt requests are latched, never delivered re-entrantly. `Cpu::request_nmi`
and `Cpu::request_irq` only set flags; `Cpu::step` polls them once before
fetching an opcode:

1. NMI pending -> clear it, enter via $FFFA, 7 cycles, no instruction executed.
2. Else IRQ pending and I clear -> clear it, enter via $FFFE, 7 cycles.
3. Else execute one instruction. A masked IRQ stays latched.

The NMI latch is an `NmiLine`: a cloneable handle a co-processor keeps and
raises when it wants the CPU interrupted.
*/

use std::cell::Cell;
use std::rc::Rc;

use crate::bus::Bus;
use crate::cpu::state::{CpuState, IRQ_DISABLE};

/// NMI vector.
pub const NMI_VECTOR: u16 = 0xFFFA;
/// Reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;
/// IRQ/BRK vector.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Cycles charged for the interrupt entry sequence (and for reset).
pub const INTERRUPT_CYCLES: u32 = 7;

/// Hardware interrupt kinds serviced at the top of `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
    Nmi,
    Irq,
}

impl Interrupt {
    #[inline]
    pub fn vector(self) -> u16 {
        match self {
            Interrupt::Nmi => NMI_VECTOR,
            Interrupt::Irq => IRQ_VECTOR,
        }
    }
}

/// Shared, latched NMI request line.
///
/// Raising is idempotent while a request is already pending. The line is
/// single-threaded (`Rc<Cell<_>>`); hosts driving the CPU from several threads
/// serialize access themselves.
#[derive(Debug, Clone, Default)]
pub struct NmiLine(Rc<Cell<bool>>);

impl NmiLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request an NMI before the next `step`.
    #[inline]
    pub fn raise(&self) {
        self.0.set(true);
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.0.get()
    }

    /// Consume the pending request, if any.
    #[inline]
    pub(crate) fn take(&self) -> bool {
        self.0.replace(false)
    }

    #[inline]
    pub(crate) fn clear(&self) {
        self.0.set(false);
    }
}

/// Common interrupt entry: push PC, push status with B clear, set I, load vector.
pub(crate) fn service_interrupt(state: &mut CpuState, bus: &mut Bus, kind: Interrupt) {
    let return_pc = state.pc;
    state.push_u16(bus, return_pc);
    let pushed = state.compose_status_for_push(false);
    state.push_u8(bus, pushed);
    state.add_flags(IRQ_DISABLE);
    state.pc = bus.read_word(kind.vector());
}
