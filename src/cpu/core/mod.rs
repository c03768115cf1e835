/*!
core::Cpu - 6502 CPU owning its register state and its bus.

Design
======
- `Cpu` owns a `CpuState`, the `Bus`, the running cycle total and the
  interrupt latches. Nothing else holds a reference to them between calls.
- `step` (see `dispatch::step`) runs one interrupt entry or one instruction
  and returns the cycles it cost.
- Instruction handlers receive `&mut Cpu` for the duration of one
  instruction and reach operands through the helpers in the second `impl`
  block below (`resolve_operand`, `read_operand`, `modify_operand`, ...).
*/

use log::debug;

use crate::bus::Bus;
use crate::bus::registers::RegisterPort;
use crate::cpu::addressing::{self, AddressingMode, Resolved};
use crate::cpu::dispatch;
use crate::cpu::interrupts::{INTERRUPT_CYCLES, NmiLine, RESET_VECTOR};
use crate::cpu::state::CpuState;
use crate::cpu::table::{Instruction, lookup};

#[derive(Debug)]
pub struct Cpu {
    pub(crate) state: CpuState,
    pub(crate) bus: Bus,
    /// Running cycle total since construction.
    pub(crate) cycles: u64,
    /// Cycles charged so far by the step in progress.
    pub(crate) step_cycles: u32,
    /// Opcode of the instruction in progress.
    pub(crate) opcode: u8,
    /// Set when a handler wrote PC; suppresses the length-based advance.
    pub(crate) redirected: bool,
    pub(crate) irq_pending: bool,
    pub(crate) nmi: NmiLine,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// CPU with power-up registers over an empty bus. Call `reset` once an
    /// image is loaded.
    pub fn new() -> Self {
        Self::with_bus(Bus::new())
    }

    pub fn with_bus(bus: Bus) -> Self {
        Self {
            state: CpuState::new(),
            bus,
            cycles: 0,
            step_cycles: 0,
            opcode: 0,
            redirected: false,
            irq_pending: false,
            nmi: NmiLine::new(),
        }
    }

    /// Put `port` behind the register window and give it this CPU's NMI line.
    pub fn attach_port(&mut self, mut port: Box<dyn RegisterPort>) {
        port.connect_nmi(self.nmi.clone());
        self.bus.attach_port(port);
    }

    /// Handle for raising NMIs from outside the CPU.
    pub fn nmi_line(&self) -> NmiLine {
        self.nmi.clone()
    }

    // ---------------------------------------------------------------------
    // Lifecycle
    // ---------------------------------------------------------------------

    /// Power-up registers, PC from $FFFC/$FFFD, latches and jam cleared.
    pub fn reset(&mut self) {
        self.state = CpuState::new();
        self.state.pc = self.bus.read_word(RESET_VECTOR);
        self.irq_pending = false;
        self.nmi.clear();
        self.cycles += INTERRUPT_CYCLES as u64;
        debug!("reset: PC=${:04X}", self.state.pc);
    }

    /// Execute one interrupt entry or one instruction; returns cycles consumed.
    pub fn step(&mut self) -> u32 {
        dispatch::step(self)
    }

    /// Step until at least `budget` cycles have elapsed; returns cycles spent.
    pub fn run(&mut self, budget: u64) -> u64 {
        let start = self.cycles;
        while self.cycles - start < budget {
            self.step();
        }
        self.cycles - start
    }

    /// Latch an NMI for the next `step`.
    pub fn request_nmi(&self) {
        self.nmi.raise();
    }

    /// Latch an IRQ; it stays pending while interrupts are disabled.
    pub fn request_irq(&mut self) {
        self.irq_pending = true;
    }

    pub fn nmi_pending(&self) -> bool {
        self.nmi.is_pending()
    }

    pub fn irq_pending(&self) -> bool {
        self.irq_pending
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    pub fn state(&self) -> &CpuState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut CpuState {
        &mut self.state
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    pub fn a(&self) -> u8 {
        self.state.a
    }
    pub fn x(&self) -> u8 {
        self.state.x
    }
    pub fn y(&self) -> u8 {
        self.state.y
    }
    pub fn sp(&self) -> u8 {
        self.state.sp
    }
    pub fn pc(&self) -> u16 {
        self.state.pc
    }
    pub fn status(&self) -> u8 {
        self.state.status
    }
    pub fn cycles(&self) -> u64 {
        self.cycles
    }
    pub fn is_jammed(&self) -> bool {
        self.state.jammed
    }

    pub fn get_flag(&self, mask: u8) -> bool {
        self.state.test_flags(mask)
    }

    pub fn set_a(&mut self, v: u8) {
        self.state.a = v;
    }
    pub fn set_x(&mut self, v: u8) {
        self.state.x = v;
    }
    pub fn set_y(&mut self, v: u8) {
        self.state.y = v;
    }
    pub fn set_sp(&mut self, v: u8) {
        self.state.sp = v;
    }
    pub fn set_pc(&mut self, v: u16) {
        self.state.pc = v;
    }
    pub fn set_status(&mut self, v: u8) {
        self.state.status = v;
    }
    pub fn set_flag(&mut self, mask: u8, on: bool) {
        self.state.assign_flag(mask, on);
    }

    // ---------------------------------------------------------------------
    // Stack
    // ---------------------------------------------------------------------

    pub fn push(&mut self, value: u8) {
        self.state.push_u8(&mut self.bus, value);
    }

    pub fn pop(&mut self) -> u8 {
        self.state.pop_u8(&mut self.bus)
    }

    pub fn push_word(&mut self, value: u16) {
        self.state.push_u16(&mut self.bus, value);
    }

    pub fn pop_word(&mut self) -> u16 {
        self.state.pop_u16(&mut self.bus)
    }
}

// -------------------------------------------------------------------------
// Handler-facing helpers
// -------------------------------------------------------------------------

impl Cpu {
    /// Table entry of the instruction in progress.
    #[inline]
    pub(crate) fn instruction(&self) -> &'static Instruction {
        lookup(self.opcode)
    }

    #[inline]
    pub(crate) fn add_cycles(&mut self, n: u32) {
        self.step_cycles += n;
    }

    /// Resolve the operand of the instruction in progress. Indexed page
    /// crossings are charged here when the entry asks for it; relative-mode
    /// crossings are left to the branch helper.
    pub(crate) fn resolve_operand(&mut self) -> Resolved {
        let entry = self.instruction();
        let resolved = addressing::resolve(&self.state, &mut self.bus, entry.mode);
        if resolved.page_crossed
            && entry.page_cross_penalty
            && entry.mode != AddressingMode::Relative
        {
            self.add_cycles(1);
        }
        resolved
    }

    #[inline]
    pub(crate) fn operand_address(&mut self) -> Option<u16> {
        self.resolve_operand().addr
    }

    /// Operand value: A in accumulator mode, else the byte at the resolved address.
    pub(crate) fn read_operand(&mut self) -> u8 {
        match self.operand_address() {
            Some(addr) => self.bus.read(addr),
            None => self.register_operand(),
        }
    }

    /// Apply `f` to the operand and write the result back to A or memory.
    ///
    /// Memory operands follow the read-modify-write bus pattern: read, write
    /// the original value back, then write the result.
    pub(crate) fn modify_operand<F>(&mut self, f: F) -> u8
    where
        F: FnOnce(&mut CpuState, u8) -> u8,
    {
        match self.operand_address() {
            Some(addr) => {
                let old = self.bus.read(addr);
                self.bus.write(addr, old);
                let new = f(&mut self.state, old);
                self.bus.write(addr, new);
                new
            }
            None => {
                let old = self.register_operand();
                let new = f(&mut self.state, old);
                self.state.a = new;
                new
            }
        }
    }

    /// Effective address of a memory operand. Only called by handlers whose
    /// table entries all use memory modes.
    pub(crate) fn effective_address(&mut self) -> u16 {
        match self.operand_address() {
            Some(addr) => addr,
            None => self.missing_operand(),
        }
    }

    /// Effective address plus the page-cross indication, for handlers that
    /// need both.
    pub(crate) fn resolve_memory_operand(&mut self) -> (u16, bool) {
        let resolved = self.resolve_operand();
        match resolved.addr {
            Some(addr) => (addr, resolved.page_crossed),
            None => self.missing_operand(),
        }
    }

    /// Store `value` at the resolved address.
    pub(crate) fn store_operand(&mut self, value: u8) {
        let addr = self.effective_address();
        self.bus.write(addr, value);
    }

    /// Redirect control flow; `step` will not advance PC afterwards.
    #[inline]
    pub(crate) fn jump(&mut self, target: u16) {
        self.state.pc = target;
        self.redirected = true;
    }

    fn register_operand(&self) -> u8 {
        match self.instruction().mode {
            AddressingMode::Accumulator => self.state.a,
            _ => self.missing_operand(),
        }
    }

    #[cold]
    fn missing_operand(&self) -> ! {
        let entry = self.instruction();
        panic!(
            "opcode {:02X} ({} {}) has no memory operand",
            self.opcode,
            entry.mnemonic,
            entry.mode.short_name()
        )
    }
}
