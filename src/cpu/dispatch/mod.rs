/*!
dispatch - Orchestrator for a single 6502 CPU step, plus the instruction
handler families the opcode table points into.

Overview
========
`step` runs one iteration of the CPU loop:
1. Unless jammed, service a pending NMI, or a pending IRQ when I is clear
   (7-cycle entry, no instruction executed).
2. Fetch the opcode at PC and look it up in `table::OPCODES`.
3. Charge the entry's base cycles and run its handler with PC still on the
   opcode. Handlers resolve operands through the `Cpu` (page-cross cycles are
   charged there) and call `Cpu::jump` when they redirect control flow.
4. Advance PC by the entry's length unless the handler redirected or jammed.
5. Add the step's cycles to the running total and return them.

Handler Families
================
```text
    arithmetic   ADC SBC INC DEC INX INY DEX DEY
    branches     BPL BMI BVC BVS BCC BCS BNE BEQ
    compare      CMP CPX CPY
    control_flow JMP JSR RTS BRK RTI
    illegal      undocumented NMOS opcodes (SLO ... KIL)
    load_store   LDA LDX LDY STA STX STY
    logical      AND ORA EOR BIT
    misc         transfers, stack, flag set/clear, NOP
    rmw          ASL LSR ROL ROR
```
*/

use log::{Level, debug, log_enabled, trace, warn};

use crate::cpu::core::Cpu;
use crate::cpu::interrupts::{INTERRUPT_CYCLES, Interrupt, service_interrupt};
use crate::cpu::state::IRQ_DISABLE;
use crate::cpu::table::lookup;
use crate::cpu::trace::trace_line;

pub(crate) mod arithmetic;
pub(crate) mod branches;
pub(crate) mod compare;
pub(crate) mod control_flow;
pub(crate) mod illegal;
pub(crate) mod load_store;
pub(crate) mod logical;
pub(crate) mod misc;
pub(crate) mod rmw;

/// Execute one CPU step (interrupt entry or one instruction); returns cycles consumed.
pub(crate) fn step(cpu: &mut Cpu) -> u32 {
    if !cpu.state.jammed
        && let Some(kind) = poll_interrupt(cpu)
    {
        return enter_interrupt(cpu, kind);
    }

    if log_enabled!(Level::Trace) {
        trace!("{}", trace_line(cpu));
    }

    let opcode = cpu.bus.read(cpu.state.pc);
    let entry = lookup(opcode);
    cpu.opcode = opcode;
    cpu.redirected = false;
    cpu.step_cycles = entry.cycles as u32;

    let was_jammed = cpu.state.jammed;
    (entry.handler)(cpu);

    if cpu.state.jammed {
        if !was_jammed {
            warn!(
                "CPU jammed by opcode {opcode:02X} at ${:04X}; reset required",
                cpu.state.pc
            );
        }
    } else if !cpu.redirected {
        cpu.state.advance_pc(entry.bytes as u16);
    }

    let spent = cpu.step_cycles;
    cpu.cycles += spent as u64;
    spent
}

/// Pick the interrupt to service this step, consuming its latch.
fn poll_interrupt(cpu: &mut Cpu) -> Option<Interrupt> {
    if cpu.nmi.take() {
        return Some(Interrupt::Nmi);
    }
    if cpu.irq_pending && !cpu.state.test_flags(IRQ_DISABLE) {
        cpu.irq_pending = false;
        return Some(Interrupt::Irq);
    }
    None
}

fn enter_interrupt(cpu: &mut Cpu, kind: Interrupt) -> u32 {
    let from = cpu.state.pc;
    service_interrupt(&mut cpu.state, &mut cpu.bus, kind);
    debug!("{kind:?} taken at ${from:04X} -> ${:04X}", cpu.state.pc);
    cpu.cycles += INTERRUPT_CYCLES as u64;
    INTERRUPT_CYCLES
}
