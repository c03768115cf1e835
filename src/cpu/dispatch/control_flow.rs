/*!
control_flow.rs - JMP / JSR / RTS / BRK / RTI

All five redirect PC through `Cpu::jump`, so `step` does not apply the
length-based advance afterwards.

Stack conventions
=================
- JSR pushes the address of its own last byte (PC + 2), high byte first;
  RTS pulls it and adds one.
- BRK pushes PC + 2 and the status with BREAK and bit 5 set, sets I, and
  continues at the IRQ/BRK vector ($FFFE).
- RTI pulls the status (BREAK dropped, bit 5 kept) and then PC, with no
  adjustment.
*/

use crate::cpu::core::Cpu;
use crate::cpu::interrupts::IRQ_VECTOR;
use crate::cpu::state::IRQ_DISABLE;

pub(crate) fn jmp(cpu: &mut Cpu) {
    let target = cpu.effective_address();
    cpu.jump(target);
}

pub(crate) fn jsr(cpu: &mut Cpu) {
    let target = cpu.effective_address();
    let return_addr = cpu.state.pc.wrapping_add(2);
    cpu.push_word(return_addr);
    cpu.jump(target);
}

pub(crate) fn rts(cpu: &mut Cpu) {
    let addr = cpu.pop_word();
    cpu.jump(addr.wrapping_add(1));
}

pub(crate) fn brk(cpu: &mut Cpu) {
    let return_addr = cpu.state.pc.wrapping_add(2);
    cpu.push_word(return_addr);
    let status = cpu.state.compose_status_for_push(true);
    cpu.push(status);
    cpu.state.add_flags(IRQ_DISABLE);
    let vector = cpu.bus.read_word(IRQ_VECTOR);
    cpu.jump(vector);
}

pub(crate) fn rti(cpu: &mut Cpu) {
    let status = cpu.pop();
    cpu.state.restore_status(status);
    let addr = cpu.pop_word();
    cpu.jump(addr);
}
