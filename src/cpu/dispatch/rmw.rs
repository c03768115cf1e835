/*!
rmw.rs - Shift / rotate family (ASL, LSR, ROL, ROR)

Accumulator forms rewrite A; memory forms go through
`Cpu::modify_operand`, which performs the read / write-original /
write-result sequence. ROL and ROR shift the incoming carry into the vacated
bit and take the new carry from the bit shifted out.
*/

use crate::cpu::core::Cpu;
use crate::cpu::execute;

pub(crate) fn asl(cpu: &mut Cpu) {
    cpu.modify_operand(execute::asl);
}

pub(crate) fn lsr(cpu: &mut Cpu) {
    cpu.modify_operand(execute::lsr);
}

pub(crate) fn rol(cpu: &mut Cpu) {
    cpu.modify_operand(execute::rol);
}

pub(crate) fn ror(cpu: &mut Cpu) {
    cpu.modify_operand(execute::ror);
}
