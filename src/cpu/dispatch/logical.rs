//! Logical family: AND, ORA, EOR and BIT.

use crate::cpu::core::Cpu;
use crate::cpu::execute;

pub(crate) fn and(cpu: &mut Cpu) {
    let v = cpu.read_operand();
    execute::and(&mut cpu.state, v);
}

pub(crate) fn ora(cpu: &mut Cpu) {
    let v = cpu.read_operand();
    execute::ora(&mut cpu.state, v);
}

pub(crate) fn eor(cpu: &mut Cpu) {
    let v = cpu.read_operand();
    execute::eor(&mut cpu.state, v);
}

pub(crate) fn bit(cpu: &mut Cpu) {
    let v = cpu.read_operand();
    execute::bit(&mut cpu.state, v);
}
