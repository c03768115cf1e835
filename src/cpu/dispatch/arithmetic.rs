/*!
arithmetic.rs - ADC/SBC and the increment/decrement family

ADC and SBC are binary regardless of the DECIMAL flag. INC/DEC operate on
memory with the read-modify-write bus pattern; INX/INY/DEX/DEY wrap their
register. All of them set ZERO/NEGATIVE from the new value.
*/

use crate::cpu::core::Cpu;
use crate::cpu::execute;

pub(crate) fn adc(cpu: &mut Cpu) {
    let v = cpu.read_operand();
    execute::adc(&mut cpu.state, v);
}

pub(crate) fn sbc(cpu: &mut Cpu) {
    let v = cpu.read_operand();
    execute::sbc(&mut cpu.state, v);
}

pub(crate) fn inc(cpu: &mut Cpu) {
    cpu.modify_operand(execute::increment);
}

pub(crate) fn dec(cpu: &mut Cpu) {
    cpu.modify_operand(execute::decrement);
}

pub(crate) fn inx(cpu: &mut Cpu) {
    let v = cpu.state.x;
    let r = execute::increment(&mut cpu.state, v);
    cpu.state.x = r;
}

pub(crate) fn iny(cpu: &mut Cpu) {
    let v = cpu.state.y;
    let r = execute::increment(&mut cpu.state, v);
    cpu.state.y = r;
}

pub(crate) fn dex(cpu: &mut Cpu) {
    let v = cpu.state.x;
    let r = execute::decrement(&mut cpu.state, v);
    cpu.state.x = r;
}

pub(crate) fn dey(cpu: &mut Cpu) {
    let v = cpu.state.y;
    let r = execute::decrement(&mut cpu.state, v);
    cpu.state.y = r;
}
