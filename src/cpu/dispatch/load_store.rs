/*!
load_store.rs - LDA/LDX/LDY and STA/STX/STY

Loads set ZERO/NEGATIVE from the loaded value; indexed absolute and (zp),Y
loads pay the page-cross cycle through the operand resolver. Stores never
read their target and never affect flags, and their indexed forms have the
extra cycle built into the base cost.
*/

use crate::cpu::core::Cpu;
use crate::cpu::execute::load;

pub(crate) fn lda(cpu: &mut Cpu) {
    let v = cpu.read_operand();
    let r = load(&mut cpu.state, v);
    cpu.state.a = r;
}

pub(crate) fn ldx(cpu: &mut Cpu) {
    let v = cpu.read_operand();
    let r = load(&mut cpu.state, v);
    cpu.state.x = r;
}

pub(crate) fn ldy(cpu: &mut Cpu) {
    let v = cpu.read_operand();
    let r = load(&mut cpu.state, v);
    cpu.state.y = r;
}

pub(crate) fn sta(cpu: &mut Cpu) {
    let v = cpu.state.a;
    cpu.store_operand(v);
}

pub(crate) fn stx(cpu: &mut Cpu) {
    let v = cpu.state.x;
    cpu.store_operand(v);
}

pub(crate) fn sty(cpu: &mut Cpu) {
    let v = cpu.state.y;
    cpu.store_operand(v);
}
