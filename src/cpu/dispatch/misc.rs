/*!
misc.rs - Transfers / Stack / Flag / NOP handlers

Transfers:
  TAX, TAY, TXA, TYA, TSX set ZERO/NEGATIVE from the destination;
  TXS changes no flags.

Stack:
  PHA/PLA move A (PLA sets ZERO/NEGATIVE).
  PHP pushes the status with BREAK and bit 5 set.
  PLP loads the status with BREAK dropped and bit 5 kept set.

Flag operations:
  CLC SEC CLI SEI CLD SED CLV

NOP:
  The documented NOP does nothing. Undocumented NOPs with a memory
  operand still perform their read (and pay the page-cross cycle).
*/

use crate::cpu::core::Cpu;
use crate::cpu::execute::load;
use crate::cpu::state::{CARRY, DECIMAL, IRQ_DISABLE, OVERFLOW};

// ---------------- Transfers ----------------

pub(crate) fn tax(cpu: &mut Cpu) {
    let v = cpu.state.a;
    let r = load(&mut cpu.state, v);
    cpu.state.x = r;
}

pub(crate) fn tay(cpu: &mut Cpu) {
    let v = cpu.state.a;
    let r = load(&mut cpu.state, v);
    cpu.state.y = r;
}

pub(crate) fn txa(cpu: &mut Cpu) {
    let v = cpu.state.x;
    let r = load(&mut cpu.state, v);
    cpu.state.a = r;
}

pub(crate) fn tya(cpu: &mut Cpu) {
    let v = cpu.state.y;
    let r = load(&mut cpu.state, v);
    cpu.state.a = r;
}

pub(crate) fn tsx(cpu: &mut Cpu) {
    let v = cpu.state.sp;
    let r = load(&mut cpu.state, v);
    cpu.state.x = r;
}

pub(crate) fn txs(cpu: &mut Cpu) {
    cpu.state.sp = cpu.state.x;
}

// ---------------- Stack ----------------

pub(crate) fn pha(cpu: &mut Cpu) {
    let v = cpu.state.a;
    cpu.push(v);
}

pub(crate) fn php(cpu: &mut Cpu) {
    let v = cpu.state.compose_status_for_push(true);
    cpu.push(v);
}

pub(crate) fn pla(cpu: &mut Cpu) {
    let v = cpu.pop();
    let r = load(&mut cpu.state, v);
    cpu.state.a = r;
}

pub(crate) fn plp(cpu: &mut Cpu) {
    let v = cpu.pop();
    cpu.state.restore_status(v);
}

// ---------------- Flags ----------------

pub(crate) fn clc(cpu: &mut Cpu) {
    cpu.state.remove_flags(CARRY);
}

pub(crate) fn sec(cpu: &mut Cpu) {
    cpu.state.add_flags(CARRY);
}

pub(crate) fn cli(cpu: &mut Cpu) {
    cpu.state.remove_flags(IRQ_DISABLE);
}

pub(crate) fn sei(cpu: &mut Cpu) {
    cpu.state.add_flags(IRQ_DISABLE);
}

pub(crate) fn cld(cpu: &mut Cpu) {
    cpu.state.remove_flags(DECIMAL);
}

pub(crate) fn sed(cpu: &mut Cpu) {
    cpu.state.add_flags(DECIMAL);
}

pub(crate) fn clv(cpu: &mut Cpu) {
    cpu.state.remove_flags(OVERFLOW);
}

// ---------------- NOP ----------------

pub(crate) fn nop(cpu: &mut Cpu) {
    if !cpu.instruction().mode.is_register_only() {
        cpu.read_operand();
    }
}
