/*!
illegal.rs - Undocumented NMOS 6502 opcodes

Overview
========
The NMOS decoder activates several internal operations at once for the
opcodes the datasheet leaves out. Most of them are a documented
read-modify-write followed by an accumulator operation on the new value:

```text
    SLO = ASL + ORA      RLA = ROL + AND
    SRE = LSR + EOR      RRA = ROR + ADC
    DCP = DEC + CMP      ISC = INC + SBC
```

The rest:

```text
    LAX  A = X = M
    SAX  M = A & X
    ANC  A &= imm, C = bit 7 of A
    ALR  A &= imm, then LSR A
    ARR  A &= imm, then ROR A; C = bit 6, V = bit 6 ^ bit 5 of the result
    AXS  X = (A & X) - imm, C = no borrow (CMP-style, V untouched)
    LAS  A = X = SP = M & SP
    TAS  SP = A & X, M = SP & (H + 1)
    AHX  M = A & X & (H + 1)
    SHX  M = X & (H + 1)
    SHY  M = Y & (H + 1)
    XAA  A = (A | $EE) & X & imm
    KIL  jam: PC stops advancing until reset
```

H is the high byte of the unindexed base address. When indexing crosses a
page, the stored value also replaces the high byte of the target address.
XAA's $EE constant is the commonly observed value; real chips vary.
*/

use crate::cpu::core::Cpu;
use crate::cpu::execute;
use crate::cpu::state::{CARRY, NEGATIVE, OVERFLOW};

// ---------------- RMW combos ----------------

pub(crate) fn slo(cpu: &mut Cpu) {
    let v = cpu.modify_operand(execute::asl);
    execute::ora(&mut cpu.state, v);
}

pub(crate) fn rla(cpu: &mut Cpu) {
    let v = cpu.modify_operand(execute::rol);
    execute::and(&mut cpu.state, v);
}

pub(crate) fn sre(cpu: &mut Cpu) {
    let v = cpu.modify_operand(execute::lsr);
    execute::eor(&mut cpu.state, v);
}

pub(crate) fn rra(cpu: &mut Cpu) {
    let v = cpu.modify_operand(execute::ror);
    execute::adc(&mut cpu.state, v);
}

pub(crate) fn dcp(cpu: &mut Cpu) {
    let v = cpu.modify_operand(execute::decrement);
    let a = cpu.state.a;
    execute::compare(&mut cpu.state, a, v);
}

pub(crate) fn isc(cpu: &mut Cpu) {
    let v = cpu.modify_operand(execute::increment);
    execute::sbc(&mut cpu.state, v);
}

// ---------------- Loads / stores ----------------

pub(crate) fn lax(cpu: &mut Cpu) {
    let v = cpu.read_operand();
    let v = execute::load(&mut cpu.state, v);
    cpu.state.a = v;
    cpu.state.x = v;
}

pub(crate) fn sax(cpu: &mut Cpu) {
    let v = cpu.state.a & cpu.state.x;
    cpu.store_operand(v);
}

pub(crate) fn las(cpu: &mut Cpu) {
    let masked = cpu.read_operand() & cpu.state.sp;
    let v = execute::load(&mut cpu.state, masked);
    cpu.state.a = v;
    cpu.state.x = v;
    cpu.state.sp = v;
}

pub(crate) fn tas(cpu: &mut Cpu) {
    cpu.state.sp = cpu.state.a & cpu.state.x;
    let (v, y) = (cpu.state.sp, cpu.state.y);
    store_masked_by_high_byte(cpu, v, y);
}

pub(crate) fn ahx(cpu: &mut Cpu) {
    let (v, y) = (cpu.state.a & cpu.state.x, cpu.state.y);
    store_masked_by_high_byte(cpu, v, y);
}

pub(crate) fn shx(cpu: &mut Cpu) {
    let (v, y) = (cpu.state.x, cpu.state.y);
    store_masked_by_high_byte(cpu, v, y);
}

pub(crate) fn shy(cpu: &mut Cpu) {
    let (v, x) = (cpu.state.y, cpu.state.x);
    store_masked_by_high_byte(cpu, v, x);
}

/// Shared tail of TAS/AHX/SHX/SHY: store `value & (H + 1)`, where H is the
/// high byte of the address before `index` was added.
fn store_masked_by_high_byte(cpu: &mut Cpu, value: u8, index: u8) {
    let (addr, crossed) = cpu.resolve_memory_operand();
    let base = addr.wrapping_sub(index as u16);
    let v = value & ((base >> 8) as u8).wrapping_add(1);
    let target = if crossed {
        ((v as u16) << 8) | (addr & 0x00FF)
    } else {
        addr
    };
    cpu.bus.write(target, v);
}

// ---------------- Immediate ALU combos ----------------

pub(crate) fn anc(cpu: &mut Cpu) {
    let v = cpu.read_operand();
    execute::and(&mut cpu.state, v);
    let negative = cpu.state.test_flags(NEGATIVE);
    cpu.state.update_flags(CARRY, || negative);
}

pub(crate) fn alr(cpu: &mut Cpu) {
    let v = cpu.read_operand();
    execute::and(&mut cpu.state, v);
    let a = cpu.state.a;
    cpu.state.a = execute::lsr(&mut cpu.state, a);
}

pub(crate) fn arr(cpu: &mut Cpu) {
    let v = cpu.read_operand();
    let t = cpu.state.a & v;
    let r = (t >> 1) | ((cpu.state.test_flags(CARRY) as u8) << 7);
    cpu.state.a = r;
    cpu.state.update_zn(r);
    cpu.state.update_flags(CARRY, || r & 0x40 != 0);
    cpu.state.update_flags(OVERFLOW, || ((r >> 6) ^ (r >> 5)) & 0x01 != 0);
}

pub(crate) fn axs(cpu: &mut Cpu) {
    let v = cpu.read_operand();
    let t = cpu.state.a & cpu.state.x;
    execute::compare(&mut cpu.state, t, v);
    cpu.state.x = t.wrapping_sub(v);
}

pub(crate) fn xaa(cpu: &mut Cpu) {
    let v = cpu.read_operand();
    let r = (cpu.state.a | 0xEE) & cpu.state.x & v;
    cpu.state.a = r;
    cpu.state.update_zn(r);
}

// ---------------- Jam ----------------

pub(crate) fn kil(cpu: &mut Cpu) {
    cpu.state.jammed = true;
}
