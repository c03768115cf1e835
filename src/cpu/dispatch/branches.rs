/*!
branches.rs - Relative branch handlers (BPL/BMI/BVC/BVS/BCC/BCS/BNE/BEQ)

Cycle Rules
===========
Base cost: 2 cycles.
If branch is taken: +1 cycle.
If branch is taken and the target lies on a different page than the
instruction that follows the branch: +1 more.

All eight opcodes funnel into `branch_if`.
*/

use crate::cpu::core::Cpu;
use crate::cpu::state::{CARRY, NEGATIVE, OVERFLOW, ZERO};

/// Take the branch when `condition` holds, charging the taken/page-cross cycles.
pub(crate) fn branch_if(cpu: &mut Cpu, condition: bool) {
    let resolved = cpu.resolve_operand();
    if !condition {
        return;
    }
    let Some(target) = resolved.addr else {
        return;
    };
    cpu.add_cycles(1);
    if resolved.page_crossed {
        cpu.add_cycles(1);
    }
    cpu.jump(target);
}

pub(crate) fn bpl(cpu: &mut Cpu) {
    let c = !cpu.state.test_flags(NEGATIVE);
    branch_if(cpu, c);
}

pub(crate) fn bmi(cpu: &mut Cpu) {
    let c = cpu.state.test_flags(NEGATIVE);
    branch_if(cpu, c);
}

pub(crate) fn bvc(cpu: &mut Cpu) {
    let c = !cpu.state.test_flags(OVERFLOW);
    branch_if(cpu, c);
}

pub(crate) fn bvs(cpu: &mut Cpu) {
    let c = cpu.state.test_flags(OVERFLOW);
    branch_if(cpu, c);
}

pub(crate) fn bcc(cpu: &mut Cpu) {
    let c = !cpu.state.test_flags(CARRY);
    branch_if(cpu, c);
}

pub(crate) fn bcs(cpu: &mut Cpu) {
    let c = cpu.state.test_flags(CARRY);
    branch_if(cpu, c);
}

pub(crate) fn bne(cpu: &mut Cpu) {
    let c = !cpu.state.test_flags(ZERO);
    branch_if(cpu, c);
}

pub(crate) fn beq(cpu: &mut Cpu) {
    let c = cpu.state.test_flags(ZERO);
    branch_if(cpu, c);
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{PROGRAM_START, cpu_with_program};

    #[test]
    fn branch_not_taken_base_cycles() {
        // BCS +2 with carry clear after reset
        let mut cpu = cpu_with_program(&[0xB0, 0x02, 0xEA, 0xEA]);
        assert_eq!(cpu.step(), 2);
        assert_eq!(cpu.pc(), PROGRAM_START + 2);
    }

    #[test]
    fn branch_taken_no_page_cross() {
        // BCC +2
        let mut cpu = cpu_with_program(&[0x90, 0x02, 0xEA, 0xEA, 0xEA]);
        assert_eq!(cpu.step(), 3);
        assert_eq!(cpu.pc(), PROGRAM_START + 4);
    }

    #[test]
    fn branch_taken_page_cross() {
        // NOP padding so BCC sits at $80FD; target $8100 is on the next page
        let mut prg = vec![0xEA; 0xFD];
        prg.extend_from_slice(&[0x90, 0x01, 0xEA, 0xEA]);
        let mut cpu = cpu_with_program(&prg);
        for _ in 0..0xFD {
            assert_eq!(cpu.step(), 2);
        }
        assert_eq!(cpu.pc(), 0x80FD);
        assert_eq!(cpu.step(), 4);
        assert_eq!(cpu.pc(), 0x8100);
    }

    #[test]
    fn next_instruction_on_new_page_is_not_a_cross() {
        // BCC at $80FE: PC+2 = $8100, target $8101 stays on that page
        let mut prg = vec![0xEA; 0xFE];
        prg.extend_from_slice(&[0x90, 0x01, 0xEA, 0xEA]);
        let mut cpu = cpu_with_program(&prg);
        for _ in 0..0xFE {
            cpu.step();
        }
        assert_eq!(cpu.step(), 3);
        assert_eq!(cpu.pc(), 0x8101);
    }

    #[test]
    fn beq_backwards() {
        // LDA #$00 ; BEQ -4 (back to the LDA)
        let mut cpu = cpu_with_program(&[0xA9, 0x00, 0xF0, 0xFC]);
        cpu.step();
        assert_eq!(cpu.step(), 3);
        assert_eq!(cpu.pc(), PROGRAM_START);
    }

    #[test]
    fn bne_skips_when_zero_set() {
        // LDA #$00 ; BNE +2 ; LDA #$05
        let mut cpu = cpu_with_program(&[0xA9, 0x00, 0xD0, 0x02, 0xA9, 0x05]);
        cpu.step();
        assert_eq!(cpu.step(), 2);
        cpu.step();
        assert_eq!(cpu.a(), 0x05);
    }

    #[test]
    fn sign_and_overflow_branches() {
        // LDA #$80 ; BMI +0 ; BPL +0 ; BVC +0 ; BVS +0
        let mut cpu = cpu_with_program(&[0xA9, 0x80, 0x30, 0x00, 0x10, 0x00, 0x50, 0x00, 0x70, 0x00]);
        cpu.step();
        assert_eq!(cpu.step(), 3); // BMI taken
        assert_eq!(cpu.step(), 2); // BPL not taken
        assert_eq!(cpu.step(), 3); // BVC taken
        assert_eq!(cpu.step(), 2); // BVS not taken
        assert_eq!(cpu.pc(), PROGRAM_START + 10);
    }
}
