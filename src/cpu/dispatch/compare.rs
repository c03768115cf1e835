/*!
compare.rs - CMP / CPX / CPY

Flags come from `register - operand`: CARRY when no borrow (register >=
operand), ZERO/NEGATIVE from the 8-bit difference. The register is left
untouched.
*/

use crate::cpu::core::Cpu;
use crate::cpu::execute::compare;

pub(crate) fn cmp(cpu: &mut Cpu) {
    let v = cpu.read_operand();
    let a = cpu.state.a;
    compare(&mut cpu.state, a, v);
}

pub(crate) fn cpx(cpu: &mut Cpu) {
    let v = cpu.read_operand();
    let x = cpu.state.x;
    compare(&mut cpu.state, x, v);
}

pub(crate) fn cpy(cpu: &mut Cpu) {
    let v = cpu.read_operand();
    let y = cpu.state.y;
    compare(&mut cpu.state, y, v);
}

#[cfg(test)]
mod tests {
    use crate::cpu::state::{CARRY, NEGATIVE, ZERO};
    use crate::test_utils::cpu_with_program;

    #[test]
    fn cmp_equal_sets_zero_and_carry() {
        // LDA #$00 ; CMP #$00
        let mut cpu = cpu_with_program(&[0xA9, 0x00, 0xC9, 0x00]);
        cpu.step();
        cpu.step();
        assert!(cpu.get_flag(ZERO));
        assert!(cpu.get_flag(CARRY));
        assert_eq!(cpu.a(), 0x00);
    }

    #[test]
    fn cmp_less_than_borrows() {
        // LDA #$10 ; CMP $40
        let mut cpu = cpu_with_program(&[0xA9, 0x10, 0xC5, 0x40]);
        cpu.bus_mut().write(0x0040, 0x20);
        cpu.step();
        assert_eq!(cpu.step(), 3);
        assert!(!cpu.get_flag(CARRY));
        assert!(!cpu.get_flag(ZERO));
        assert!(cpu.get_flag(NEGATIVE));
        assert_eq!(cpu.a(), 0x10);
    }

    #[test]
    fn cpx_cpy_compare_their_register() {
        // LDX #$05 ; CPX #$03 ; LDY #$02 ; CPY #$02
        let mut cpu = cpu_with_program(&[0xA2, 0x05, 0xE0, 0x03, 0xA0, 0x02, 0xC0, 0x02]);
        cpu.step();
        cpu.step();
        assert!(cpu.get_flag(CARRY));
        assert!(!cpu.get_flag(ZERO));
        assert_eq!(cpu.x(), 0x05);
        cpu.step();
        cpu.step();
        assert!(cpu.get_flag(CARRY));
        assert!(cpu.get_flag(ZERO));
        assert_eq!(cpu.y(), 0x02);
    }

    #[test]
    fn cmp_abs_y_page_cross() {
        // LDY #$01 ; CMP $04FF,Y
        let mut cpu = cpu_with_program(&[0xA0, 0x01, 0xD9, 0xFF, 0x04]);
        cpu.step();
        assert_eq!(cpu.step(), 5);
    }
}
