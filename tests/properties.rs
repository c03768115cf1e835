//! Property-based tests for bus and CPU invariants.
//!
//! Arithmetic is checked against small reference models; table-wide
//! properties run every opcode through a real `step`.

use nes6502::cpu::{CARRY, NEGATIVE, OPCODES, OVERFLOW, ZERO};
use nes6502::{Bus, Cpu};
use proptest::prelude::*;

/// CPU reset into `program` placed at `origin`.
fn cpu_at(origin: u16, program: &[u8]) -> Cpu {
    let mut bus = Bus::new();
    bus.load(origin, program).unwrap();
    bus.write_word(0xFFFC, origin);
    let mut cpu = Cpu::with_bus(bus);
    cpu.reset();
    cpu
}

fn run_steps(cpu: &mut Cpu, n: usize) {
    for _ in 0..n {
        cpu.step();
    }
}

/// Opcodes whose PC update is purely length-based.
fn straight_line_opcodes() -> Vec<u8> {
    OPCODES
        .iter()
        .enumerate()
        .filter(|(_, e)| {
            !matches!(
                e.mnemonic,
                "BCC" | "BCS" | "BEQ" | "BMI" | "BNE" | "BPL" | "BVC" | "BVS" | "JMP" | "JSR"
                    | "RTS" | "RTI" | "BRK" | "KIL"
            )
        })
        .map(|(i, _)| i as u8)
        .collect()
}

/// Addresses where a stored word reads back unchanged (no register window).
fn plain_word_address() -> impl Strategy<Value = u16> {
    prop_oneof![0x0000u16..0x07FF, 0x4000u16..=0xFFFF, Just(0xFFFFu16)]
}

// ========== Bus ==========

proptest! {
    #[test]
    fn prop_ram_mirrors_share_storage(addr in 0x0000u16..0x2000, value: u8) {
        let mut bus = Bus::new();
        bus.write(addr, value);
        let base = addr & 0x07FF;
        for alias in [base, base + 0x0800, base + 0x1000, base + 0x1800] {
            prop_assert_eq!(bus.read(alias), value);
        }
    }

    #[test]
    fn prop_word_round_trip(addr in plain_word_address(), value: u16) {
        let mut bus = Bus::new();
        bus.write_word(addr, value);
        prop_assert_eq!(bus.read_word(addr), value);
        prop_assert_eq!(bus.read(addr), value as u8);
        prop_assert_eq!(bus.read(addr.wrapping_add(1)), (value >> 8) as u8);
    }

    #[test]
    fn prop_stack_is_lifo(values in prop::collection::vec(any::<u8>(), 1..64), sp: u8) {
        let mut cpu = cpu_at(0x8000, &[0xEA]);
        cpu.set_sp(sp);
        for &v in &values {
            cpu.push(v);
        }
        prop_assert_eq!(cpu.sp(), sp.wrapping_sub(values.len() as u8));
        for &v in values.iter().rev() {
            prop_assert_eq!(cpu.pop(), v);
        }
        prop_assert_eq!(cpu.sp(), sp);
    }
}

// ========== Arithmetic ==========

proptest! {
    #[test]
    fn prop_adc_matches_reference(a: u8, b: u8, carry: bool) {
        let set_carry = if carry { 0x38 } else { 0x18 };
        let mut cpu = cpu_at(0x8000, &[set_carry, 0xA9, a, 0x69, b]);
        run_steps(&mut cpu, 3);

        let sum = a as u16 + b as u16 + carry as u16;
        let r = sum as u8;
        prop_assert_eq!(cpu.a(), r);
        prop_assert_eq!(cpu.get_flag(CARRY), sum > 0xFF);
        prop_assert_eq!(cpu.get_flag(OVERFLOW), (!(a ^ b) & (a ^ r) & 0x80) != 0);
        prop_assert_eq!(cpu.get_flag(ZERO), r == 0);
        prop_assert_eq!(cpu.get_flag(NEGATIVE), r & 0x80 != 0);
    }

    #[test]
    fn prop_sbc_matches_reference(a: u8, b: u8, carry: bool) {
        let set_carry = if carry { 0x38 } else { 0x18 };
        let mut cpu = cpu_at(0x8000, &[set_carry, 0xA9, a, 0xE9, b]);
        run_steps(&mut cpu, 3);

        let diff = a as i16 - b as i16 - (!carry) as i16;
        let r = diff as u8;
        prop_assert_eq!(cpu.a(), r);
        prop_assert_eq!(cpu.get_flag(CARRY), diff >= 0);
        prop_assert_eq!(cpu.get_flag(OVERFLOW), ((a ^ b) & (a ^ r) & 0x80) != 0);
        prop_assert_eq!(cpu.get_flag(ZERO), r == 0);
        prop_assert_eq!(cpu.get_flag(NEGATIVE), r & 0x80 != 0);
    }

    #[test]
    fn prop_compare_sets_carry_zero_negative(a: u8, b: u8) {
        let mut cpu = cpu_at(0x8000, &[0xA9, a, 0xC9, b]);
        run_steps(&mut cpu, 2);
        prop_assert_eq!(cpu.a(), a);
        prop_assert_eq!(cpu.get_flag(CARRY), a >= b);
        prop_assert_eq!(cpu.get_flag(ZERO), a == b);
        prop_assert_eq!(cpu.get_flag(NEGATIVE), a.wrapping_sub(b) & 0x80 != 0);
    }
}

// ========== Control flow ==========

proptest! {
    #[test]
    fn prop_taken_branch_target_and_cycles(origin in 0x8000u16..0xFF00, offset: u8) {
        // Z is clear after reset, so BNE is taken
        let mut cpu = cpu_at(origin, &[0xD0, offset]);
        let cycles = cpu.step();

        let next = origin.wrapping_add(2);
        let target = next.wrapping_add_signed(offset as i8 as i16);
        let crossed = (next & 0xFF00) != (target & 0xFF00);
        prop_assert_eq!(cpu.pc(), target);
        prop_assert_eq!(cycles, 3 + crossed as u32);
    }

    #[test]
    fn prop_untaken_branch_falls_through(origin in 0x8000u16..0xFF00, offset: u8) {
        let mut cpu = cpu_at(origin, &[0xF0, offset]);
        prop_assert_eq!(cpu.step(), 2);
        prop_assert_eq!(cpu.pc(), origin.wrapping_add(2));
    }
}

// ========== Opcode table ==========

proptest! {
    #[test]
    fn prop_pc_advances_by_instruction_length(
        opcode in prop::sample::select(straight_line_opcodes()),
        lo: u8,
        hi: u8,
        x: u8,
        y: u8,
    ) {
        let mut cpu = cpu_at(0x8000, &[opcode, lo, hi]);
        cpu.set_x(x);
        cpu.set_y(y);
        let entry = &OPCODES[opcode as usize];

        let cycles = cpu.step();
        prop_assert_eq!(cpu.pc(), 0x8000 + entry.bytes as u16, "opcode {:02X}", opcode);
        prop_assert!(cycles >= entry.cycles as u32);
        prop_assert!(cycles <= entry.cycles as u32 + entry.page_cross_penalty as u32);
        prop_assert!(!cpu.is_jammed());
    }
}

#[test]
fn table_covers_every_opcode() {
    assert_eq!(OPCODES.len(), 256);
    for (opcode, entry) in OPCODES.iter().enumerate() {
        assert_eq!(
            entry.bytes,
            entry.mode.instruction_len(),
            "opcode {opcode:02X}"
        );
    }
}
