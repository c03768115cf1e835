/*!
cpu::mod - Public façade for the 6502 CPU core.

Layout:

```text
    state.rs        - Registers, status flags, flag and stack primitives.
    addressing.rs   - Addressing mode enum and operand resolution.
    execute.rs      - ALU / shift / compare helpers over `CpuState`.
    table.rs        - The 256-entry opcode table (metadata + handler).
    dispatch/       - `step` orchestration and the instruction handler families.
    interrupts.rs   - NMI/IRQ latches, vectors, interrupt entry.
    core/           - `Cpu`: owns state, bus and cycle count.
    trace.rs        - Side-effect free disassembly and trace lines.
```

Usage:
```rust
use nes6502::{Bus, Cpu};

let mut bus = Bus::new();
bus.load(0x8000, &[0xA9, 0x01, 0xEA]).unwrap();
bus.write_word(0xFFFC, 0x8000);

let mut cpu = Cpu::with_bus(bus);
cpu.reset();
cpu.step();
assert_eq!(cpu.a(), 0x01);
```
*/

pub mod addressing;
pub mod core;
pub(crate) mod dispatch;
pub(crate) mod execute;
pub mod interrupts;
pub mod state;
pub mod table;
pub mod trace;

// Re-exports:
// - Cpu (facade over CpuState)
// - CpuState (raw state; exposed for tests, snapshots, trait impls)
// - Flag constants (canonical bit masks)
pub use crate::cpu::addressing::AddressingMode;
pub use crate::cpu::core::Cpu;
pub use crate::cpu::interrupts::NmiLine;
pub use crate::cpu::state::{
    BREAK, CARRY, CpuState, DECIMAL, IRQ_DISABLE, NEGATIVE, OVERFLOW, UNUSED, ZERO,
};
pub use crate::cpu::table::{Instruction, OPCODES, lookup};
