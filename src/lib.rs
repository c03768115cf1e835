#![doc = r#"
nes6502 library crate.

An NMOS 6502 CPU core as found in the NES: the full 256-opcode table
(undocumented opcodes included), cycle counts with page-cross penalties,
latched NMI/IRQ delivery, and a bus with 2 KiB mirrored RAM plus an 8-byte
co-processor register window.

Modules:
- bus: address decoding, RAM mirroring, register window (`RegisterPort`)
- cpu: CPU core (facade + state + addressing + table + dispatch modules)
- error: error types for the fallible bus operations

In tests, shared CPU/port fixtures are available under `crate::test_utils`.
"#]

pub mod bus;
pub mod cpu;
pub mod error;

// Re-export commonly used types at the crate root for convenience.
pub use bus::Bus;
pub use bus::registers::{OpenBusPort, RegisterPort};
pub use cpu::core::Cpu;
pub use cpu::interrupts::NmiLine;
pub use error::BusError;

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;
