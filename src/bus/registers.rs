#![doc = r#"
Co-processor register window

Purpose
- Route CPU-visible accesses in 0x2000-0x3FFF to an externally owned device
  (the picture processor on the console) through the `RegisterPort` trait.
- Apply the 8-byte window mirroring before the device sees the access, so a
  port only ever observes offsets 0..=7.

Notes
- Mirroring: 0x2008-0x3FFF repeat 0x2000-0x2007 (offset = addr % 8).
- The device signals "deliver an NMI" through the `NmiLine` handed to it by
  `connect_nmi`; the CPU polls that line at the top of each step.
"#]

use crate::cpu::interrupts::NmiLine;

/// First address of the register window.
pub const REGISTER_WINDOW_START: u16 = 0x2000;
/// Last address of the register window (inclusive, including mirrors).
pub const REGISTER_WINDOW_END: u16 = 0x3FFF;
/// Number of distinct registers behind the window.
pub const REGISTER_COUNT: u16 = 8;

/// Byte-level contract of the device mapped into the register window.
///
/// Reads take `&mut self` because reading a device register commonly has side
/// effects (status latches clearing, buffered data advancing).
pub trait RegisterPort {
    /// Read register `offset` (0..=7).
    fn read_register(&mut self, offset: u8) -> u8;

    /// Write `value` to register `offset` (0..=7).
    fn write_register(&mut self, offset: u8, value: u8);

    /// Side-effect free view of a register, used by tracing and debuggers.
    fn peek_register(&self, _offset: u8) -> u8 {
        0
    }

    /// Receive the CPU's NMI line. Devices that raise NMIs keep the handle and
    /// call `NmiLine::raise` when they want the CPU interrupted.
    fn connect_nmi(&mut self, _line: NmiLine) {}
}

/// Port used when nothing is attached: reads float to 0, writes are dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct OpenBusPort;

impl RegisterPort for OpenBusPort {
    #[inline]
    fn read_register(&mut self, _offset: u8) -> u8 {
        0
    }

    #[inline]
    fn write_register(&mut self, _offset: u8, _value: u8) {}
}

/// Map a CPU address inside the window to its register offset (addr % 8).
#[inline]
pub fn window_offset(addr: u16) -> u8 {
    (addr % REGISTER_COUNT) as u8
}
