/*!
Bus: the CPU's 64 KiB address space.

Address map (CPU):
- $0000-$07FF: 2 KiB internal RAM
- $0800-$1FFF: Mirrors of $0000-$07FF (mask with & 0x07FF)
- $2000-$2007: co-processor registers (forwarded to a `RegisterPort`)
- $2008-$3FFF: Mirrors of $2000-$2007 (addr % 8)
- $4000-$FFFF: flat storage, unmirrored (program image, vectors, data)

Mirroring is applied here, inside `read`/`write`; callers always pass raw CPU
addresses. Word accessors are little-endian and wrap at $FFFF, so the high
byte of a word at $FFFF comes from $0000.
*/

pub mod ram;
pub mod registers;


use log::trace;

use crate::error::BusError;
use ram::{RAM_MIRROR_END, Ram};
use registers::{
    OpenBusPort, REGISTER_WINDOW_END, REGISTER_WINDOW_START, RegisterPort, window_offset,
};

/// First address backed by flat storage.
const FLAT_START: u16 = REGISTER_WINDOW_END + 1;
/// Size of the flat storage region ($4000-$FFFF).
const FLAT_SIZE: usize = 0x1_0000 - FLAT_START as usize;

pub struct Bus {
    ram: Ram,
    port: Box<dyn RegisterPort>,
    flat: Box<[u8]>,
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Bus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bus")
            .field("ram", &self.ram)
            .field("flat_len", &self.flat.len())
            .finish_non_exhaustive()
    }
}

impl Bus {
    /// Empty bus: zeroed memory and an `OpenBusPort` behind the register window.
    pub fn new() -> Self {
        Self::with_port(Box::new(OpenBusPort))
    }

    pub fn with_port(port: Box<dyn RegisterPort>) -> Self {
        Self {
            ram: Ram::new(),
            port,
            flat: vec![0u8; FLAT_SIZE].into_boxed_slice(),
        }
    }

    /// Replace the device behind the register window, returning the old one.
    ///
    /// Prefer `Cpu::attach_port`, which also hands the device the CPU's NMI line.
    pub fn attach_port(&mut self, port: Box<dyn RegisterPort>) -> Box<dyn RegisterPort> {
        std::mem::replace(&mut self.port, port)
    }

    /// Zero internal RAM. Flat storage (the program image) is kept.
    pub fn clear_ram(&mut self) {
        self.ram.clear();
    }

    // -----------------------------
    // CPU-visible memory interface
    // -----------------------------

    pub fn read(&mut self, addr: u16) -> u8 {
        match addr {
            0x0000..=RAM_MIRROR_END => self.ram.read(addr),
            REGISTER_WINDOW_START..=REGISTER_WINDOW_END => {
                let offset = window_offset(addr);
                let value = self.port.read_register(offset);
                trace!("port read ${addr:04X} (reg {offset}) -> {value:02X}");
                value
            }
            _ => self.flat[Self::flat_index(addr)],
        }
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=RAM_MIRROR_END => self.ram.write(addr, value),
            REGISTER_WINDOW_START..=REGISTER_WINDOW_END => {
                let offset = window_offset(addr);
                trace!("port write ${addr:04X} (reg {offset}) <- {value:02X}");
                self.port.write_register(offset, value);
            }
            _ => self.flat[Self::flat_index(addr)] = value,
        }
    }

    /// Read without side effects. Register window reads go through
    /// `RegisterPort::peek_register`.
    pub fn peek(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=RAM_MIRROR_END => self.ram.read(addr),
            REGISTER_WINDOW_START..=REGISTER_WINDOW_END => {
                self.port.peek_register(window_offset(addr))
            }
            _ => self.flat[Self::flat_index(addr)],
        }
    }

    /// Little-endian word read; the high byte address wraps at $FFFF.
    pub fn read_word(&mut self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Little-endian word write; the high byte address wraps at $FFFF.
    pub fn write_word(&mut self, addr: u16, value: u16) {
        self.write(addr, (value & 0x00FF) as u8);
        self.write(addr.wrapping_add(1), (value >> 8) as u8);
    }

    /// Side-effect free word read, same wrap rule as `read_word`.
    pub fn peek_word(&self, addr: u16) -> u16 {
        let lo = self.peek(addr) as u16;
        let hi = self.peek(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    // -----------------------------
    // Program image loading
    // -----------------------------

    /// Copy `image` onto the bus starting at `base`.
    ///
    /// The image must fit below $10000 and must not touch the register window.
    /// Bytes aimed at RAM mirrors land in the shared 2 KiB store.
    pub fn load(&mut self, base: u16, image: &[u8]) -> Result<(), BusError> {
        let start = base as usize;
        let end = start + image.len();
        if end > 0x1_0000 {
            return Err(BusError::ImageOverflow {
                base,
                len: image.len(),
            });
        }
        if !image.is_empty()
            && start <= REGISTER_WINDOW_END as usize
            && end > REGISTER_WINDOW_START as usize
        {
            return Err(BusError::RegisterWindowOverlap {
                base,
                len: image.len(),
                window: REGISTER_WINDOW_START,
            });
        }
        for (i, &byte) in image.iter().enumerate() {
            self.write((start + i) as u16, byte);
        }
        log::debug!("loaded {} byte image at ${base:04X}", image.len());
        Ok(())
    }

    #[inline]
    fn flat_index(addr: u16) -> usize {
        (addr - FLAT_START) as usize
    }
}
