//! Shared test utilities for CPU and bus tests.
//!
//! `cpu_with_program` builds a ready-to-step CPU around a short program:
//! - the program sits at `PROGRAM_START` ($8000) and the reset vector points there
//! - NMI and IRQ/BRK vectors point at `NMI_HANDLER` / `IRQ_HANDLER`, each
//!   holding a NOP so handlers can be stepped into (tests may overwrite them)
//! - the CPU has been reset, so `cycles()` starts at 7
//!
//! `RecordingPort` stands in for the co-processor behind the register window.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::bus::registers::RegisterPort;
use crate::cpu::core::Cpu;
use crate::cpu::interrupts::{IRQ_VECTOR, NMI_VECTOR, NmiLine, RESET_VECTOR};

pub const PROGRAM_START: u16 = 0x8000;
pub const NMI_HANDLER: u16 = 0x9000;
pub const IRQ_HANDLER: u16 = 0xA000;

const NOP: u8 = 0xEA;

/// Reset CPU with `program` loaded at `PROGRAM_START`.
pub fn cpu_with_program(program: &[u8]) -> Cpu {
    let mut cpu = Cpu::new();
    let bus = cpu.bus_mut();
    bus.load(PROGRAM_START, program)
        .expect("test program fits in flat storage");
    bus.write(NMI_HANDLER, NOP);
    bus.write(IRQ_HANDLER, NOP);
    bus.write_word(RESET_VECTOR, PROGRAM_START);
    bus.write_word(NMI_VECTOR, NMI_HANDLER);
    bus.write_word(IRQ_VECTOR, IRQ_HANDLER);
    cpu.reset();
    cpu
}

/// One access observed by a `RecordingPort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortAccess {
    Read(u8),
    Write(u8, u8),
}

/// Register port that logs every access and echoes written values back.
///
/// Writing a value with bit 7 set to register 0 raises NMI on the connected
/// line, which is enough to drive the CPU from "device" side in tests.
#[derive(Debug)]
pub struct RecordingPort {
    regs: [u8; 8],
    log: Rc<RefCell<Vec<PortAccess>>>,
    nmi: Option<NmiLine>,
}

impl RecordingPort {
    pub fn new() -> (Self, Rc<RefCell<Vec<PortAccess>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let port = Self {
            regs: [0; 8],
            log: Rc::clone(&log),
            nmi: None,
        };
        (port, log)
    }
}

impl RegisterPort for RecordingPort {
    fn read_register(&mut self, offset: u8) -> u8 {
        self.log.borrow_mut().push(PortAccess::Read(offset));
        self.regs[offset as usize]
    }

    fn write_register(&mut self, offset: u8, value: u8) {
        self.log.borrow_mut().push(PortAccess::Write(offset, value));
        self.regs[offset as usize] = value;
        if offset == 0 && value & 0x80 != 0 {
            if let Some(line) = &self.nmi {
                line.raise();
            }
        }
    }

    fn peek_register(&self, offset: u8) -> u8 {
        self.regs[offset as usize]
    }

    fn connect_nmi(&mut self, line: NmiLine) {
        self.nmi = Some(line);
    }
}
