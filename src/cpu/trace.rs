/*!
trace.rs - Side-effect free disassembly and per-instruction trace lines.

Everything here reads memory through `Bus::peek`, so producing a trace never
disturbs co-processor registers. `dispatch::step` emits `trace_line` at the
`trace` log level before each fetched instruction.

Line format
===========
```text
    8000  A9 01     LDA #$01     A:00 X:00 Y:00 P:24 SP:FD CYC:7
```

Undocumented opcodes are marked with a `*` in front of the mnemonic.
*/

use std::fmt;

use crate::bus::Bus;
use crate::cpu::addressing::AddressingMode;
use crate::cpu::core::Cpu;
use crate::cpu::table::lookup;

/// One decoded instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disassembly {
    pub pc: u16,
    /// Raw instruction bytes; only the first `len` are meaningful.
    pub bytes: [u8; 3],
    pub len: u8,
    pub mnemonic: &'static str,
    pub illegal: bool,
    /// Operand in assembler syntax (`#$10`, `($20),Y`, branch target, ...).
    pub operand: String,
}

impl Disassembly {
    pub fn opcode(&self) -> u8 {
        self.bytes[0]
    }

    /// Hex dump of the instruction bytes, e.g. `AD 34 12`.
    pub fn hex_bytes(&self) -> String {
        self.bytes[..self.len as usize]
            .iter()
            .map(|b| format!("{b:02X}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Disassembly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.illegal { '*' } else { ' ' };
        let text = if self.operand.is_empty() {
            self.mnemonic.to_string()
        } else {
            format!("{} {}", self.mnemonic, self.operand)
        };
        write!(f, "{:04X}  {:<8} {}{:<12}", self.pc, self.hex_bytes(), marker, text)
    }
}

/// Decode the instruction at `pc` without side effects.
pub fn disassemble(bus: &Bus, pc: u16) -> Disassembly {
    let entry = lookup(bus.peek(pc));
    let len = entry.bytes;
    let mut bytes = [0u8; 3];
    for (i, slot) in bytes.iter_mut().enumerate().take(len as usize) {
        *slot = bus.peek(pc.wrapping_add(i as u16));
    }
    let lo = bytes[1];
    let word = u16::from_le_bytes([bytes[1], bytes[2]]);

    let operand = match entry.mode {
        AddressingMode::Implicit => String::new(),
        AddressingMode::Accumulator => "A".to_string(),
        AddressingMode::Immediate => format!("#${lo:02X}"),
        AddressingMode::ZeroPage => format!("${lo:02X}"),
        AddressingMode::ZeroPageX => format!("${lo:02X},X"),
        AddressingMode::ZeroPageY => format!("${lo:02X},Y"),
        AddressingMode::Absolute => format!("${word:04X}"),
        AddressingMode::AbsoluteX => format!("${word:04X},X"),
        AddressingMode::AbsoluteY => format!("${word:04X},Y"),
        AddressingMode::Indirect => format!("(${word:04X})"),
        AddressingMode::IndexedIndirect => format!("(${lo:02X},X)"),
        AddressingMode::IndirectIndexed => format!("(${lo:02X}),Y"),
        AddressingMode::Relative => {
            let target = pc.wrapping_add(2).wrapping_add_signed(lo as i8 as i16);
            format!("${target:04X}")
        }
    };

    Disassembly {
        pc,
        bytes,
        len,
        mnemonic: entry.mnemonic,
        illegal: entry.illegal,
        operand,
    }
}

/// Instruction at PC followed by the register file and cycle total.
pub fn trace_line(cpu: &Cpu) -> String {
    let s = cpu.state();
    format!(
        "{} A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{}",
        disassemble(cpu.bus(), s.pc),
        s.a,
        s.x,
        s.y,
        s.status,
        s.sp,
        cpu.cycles()
    )
}
