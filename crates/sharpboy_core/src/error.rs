use std::fmt;

use crate::cpu::Registers;

/// Fatal CPU conditions. Once returned, the core stays locked until reset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CpuError {
    /// One of the eleven unassigned opcodes was dispatched.
    IllegalOpcode {
        addr: u16,
        opcode: u8,
        regs: Registers,
    },
}

impl fmt::Display for CpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CpuError::IllegalOpcode { addr, opcode, regs } => {
                write!(f, "illegal opcode 0x{opcode:02X} at 0x{addr:04X} ({regs})")
            }
        }
    }
}

impl std::error::Error for CpuError {}

/// Problems with a ROM image handed to [`crate::Cartridge::new`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CartridgeError {
    Empty,
    /// The image ends before the header area (0x0100..0x0150).
    TooShort { len: usize },
}

impl fmt::Display for CartridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartridgeError::Empty => write!(f, "ROM image is empty"),
            CartridgeError::TooShort { len } => write!(
                f,
                "ROM image is {len} bytes, shorter than the 0x150-byte header area"
            ),
        }
    }
}

impl std::error::Error for CartridgeError {}
