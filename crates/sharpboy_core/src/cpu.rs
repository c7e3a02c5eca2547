mod alu;
mod bus;
mod cb;
mod decode;
mod exec;
mod helpers;
mod init;
mod interrupts;
mod regs;
mod step;

pub use bus::Bus;
pub use decode::{cb_instruction_length, instruction_length, INSTRUCTION_LENGTHS};
pub use interrupts::{request_interrupt, Interrupt, IE_REGISTER, IF_REGISTER};
pub use regs::{Flag, Registers};
pub use step::CycleState;

use crate::config::IllegalOpcodePolicy;
use crate::error::CpuError;

/// Low-power condition that parks the state machine in `CycleState::Stop`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LowPower {
    /// Entered by HALT; left as soon as any enabled interrupt is pending.
    Halt,
    /// Entered by STOP; left when a joypad interrupt is requested.
    Stop,
}

/// Sharp LR35902 CPU core.
///
/// The core is driven one instruction at a time through [`Cpu::cycle`],
/// which walks the CheckInterrupts -> Fetch -> Decode -> Execute state
/// machine against any [`Bus`] implementation.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    /// Interrupt master enable.
    pub ime: bool,
    state: CycleState,
    low_power: Option<LowPower>,
    halt_bug: bool,
    ime_enable_pending: bool,
    ime_enable_delay: bool,
    /// Instruction register: the opcode being decoded/executed. For
    /// CB-prefixed instructions this holds the byte following 0xCB.
    ir: u8,
    /// Operand bytes fetched during decode, low byte first.
    mbr: [u8; 2],
    /// Set when 0xCB was fetched; routes execution through the CB table.
    prefix_cb: bool,
    /// Address of the first byte of the current instruction.
    instr_addr: u16,
    illegal_opcode_policy: IllegalOpcodePolicy,
    /// Latched fatal error. Once set the core refuses to run.
    fault: Option<CpuError>,
    last_cycles: u32,
    total_cycles: u64,
}

impl Cpu {
    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        (self.regs.f & flag.mask()) != 0
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        if value {
            self.regs.f |= flag.mask();
        } else {
            self.regs.f &= !flag.mask();
        }
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.f = 0;
    }

    /// Current state of the instruction-cycle state machine.
    pub fn state(&self) -> CycleState {
        self.state
    }

    pub fn low_power(&self) -> Option<LowPower> {
        self.low_power
    }

    pub fn is_halted(&self) -> bool {
        self.low_power == Some(LowPower::Halt)
    }

    pub fn is_stopped(&self) -> bool {
        self.low_power == Some(LowPower::Stop)
    }

    /// The fatal error that locked the core, if any.
    pub fn fault(&self) -> Option<&CpuError> {
        self.fault.as_ref()
    }

    /// Address of the instruction most recently fetched.
    pub fn instruction_address(&self) -> u16 {
        self.instr_addr
    }

    /// T-cycles consumed by the last `cycle()` call.
    pub fn last_cycles(&self) -> u32 {
        self.last_cycles
    }

    /// T-cycles consumed since power-on.
    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }
}
