#![allow(clippy::uninlined_format_args)]

//! Error related data structures to be shared and used.
//!
//! This module contains the [`Error`] enum, which is used to represent
//! errors that can occur within Boytacean domain.

use std::fmt::{self, Display, Formatter};

/// Top level enum for error handling within Boytacean.
///
/// Most of the time, you will want to use the `CustomError` variant
/// to provide a more detailed error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidData,
    RomSize,
    IncompatibleBootRom,
    InvalidParameter(String),
    CustomError(String),

    /// The attached cartridge data was structurally rejected, either
    /// because its ROM/RAM size fields are inconsistent with the data
    /// length or because its MBC type is not supported.
    CartridgeRejected(String),

    /// The CPU fetched a documented-invalid opcode and has latched into
    /// a lockup state, mirroring the real hardware's behaviour of
    /// freezing the instruction pipeline rather than executing garbage.
    CpuLockup { pc: u16, opcode: u8 },

    /// A pedantic-mode runtime assertion about internal consistency
    /// failed, signalling a state invariant violation rather than a
    /// user-facing input error.
    IntegrityViolation(String),
}

impl Error {
    pub fn description(&self) -> String {
        match self {
            Error::InvalidData => String::from("Invalid data format"),
            Error::RomSize => String::from("Invalid ROM size"),
            Error::IncompatibleBootRom => String::from("Incompatible Boot ROM"),
            Error::InvalidParameter(message) => format!("Invalid parameter: {}", message),
            Error::CustomError(message) => String::from(message),
            Error::CartridgeRejected(message) => format!("Cartridge rejected: {}", message),
            Error::CpuLockup { pc, opcode } => format!(
                "CPU lockup at 0x{:04x} on opcode 0x{:02x}",
                pc, opcode
            ),
            Error::IntegrityViolation(message) => format!("Integrity violation: {}", message),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
