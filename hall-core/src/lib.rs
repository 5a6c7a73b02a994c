//! Hall Core - Platform-agnostic Scanner, Transmitter and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, Datentypen und die Scan-Transmit-Logik.

#![no_std]

mod log;

pub mod scan_loop;
pub mod scanner;
pub mod traits;
pub mod transmitter;
pub mod types;

// Re-exports für einfachen Zugriff
pub use scan_loop::ScanLoop;
pub use scanner::MuxScanner;
pub use traits::{ByteSink, DigitalIo, SerialError, TxRegister};
pub use transmitter::{DEFAULT_PACING_MS, Transmitter};
pub use types::{
    CHANNEL_COUNT, ChannelAddress, InvalidChannel, Level, LogicalPin, MuxBank, PinMode,
    SENSE_LINE_COUNT, ScanResult, SenseLine,
};
