// Library-Root: Hardware-Adapter, Konfiguration und Tasks
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von hall-core
pub use hall_core::{
    ByteSink, ChannelAddress, DigitalIo, Level, LogicalPin, MuxBank, MuxScanner, PinMode,
    ScanLoop, ScanResult, SenseLine, SerialError, Transmitter, TxRegister,
};

use defmt::info;

use crate::config::{PIN_BINDINGS, UART_BAUD_RATE, UART_TX_GPIO};

/// Loggt die statische Pin-Zuordnung und das Wire-Format beim Start
pub fn log_pin_bindings() {
    info!("UART1 TX on GPIO{}, {} baud 8N1", UART_TX_GPIO, UART_BAUD_RATE);
    for (role, gpio) in PIN_BINDINGS {
        info!("  {} -> GPIO{}", role, gpio);
    }
}
