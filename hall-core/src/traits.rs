//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use crate::types::{Level, LogicalPin, PinMode};

/// Fehler-Typ für serielle Übertragung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialError {
    WriteFailed,
}

#[cfg(feature = "defmt")]
impl defmt::Format for SerialError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            SerialError::WriteFailed => defmt::write!(fmt, "WriteFailed"),
        }
    }
}

/// Trait für digitale Ein-/Ausgänge auf logischen Pins
///
/// Alle Operationen wirken sofort (kein Puffer, kein Debounce) und sind
/// auf korrekt konfigurierten Pins unfehlbar.
///
/// # Implementierungen
/// - **Production:** BoardPins (ESP32-C6 GPIO über `Flex`)
/// - **Testing:** MockPins (aufgezeichnete Events, eingespeiste Pegel)
pub trait DigitalIo {
    /// Setzt die Richtung eines Pins
    ///
    /// Nur während der Initialisierung aufrufen, niemals aus der Scan-Schleife.
    fn configure_direction(&mut self, pin: LogicalPin, mode: PinMode);

    /// Setzt einen Ausgang sofort auf `level`
    fn write_pin(&mut self, pin: LogicalPin, level: Level);

    /// Tastet einen Eingang sofort ab
    fn read_pin(&mut self, pin: LogicalPin) -> Level;
}

/// Trait für das Sende-Register einer UART
///
/// # Fehlerbehandlung
/// - `nb::Error::WouldBlock` solange das Register/FIFO voll ist
/// - `nb::Error::Other(SerialError::WriteFailed)` wenn die Hardware einen Fehler meldet
pub trait TxRegister {
    fn try_write(&mut self, byte: u8) -> nb::Result<(), SerialError>;
}

/// Blockierende Byte-Senke für die Scan-Schleife
pub trait ByteSink {
    /// Sendet ein Byte und kehrt erst zurück, wenn die Hardware es angenommen hat
    fn send_byte(&mut self, value: u8) -> Result<(), SerialError>;
}
