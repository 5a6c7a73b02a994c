// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Alle Parameter sind Compile-Zeit-Konstanten. Es gibt keine Laufzeit-Konfiguration.

use hall_core::{Level, LogicalPin, MuxBank, SENSE_LINE_COUNT, SenseLine};

// ============================================================================
// Pin-Zuordnung (Pin Binding)
// ============================================================================
//
// Muss zu den Peripherals passen, die main() an BoardPins::new() übergibt.

/// GPIO für Multiplexer-Adressleitung A (Bit 0)
pub const ADDRESS_A_GPIO: u8 = 2;

/// GPIO für Multiplexer-Adressleitung B (Bit 1)
pub const ADDRESS_B_GPIO: u8 = 3;

/// GPIO für Multiplexer-Adressleitung C (Bit 2)
pub const ADDRESS_C_GPIO: u8 = 4;

/// GPIOs der Sense-Leitungen, Reihenfolge wie `SenseLine::ALL`
/// (Mux0, Mux2, Mux3, Mux4, Mux5, Mux6, Mux7)
pub const SENSE_GPIOS: [u8; SENSE_LINE_COUNT] = [6, 7, 18, 19, 20, 21, 22];

/// UART TX Pin
pub const UART_TX_GPIO: u8 = 5;

/// Komplette Tabelle: logische Rolle → GPIO-Nummer
pub const PIN_BINDINGS: [(LogicalPin, u8); 10] = [
    (LogicalPin::AddressA, ADDRESS_A_GPIO),
    (LogicalPin::AddressB, ADDRESS_B_GPIO),
    (LogicalPin::AddressC, ADDRESS_C_GPIO),
    (LogicalPin::Sense(SenseLine::Mux0), SENSE_GPIOS[0]),
    (LogicalPin::Sense(SenseLine::Mux2), SENSE_GPIOS[1]),
    (LogicalPin::Sense(SenseLine::Mux3), SENSE_GPIOS[2]),
    (LogicalPin::Sense(SenseLine::Mux4), SENSE_GPIOS[3]),
    (LogicalPin::Sense(SenseLine::Mux5), SENSE_GPIOS[4]),
    (LogicalPin::Sense(SenseLine::Mux6), SENSE_GPIOS[5]),
    (LogicalPin::Sense(SenseLine::Mux7), SENSE_GPIOS[6]),
];

// ============================================================================
// Sensor / Multiplexer Konfiguration
// ============================================================================

/// Pegel, den ein ausgelöster Hall-Sensor auf die Sense-Leitung treibt
/// Referenz-Verdrahtung: Open-Collector-Sensoren ziehen die Leitung auf Low
pub const SENSOR_ACTIVE_LEVEL: Level = Level::Low;

/// Bank, die in der Scan-Schleife abgetastet wird
pub const SCAN_BANK: MuxBank = MuxBank::Bank0;

/// Settle-Zeit nach dem Umschalten der Adresse in Mikrosekunden
/// 4051-Multiplexer brauchen bei 3.3 V einige 100 ns, die CPU ist schneller
pub const MUX_SETTLE_US: u32 = 1;

// ============================================================================
// UART Konfiguration
// ============================================================================

/// Baudrate (8N1)
pub const UART_BAUD_RATE: u32 = 9600;

/// Pause vor jedem gesendeten Byte in Millisekunden (0 = aus)
pub const TX_PACING_DELAY_MS: u32 = hall_core::DEFAULT_PACING_MS;

// ============================================================================
// Logging
// ============================================================================

/// Heartbeat-Log alle N Scan-Durchläufe (0 = aus)
/// Bei ~1 ms pro Byte ergibt 1000 etwa eine Zeile pro Sekunde
pub const HEARTBEAT_PASSES: u32 = 1000;
