// Scan-Transmit Task - Hall-Sensoren scannen und per UART streamen
use defmt::info;
use esp_hal::delay::Delay;

use crate::config::{
    HEARTBEAT_PASSES, MUX_SETTLE_US, SCAN_BANK, SENSOR_ACTIVE_LEVEL, TX_PACING_DELAY_MS,
};
use crate::hal::{BoardPins, UartTxRegister};
use hall_core::{MuxScanner, ScanLoop, Transmitter};

/// Scan-Transmit Task
///
/// Baut Scanner und Transmitter aus den Hardware-Adaptern und übergibt an die
/// testbare `ScanLoop` aus hall-core. Kehrt nie zurück.
///
/// # Parameter
/// - `pins`: alle Adress- und Sense-Pins (Richtung wird hier konfiguriert)
/// - `tx`: UART-Sender, bereits mit Baudrate/8N1 initialisiert
pub fn scan_transmit_task(pins: BoardPins<'_>, tx: UartTxRegister<'_>) -> ! {
    // Delay ist Copy: Scanner und Transmitter bekommen je eine Instanz
    let delay = Delay::new();

    let scanner = MuxScanner::new(pins, delay, SENSOR_ACTIVE_LEVEL, MUX_SETTLE_US);
    let transmitter = Transmitter::new(tx, delay, TX_PACING_DELAY_MS);

    info!(
        "Scan loop starting: {}, active level {}, settle {} us, pacing {} ms",
        SCAN_BANK, SENSOR_ACTIVE_LEVEL, MUX_SETTLE_US, TX_PACING_DELAY_MS
    );

    ScanLoop::new(scanner, transmitter, SCAN_BANK)
        .with_heartbeat(HEARTBEAT_PASSES)
        .run()
}
