// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_hal bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

use defmt::info;

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::Flex;
use esp_hal::uart::Uart;

// Backtrace bei Panic und defmt-Transport
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use hall_sensor_uart::config::UART_BAUD_RATE;
use hall_sensor_uart::hal::{BoardPins, UartTxRegister, uart_config};
use hall_sensor_uart::log_pin_bindings;
use hall_sensor_uart::tasks::scan_transmit_task;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Takt, UART und Pins, danach läuft die Scan-Schleife
/// bis zum Reset.
#[esp_hal::main]
fn main() -> ! {
    // CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    info!("Hall sensor UART starting");

    // UART1 initialisieren: Baudrate + 8N1, nur TX
    // Der Treiber schaltet dabei auch den Peripherie-Takt ein
    let uart = Uart::new(peripherals.UART1, uart_config(UART_BAUD_RATE))
        .expect("Failed to configure UART1")
        .with_tx(peripherals.GPIO5);
    let tx = UartTxRegister::new(uart);

    // Pins gemäß config::PIN_BINDINGS, Änderungen dort mitziehen
    // Richtung wird erst in MuxScanner::new() gesetzt
    let pins = BoardPins::new(
        [
            Flex::new(peripherals.GPIO2), // A
            Flex::new(peripherals.GPIO3), // B
            Flex::new(peripherals.GPIO4), // C
        ],
        [
            Flex::new(peripherals.GPIO6),  // Mux0
            Flex::new(peripherals.GPIO7),  // Mux2
            Flex::new(peripherals.GPIO18), // Mux3
            Flex::new(peripherals.GPIO19), // Mux4
            Flex::new(peripherals.GPIO20), // Mux5
            Flex::new(peripherals.GPIO21), // Mux6
            Flex::new(peripherals.GPIO22), // Mux7
        ],
    );

    log_pin_bindings();

    scan_transmit_task(pins, tx)
}
