// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul implementiert die Traits aus hall-core
// für die ESP32-C6 Peripherie (GPIO, UART).

pub mod pins;
pub mod uart_tx;

pub use pins::BoardPins;
pub use uart_tx::{UartTxRegister, uart_config};
