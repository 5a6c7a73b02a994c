// UART Sende-Register
//
// Verbindet das TX-Halbteil der ESP32 UART mit dem `TxRegister` Trait.
// Der Empfänger wird verworfen: kein RX, kein RX-Interrupt.

use esp_hal::Blocking;
use esp_hal::uart::{Config, DataBits, Parity, StopBits, Uart, UartTx};
use hall_core::{SerialError, TxRegister};

/// UART-Konfiguration für das Wire-Format: `baud_rate`, 8N1
pub fn uart_config(baud_rate: u32) -> Config {
    Config::default()
        .with_baudrate(baud_rate)
        .with_data_bits(DataBits::_8)
        .with_parity(Parity::None)
        .with_stop_bits(StopBits::_1)
}

pub struct UartTxRegister<'d> {
    tx: UartTx<'d, Blocking>,
}

impl<'d> UartTxRegister<'d> {
    /// Übernimmt eine fertig konfigurierte UART und behält nur den Sender
    pub fn new(uart: Uart<'d, Blocking>) -> Self {
        let (_rx, tx) = uart.split();
        Self { tx }
    }
}

impl TxRegister for UartTxRegister<'_> {
    fn try_write(&mut self, byte: u8) -> nb::Result<(), SerialError> {
        match self.tx.write(&[byte]) {
            // FIFO voll: nochmal versuchen
            Ok(0) => Err(nb::Error::WouldBlock),
            Ok(_) => Ok(()),
            Err(_) => Err(nb::Error::Other(SerialError::WriteFailed)),
        }
    }
}
