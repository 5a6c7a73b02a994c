//! Serieller Transmitter
//!
//! Blockierendes Senden einzelner Bytes: feste Pause, dann Busy-Wait bis das
//! Sende-Register frei ist.

use embedded_hal::delay::DelayNs;

use crate::traits::{ByteSink, SerialError, TxRegister};

/// Standard-Pause vor jedem Sendeversuch in Millisekunden
///
/// Gibt langsamen Empfängern Luft. 0 schaltet die Pause ab.
pub const DEFAULT_PACING_MS: u32 = 1;

pub struct Transmitter<R: TxRegister, D: DelayNs> {
    register: R,
    delay: D,
    pacing_ms: u32,
}

impl<R: TxRegister, D: DelayNs> Transmitter<R, D> {
    pub fn new(register: R, delay: D, pacing_ms: u32) -> Self {
        Self {
            register,
            delay,
            pacing_ms,
        }
    }

    pub fn register(&self) -> &R {
        &self.register
    }

    pub fn free(self) -> (R, D) {
        (self.register, self.delay)
    }
}

impl<R: TxRegister, D: DelayNs> ByteSink for Transmitter<R, D> {
    /// Kein Timeout: meldet die Hardware nie "frei", blockiert der Aufruf für immer.
    fn send_byte(&mut self, value: u8) -> Result<(), SerialError> {
        if self.pacing_ms > 0 {
            self.delay.delay_ms(self.pacing_ms);
        }
        nb::block!(self.register.try_write(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BusyRegister {
        busy_polls: u32,
        polls: u32,
        last: Option<u8>,
    }

    impl TxRegister for BusyRegister {
        fn try_write(&mut self, byte: u8) -> nb::Result<(), SerialError> {
            self.polls += 1;
            if self.polls <= self.busy_polls {
                return Err(nb::Error::WouldBlock);
            }
            self.last = Some(byte);
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingDelay {
        total_ns: u64,
    }

    impl DelayNs for CountingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += u64::from(ns);
        }
    }

    #[test]
    fn test_send_byte_waits_until_register_free() {
        let register = BusyRegister {
            busy_polls: 5,
            polls: 0,
            last: None,
        };
        let mut tx = Transmitter::new(register, CountingDelay::default(), DEFAULT_PACING_MS);

        tx.send_byte(0x09).unwrap();

        assert_eq!(tx.register().polls, 6);
        assert_eq!(tx.register().last, Some(0x09));
    }

    #[test]
    fn test_send_byte_pacing_delay() {
        let register = BusyRegister {
            busy_polls: 0,
            polls: 0,
            last: None,
        };
        let mut tx = Transmitter::new(register, CountingDelay::default(), 1);

        tx.send_byte(0xAA).unwrap();
        tx.send_byte(0x55).unwrap();

        let (_, delay) = tx.free();
        assert!(delay.total_ns >= 2_000_000);
    }

    #[test]
    fn test_send_byte_without_pacing() {
        let register = BusyRegister {
            busy_polls: 0,
            polls: 0,
            last: None,
        };
        let mut tx = Transmitter::new(register, CountingDelay::default(), 0);

        tx.send_byte(0x01).unwrap();

        let (_, delay) = tx.free();
        assert_eq!(delay.total_ns, 0);
    }
}
