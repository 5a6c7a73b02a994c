//! Multiplexer-Scanner
//!
//! Steuert die drei Adressleitungen durch alle 8 Kanal-Codes und tastet
//! pro Kanal die Sense-Leitung ab. Ergebnis: ein [`ScanResult`] pro Aufruf.

use embedded_hal::delay::DelayNs;

use crate::traits::DigitalIo;
use crate::types::{ChannelAddress, Level, LogicalPin, MuxBank, PinMode, ScanResult, SenseLine};

/// Scanner für einen 8-Kanal-Multiplexer mit Adressleitungen A/B/C
///
/// # Trait-basierte Abstraktion
/// - `P: DigitalIo`: echte GPIOs (BoardPins) oder MockPins
/// - `D: DelayNs`: Settle-Zeit nach dem Umschalten der Adresse
pub struct MuxScanner<P: DigitalIo, D: DelayNs> {
    io: P,
    delay: D,
    active_level: Level,
    settle_us: u32,
}

impl<P: DigitalIo, D: DelayNs> MuxScanner<P, D> {
    /// Erstellt den Scanner und konfiguriert alle Pin-Richtungen
    ///
    /// Adressleitungen werden Ausgänge (Low), alle Sense-Leitungen Eingänge.
    /// Danach wird die Richtung nie wieder angefasst.
    ///
    /// # Parameter
    /// - `active_level`: Pegel, den ein ausgelöster Sensor treibt (Verdrahtung)
    /// - `settle_us`: Wartezeit zwischen Adresse setzen und Abtasten, 0 = keine
    pub fn new(mut io: P, delay: D, active_level: Level, settle_us: u32) -> Self {
        for pin in LogicalPin::ADDRESS_LINES {
            io.configure_direction(pin, PinMode::Output);
            io.write_pin(pin, Level::Low);
        }
        for line in SenseLine::ALL {
            io.configure_direction(LogicalPin::Sense(line), PinMode::Input);
        }

        Self {
            io,
            delay,
            active_level,
            settle_us,
        }
    }

    /// Ein kompletter Scan-Durchlauf über alle 8 Kanäle
    ///
    /// Kanal *i* landet in Bit *i*. Die Kanäle werden aufsteigend abgefragt.
    pub fn scan(&mut self, bank: MuxBank) -> ScanResult {
        let sense = LogicalPin::Sense(bank.sense_line());
        let mut result = ScanResult::NONE;

        for channel in ChannelAddress::ALL {
            self.select(channel);

            if self.settle_us > 0 {
                self.delay.delay_us(self.settle_us);
            }

            if self.io.read_pin(sense) == self.active_level {
                result = result.with_active(channel);
            }
        }

        result
    }

    /// Legt die Kanal-Adresse an (C, B, A in dieser Reihenfolge)
    fn select(&mut self, channel: ChannelAddress) {
        for (pin, level) in LogicalPin::ADDRESS_LINES
            .into_iter()
            .zip(channel.select_levels())
        {
            self.io.write_pin(pin, level);
        }
    }

    pub fn io(&self) -> &P {
        &self.io
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimaler Pin-Mock ohne Heap: liefert feste Pegel pro Kanal
    struct FixedPins {
        /// Aktuell angelegte Adresse (aus den Schreibzugriffen rekonstruiert)
        address: u8,
        /// Pegel der Sense-Leitung pro Kanal
        levels: [Level; 8],
        configure_calls: usize,
    }

    impl FixedPins {
        fn new(levels: [Level; 8]) -> Self {
            Self {
                address: 0,
                levels,
                configure_calls: 0,
            }
        }
    }

    impl DigitalIo for FixedPins {
        fn configure_direction(&mut self, _pin: LogicalPin, _mode: PinMode) {
            self.configure_calls += 1;
        }

        fn write_pin(&mut self, pin: LogicalPin, level: Level) {
            let bit = match pin {
                LogicalPin::AddressA => 0,
                LogicalPin::AddressB => 1,
                LogicalPin::AddressC => 2,
                LogicalPin::Sense(_) => panic!("write to sense line"),
            };
            match level {
                Level::High => self.address |= 1 << bit,
                Level::Low => self.address &= !(1 << bit),
            }
        }

        fn read_pin(&mut self, _pin: LogicalPin) -> Level {
            self.levels[self.address as usize]
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    const A: Level = Level::Low; // aktiv (active-low Verdrahtung)
    const I: Level = Level::High;

    #[test]
    fn test_scan_example_pattern() {
        let pins = FixedPins::new([A, I, I, A, I, I, I, I]);
        let mut scanner = MuxScanner::new(pins, NoDelay, Level::Low, 0);
        assert_eq!(scanner.scan(MuxBank::Bank0).bits(), 0x09);
    }

    #[test]
    fn test_scan_all_inactive_and_all_active() {
        let mut idle = MuxScanner::new(FixedPins::new([I; 8]), NoDelay, Level::Low, 0);
        assert_eq!(idle.scan(MuxBank::Bank0).bits(), 0x00);

        let mut busy = MuxScanner::new(FixedPins::new([A; 8]), NoDelay, Level::Low, 0);
        assert_eq!(busy.scan(MuxBank::Bank0).bits(), 0xFF);
    }

    #[test]
    fn test_scan_active_high_polarity() {
        let pins = FixedPins::new([I, I, I, I, I, I, I, A]);
        let mut scanner = MuxScanner::new(pins, NoDelay, Level::High, 0);
        // Bei active-high sind die High-Pegel die aktiven Kanäle
        assert_eq!(scanner.scan(MuxBank::Bank0).bits(), 0x7F);
    }

    #[test]
    fn test_new_configures_every_pin_once() {
        let scanner = MuxScanner::new(FixedPins::new([I; 8]), NoDelay, Level::Low, 0);
        assert_eq!(scanner.io().configure_calls, 3 + SenseLine::ALL.len());
    }
}
