//! Scan-Transmit-Schleife
//!
//! Ein einziger Zustand ("scanning"), kein Endzustand: scannen, Ergebnis
//! senden, sofort wiederholen.

use embedded_hal::delay::DelayNs;

use crate::log::{debug, error};
use crate::scanner::MuxScanner;
use crate::traits::{ByteSink, DigitalIo};
use crate::types::{MuxBank, ScanResult};

pub struct ScanLoop<P: DigitalIo, D: DelayNs, S: ByteSink> {
    scanner: MuxScanner<P, D>,
    sink: S,
    bank: MuxBank,
    passes: u32,
    /// Heartbeat-Log alle N Durchläufe, 0 = aus
    heartbeat_passes: u32,
}

impl<P: DigitalIo, D: DelayNs, S: ByteSink> ScanLoop<P, D, S> {
    pub fn new(scanner: MuxScanner<P, D>, sink: S, bank: MuxBank) -> Self {
        Self {
            scanner,
            sink,
            bank,
            passes: 0,
            heartbeat_passes: 0,
        }
    }

    pub fn with_heartbeat(mut self, every_passes: u32) -> Self {
        self.heartbeat_passes = every_passes;
        self
    }

    /// Ein Durchlauf: scannen, dann genau ein `send_byte` mit dem Ergebnis
    ///
    /// Sendefehler werden geloggt, die Schleife läuft weiter.
    pub fn step(&mut self) -> ScanResult {
        let result = self.scanner.scan(self.bank);

        if let Err(e) = self.sink.send_byte(result.bits()) {
            error!("Failed to transmit scan result: {}", e);
        }

        self.passes = self.passes.wrapping_add(1);
        if self.heartbeat_passes > 0 && self.passes % self.heartbeat_passes == 0 {
            debug!("Scan pass {}: {}", self.passes, result);
        }

        result
    }

    /// Läuft bis Reset oder Power-Off
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Anzahl abgeschlossener Durchläufe (läuft über)
    pub fn passes(&self) -> u32 {
        self.passes
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
