// Digital I/O über ESP32-C6 GPIOs
//
// Jede logische Pin-Rolle bekommt einen eigenen `Flex`-Pin, damit die
// Richtung über `DigitalIo::configure_direction` gesetzt werden kann.

use esp_hal::gpio::{Flex, InputConfig, Level as HalLevel, OutputConfig, Pull};
use hall_core::{DigitalIo, Level, LogicalPin, PinMode, SENSE_LINE_COUNT};

/// Alle Pins des Scanners
///
/// Reihenfolge der Sense-Pins wie `SenseLine::ALL`, die GPIO-Nummern stehen
/// in `config::PIN_BINDINGS`.
pub struct BoardPins<'d> {
    address_a: Flex<'d>,
    address_b: Flex<'d>,
    address_c: Flex<'d>,
    sense: [Flex<'d>; SENSE_LINE_COUNT],
}

impl<'d> BoardPins<'d> {
    /// # Parameter
    /// - `address`: Adressleitungen in der Reihenfolge A, B, C
    /// - `sense`: Sense-Leitungen Mux0, Mux2 … Mux7
    pub fn new(address: [Flex<'d>; 3], sense: [Flex<'d>; SENSE_LINE_COUNT]) -> Self {
        let [address_a, address_b, address_c] = address;
        Self {
            address_a,
            address_b,
            address_c,
            sense,
        }
    }

    fn flex(&mut self, pin: LogicalPin) -> &mut Flex<'d> {
        match pin {
            LogicalPin::AddressA => &mut self.address_a,
            LogicalPin::AddressB => &mut self.address_b,
            LogicalPin::AddressC => &mut self.address_c,
            LogicalPin::Sense(line) => &mut self.sense[line.index()],
        }
    }
}

impl DigitalIo for BoardPins<'_> {
    fn configure_direction(&mut self, pin: LogicalPin, mode: PinMode) {
        let flex = self.flex(pin);
        match mode {
            PinMode::Output => {
                flex.set_input_enable(false);
                flex.apply_output_config(&OutputConfig::default());
                flex.set_output_enable(true);
            }
            PinMode::Input => {
                // Hall-Sensoren sind Open-Collector → Pull-Up nötig
                flex.set_output_enable(false);
                flex.apply_input_config(&InputConfig::default().with_pull(Pull::Up));
                flex.set_input_enable(true);
            }
        }
    }

    fn write_pin(&mut self, pin: LogicalPin, level: Level) {
        let level = match level {
            Level::High => HalLevel::High,
            Level::Low => HalLevel::Low,
        };
        self.flex(pin).set_level(level);
    }

    fn read_pin(&mut self, pin: LogicalPin) -> Level {
        match self.flex(pin).level() {
            HalLevel::High => Level::High,
            HalLevel::Low => Level::Low,
        }
    }
}
