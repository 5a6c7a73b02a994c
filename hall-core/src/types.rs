//! Core Types für den Hall-Sensor-Scanner
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Anzahl der Multiplexer-Kanäle (3 Adressleitungen → 8 Kanäle)
pub const CHANNEL_COUNT: usize = 8;

/// Anzahl der physischen Sense-Leitungen
pub const SENSE_LINE_COUNT: usize = 7;

/// Elektrischer Pegel eines Pins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    High,
    Low,
}

impl Level {
    /// Pegel aus einem einzelnen Bit (1 → High, 0 → Low)
    pub const fn from_bit(bit: bool) -> Self {
        if bit { Level::High } else { Level::Low }
    }
}

/// Richtung eines Pins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    Input,
    Output,
}

/// Sensor-Eingangsleitungen der Referenz-Verdrahtung
///
/// Es gibt keine eigene `Mux1`-Leitung: Bank 0 und Bank 1 teilen sich `Mux0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SenseLine {
    Mux0,
    Mux2,
    Mux3,
    Mux4,
    Mux5,
    Mux6,
    Mux7,
}

impl SenseLine {
    /// Alle physischen Sense-Leitungen (Reihenfolge = Index in [`SenseLine::index`])
    pub const ALL: [SenseLine; SENSE_LINE_COUNT] = [
        SenseLine::Mux0,
        SenseLine::Mux2,
        SenseLine::Mux3,
        SenseLine::Mux4,
        SenseLine::Mux5,
        SenseLine::Mux6,
        SenseLine::Mux7,
    ];

    /// Position der Leitung in [`SenseLine::ALL`]
    pub const fn index(self) -> usize {
        match self {
            SenseLine::Mux0 => 0,
            SenseLine::Mux2 => 1,
            SenseLine::Mux3 => 2,
            SenseLine::Mux4 => 3,
            SenseLine::Mux5 => 4,
            SenseLine::Mux6 => 5,
            SenseLine::Mux7 => 6,
        }
    }
}

/// Logische Pin-Rolle
///
/// Die Zuordnung zu physischen GPIOs ist statisch (siehe Firmware-Config).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalPin {
    /// Adressleitung A (Bit 0)
    AddressA,
    /// Adressleitung B (Bit 1)
    AddressB,
    /// Adressleitung C (Bit 2)
    AddressC,
    /// Sensor-Eingang
    Sense(SenseLine),
}

impl LogicalPin {
    /// Adressleitungen in Schreib-Reihenfolge: C, B, A (MSB zuerst)
    pub const ADDRESS_LINES: [LogicalPin; 3] = [
        LogicalPin::AddressC,
        LogicalPin::AddressB,
        LogicalPin::AddressA,
    ];
}

/// Kanal-Adresse des Multiplexers (0–7)
///
/// Deserialisierung läuft über [`TryFrom<u8>`], Werte > 7 werden abgelehnt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct ChannelAddress(u8);

/// Fehler: Kanal-Nummer außerhalb 0–7
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidChannel(pub u8);

impl core::fmt::Display for InvalidChannel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "channel {} out of range 0..=7", self.0)
    }
}

impl ChannelAddress {
    /// Scan-Reihenfolge: aufsteigend 0..=7
    ///
    /// Die Reihenfolge ist Teil des Wire-Formats (Bit *i* ↔ Kanal *i*).
    pub const ALL: [ChannelAddress; CHANNEL_COUNT] = [
        ChannelAddress(0),
        ChannelAddress(1),
        ChannelAddress(2),
        ChannelAddress(3),
        ChannelAddress(4),
        ChannelAddress(5),
        ChannelAddress(6),
        ChannelAddress(7),
    ];

    /// Erstellt eine Adresse, `None` für Werte > 7
    pub const fn new(value: u8) -> Option<Self> {
        if value < CHANNEL_COUNT as u8 {
            Some(Self(value))
        } else {
            None
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Pegel für die Adressleitungen in der Reihenfolge C, B, A
    ///
    /// ```
    /// # use hall_core::{ChannelAddress, Level};
    /// let ch5 = ChannelAddress::new(5).unwrap(); // 0b101
    /// assert_eq!(ch5.select_levels(), [Level::High, Level::Low, Level::High]);
    /// ```
    pub const fn select_levels(self) -> [Level; 3] {
        [
            Level::from_bit((self.0 >> 2) & 1 == 1),
            Level::from_bit((self.0 >> 1) & 1 == 1),
            Level::from_bit(self.0 & 1 == 1),
        ]
    }
}

impl TryFrom<u8> for ChannelAddress {
    type Error = InvalidChannel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidChannel(value))
    }
}

impl From<ChannelAddress> for u8 {
    fn from(channel: ChannelAddress) -> u8 {
        channel.0
    }
}

/// Multiplexer-Bank: welche Sense-Leitung ein Scan-Durchlauf abtastet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MuxBank {
    Bank0,
    Bank1,
    Bank2,
    Bank3,
    Bank4,
    Bank5,
    Bank6,
    Bank7,
}

impl MuxBank {
    /// Physische Sense-Leitung dieser Bank
    ///
    /// Bank 0 und Bank 1 liegen auf derselben Leitung (`Mux0`). Das ist eine
    /// Eigenheit der Verdrahtung und wird bewusst so abgebildet.
    pub const fn sense_line(self) -> SenseLine {
        match self {
            MuxBank::Bank0 | MuxBank::Bank1 => SenseLine::Mux0,
            MuxBank::Bank2 => SenseLine::Mux2,
            MuxBank::Bank3 => SenseLine::Mux3,
            MuxBank::Bank4 => SenseLine::Mux4,
            MuxBank::Bank5 => SenseLine::Mux5,
            MuxBank::Bank6 => SenseLine::Mux6,
            MuxBank::Bank7 => SenseLine::Mux7,
        }
    }
}

/// Ergebnis eines Scan-Durchlaufs
///
/// Bit *i* ist gesetzt, wenn der Sensor auf Kanal *i* aktiv war.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanResult(u8);

impl ScanResult {
    pub const NONE: ScanResult = ScanResult(0x00);

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_active(self, channel: ChannelAddress) -> bool {
        self.0 & (1 << channel.value()) != 0
    }

    /// Ergebnis mit zusätzlich gesetztem Bit für `channel`
    pub const fn with_active(self, channel: ChannelAddress) -> Self {
        Self(self.0 | (1 << channel.value()))
    }

    pub const fn active_count(self) -> u32 {
        self.0.count_ones()
    }

    /// Aktive Kanäle in aufsteigender Reihenfolge
    pub fn active_channels(self) -> impl Iterator<Item = ChannelAddress> {
        ChannelAddress::ALL
            .into_iter()
            .filter(move |&channel| self.is_active(channel))
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Level {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Level::High => defmt::write!(fmt, "High"),
            Level::Low => defmt::write!(fmt, "Low"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LogicalPin {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LogicalPin::AddressA => defmt::write!(fmt, "AddressA"),
            LogicalPin::AddressB => defmt::write!(fmt, "AddressB"),
            LogicalPin::AddressC => defmt::write!(fmt, "AddressC"),
            LogicalPin::Sense(line) => defmt::write!(fmt, "Sense(Mux{})", line.mux_number()),
        }
    }
}

#[cfg(feature = "defmt")]
impl SenseLine {
    fn mux_number(self) -> u8 {
        match self {
            SenseLine::Mux0 => 0,
            SenseLine::Mux2 => 2,
            SenseLine::Mux3 => 3,
            SenseLine::Mux4 => 4,
            SenseLine::Mux5 => 5,
            SenseLine::Mux6 => 6,
            SenseLine::Mux7 => 7,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MuxBank {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "Bank{}", *self as u8)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ScanResult {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "ScanResult({=u8:#b})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_address_rejects_out_of_range() {
        assert!(ChannelAddress::new(7).is_some());
        assert!(ChannelAddress::new(8).is_none());
        assert!(ChannelAddress::new(255).is_none());
    }

    #[test]
    fn test_channel_address_try_from_checks_range() {
        assert_eq!(ChannelAddress::try_from(5), Ok(ChannelAddress(5)));
        assert_eq!(ChannelAddress::try_from(8), Err(InvalidChannel(8)));
        assert_eq!(u8::from(ChannelAddress(6)), 6);
    }

    #[test]
    fn test_channel_order_is_ascending() {
        for (i, channel) in ChannelAddress::ALL.iter().enumerate() {
            assert_eq!(channel.value() as usize, i);
        }
    }

    #[test]
    fn test_select_levels_msb_first() {
        let ch4 = ChannelAddress::new(4).unwrap();
        assert_eq!(ch4.select_levels(), [Level::High, Level::Low, Level::Low]);

        let ch1 = ChannelAddress::new(1).unwrap();
        assert_eq!(ch1.select_levels(), [Level::Low, Level::Low, Level::High]);
    }

    #[test]
    fn test_bank0_and_bank1_share_sense_line() {
        assert_eq!(MuxBank::Bank0.sense_line(), MuxBank::Bank1.sense_line());
        assert_eq!(MuxBank::Bank2.sense_line(), SenseLine::Mux2);
    }

    #[test]
    fn test_sense_line_index_matches_all() {
        for (i, line) in SenseLine::ALL.iter().enumerate() {
            assert_eq!(line.index(), i);
        }
    }

    #[test]
    fn test_scan_result_active_channels() {
        let result = ScanResult::from_bits(0b0000_1001);
        let mut active = result.active_channels();
        assert_eq!(active.next(), ChannelAddress::new(0));
        assert_eq!(active.next(), ChannelAddress::new(3));
        assert_eq!(active.next(), None);
        assert_eq!(result.active_count(), 2);
    }
}
