use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse device classification reported by the kernel.
///
/// Raw values outside the known set degrade to `Unknown`; classification
/// never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PcmClass {
    #[default]
    Unknown,
    Generic,
    MultiChannel,
    Modem,
    Digitizer,
}

impl fmt::Display for PcmClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unknown => "Unknown",
            Self::Generic => "Generic",
            Self::MultiChannel => "Multi-channel",
            Self::Modem => "Modem",
            Self::Digitizer => "Digitizer",
        })
    }
}

/// Finer device classification below [`PcmClass`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PcmSubclass {
    #[default]
    Unknown,
    GenericMix,
    MultiChannelMix,
}

impl fmt::Display for PcmSubclass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unknown => "Unknown",
            Self::GenericMix => "Generic Mix",
            Self::MultiChannelMix => "Multi-channel Mix",
        })
    }
}

/// Metadata snapshot for one PCM device.
///
/// Serializable so a device inventory can be exported as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PcmInfo {
    pub card: u32,
    pub device: u32,
    pub subdevice: u32,
    pub subdevices_count: u32,
    pub subdevices_available: u32,
    /// Short identifier reported by the driver.
    pub id: String,
    /// Human-readable device name.
    pub name: String,
    /// Subdevice name.
    pub subname: String,
    pub class: PcmClass,
    pub subclass: PcmSubclass,
}

impl fmt::Display for PcmInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "card      : {}", self.card)?;
        writeln!(f, "device    : {}", self.device)?;
        writeln!(f, "subdevice : {}", self.subdevice)?;
        writeln!(f, "class     : {}", self.class)?;
        writeln!(f, "subclass  : {}", self.subclass)?;
        writeln!(f, "id        : {}", self.id)?;
        writeln!(f, "name      : {}", self.name)?;
        writeln!(f, "subname   : {}", self.subname)?;
        writeln!(f, "subdevices count     : {}", self.subdevices_count)?;
        writeln!(f, "subdevices available : {}", self.subdevices_available)
    }
}

/// Build a string from a fixed-size byte field.
///
/// Kernel info strings are NUL-padded but not guaranteed terminated: the
/// read stops at the first NUL or the end of the field, whichever comes
/// first, and never goes past it.
pub fn string_from_fixed(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_string_stops_at_nul() {
        let mut field = [0u8; 16];
        field[..5].copy_from_slice(b"hw:0\x00");
        assert_eq!(string_from_fixed(&field), "hw:0");
    }

    #[test]
    fn fixed_string_without_terminator_takes_whole_field() {
        // A driver may fill the field completely, leaving no NUL.
        let field = [b'x'; 64];
        let s = string_from_fixed(&field);
        assert_eq!(s.len(), 64);
    }

    #[test]
    fn fixed_string_embedded_nul_truncates() {
        assert_eq!(string_from_fixed(b"ab\x00cd"), "ab");
    }

    #[test]
    fn fixed_string_invalid_utf8_is_lossy() {
        let field = [0xFFu8, 0xFE, 0x00];
        assert_eq!(string_from_fixed(&field), "\u{FFFD}\u{FFFD}");
    }

    #[test]
    fn class_display_text() {
        assert_eq!(PcmClass::MultiChannel.to_string(), "Multi-channel");
        assert_eq!(PcmSubclass::GenericMix.to_string(), "Generic Mix");
        assert_eq!(PcmClass::default(), PcmClass::Unknown);
    }

    #[test]
    fn info_serializes_to_json() {
        let info = PcmInfo {
            card: 0,
            device: 1,
            subdevice: 0,
            subdevices_count: 1,
            subdevices_available: 1,
            id: "ALC1220".into(),
            name: "ALC1220 Analog".into(),
            subname: "subdevice #0".into(),
            class: PcmClass::Generic,
            subclass: PcmSubclass::GenericMix,
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["class"], "generic");
        assert_eq!(json["subclass"], "generic_mix");
        assert_eq!(json["device"], 1);
    }

    #[test]
    fn info_display_lists_fields() {
        let info = PcmInfo {
            card: 2,
            device: 0,
            subdevice: 0,
            subdevices_count: 1,
            subdevices_available: 1,
            id: "USB".into(),
            name: "USB Audio".into(),
            subname: String::new(),
            class: PcmClass::Generic,
            subclass: PcmSubclass::Unknown,
        };
        let text = info.to_string();
        assert!(text.contains("card      : 2"));
        assert!(text.contains("name      : USB Audio"));
        assert!(text.contains("class     : Generic"));
    }
}
