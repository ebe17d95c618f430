//! Conversion from the raw kernel info structure to the core metadata
//! type. Total mapping: it never fails on a well-formed raw structure.

use pcm_control_core::{string_from_fixed, PcmClass, PcmInfo, PcmSubclass};

use crate::ioctl::{self, SndPcmInfo};

fn class_from_raw(raw: i32) -> PcmClass {
    match raw {
        ioctl::CLASS_GENERIC => PcmClass::Generic,
        ioctl::CLASS_MULTI => PcmClass::MultiChannel,
        ioctl::CLASS_MODEM => PcmClass::Modem,
        ioctl::CLASS_DIGITIZER => PcmClass::Digitizer,
        _ => PcmClass::Unknown,
    }
}

fn subclass_from_raw(raw: i32) -> PcmSubclass {
    match raw {
        ioctl::SUBCLASS_GENERIC_MIX => PcmSubclass::GenericMix,
        ioctl::SUBCLASS_MULTI_MIX => PcmSubclass::MultiChannelMix,
        _ => PcmSubclass::Unknown,
    }
}

/// Translate a kernel `snd_pcm_info` into a [`PcmInfo`] snapshot.
///
/// Numeric fields copy directly, string fields go through the bounded
/// fixed-array conversion, and unrecognized class or subclass values
/// degrade to `Unknown`. The kernel reports -1 for "no card"; that
/// clamps to 0.
pub fn pcm_info_from_raw(raw: &SndPcmInfo) -> PcmInfo {
    PcmInfo {
        card: raw.card.max(0) as u32,
        device: raw.device,
        subdevice: raw.subdevice,
        subdevices_count: raw.subdevices_count,
        subdevices_available: raw.subdevices_avail,
        id: string_from_fixed(&raw.id),
        name: string_from_fixed(&raw.name),
        subname: string_from_fixed(&raw.subname),
        class: class_from_raw(raw.dev_class),
        subclass: subclass_from_raw(raw.dev_subclass),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_with(f: impl FnOnce(&mut SndPcmInfo)) -> SndPcmInfo {
        let mut raw = SndPcmInfo::zeroed();
        f(&mut raw);
        raw
    }

    #[test]
    fn numeric_fields_copy_through() {
        let raw = raw_with(|r| {
            r.card = 2;
            r.device = 1;
            r.subdevice = 3;
            r.subdevices_count = 4;
            r.subdevices_avail = 2;
        });
        let info = pcm_info_from_raw(&raw);
        assert_eq!(info.card, 2);
        assert_eq!(info.device, 1);
        assert_eq!(info.subdevice, 3);
        assert_eq!(info.subdevices_count, 4);
        assert_eq!(info.subdevices_available, 2);
    }

    #[test]
    fn known_classes_map() {
        let raw = raw_with(|r| {
            r.dev_class = ioctl::CLASS_MULTI;
            r.dev_subclass = ioctl::SUBCLASS_MULTI_MIX;
        });
        let info = pcm_info_from_raw(&raw);
        assert_eq!(info.class, PcmClass::MultiChannel);
        assert_eq!(info.subclass, PcmSubclass::MultiChannelMix);
    }

    #[test]
    fn unrecognized_classes_degrade_to_unknown() {
        for value in [-1, 4, 99] {
            let raw = raw_with(|r| {
                r.dev_class = value;
                r.dev_subclass = value;
            });
            let info = pcm_info_from_raw(&raw);
            assert_eq!(info.class, PcmClass::Unknown, "class {value}");
            assert_eq!(info.subclass, PcmSubclass::Unknown, "subclass {value}");
        }
    }

    #[test]
    fn terminated_strings_truncate_at_nul() {
        let raw = raw_with(|r| {
            r.id[..4].copy_from_slice(b"HDA\x00");
            r.name[..10].copy_from_slice(b"HDA Intel\x00");
        });
        let info = pcm_info_from_raw(&raw);
        assert_eq!(info.id, "HDA");
        assert_eq!(info.name, "HDA Intel");
        assert_eq!(info.subname, "");
    }

    #[test]
    fn unterminated_strings_stop_at_field_capacity() {
        // Fields completely filled by the driver, no NUL anywhere: the
        // conversion must take exactly the field and not a byte more.
        let raw = raw_with(|r| {
            r.id = [b'i'; 64];
            r.name = [b'n'; 80];
            r.subname = [b's'; 32];
        });
        let info = pcm_info_from_raw(&raw);
        assert_eq!(info.id.len(), 64);
        assert_eq!(info.name.len(), 80);
        assert_eq!(info.subname.len(), 32);
    }

    #[test]
    fn negative_card_clamps_to_zero() {
        let raw = raw_with(|r| r.card = -1);
        assert_eq!(pcm_info_from_raw(&raw).card, 0);
    }
}
