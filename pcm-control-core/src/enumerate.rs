//! Generic best-effort device enumeration.
//!
//! `collect_devices` walks an iterator of device-node names, parses each
//! one, probes the valid ones through a [`DeviceProbe`], and keeps the
//! successes. A single bad entry never aborts the scan — the contract is
//! a best-effort inventory, not an all-or-nothing query.

use std::ops::Index;
use std::slice;

use crate::models::device_info::PcmInfo;
use crate::models::identity::PcmIdentity;
use crate::traits::device_probe::DeviceProbe;

/// Ordered, immutable inventory of PCM devices found by one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PcmList {
    devices: Vec<PcmInfo>,
}

impl PcmList {
    /// Number of devices in the inventory.
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PcmInfo> {
        self.devices.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, PcmInfo> {
        self.devices.iter()
    }

    pub fn as_slice(&self) -> &[PcmInfo] {
        &self.devices
    }
}

impl Index<usize> for PcmList {
    type Output = PcmInfo;

    fn index(&self, index: usize) -> &PcmInfo {
        &self.devices[index]
    }
}

impl<'a> IntoIterator for &'a PcmList {
    type Item = &'a PcmInfo;
    type IntoIter = slice::Iter<'a, PcmInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.devices.iter()
    }
}

/// Build a device inventory from an iterator of device-node names.
///
/// Names that do not follow the PCM naming convention are skipped
/// silently; probe failures skip that entry with a debug log. Entry
/// order follows the input iterator.
pub fn collect_devices<I, P>(names: I, probe: &P) -> PcmList
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    P: DeviceProbe,
{
    let mut devices = Vec::new();
    for name in names {
        let name = name.as_ref();
        let Some(identity) = PcmIdentity::parse_node_name(name) else {
            continue;
        };
        match probe.probe(identity) {
            Ok(info) => devices.push(info),
            Err(err) => log::debug!("skipping {name}: {err}"),
        }
    }
    PcmList { devices }
}
