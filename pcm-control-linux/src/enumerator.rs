//! Best-effort scan of the `/dev/snd` device-node directory.

use std::fs;
use std::path::{Path, PathBuf};

use pcm_control_core::{
    collect_devices, DeviceProbe, PcmError, PcmIdentity, PcmInfo, PcmList, DEVICE_DIR,
};

use crate::pcm::Pcm;

/// Probe that opens device nodes under a directory root and queries
/// their metadata.
#[derive(Debug, Clone)]
pub struct SndDeviceProbe {
    root: PathBuf,
}

impl SndDeviceProbe {
    /// Probe against the standard `/dev/snd` directory.
    pub fn new() -> Self {
        Self::in_dir(Path::new(DEVICE_DIR))
    }

    /// Probe against an alternate device-node directory. Nodes open
    /// under `root`, never under `/dev/snd`.
    pub fn in_dir(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }
}

impl Default for SndDeviceProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceProbe for SndDeviceProbe {
    fn probe(&self, identity: PcmIdentity) -> Result<PcmInfo, PcmError> {
        let mut pcm = Pcm::new();
        pcm.open_at(&self.root.join(identity.node_name()), false)?;
        pcm.info()
    }
}

/// Scan `/dev/snd` for PCM devices.
///
/// Per-entry failures — foreign node names, open errors, failed metadata
/// queries — skip that entry and never abort the scan. An unreadable
/// directory is reported as an error rather than masquerading as an
/// empty inventory.
pub fn scan_devices() -> Result<PcmList, PcmError> {
    scan_devices_in(Path::new(DEVICE_DIR))
}

/// Scan an alternate device-node directory.
///
/// Entry order follows the platform's directory iteration order, which
/// is not guaranteed sorted.
pub fn scan_devices_in(dir: &Path) -> Result<PcmList, PcmError> {
    log::debug!("scanning {}", dir.display());
    let entries = fs::read_dir(dir)?;
    let names = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned());
    Ok(collect_devices(names, &SndDeviceProbe::in_dir(dir)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcm_control_core::Direction;
    use std::fs::File;

    #[test]
    fn probe_opens_nodes_under_its_root() {
        // An openable regular file named like a capture node: the open
        // must target the probe's root, not /dev/snd, so only the info
        // ioctl rejects it (ENOTTY). ENOENT here would mean the probe
        // went to /dev/snd regardless of the root.
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("pcmC0D0c")).unwrap();

        let probe = SndDeviceProbe::in_dir(dir.path());
        let err = probe
            .probe(PcmIdentity::new(0, 0, Direction::Capture))
            .unwrap_err();
        assert_eq!(err.os_code(), libc::ENOTTY);
    }

    #[test]
    fn unreadable_directory_is_an_error() {
        let err = scan_devices_in(Path::new("/nonexistent/snd")).unwrap_err();
        assert_eq!(err.os_code(), libc::ENOENT);
    }

    #[test]
    fn empty_directory_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let list = scan_devices_in(dir.path()).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn foreign_and_non_device_entries_are_skipped() {
        // "timer" and "controlC0" fail the name parse; "pcmC0D0c"
        // parses and opens from the scanned directory, but the regular
        // file rejects the info ioctl. All three skip; the scan still
        // succeeds.
        let dir = tempfile::tempdir().unwrap();
        for name in ["timer", "controlC0", "pcmC0D0c"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let list = scan_devices_in(dir.path()).unwrap();
        assert!(list.is_empty());
    }
}
