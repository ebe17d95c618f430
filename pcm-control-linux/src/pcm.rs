//! PCM device handle over the ALSA control ioctls.

use std::fs;
use std::os::fd::{AsRawFd, IntoRawFd, OwnedFd, RawFd};
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

use pcm_control_core::{Direction, PcmError, PcmIdentity, PcmInfo};

use crate::ioctl;
use crate::translate::pcm_info_from_raw;

/// Handle to one PCM device node.
///
/// Owns at most one file descriptor; every lifecycle operation is a
/// single control request against it, so each failure is attributable to
/// either "not open" or the kernel's verdict. Holding no descriptor is a
/// valid state — operations then fail with [`PcmError::NotOpen`] without
/// touching the kernel. The descriptor is released on drop.
#[derive(Debug, Default)]
pub struct Pcm {
    fd: Option<OwnedFd>,
}

impl Pcm {
    /// New handle in the unopened state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the device node for `identity` under `/dev/snd` with
    /// read/write access.
    ///
    /// Any previously held descriptor is closed first. With
    /// `non_blocking` set, requests that would wait fail immediately
    /// with an `EAGAIN`-class error instead. On failure the errno is
    /// surfaced and the handle stays unopened.
    pub fn open(&mut self, identity: PcmIdentity, non_blocking: bool) -> Result<(), PcmError> {
        self.open_at(&identity.device_path(), non_blocking)
    }

    /// Open a device node by explicit path.
    ///
    /// The primitive behind [`Pcm::open`]; scans over alternate device
    /// directories use it directly. Same contract: the previously held
    /// descriptor is closed first, failure surfaces the errno and
    /// leaves the handle unopened.
    pub fn open_at(&mut self, path: &Path, non_blocking: bool) -> Result<(), PcmError> {
        // Re-opening replaces the held descriptor; a close failure on
        // the old one must not block the new open.
        let _ = self.close();

        let mut options = fs::OpenOptions::new();
        options.read(true).write(true);
        if non_blocking {
            options.custom_flags(libc::O_NONBLOCK);
        }

        let file = options.open(path)?;
        self.fd = Some(file.into());
        log::debug!("opened {}", path.display());
        Ok(())
    }

    /// Open the capture stream of `(card, device)`.
    pub fn open_capture_device(
        &mut self,
        card: u32,
        device: u32,
        non_blocking: bool,
    ) -> Result<(), PcmError> {
        self.open(PcmIdentity::new(card, device, Direction::Capture), non_blocking)
    }

    /// Open the playback stream of `(card, device)`.
    pub fn open_playback_device(
        &mut self,
        card: u32,
        device: u32,
        non_blocking: bool,
    ) -> Result<(), PcmError> {
        self.open(PcmIdentity::new(card, device, Direction::Playback), non_blocking)
    }

    /// Ready the device for frame transfer (`SNDRV_PCM_IOCTL_PREPARE`).
    pub fn prepare(&mut self) -> Result<(), PcmError> {
        let fd = self.raw_fd()?;
        // SAFETY: fd is a live descriptor owned by this handle; the
        // request carries no argument.
        unsafe { ioctl::pcm_prepare(fd) }.map_err(errno_err)?;
        Ok(())
    }

    /// Start the stream (`SNDRV_PCM_IOCTL_START`).
    ///
    /// Ordering relative to [`Pcm::prepare`] is not enforced here; the
    /// kernel rejects an out-of-order start and that verdict is passed
    /// through.
    pub fn start(&mut self) -> Result<(), PcmError> {
        let fd = self.raw_fd()?;
        // SAFETY: as in `prepare`.
        unsafe { ioctl::pcm_start(fd) }.map_err(errno_err)?;
        Ok(())
    }

    /// Stop the stream and discard buffered frames
    /// (`SNDRV_PCM_IOCTL_DROP`). Named to stay clear of `Drop::drop`.
    pub fn drop_frames(&mut self) -> Result<(), PcmError> {
        let fd = self.raw_fd()?;
        // SAFETY: as in `prepare`.
        unsafe { ioctl::pcm_drop(fd) }.map_err(errno_err)?;
        Ok(())
    }

    /// Query the device metadata snapshot (`SNDRV_PCM_IOCTL_INFO`).
    pub fn info(&self) -> Result<PcmInfo, PcmError> {
        let fd = self.raw_fd()?;
        let mut raw = ioctl::SndPcmInfo::zeroed();
        // SAFETY: fd is live; `raw` is a properly sized response buffer
        // the kernel fills in place.
        unsafe { ioctl::pcm_info(fd, &mut raw) }.map_err(errno_err)?;
        Ok(pcm_info_from_raw(&raw))
    }

    /// Release the descriptor.
    ///
    /// Idempotent: closing an unopened handle succeeds. A close failure
    /// is reported instead of discarded, which plain drop cannot do.
    pub fn close(&mut self) -> Result<(), PcmError> {
        let Some(fd) = self.fd.take() else {
            return Ok(());
        };
        let raw = fd.into_raw_fd();
        // SAFETY: `raw` was just detached from the OwnedFd, so this is
        // its only close.
        if unsafe { libc::close(raw) } == -1 {
            return Err(PcmError::from(std::io::Error::last_os_error()));
        }
        Ok(())
    }

    /// Whether a descriptor is currently held.
    pub fn is_open(&self) -> bool {
        self.fd.is_some()
    }

    /// The raw descriptor, if open. Ownership stays with the handle.
    pub fn descriptor(&self) -> Option<RawFd> {
        self.fd.as_ref().map(AsRawFd::as_raw_fd)
    }

    pub(crate) fn raw_fd(&self) -> Result<RawFd, PcmError> {
        self.descriptor().ok_or(PcmError::NotOpen)
    }
}

pub(crate) fn errno_err(errno: nix::errno::Errno) -> PcmError {
    PcmError::Os(errno as i32)
}
