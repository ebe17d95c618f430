//! Interleaved capture reader.

use std::ops::{Deref, DerefMut};

use libc::{c_long, c_ulong, c_void};
use pcm_control_core::PcmError;

use crate::ioctl::{self, SndXferi};
use crate::pcm::Pcm;

/// Capture-direction PCM handle with framed interleaved reads.
///
/// Derefs to [`Pcm`] for the shared lifecycle operations; [`open`]
/// always targets the capture stream.
///
/// [`open`]: InterleavedReader::open
#[derive(Debug, Default)]
pub struct InterleavedReader {
    pcm: Pcm,
}

impl InterleavedReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the capture stream of `(card, device)`.
    pub fn open(&mut self, card: u32, device: u32, non_blocking: bool) -> Result<(), PcmError> {
        self.pcm.open_capture_device(card, device, non_blocking)
    }

    /// Read up to `frame_count` interleaved frames into `buffer`
    /// (`SNDRV_PCM_IOCTL_READI_FRAMES`).
    ///
    /// Returns the number of frames actually transferred; a short read
    /// is a normal outcome, not an error. A rejected transfer maps to
    /// [`PcmError::TransferFailed`] with nothing moved. There is no
    /// internal buffering or retry — retry policy belongs to the caller.
    ///
    /// # Safety
    ///
    /// `buffer.len()` is not consulted: the slice only supplies the
    /// destination pointer, exactly like the underlying ioctl's raw
    /// `void *`, and the kernel writes `frame_count` frames of the
    /// device's negotiated frame size through it. This layer does not
    /// know that size, so the caller must guarantee the buffer really
    /// holds `frame_count` frames of it — the slice length does not
    /// bound the write.
    pub unsafe fn read_frames(
        &mut self,
        buffer: &mut [u8],
        frame_count: usize,
    ) -> Result<usize, PcmError> {
        let fd = self.pcm.raw_fd()?;
        let mut transfer = SndXferi {
            result: 0,
            buf: buffer.as_mut_ptr().cast::<c_void>(),
            frames: frame_count as c_ulong,
        };
        let verdict = ioctl::pcm_readi_frames(fd, &mut transfer);
        frames_transferred(verdict.is_ok(), transfer.result)
    }
}

/// Interpret the transfer verdict: rejection is a generic transfer fault
/// with zero frames moved, success reports the kernel's frame count.
fn frames_transferred(accepted: bool, result: c_long) -> Result<usize, PcmError> {
    if !accepted {
        return Err(PcmError::TransferFailed);
    }
    Ok(result.max(0) as usize)
}

impl Deref for InterleavedReader {
    type Target = Pcm;

    fn deref(&self) -> &Pcm {
        &self.pcm
    }
}

impl DerefMut for InterleavedReader {
    fn deref_mut(&mut self) -> &mut Pcm {
        &mut self.pcm
    }
}
