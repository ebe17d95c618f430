//! # pcm-control-linux
//!
//! Linux ALSA ioctl backend for pcm-control-kit.
//!
//! Provides:
//! - `Pcm` — owned-descriptor device handle over the PCM control ioctls
//! - `InterleavedReader` — capture handle with framed interleaved reads
//! - `SndDeviceProbe` / `scan_devices` — best-effort `/dev/snd` inventory
//!
//! The value types, error model, and device-node naming convention live
//! in `pcm-control-core`; this crate supplies the kernel transport.
//!
//! ## Usage
//! ```ignore
//! use pcm_control_linux::{scan_devices, InterleavedReader};
//!
//! for info in &scan_devices()? {
//!     println!("{info}");
//! }
//!
//! let mut reader = InterleavedReader::new();
//! reader.open(0, 0, false)?;
//! reader.prepare()?;
//! reader.start()?;
//! ```

#[cfg(target_os = "linux")]
pub mod enumerator;
#[cfg(target_os = "linux")]
pub mod ioctl;
#[cfg(target_os = "linux")]
pub mod pcm;
#[cfg(target_os = "linux")]
pub mod reader;
#[cfg(target_os = "linux")]
pub mod translate;

#[cfg(target_os = "linux")]
pub use enumerator::{scan_devices, scan_devices_in, SndDeviceProbe};
#[cfg(target_os = "linux")]
pub use pcm::Pcm;
#[cfg(target_os = "linux")]
pub use reader::InterleavedReader;
