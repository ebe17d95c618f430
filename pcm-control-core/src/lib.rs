//! # pcm-control-core
//!
//! Platform-agnostic core for PCM device control.
//!
//! Provides the error model, the device-node naming convention, the
//! metadata value types, and the generic best-effort device enumerator.
//! Platform backends (e.g. the Linux ALSA ioctl transport) implement the
//! `DeviceProbe` trait and plug into `collect_devices`.
//!
//! ## Architecture
//!
//! ```text
//! pcm-control-core (this crate)
//! ├── traits/      ← DeviceProbe
//! ├── models/      ← PcmError, PcmIdentity, Direction, PcmInfo, PcmClass, PcmSubclass
//! └── enumerate    ← collect_devices, PcmList
//! ```

pub mod enumerate;
pub mod models;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use enumerate::{collect_devices, PcmList};
pub use models::device_info::{string_from_fixed, PcmClass, PcmInfo, PcmSubclass};
pub use models::error::{describe_os_error, PcmError};
pub use models::identity::{Direction, PcmIdentity, DEVICE_DIR};
pub use traits::device_probe::DeviceProbe;
