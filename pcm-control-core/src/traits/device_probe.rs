use crate::models::device_info::PcmInfo;
use crate::models::error::PcmError;
use crate::models::identity::PcmIdentity;

/// Interface for opening one PCM device and reading its metadata.
///
/// The generic enumerator drives a `DeviceProbe` for every well-formed
/// device-node name it sees. Backends implement it against the real
/// kernel transport; tests implement it with a canned table.
pub trait DeviceProbe {
    /// Open the device at `identity` and query its metadata snapshot.
    fn probe(&self, identity: PcmIdentity) -> Result<PcmInfo, PcmError>;
}
