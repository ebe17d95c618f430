pub mod device_info;
pub mod error;
pub mod identity;
