pub mod device_probe;
