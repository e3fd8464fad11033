use crate::client::Adb;
use crate::executor::ProcessRunner;
use log::debug;

/// Serial printed by `adb get-serialno` when nothing is attached
const UNKNOWN_SERIAL: &str = "unknown";

/// Whether a target device can take commands right now
pub trait DeviceAvailability {
    /// The device adb would pick without `-s`
    fn is_default_device_available(&self) -> bool;

    /// A specific serial listed by `adb devices` in the `device` state
    fn is_named_device_available(&self, serial: &str) -> bool;

    fn is_device_available(&self, device: Option<&str>) -> bool {
        match device {
            Some(serial) => self.is_named_device_available(serial),
            None => self.is_default_device_available(),
        }
    }
}

impl<R: ProcessRunner> DeviceAvailability for Adb<R> {
    fn is_default_device_available(&self) -> bool {
        let result = self.getserialno(None);
        let available = result.success() && result.output.trim() != UNKNOWN_SERIAL;
        debug!("Default device available: {}", available);
        available
    }

    fn is_named_device_available(&self, serial: &str) -> bool {
        let available = self.devices(&[]).iter().any(|d| d == serial);
        debug!("Device {} available: {}", serial, available);
        available
    }
}
