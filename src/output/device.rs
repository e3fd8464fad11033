use crate::output::{PlainFormat, TableFormat};
use crate::types::DeviceEntry;

impl TableFormat for DeviceEntry {
    fn headers() -> Vec<&'static str> {
        vec!["SERIAL", "STATE"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.serial.to_string(), self.state.to_string()]
    }
}

impl PlainFormat for DeviceEntry {
    fn plain(&self) -> String {
        format!("{}\t{}", self.serial, self.state)
    }
}
