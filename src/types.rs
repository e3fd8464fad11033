use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one `adb` invocation.
///
/// `status` is 0 on success, in which case `output` holds the captured
/// standard output. Any other status carries the captured standard error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecResult {
    pub status: i32,
    pub output: String,
}

impl ExecResult {
    pub fn new(status: i32, output: impl Into<String>) -> Self {
        Self {
            status,
            output: output.into(),
        }
    }

    pub fn ok(output: impl Into<String>) -> Self {
        Self::new(0, output)
    }

    pub fn success(&self) -> bool {
        self.status == 0
    }

    pub fn into_pair(self) -> (i32, String) {
        (self.status, self.output)
    }
}

impl From<(i32, String)> for ExecResult {
    fn from((status, output): (i32, String)) -> Self {
        Self { status, output }
    }
}

/// Strongly typed device serial number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for DeviceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DeviceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// State column of `adb devices`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeviceState {
    Device,
    Offline,
    Unauthorized,
    Unknown(String),
}

impl DeviceState {
    pub fn parse(s: &str) -> Self {
        match s {
            "device" => DeviceState::Device,
            "offline" => DeviceState::Offline,
            "unauthorized" => DeviceState::Unauthorized,
            other => DeviceState::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DeviceState::Device => "device",
            DeviceState::Offline => "offline",
            DeviceState::Unauthorized => "unauthorized",
            DeviceState::Unknown(raw) => raw,
        }
    }
}

impl From<String> for DeviceState {
    fn from(s: String) -> Self {
        DeviceState::parse(&s)
    }
}

impl From<DeviceState> for String {
    fn from(state: DeviceState) -> Self {
        state.as_str().to_string()
    }
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of the `adb devices` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceEntry {
    pub serial: DeviceId,
    pub state: DeviceState,
}

impl DeviceEntry {
    pub fn new(serial: impl Into<DeviceId>, state: DeviceState) -> Self {
        Self {
            serial: serial.into(),
            state,
        }
    }

    /// Check if device is available for commands
    pub fn is_available(&self) -> bool {
        self.state == DeviceState::Device
    }
}
