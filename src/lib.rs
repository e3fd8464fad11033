//! Drive the Android Debug Bridge (`adb`) command-line tool.
//!
//! Every operation builds an argument vector, runs `adb` as a child process
//! and returns its status with the captured text, optionally parsed into
//! device serials, package names, a PID or a `dumpsys` field.
//!
//! ```no_run
//! use adb_android::{Adb, AdbConfig};
//!
//! let adb = Adb::new(AdbConfig::load());
//! for serial in adb.devices(&[]) {
//!     let result = adb.shell("getprop ro.product.model", Some(&serial));
//!     println!("{}: {}", serial, result.output.trim());
//! }
//! ```

pub mod availability;
pub mod cli;
pub mod client;
pub mod command;
pub mod config;
pub mod error;
pub mod executor;
pub mod output;
pub mod parse;
pub mod runner;
pub mod types;

pub use availability::DeviceAvailability;
pub use client::{Adb, DEVICE_NOT_FOUND};
pub use command::AdbCommand;
pub use config::AdbConfig;
pub use error::{AdbError, Result};
pub use executor::{ProcessRunner, SystemRunner};
pub use types::{DeviceEntry, DeviceId, DeviceState, ExecResult};

#[cfg(test)]
pub mod testing;


#[cfg(test)]
mod config_test;

#[cfg(test)]
mod error_test;
