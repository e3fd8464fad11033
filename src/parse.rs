//! Parsers for the plain-text tables printed by adb and on-device tools.
//!
//! Lines that do not match the expected shape are skipped; none of these
//! functions fail.

use crate::types::{DeviceEntry, DeviceState};
use regex::Regex;

/// Every `serial<TAB>state` row of `adb devices`.
///
/// `adb devices -l` pads its columns with spaces instead, so rows without a
/// tab are split on whitespace.
pub fn parse_device_entries(output: &str) -> Vec<DeviceEntry> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with("List of devices") && !line.starts_with('*'))
        .filter_map(|line| {
            let (serial, state) = match line.split_once('\t') {
                Some((serial, rest)) => (serial, rest.split('\t').next()?),
                None => {
                    let mut fields = line.split_whitespace();
                    (fields.next()?, fields.next()?)
                }
            };
            Some(DeviceEntry::new(serial, DeviceState::parse(state.trim())))
        })
        .collect()
}

/// Serials of devices in the `device` state
pub fn parse_devices(output: &str) -> Vec<String> {
    parse_device_entries(output)
        .into_iter()
        .filter(DeviceEntry::is_available)
        .map(|entry| entry.serial.as_str().to_string())
        .collect()
}

/// Package names from `pm list packages` (`package:<name>` lines)
pub fn parse_packages(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| match line.trim().split_once(':') {
            Some(("package", name)) => Some(name.to_string()),
            _ => None,
        })
        .collect()
}

/// PID column of the last `ps` line naming `app`
pub fn parse_process_id(output: &str, app: &str) -> Option<String> {
    let pattern = format!(r"^\S+\s+([0-9]+).+{}", regex::escape(app));
    let re = Regex::new(&pattern).ok()?;

    output
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter_map(|line| re.captures(line))
        .filter_map(|caps| caps.get(1).map(|pid| pid.as_str().to_string()))
        .last()
}

/// Whether any process row of a `ps` listing mentions `app`.
/// The first line is the column header.
pub fn process_listed(output: &str, app: &str) -> bool {
    output.lines().skip(1).any(|line| line.contains(app))
}

/// Value of the first `<field>: <value>` line in a dumpsys listing
pub fn parse_package_info(output: &str, field: &str) -> Option<String> {
    output.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        (key.trim() == field).then(|| value.trim().to_string())
    })
}
