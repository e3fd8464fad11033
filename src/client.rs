use crate::availability::DeviceAvailability;
use crate::command::AdbCommand;
use crate::config::AdbConfig;
use crate::error::Result;
use crate::executor::{ProcessRunner, SystemRunner, SPAWN_FAILURE_STATUS};
use crate::parse;
use crate::types::{DeviceEntry, ExecResult};
use log::{debug, error, warn};
use std::fs::File;
use std::path::Path;

/// Message returned by [`Adb::bugreport`] when the target is missing
pub const DEVICE_NOT_FOUND: &str = "Device Not Found";

/// Entry point for every adb operation.
///
/// Each method assembles one command line from the [`AdbConfig`] tokens,
/// runs it through the [`ProcessRunner`] and, where noted, parses the
/// text that comes back. Methods taking `device: Option<&str>` insert
/// `-s <device>` when a serial is given.
#[derive(Debug, Clone)]
pub struct Adb<R = SystemRunner> {
    config: AdbConfig,
    runner: R,
}

impl Adb<SystemRunner> {
    pub fn new(config: AdbConfig) -> Self {
        Self::with_runner(config, SystemRunner::new())
    }
}

impl Default for Adb<SystemRunner> {
    fn default() -> Self {
        Self::new(AdbConfig::default())
    }
}

impl<R: ProcessRunner> Adb<R> {
    pub fn with_runner(config: AdbConfig, runner: R) -> Self {
        Self { config, runner }
    }

    pub fn config(&self) -> &AdbConfig {
        &self.config
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    fn command(&self) -> AdbCommand {
        AdbCommand::new(self.config.prefix.as_str())
    }

    fn device_command(&self, device: Option<&str>) -> AdbCommand {
        self.command().with_device(device)
    }

    /// Run a prepared command, capturing its output
    pub fn exec(&self, cmd: &AdbCommand) -> ExecResult {
        self.runner.run(&cmd.argv())
    }

    /// Run a prepared command with stdout written to `sink`
    pub fn exec_to_file(&self, cmd: &AdbCommand, sink: File) -> Result<i32> {
        self.runner.run_to_file(&cmd.argv(), sink)
    }

    /// `adb version`
    pub fn version(&self) -> ExecResult {
        self.exec(&self.command().arg(self.config.commands.version.as_str()))
    }

    /// Save `adb bugreport` output to `dest`.
    ///
    /// `adb bugreport` waits forever when no device is attached, so the
    /// target is checked first and `(0, "Device Not Found")` is returned
    /// without running the report.
    pub fn bugreport(&self, dest: impl AsRef<Path>, device: Option<&str>) -> ExecResult {
        let dest = dest.as_ref();
        let cmd = self
            .device_command(device)
            .arg(self.config.commands.bugreport.as_str());

        let sink = File::create(dest).map_err(|e| {
            let message = format!("Failed to create bug report file {}: {}", dest.display(), e);
            error!("{}", message);
            message
        });

        if !self.is_device_available(device) {
            warn!("Skipping bug report, device not available");
            return ExecResult::ok(DEVICE_NOT_FOUND);
        }

        let sink = match sink {
            Ok(file) => file,
            Err(message) => return ExecResult::new(1, message),
        };

        match self.exec_to_file(&cmd, sink) {
            Ok(0) => ExecResult::ok(format!(
                "Success: Bug report saved to: {}",
                dest.display()
            )),
            Ok(status) => ExecResult::new(
                status,
                format!(
                    "Bug report failed with status {}: {}",
                    status,
                    dest.display()
                ),
            ),
            Err(e) => ExecResult::new(SPAWN_FAILURE_STATUS, e.to_string()),
        }
    }

    /// `adb connect <device>`
    pub fn connect(&self, device: &str) -> ExecResult {
        self.exec(
            &self
                .command()
                .arg(self.config.commands.connect.as_str())
                .arg(device),
        )
    }

    /// `adb reconnect <device>`
    pub fn reconnect(&self, device: &str) -> ExecResult {
        self.exec(
            &self
                .command()
                .arg(self.config.commands.reconnect.as_str())
                .arg(device),
        )
    }

    /// `adb disconnect <device>`
    pub fn disconnect(&self, device: &str) -> ExecResult {
        self.exec(
            &self
                .command()
                .arg(self.config.commands.disconnect.as_str())
                .arg(device),
        )
    }

    /// Copy `src` on the host to `dest` on the device
    pub fn push(&self, src: &str, dest: &str, device: Option<&str>) -> ExecResult {
        self.exec(
            &self
                .device_command(device)
                .arg(self.config.commands.push.as_str())
                .args([src, dest]),
        )
    }

    /// Copy `src` on the device to `dest` on the host
    pub fn pull(&self, src: &str, dest: &str, device: Option<&str>) -> ExecResult {
        self.exec(
            &self
                .device_command(device)
                .arg(self.config.commands.pull.as_str())
                .args([src, dest]),
        )
    }

    /// Serials of attached devices in the `device` state
    pub fn devices(&self, opts: &[&str]) -> Vec<String> {
        self.list_devices(opts)
            .map(|output| parse::parse_devices(&output))
            .unwrap_or_default()
    }

    /// Every row of `adb devices`, whatever its state
    pub fn device_entries(&self, opts: &[&str]) -> Vec<DeviceEntry> {
        self.list_devices(opts)
            .map(|output| parse::parse_device_entries(&output))
            .unwrap_or_default()
    }

    fn list_devices(&self, opts: &[&str]) -> Option<String> {
        let result = self.exec(
            &self
                .command()
                .arg(self.config.commands.devices.as_str())
                .opts(opts),
        );
        if result.success() {
            Some(result.output)
        } else {
            warn!("Listing devices failed ({}): {}", result.status, result.output.trim());
            None
        }
    }

    /// `adb shell <cmd>`; `cmd` is passed as a single argument
    pub fn shell(&self, cmd: &str, device: Option<&str>) -> ExecResult {
        self.exec(
            &self
                .device_command(device)
                .arg(self.config.commands.shell.as_str())
                .arg(cmd),
        )
    }

    /// Installed package names
    pub fn get_package_list(&self, device: Option<&str>) -> Vec<String> {
        let result = self.shell(&self.config.scripts.package_list, device);
        if !result.success() {
            debug!("Package listing failed: {}", result.output.trim());
            return Vec::new();
        }
        parse::parse_packages(&result.output)
    }

    /// Whether `app` appears in the device's process list
    pub fn check_process_status(&self, app: &str, device: Option<&str>) -> bool {
        let result = self.shell(&self.config.scripts.ps, device);
        result.success() && parse::process_listed(&result.output, app)
    }

    /// PID of the running process named `app`
    pub fn get_process_id(&self, app: &str, device: Option<&str>) -> Option<String> {
        let result = self.shell(&self.config.scripts.ps, device);
        if !result.success() {
            debug!("Process listing failed: {}", result.output.trim());
            return None;
        }
        parse::parse_process_id(&result.output, app)
    }

    /// Install an APK, replacing any existing version (`install -r`)
    pub fn install(&self, apk: &str, device: Option<&str>, opts: &[&str]) -> ExecResult {
        self.exec(
            &self
                .device_command(device)
                .arg(self.config.commands.install.as_str())
                .arg("-r")
                .opts(opts)
                .arg(apk),
        )
    }

    pub fn uninstall(&self, app: &str, device: Option<&str>, opts: &[&str]) -> ExecResult {
        self.exec(
            &self
                .device_command(device)
                .arg(self.config.commands.uninstall.as_str())
                .opts(opts)
                .arg(app),
        )
    }

    /// `adb get-serialno`; prints `unknown` when no device is attached
    pub fn getserialno(&self, device: Option<&str>) -> ExecResult {
        self.exec(
            &self
                .device_command(device)
                .arg(self.config.commands.get_serialno.as_str()),
        )
    }

    /// One field of `dumpsys package <package>`, empty when absent
    pub fn get_package_info(&self, package: &str, field: &str, device: Option<&str>) -> String {
        let script = self.config.scripts.dump_package_info_for(package);
        let result = self.shell(&script, device);
        if !result.success() {
            debug!("dumpsys failed for {}: {}", package, result.output.trim());
            return String::new();
        }
        parse::parse_package_info(&result.output, field).unwrap_or_default()
    }

    /// Blocks until the device is online
    pub fn wait_for_device(&self, device: Option<&str>) -> ExecResult {
        self.exec(
            &self
                .device_command(device)
                .arg(self.config.commands.wait_for_device.as_str()),
        )
    }

    /// `adb shell sync`
    pub fn sync(&self, device: Option<&str>) -> ExecResult {
        self.exec(
            &self
                .device_command(device)
                .arg(self.config.commands.shell.as_str())
                .arg(self.config.commands.sync.as_str()),
        )
    }

    pub fn start_server(&self) -> ExecResult {
        self.exec(&self.command().arg(self.config.commands.start_server.as_str()))
    }

    pub fn kill_server(&self) -> ExecResult {
        self.exec(&self.command().arg(self.config.commands.kill_server.as_str()))
    }

    /// `adb get-state`: `device`, `offline`, `bootloader`, ...
    pub fn get_state(&self, device: Option<&str>) -> ExecResult {
        self.exec(
            &self
                .device_command(device)
                .arg(self.config.commands.get_state.as_str()),
        )
    }
}
