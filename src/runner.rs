use crate::cli::Commands;
use crate::client::Adb;
use crate::error::Result;
use crate::executor::{ProcessRunner, SystemRunner};
use crate::output::OutputFormatter;
use crate::types::ExecResult;
use log::debug;

/// Routes a parsed subcommand to the matching adb operation and prints
/// its result. Returns the process exit code.
pub struct CommandRunner<R = SystemRunner> {
    adb: Adb<R>,
    formatter: OutputFormatter,
    serial: Option<String>,
}

impl<R: ProcessRunner> CommandRunner<R> {
    pub fn new(adb: Adb<R>, formatter: OutputFormatter, serial: Option<String>) -> Self {
        Self {
            adb,
            formatter,
            serial,
        }
    }

    pub fn adb(&self) -> &Adb<R> {
        &self.adb
    }

    pub fn run(&self, command: Commands) -> Result<i32> {
        debug!("CommandRunner::run() called with command: {:?}", command);
        let device = self.serial.as_deref();
        let adb = &self.adb;

        let code = match command {
            Commands::Version => self.report(adb.version()),
            Commands::Bugreport { dest } => self.report(adb.bugreport(&dest, device)),
            Commands::Connect { device: target } => self.report(adb.connect(&target)),
            Commands::Reconnect { device: target } => self.report(adb.reconnect(&target)),
            Commands::Disconnect { device: target } => self.report(adb.disconnect(&target)),
            Commands::Push { src, dest } => self.report(adb.push(&src, &dest, device)),
            Commands::Pull { src, dest } => self.report(adb.pull(&src, &dest, device)),
            Commands::Devices { all, opts } => {
                let opts = as_strs(&opts);
                if all {
                    self.formatter.items(&adb.device_entries(&opts))?;
                } else {
                    self.formatter.column("SERIAL", &adb.devices(&opts))?;
                }
                0
            }
            Commands::Shell { command } => self.report(adb.shell(&command.join(" "), device)),
            Commands::Packages => {
                self.formatter
                    .column("PACKAGE", &adb.get_package_list(device))?;
                0
            }
            Commands::PsStatus { app } => {
                if adb.check_process_status(&app, device) {
                    self.formatter.success(&format!("{} is running", app));
                    0
                } else {
                    self.formatter.error(&format!("{} is not running", app));
                    1
                }
            }
            Commands::Pid { app } => match adb.get_process_id(&app, device) {
                Some(pid) => {
                    self.formatter.text(&pid);
                    0
                }
                None => {
                    self.formatter.error(&format!("No process named {}", app));
                    1
                }
            },
            Commands::Install { apk, opts } => {
                self.report(adb.install(&apk, device, &as_strs(&opts)))
            }
            Commands::Uninstall { package, opts } => {
                self.report(adb.uninstall(&package, device, &as_strs(&opts)))
            }
            Commands::Serialno => self.report(adb.getserialno(device)),
            Commands::PackageInfo { package, field } => {
                let value = adb.get_package_info(&package, &field, device);
                if value.is_empty() {
                    self.formatter
                        .error(&format!("No '{}' field for {}", field, package));
                    1
                } else {
                    self.formatter.text(&value);
                    0
                }
            }
            Commands::WaitForDevice => self.report(adb.wait_for_device(device)),
            Commands::Sync => self.report(adb.sync(device)),
            Commands::StartServer => self.report(adb.start_server()),
            Commands::KillServer => self.report(adb.kill_server()),
            Commands::GetState => self.report(adb.get_state(device)),
        };

        Ok(code)
    }

    /// Print a status/text pair: stdout on success, stderr otherwise
    fn report(&self, result: ExecResult) -> i32 {
        if result.success() {
            self.formatter.text(&result.output);
        } else {
            self.formatter.error(&result.output);
        }
        result.status
    }
}

fn as_strs(values: &[String]) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}
