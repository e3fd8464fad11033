use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum OutputType {
    Table,
    Json,
    Plain,
}

impl From<OutputType> for OutputFormat {
    fn from(output: OutputType) -> Self {
        match output {
            OutputType::Table => OutputFormat::Table,
            OutputType::Json => OutputFormat::Json,
            OutputType::Plain => OutputFormat::Plain,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Commands>,

    /// Target device serial (passed to adb as -s)
    #[arg(long, short = 's', global = true)]
    pub serial: Option<String>,

    /// Output format for lists
    #[arg(long, short = 'o', global = true, value_enum, default_value = "table")]
    pub output: OutputType,

    /// Config file (defaults to ~/.adbandroidconfig)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Show the adb version
    Version,

    /// Save a bug report (dumpsys, dumpstate, logcat) to a file
    Bugreport {
        /// Destination file on the host
        #[arg(long, short = 'd', default_value = "default.log")]
        dest: PathBuf,
    },

    /// Connect to a device over TCP/IP
    Connect {
        /// host[:port]
        device: String,
    },

    /// Reconnect to a device
    Reconnect {
        /// host[:port]
        device: String,
    },

    /// Disconnect from a TCP/IP device
    Disconnect {
        /// host[:port]
        device: String,
    },

    /// Copy a file from the host to the device
    Push {
        /// Path on the host
        src: String,
        /// Path on the device
        dest: String,
    },

    /// Copy a file from the device to the host
    Pull {
        /// Path on the device
        src: String,
        /// Path on the host
        dest: String,
    },

    /// List attached devices
    Devices {
        /// Include offline and unauthorized devices
        #[arg(short, long)]
        all: bool,

        /// Extra options passed to `adb devices` (after `--`)
        #[arg(last = true)]
        opts: Vec<String>,
    },

    /// Run a shell command on the device
    Shell {
        /// The command to execute
        #[arg(required = true, allow_hyphen_values = true, trailing_var_arg = true)]
        command: Vec<String>,
    },

    /// List installed packages
    Packages,

    /// Check whether a process is running
    PsStatus {
        /// Process name
        app: String,
    },

    /// Print the PID of a running process
    Pid {
        /// Process name
        app: String,
    },

    /// Install (or replace) an APK
    Install {
        /// Path to the APK on the host
        apk: String,

        /// Extra install options after `--` (e.g. -- -g -t)
        #[arg(last = true)]
        opts: Vec<String>,
    },

    /// Uninstall a package
    Uninstall {
        /// Package name (e.g. com.example.app)
        package: String,

        /// Extra uninstall options after `--` (e.g. -- -k)
        #[arg(last = true)]
        opts: Vec<String>,
    },

    /// Print the device serial number
    Serialno,

    /// Print one field from `dumpsys package`
    PackageInfo {
        /// Package name
        package: String,
        /// Field name (text before the colon)
        field: String,
    },

    /// Block until the device is online
    WaitForDevice,

    /// Flush pending writes on the device (`adb shell sync`)
    Sync,

    /// Start the adb server
    StartServer,

    /// Stop the adb server
    KillServer,

    /// Print the device state
    GetState,
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Devices {
            all: false,
            opts: Vec::new(),
        })
    }
}
