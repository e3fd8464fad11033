use crate::error::{AdbError, Result};
use log::{debug, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".adbandroidconfig";

/// Subcommand tokens passed to the adb binary
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CommandTokens {
    pub version: String,
    pub bugreport: String,
    pub connect: String,
    pub reconnect: String,
    pub disconnect: String,
    pub push: String,
    pub pull: String,
    pub devices: String,
    pub shell: String,
    pub install: String,
    pub uninstall: String,
    pub get_serialno: String,
    pub wait_for_device: String,
    pub start_server: String,
    pub kill_server: String,
    pub get_state: String,
    pub sync: String,
}

impl Default for CommandTokens {
    fn default() -> Self {
        Self {
            version: "version".to_string(),
            bugreport: "bugreport".to_string(),
            connect: "connect".to_string(),
            reconnect: "reconnect".to_string(),
            disconnect: "disconnect".to_string(),
            push: "push".to_string(),
            pull: "pull".to_string(),
            devices: "devices".to_string(),
            shell: "shell".to_string(),
            install: "install".to_string(),
            uninstall: "uninstall".to_string(),
            get_serialno: "get-serialno".to_string(),
            wait_for_device: "wait-for-device".to_string(),
            start_server: "start-server".to_string(),
            kill_server: "kill-server".to_string(),
            get_state: "get-state".to_string(),
            sync: "sync".to_string(),
        }
    }
}

/// Fixed scripts run through `adb shell`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellScripts {
    pub ps: String,
    pub package_list: String,
    /// `{}` is replaced with the package name
    pub dump_package_info: String,
}

impl Default for ShellScripts {
    fn default() -> Self {
        Self {
            ps: "ps".to_string(),
            package_list: "pm list packages".to_string(),
            dump_package_info: "dumpsys package {}".to_string(),
        }
    }
}

impl ShellScripts {
    pub fn dump_package_info_for(&self, package: &str) -> String {
        self.dump_package_info.replace("{}", package)
    }
}

/// Everything the executor needs to know about the adb binary.
///
/// Loaded from `~/.adbandroidconfig` (TOML). Every field is optional:
///
/// ```toml
/// prefix = "~/Android/Sdk/platform-tools/adb"
///
/// [commands]
/// get_serialno = "get-serialno"
///
/// [scripts]
/// package_list = "pm list packages -3"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AdbConfig {
    pub prefix: String,
    pub commands: CommandTokens,
    pub scripts: ShellScripts,
}

impl Default for AdbConfig {
    fn default() -> Self {
        Self {
            prefix: "adb".to_string(),
            commands: CommandTokens::default(),
            scripts: ShellScripts::default(),
        }
    }
}

impl AdbConfig {
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Load from the default location, then apply `ADB_PATH`.
    pub fn load() -> Self {
        let config = match Self::get_config_path() {
            Some(path) => Self::load_from_path(&path),
            None => {
                debug!("No home directory, using default config");
                Self::default()
            }
        };
        config.with_env_overrides()
    }

    /// Lenient load: a missing or broken file yields the defaults.
    pub fn load_from_path(path: &Path) -> Self {
        debug!("Loading config from: {:?}", path);

        if !path.exists() {
            debug!("No config file found at {:?}", path);
            return Self::default();
        }

        match Self::try_load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}", e);
                Self::default()
            }
        }
    }

    pub fn try_load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| AdbError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content).map_err(|message| AdbError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    fn from_toml(content: &str) -> std::result::Result<Self, String> {
        let mut config: AdbConfig = toml::from_str(content).map_err(|e| e.to_string())?;
        config.prefix = expand_path(&config.prefix);
        debug!("Parsed config: {:?}", config);
        Ok(config)
    }

    pub fn with_env_overrides(self) -> Self {
        match std::env::var("ADB_PATH") {
            Ok(path) if !path.is_empty() => {
                debug!("ADB_PATH overrides prefix: {}", path);
                self.with_prefix(expand_path(&path))
            }
            _ => self,
        }
    }

    pub fn get_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
    }
}

fn expand_path(raw: &str) -> String {
    match shellexpand::full(raw) {
        Ok(expanded) => expanded.into_owned(),
        Err(e) => {
            warn!("Could not expand '{}': {}", raw, e);
            raw.to_string()
        }
    }
}
