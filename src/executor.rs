use crate::error::{AdbError, Result};
use crate::types::ExecResult;
use log::{debug, info, warn};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::process::{Command, ExitStatus, Stdio};

/// Status reported when the tool could not be started at all
pub const SPAWN_FAILURE_STATUS: i32 = 127;

/// Seam between the adb operations and the operating system.
///
/// `argv[0]` is the program, the rest are its arguments. Tokens arrive
/// already filtered of empty strings.
pub trait ProcessRunner {
    /// Run to completion, capturing stdout on success and stderr on failure.
    fn run(&self, argv: &[String]) -> ExecResult;

    /// Run to completion with stdout written into `sink`. The sink is
    /// closed when this returns.
    fn run_to_file(&self, argv: &[String], sink: File) -> Result<i32>;
}

impl<T: ProcessRunner + ?Sized> ProcessRunner for &T {
    fn run(&self, argv: &[String]) -> ExecResult {
        (**self).run(argv)
    }

    fn run_to_file(&self, argv: &[String], sink: File) -> Result<i32> {
        (**self).run_to_file(argv, sink)
    }
}

/// Runs commands as real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, argv: &[String]) -> ExecResult {
        let Some((program, args)) = argv.split_first() else {
            return ExecResult::new(SPAWN_FAILURE_STATUS, "empty command");
        };
        info!("Executing {}", argv.join(" "));

        let (mut stderr_sink, stderr) = match stderr_buffer() {
            Ok(pair) => pair,
            Err(e) => {
                return ExecResult::new(
                    SPAWN_FAILURE_STATUS,
                    format!("Failed to create stderr buffer: {}", e),
                )
            }
        };

        let output = match Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(stderr)
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                warn!("Failed to execute {}: {}", program, e);
                return ExecResult::new(SPAWN_FAILURE_STATUS, e.to_string());
            }
        };

        if output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
            debug!("Output:\n{}", stdout);
            return ExecResult::ok(stdout);
        }

        let code = exit_code(output.status);
        let stderr_text = match read_back(&mut stderr_sink) {
            Ok(text) => text,
            Err(e) => format!("Failed to read stderr: {}", e),
        };
        debug!("Exited with {}: {}", code, stderr_text.trim_end());
        ExecResult::new(code, stderr_text)
    }

    fn run_to_file(&self, argv: &[String], sink: File) -> Result<i32> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| AdbError::Other("empty command".to_string()))?;
        info!("Executing {} (stdout redirected to file)", argv.join(" "));

        let (mut stderr_sink, stderr) = stderr_buffer()?;

        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::from(sink))
            .stderr(stderr)
            .status()
            .map_err(|source| AdbError::Spawn {
                command: argv.join(" "),
                source,
            })?;

        let code = exit_code(status);
        if code != 0 {
            let stderr_text = read_back(&mut stderr_sink)?;
            warn!("{} exited with {}: {}", program, code, stderr_text.trim_end());
        }
        Ok(code)
    }
}

/// Temporary file that buffers stderr, plus the handle given to the child
fn stderr_buffer() -> std::io::Result<(File, Stdio)> {
    let sink = tempfile::tempfile()?;
    let child_end = sink.try_clone()?;
    Ok((sink, Stdio::from(child_end)))
}

fn read_back(file: &mut File) -> std::io::Result<String> {
    file.seek(SeekFrom::Start(0))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Exit code, or the negated signal number when killed by a signal
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    -1
}
