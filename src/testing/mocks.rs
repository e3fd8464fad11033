use crate::error::{AdbError, Result};
use crate::executor::ProcessRunner;
use crate::types::ExecResult;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::File;
use std::io::Write;

/// Canned report written by [`MockRunner::run_to_file`]
struct FileResponse {
    status: i32,
    content: String,
}

/// Process runner that records every command and replays canned results.
///
/// Responses are keyed by the space-joined argv (`"adb -s abc get-state"`).
/// Unknown commands succeed with empty output.
pub struct MockRunner {
    responses: HashMap<String, ExecResult>,
    file_response: Option<FileResponse>,
    fail_spawn: bool,
    calls: RefCell<Vec<Vec<String>>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            file_response: None,
            fail_spawn: false,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_output(self, cmd: &str, output: &str) -> Self {
        self.with_result(cmd, ExecResult::ok(output))
    }

    pub fn with_failure(self, cmd: &str, status: i32, stderr: &str) -> Self {
        self.with_result(cmd, ExecResult::new(status, stderr))
    }

    pub fn with_result(mut self, cmd: &str, result: ExecResult) -> Self {
        self.responses.insert(cmd.to_string(), result);
        self
    }

    pub fn with_file_output(mut self, status: i32, content: &str) -> Self {
        self.file_response = Some(FileResponse {
            status,
            content: content.to_string(),
        });
        self
    }

    pub fn fail_file_spawn(mut self) -> Self {
        self.fail_spawn = true;
        self
    }

    /// Every argv seen so far, in order
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    /// Every command seen so far, space-joined
    pub fn commands(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|argv| argv.join(" ")).collect()
    }

    pub fn last_command(&self) -> Option<String> {
        self.commands().pop()
    }

    pub fn was_called(&self, cmd: &str) -> bool {
        self.commands().iter().any(|c| c == cmd)
    }
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRunner for MockRunner {
    fn run(&self, argv: &[String]) -> ExecResult {
        self.calls.borrow_mut().push(argv.to_vec());
        self.responses
            .get(&argv.join(" "))
            .cloned()
            .unwrap_or_else(|| ExecResult::ok(""))
    }

    fn run_to_file(&self, argv: &[String], mut sink: File) -> Result<i32> {
        self.calls.borrow_mut().push(argv.to_vec());
        if self.fail_spawn {
            return Err(AdbError::Spawn {
                command: argv.join(" "),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "adb not found"),
            });
        }
        match &self.file_response {
            Some(response) => {
                sink.write_all(response.content.as_bytes())?;
                Ok(response.status)
            }
            None => Ok(0),
        }
    }
}
