/// Argument vector for one adb invocation.
///
/// Built as `prefix [-s <device>] <subcommand> <args...>`. Empty tokens are
/// kept while building and dropped by [`AdbCommand::argv`], so callers can
/// push an empty option string without producing a blank argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdbCommand {
    tokens: Vec<String>,
}

impl AdbCommand {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            tokens: vec![prefix.into()],
        }
    }

    /// Insert the `-s <device>` selector right after the prefix
    pub fn with_device(mut self, device: Option<&str>) -> Self {
        if let Some(serial) = device {
            self.tokens.insert(1, serial.to_string());
            self.tokens.insert(1, "-s".to_string());
        }
        self
    }

    pub fn arg(mut self, token: impl Into<String>) -> Self {
        self.tokens.push(token.into());
        self
    }

    pub fn args<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tokens.extend(tokens.into_iter().map(Into::into));
        self
    }

    /// Append an option list as a single space-joined token
    pub fn opts(self, opts: &[&str]) -> Self {
        self.arg(join_opts(opts))
    }

    /// Tokens as built, empty ones included
    pub fn raw_tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Tokens to execute
    pub fn argv(&self) -> Vec<String> {
        filter_empty(&self.tokens)
    }

    pub fn display(&self) -> String {
        self.argv().join(" ")
    }
}

/// Join command options with single spaces
pub fn join_opts(opts: &[&str]) -> String {
    opts.join(" ")
}

/// Drop empty tokens, keeping the order of the rest
pub fn filter_empty(tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| !t.is_empty())
        .cloned()
        .collect()
}
