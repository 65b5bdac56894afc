// crates/files_helper/src/lib.rs

//! Opens paths with the operating system's default handler.

use anyhow::{Context, Result};
use std::env;
use std::ffi::OsStr;
use std::process::{Command, ExitStatus, Stdio};

/// Environment variable naming a program to use instead of the platform opener.
pub const OPEN_FILE_COMMAND_ENV: &str = "OPEN_FILE_COMMAND";
/// When set (to any value), nothing is launched.
pub const DISABLE_OPEN_FILE_ENV: &str = "DISABLE_OPEN_FILE";

/// The program (plus leading arguments) used to open a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenerConfig {
    pub program: String,
    pub args: Vec<String>,
    pub disabled: bool,
}

impl OpenerConfig {
    /// The platform default: `open` on macOS, the `url.dll` file protocol handler on
    /// Windows, `xdg-open` elsewhere. None of them hands the path to a shell.
    pub fn platform_default() -> Self {
        let (program, args): (&str, &[&str]) = if cfg!(target_os = "macos") {
            ("open", &[])
        } else if cfg!(target_os = "windows") {
            ("rundll32", &["url.dll,FileProtocolHandler"])
        } else {
            ("xdg-open", &[])
        };
        Self {
            program: program.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            disabled: false,
        }
    }

    /// Platform default, adjusted by `OPEN_FILE_COMMAND` and `DISABLE_OPEN_FILE`.
    pub fn from_env() -> Self {
        let mut config = Self::platform_default();
        if let Ok(program) = env::var(OPEN_FILE_COMMAND_ENV) {
            if !program.trim().is_empty() {
                config.program = program;
                config.args.clear();
            }
        }
        config.disabled = env::var_os(DISABLE_OPEN_FILE_ENV).is_some();
        config
    }

    fn command<P: AsRef<OsStr>>(&self, path: P) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }
}

fn run_opener<P: AsRef<OsStr>>(config: &OpenerConfig, path: P) -> Result<Option<ExitStatus>> {
    let path = path.as_ref();
    if config.disabled {
        log::debug!("{} is set; skipping open of {:?}", DISABLE_OPEN_FILE_ENV, path);
        return Ok(None);
    }
    log::debug!("Opening {:?} with {}", path, config.program);
    // The openers hand the file off and exit, so waiting here reaps them promptly.
    let status = config
        .command(path)
        .status()
        .with_context(|| format!("Failed to run {} for {:?}", config.program, path))?;
    Ok(Some(status))
}

/// Runs the opener for `path` using `config` and waits for it to hand the file off.
pub fn try_open_file_with<P: AsRef<OsStr>>(config: &OpenerConfig, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(status) = run_opener(config, path)? {
        if !status.success() {
            anyhow::bail!("{} exited with {} for {:?}", config.program, status, path);
        }
    }
    Ok(())
}

/// Runs the environment-configured opener for `path`.
pub fn try_open_file<P: AsRef<OsStr>>(path: P) -> Result<()> {
    try_open_file_with(&OpenerConfig::from_env(), path)
}

/// Opens a file in its default application. Can fail silently.
pub fn open_file<P: AsRef<OsStr>>(path: P) {
    if let Err(err) = try_open_file(path) {
        log::debug!("open_file failed: {:#}", err);
    }
}
