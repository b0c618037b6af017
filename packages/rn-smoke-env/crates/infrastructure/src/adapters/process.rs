use domain::ports::{CommandOutput, CommandRunner, CommandSpec, OutputMode, PortError};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::Arc;

/// Runs commands on the host with `std::process`
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }

    /// Resolve through PATH so Windows `.cmd` shims are found; fall back to
    /// the bare name and let the OS report a missing program.
    fn resolve(program: &str) -> PathBuf {
        which::which(program).unwrap_or_else(|_| PathBuf::from(program))
    }

    fn append_log(log_file: &Path, spec: &CommandSpec, output: &CommandOutput) -> Result<(), PortError> {
        if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| PortError::io(parent, e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .map_err(|e| PortError::io(log_file, e))?;

        let cwd = spec
            .cwd
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| ".".to_string());
        let entry = format!(
            "*** {} (in {}) exited with {:?}\n{}{}\n",
            spec, cwd, output.code, output.stdout, output.stderr
        );
        file.write_all(entry.as_bytes())
            .map_err(|e| PortError::io(log_file, e))
    }
}

impl Default for SystemCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, PortError> {
        tracing::debug!("Running '{}'", spec);

        let mut command = Command::new(Self::resolve(&spec.program));
        command.args(&spec.args);
        if let Some(cwd) = &spec.cwd {
            command.current_dir(cwd);
        }

        let inherit = spec.output == OutputMode::Inherit;
        command.stdin(match (&spec.stdin, inherit) {
            (Some(_), _) => Stdio::piped(),
            (None, true) => Stdio::inherit(),
            (None, false) => Stdio::null(),
        });
        if inherit {
            command.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        } else {
            command.stdout(Stdio::piped()).stderr(Stdio::piped());
        }

        let spawn_err = |source| PortError::Spawn {
            program: spec.program.clone(),
            source,
        };
        let mut child = command.spawn().map_err(spawn_err)?;

        if let Some(input) = &spec.stdin {
            if let Some(mut stdin) = child.stdin.take() {
                // A child may close stdin without reading it; its exit code decides.
                match stdin.write_all(input.as_bytes()) {
                    Err(e) if e.kind() != io::ErrorKind::BrokenPipe => return Err(spawn_err(e)),
                    _ => {}
                }
            }
        }

        let raw = child.wait_with_output().map_err(spawn_err)?;
        let output = CommandOutput {
            code: raw.status.code(),
            stdout: String::from_utf8_lossy(&raw.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&raw.stderr).into_owned(),
        };

        if let OutputMode::LogTo(log_file) = &spec.output {
            Self::append_log(log_file, spec, &output)?;
        }

        Ok(output)
    }
}

/// Run a command on the blocking pool so async callers don't stall the runtime.
pub(crate) async fn run_blocking(
    runner: Arc<dyn CommandRunner>,
    spec: CommandSpec,
) -> Result<CommandOutput, PortError> {
    let program = spec.program.clone();
    tokio::task::spawn_blocking(move || runner.run(&spec))
        .await
        .map_err(|e| PortError::Spawn {
            program,
            source: io::Error::new(io::ErrorKind::Other, e),
        })?
}
