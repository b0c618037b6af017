use domain::ports::{CommandOutput, CommandRunner, CommandSpec, PortError};
use std::sync::Mutex;

type Responder = Box<dyn Fn(&CommandSpec) -> CommandOutput + Send + Sync>;

/// Records every command and answers with a canned output
pub(crate) struct ScriptedRunner {
    calls: Mutex<Vec<CommandSpec>>,
    respond: Responder,
}

impl ScriptedRunner {
    pub(crate) fn succeeding(stdout: &'static str) -> Self {
        Self::new(move |_| CommandOutput::success(stdout))
    }

    pub(crate) fn new(respond: impl Fn(&CommandSpec) -> CommandOutput + Send + Sync + 'static) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            respond: Box::new(respond),
        }
    }

    pub(crate) fn commands(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|c| c.to_string()).collect()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, PortError> {
        self.calls.lock().unwrap().push(spec.clone());
        Ok((self.respond)(spec))
    }
}

pub(crate) fn failed(stderr: &str) -> CommandOutput {
    CommandOutput {
        code: Some(1),
        stdout: String::new(),
        stderr: stderr.to_string(),
    }
}
