//! Scripted executor for unit tests

use std::cell::RefCell;

use super::error::HostError;
use super::remote::{RemoteExecutor, RunOptions};

type Handler = Box<dyn FnMut(&str, &str) -> Result<String, HostError>>;

/// A command the executor was asked to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordedCall {
    pub host: String,
    pub command: String,
    pub options: RunOptions,
}

/// Executor that records every call and answers from a handler
pub(crate) struct ScriptedExecutor {
    handler: RefCell<Handler>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl ScriptedExecutor {
    pub(crate) fn new(
        handler: impl FnMut(&str, &str) -> Result<String, HostError> + 'static,
    ) -> Self {
        Self {
            handler: RefCell::new(Box::new(handler)),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Executor where every command succeeds with empty output
    pub(crate) fn ok() -> Self {
        Self::new(|_, _| Ok(String::new()))
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    pub(crate) fn calls_on(&self, host: &str) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.host == host)
            .map(|c| c.command.clone())
            .collect()
    }
}

impl RemoteExecutor for ScriptedExecutor {
    fn run(&self, host: &str, command: &str, options: RunOptions) -> Result<String, HostError> {
        self.calls.borrow_mut().push(RecordedCall {
            host: host.to_string(),
            command: command.to_string(),
            options,
        });
        (self.handler.borrow_mut())(host, command)
    }
}

pub(crate) fn connection_dropped(host: &str) -> HostError {
    HostError::ConnectionFailed {
        host: host.to_string(),
        message: "Connection reset by peer".to_string(),
    }
}
