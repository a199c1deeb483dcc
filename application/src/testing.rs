//! Test doubles shared by the executor and use case tests.

use crate::ports::model_capability::{CapabilityError, ModelCapability, ModelRequest};
use crate::ports::progress::ProgressNotifier;
use async_trait::async_trait;
use shootout_domain::{ExecutionMode, PromptPair, TaskDescriptor};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

enum Script {
    Reply(String),
    Delayed(Duration, String),
    Fail(String),
    Panic,
}

/// Capability whose behavior is scripted per backend name.
///
/// Unknown backends fail with `ModelNotAvailable`. Every call is recorded.
#[derive(Default)]
pub(crate) struct ScriptedCapability {
    scripts: HashMap<String, Script>,
    started: Mutex<Vec<String>>,
    finished: Mutex<Vec<String>>,
    system_prompts: Mutex<Vec<(String, String)>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedCapability {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(mut self, name: &str, response: &str) -> Self {
        self.scripts
            .insert(name.to_string(), Script::Reply(response.to_string()));
        self
    }

    pub(crate) fn delayed(mut self, name: &str, delay: Duration, response: &str) -> Self {
        self.scripts
            .insert(name.to_string(), Script::Delayed(delay, response.to_string()));
        self
    }

    pub(crate) fn fail(mut self, name: &str, error: &str) -> Self {
        self.scripts
            .insert(name.to_string(), Script::Fail(error.to_string()));
        self
    }

    pub(crate) fn panic(mut self, name: &str) -> Self {
        self.scripts.insert(name.to_string(), Script::Panic);
        self
    }

    pub(crate) fn started(&self) -> Vec<String> {
        self.started.lock().unwrap().clone()
    }

    pub(crate) fn finished(&self) -> Vec<String> {
        self.finished.lock().unwrap().clone()
    }

    pub(crate) fn system_prompt_for(&self, name: &str) -> Option<String> {
        self.system_prompts
            .lock()
            .unwrap()
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p.clone())
    }

    pub(crate) fn call_count(&self) -> usize {
        self.started.lock().unwrap().len()
    }

    pub(crate) fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ModelCapability for ScriptedCapability {
    async fn invoke(&self, request: &ModelRequest<'_>) -> Result<String, CapabilityError> {
        let name = request.backend_name.to_string();
        self.started.lock().unwrap().push(name.clone());
        self.system_prompts
            .lock()
            .unwrap()
            .push((name.clone(), request.system_prompt.to_string()));

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let result = match self.scripts.get(&name) {
            Some(Script::Reply(text)) => Ok(text.clone()),
            Some(Script::Delayed(delay, text)) => {
                tokio::time::sleep(*delay).await;
                Ok(text.clone())
            }
            Some(Script::Fail(error)) => Err(CapabilityError::Other(error.clone())),
            Some(Script::Panic) => panic!("scripted panic for {}", name),
            None => Err(CapabilityError::ModelNotAvailable(name.clone())),
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.finished.lock().unwrap().push(name);
        result
    }
}

/// Progress notifier that remembers what it was told
#[derive(Default)]
pub(crate) struct RecordingProgress {
    started: Mutex<Vec<String>>,
    completed: Mutex<Vec<(String, bool)>>,
    regimes: Mutex<Vec<ExecutionMode>>,
}

impl RecordingProgress {
    pub(crate) fn started(&self) -> Vec<String> {
        self.started.lock().unwrap().clone()
    }

    pub(crate) fn completed(&self) -> Vec<(String, bool)> {
        self.completed.lock().unwrap().clone()
    }

    pub(crate) fn regimes(&self) -> Vec<ExecutionMode> {
        self.regimes.lock().unwrap().clone()
    }
}

impl ProgressNotifier for RecordingProgress {
    fn on_regime_start(&self, mode: ExecutionMode, _total_tasks: usize) {
        self.regimes.lock().unwrap().push(mode);
    }

    fn on_task_start(&self, backend_name: &str, _mode: ExecutionMode) {
        self.started.lock().unwrap().push(backend_name.to_string());
    }

    fn on_task_complete(&self, backend_name: &str, _mode: ExecutionMode, error: Option<&str>) {
        self.completed
            .lock()
            .unwrap()
            .push((backend_name.to_string(), error.is_none()));
    }

    fn on_regime_complete(&self, _mode: ExecutionMode) {}
}

/// Descriptors for the given names, all sharing one prompt pair and mode
pub(crate) fn tasks(names: &[&str], mode: ExecutionMode) -> Vec<TaskDescriptor> {
    let prompts = PromptPair::new("system", "user");
    names
        .iter()
        .map(|name| TaskDescriptor::new(*name, "key", &prompts, "", mode))
        .collect()
}
