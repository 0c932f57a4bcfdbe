use std::collections::{HashMap, VecDeque};
use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures_util::StreamExt;
use futures_util::stream;
use tracing::subscriber::DefaultGuard;

use k8_types::{InputK8Obj, K8Obj, ObjectMeta};

use programa_metadata::{ProgramAObj, ProgramASpec};

use crate::error::StoreError;
use crate::k8::objects::deployment::K8DeploymentSpec;
use crate::store::{ProgramEvent, ProgramEventStream, ProgramList, ProgramStore};

type WatchSession = Vec<Result<ProgramEvent, StoreError>>;

/// Requests received by [`MemoryStore`], in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StoreOp {
    List,
    Watch(Option<String>),
    Create(String),
}

/// In memory store with scripted watch sessions.
/// Each call to watch consumes the next session; with none left the stream is empty.
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    programs: Vec<ProgramAObj>,
    fail_list: bool,
    watches: Mutex<VecDeque<WatchSession>>,
    deployments: Mutex<HashMap<String, K8Obj<K8DeploymentSpec>>>,
    ops: Mutex<Vec<StoreOp>>,
}

impl MemoryStore {
    pub const RESOURCE_VERSION: &'static str = "100";

    pub fn with_programs(mut self, programs: Vec<ProgramAObj>) -> Self {
        self.programs = programs;
        self
    }

    pub fn with_failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn with_watch(self, session: WatchSession) -> Self {
        self.watches.lock().expect("lock").push_back(session);
        self
    }

    pub fn ops(&self) -> Vec<StoreOp> {
        self.ops.lock().expect("lock").clone()
    }

    /// names of created deployments
    pub fn created(&self) -> Vec<String> {
        let mut names: Vec<String> = self.deployments.lock().expect("lock").keys().cloned().collect();
        names.sort();
        names
    }

    pub fn deployment(&self, name: &str) -> Option<K8Obj<K8DeploymentSpec>> {
        self.deployments.lock().expect("lock").get(name).cloned()
    }

    fn record(&self, op: StoreOp) {
        self.ops.lock().expect("lock").push(op);
    }
}

#[async_trait]
impl ProgramStore for MemoryStore {
    async fn list_programs(&self, _namespace: &str) -> Result<ProgramList, StoreError> {
        self.record(StoreOp::List);
        if self.fail_list {
            return Err(StoreError::K8Client(anyhow::anyhow!("list refused")));
        }
        Ok(ProgramList {
            items: self.programs.clone(),
            resource_version: Self::RESOURCE_VERSION.to_owned(),
        })
    }

    fn watch_programs(
        &self,
        _namespace: &str,
        resource_version: Option<String>,
    ) -> ProgramEventStream<'_> {
        self.record(StoreOp::Watch(resource_version));
        let session = self
            .watches
            .lock()
            .expect("lock")
            .pop_front()
            .unwrap_or_default();
        stream::iter(session).boxed()
    }

    async fn create_deployment(
        &self,
        input: InputK8Obj<K8DeploymentSpec>,
    ) -> Result<K8Obj<K8DeploymentSpec>, StoreError> {
        let name = input.metadata.name.clone();
        self.record(StoreOp::Create(name.clone()));

        let mut deployments = self.deployments.lock().expect("lock");
        if deployments.contains_key(&name) {
            return Err(StoreError::AlreadyExists(name));
        }

        let mut k8_obj = K8Obj::new(name.clone(), input.spec);
        k8_obj.metadata = ObjectMeta {
            name: name.clone(),
            namespace: input.metadata.namespace,
            ..Default::default()
        };
        deployments.insert(name, k8_obj.clone());
        Ok(k8_obj)
    }
}

pub(crate) fn programa_with_spec(name: &str, namespace: &str, spec: ProgramASpec) -> ProgramAObj {
    let mut obj = ProgramAObj::new(name.to_owned(), spec);
    obj.metadata = ObjectMeta {
        name: name.to_owned(),
        namespace: namespace.to_owned(),
        ..Default::default()
    };
    obj
}

pub(crate) fn programa(name: &str, namespace: &str, env_var_value: &str) -> ProgramAObj {
    programa_with_spec(
        name,
        namespace,
        ProgramASpec::with_env_var_value(env_var_value),
    )
}

/// Formatted log output captured for the current thread
#[derive(Debug, Clone, Default)]
pub(crate) struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// capture everything logged on this thread until the guard is dropped
    pub fn install() -> (Self, DefaultGuard) {
        let logs = Self::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .with_writer(move || writer.clone())
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (logs, guard)
    }

    pub fn lines_at(&self, level: &str) -> Vec<String> {
        let buffer = self.0.lock().expect("lock");
        String::from_utf8_lossy(&buffer)
            .lines()
            .filter(|line| line.split_whitespace().nth(1) == Some(level))
            .map(|line| line.to_owned())
            .collect()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
