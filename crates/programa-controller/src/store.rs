//!
//! # ProgramA object store
//!
//! The narrow slice of the cluster store the controller talks to:
//! list and watch ProgramA objects, create Deployments.
//!
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::stream::BoxStream;

use k8_types::{InputK8Obj, K8Obj, K8Watch};
use k8_types::app::deployment::DeploymentSpec;

use programa_metadata::{ProgramAObj, ProgramASpec, ProgramRef};

use crate::error::StoreError;

pub type SharedStore<C> = Arc<C>;

pub type ProgramEventStream<'a> = BoxStream<'a, Result<ProgramEvent, StoreError>>;

/// Change observed on a ProgramA object
#[derive(Debug, Clone)]
pub enum ProgramEvent {
    Added(ProgramAObj),
    Modified(ProgramAObj),
    Deleted(ProgramRef),
}

impl From<K8Watch<ProgramASpec>> for ProgramEvent {
    fn from(watch: K8Watch<ProgramASpec>) -> Self {
        match watch {
            K8Watch::ADDED(obj) => Self::Added(obj),
            K8Watch::MODIFIED(obj) => Self::Modified(obj),
            K8Watch::DELETED(obj) => Self::Deleted(ProgramRef::from(&obj)),
        }
    }
}

/// Snapshot of ProgramA objects in a namespace
#[derive(Debug, Clone, Default)]
pub struct ProgramList {
    pub items: Vec<ProgramAObj>,
    /// version to resume watching from
    pub resource_version: String,
}

#[async_trait]
pub trait ProgramStore: Send + Sync {
    /// all ProgramA objects in the namespace, in store order
    async fn list_programs(&self, namespace: &str) -> Result<ProgramList, StoreError>;

    /// changes to ProgramA objects in the namespace after `resource_version`.
    /// The stream ends when the subscription is closed.
    fn watch_programs(
        &self,
        namespace: &str,
        resource_version: Option<String>,
    ) -> ProgramEventStream<'_>;

    /// create a Deployment. An existing Deployment with the same name is reported
    /// as [`StoreError::AlreadyExists`]
    async fn create_deployment(
        &self,
        input: InputK8Obj<DeploymentSpec>,
    ) -> Result<K8Obj<DeploymentSpec>, StoreError>;
}
