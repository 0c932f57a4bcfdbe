use async_trait::async_trait;
use futures_util::stream;
use futures_util::StreamExt;
use tracing::{debug, trace};

use k8_client::K8Client;
use k8_client::http::status::StatusCode;
use k8_client::meta_client::{MetadataClient, TokenStreamResult};
use k8_types::{InputK8Obj, K8Obj, MetaStatus};
use k8_types::app::deployment::DeploymentSpec;

use programa_metadata::ProgramASpec;

use crate::error::StoreError;
use crate::store::{ProgramEvent, ProgramEventStream, ProgramList, ProgramStore};

#[async_trait]
impl ProgramStore for K8Client {
    async fn list_programs(&self, namespace: &str) -> Result<ProgramList, StoreError> {
        let k8_list = self
            .retrieve_items::<ProgramASpec, _>(namespace.to_owned())
            .await?;

        debug!(
            namespace,
            items = k8_list.items.len(),
            version = %k8_list.metadata.resource_version,
            "retrieved ProgramA items"
        );

        Ok(ProgramList {
            items: k8_list.items,
            resource_version: k8_list.metadata.resource_version,
        })
    }

    fn watch_programs(
        &self,
        namespace: &str,
        resource_version: Option<String>,
    ) -> ProgramEventStream<'_> {
        debug!(namespace, ?resource_version, "watching ProgramA");
        self.watch_stream_since::<ProgramASpec, _>(namespace.to_owned(), resource_version)
            .flat_map(|batch| stream::iter(watch_events(batch)))
            .boxed()
    }

    async fn create_deployment(
        &self,
        input: InputK8Obj<DeploymentSpec>,
    ) -> Result<K8Obj<DeploymentSpec>, StoreError> {
        let name = input.metadata.name.clone();
        self.create_item(input)
            .await
            .map_err(|err| create_error(name, err))
    }
}

/// Flatten one watch batch into events.
/// A failed batch yields a single client error, a failed item a decode error.
fn watch_events(batch: TokenStreamResult<ProgramASpec>) -> Vec<Result<ProgramEvent, StoreError>> {
    match batch {
        Ok(tokens) => {
            trace!(events = tokens.len(), "received ProgramA watch batch");
            tokens
                .into_iter()
                .map(|token| token.map(ProgramEvent::from).map_err(StoreError::Decode))
                .collect()
        }
        Err(err) => vec![Err(StoreError::K8Client(err))],
    }
}

/// API rejections carry the server's status, 409 means the name is taken
fn create_error(name: String, err: anyhow::Error) -> StoreError {
    match err.downcast_ref::<MetaStatus>() {
        Some(MetaStatus {
            code: Some(code), ..
        }) if *code == StatusCode::CONFLICT.as_u16() => StoreError::AlreadyExists(name),
        _ => StoreError::K8Client(err),
    }
}
