use futures_util::StreamExt;
use tracing::{debug, error, info, instrument, trace};

use fluvio_future::timer::sleep;
use k8_types::K8Obj;

use programa_metadata::{ProgramAObj, ProgramInstance};

use crate::config::{ControllerConfig, WatchClosePolicy};
use crate::error::{ApplyError, ControllerError};
use crate::k8::objects::deployment::{K8DeploymentSpec, generate_deployment};
use crate::store::{ProgramEvent, ProgramStore, SharedStore};

/// Outcome counters for one list-then-watch pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    /// deployments created
    pub created: usize,
    /// apply attempts that were rejected or failed validation
    pub failed: usize,
    /// delete events, no action taken
    pub ignored: usize,
    /// watch items that could not be decoded
    pub dropped: usize,
    /// watch stream failures other than decoding
    pub watch_errors: usize,
}

/// Create a Deployment for every ProgramA object.
///
/// Objects are listed once, then changes are consumed from a watch started at
/// the listed version. Everything runs sequentially on the caller's task.
/// There is no existence check: re-delivery of an object repeats the create,
/// which the store rejects as already existing. Existing Deployments are
/// never updated or deleted.
pub struct ProgramADeploymentController<C> {
    config: ControllerConfig,
    store: SharedStore<C>,
}

impl<C> ProgramADeploymentController<C>
where
    C: ProgramStore,
{
    pub fn new(config: ControllerConfig, store: SharedStore<C>) -> Self {
        Self { config, store }
    }

    /// Run until the watch stream closes, or forever with [`WatchClosePolicy::Resync`].
    /// A watch that could not be established is fatal under either policy.
    pub async fn run(self) -> Result<(), ControllerError> {
        info!(namespace = %self.config.namespace, "starting ProgramA controller");
        loop {
            let stats = self.run_once().await?;
            info!(
                created = stats.created,
                failed = stats.failed,
                ignored = stats.ignored,
                dropped = stats.dropped,
                watch_errors = stats.watch_errors,
                "ProgramA watch closed"
            );

            match self.config.on_watch_close {
                WatchClosePolicy::Exit => {
                    info!("stopping ProgramA controller");
                    return Ok(());
                }
                WatchClosePolicy::Resync { backoff } => {
                    debug!(?backoff, "waiting to resync");
                    sleep(backoff).await;
                }
            }
        }
    }

    /// one list-then-watch pass, returns once the watch stream has ended
    pub async fn run_once(&self) -> Result<ReconcileStats, ControllerError> {
        let mut stats = ReconcileStats::default();
        let resume = self.sync_existing(&mut stats).await;
        self.watch_changes(resume, &mut stats).await?;
        Ok(stats)
    }

    /// Apply every existing ProgramA in listing order.
    /// Returns the version the watch should resume from, none if listing failed.
    #[instrument(skip(self, stats), fields(namespace = %self.config.namespace))]
    pub async fn sync_existing(&self, stats: &mut ReconcileStats) -> Option<String> {
        info!("processing existing ProgramA resources");
        let list = match self.store.list_programs(&self.config.namespace).await {
            Ok(list) => list,
            Err(err) => {
                error!(%err, "error listing existing ProgramA resources");
                return None;
            }
        };

        debug!(
            items = list.items.len(),
            version = %list.resource_version,
            "listed ProgramA resources"
        );

        for program in &list.items {
            self.reconcile(program, stats).await;
        }

        Some(list.resource_version)
    }

    /// Consume watch events until the stream ends.
    /// A stream that closes having yielded only errors was rejected by the server.
    #[instrument(skip(self, stats), fields(namespace = %self.config.namespace))]
    pub async fn watch_changes(
        &self,
        resume: Option<String>,
        stats: &mut ReconcileStats,
    ) -> Result<(), ControllerError> {
        info!("watching for new ProgramA resources");
        let mut stream = self
            .store
            .watch_programs(&self.config.namespace, resume);

        let mut delivered: usize = 0;
        let mut last_error = None;
        while let Some(event) = stream.next().await {
            match event {
                Ok(event) => {
                    delivered += 1;
                    self.process_event(event, stats).await;
                }
                Err(err) => {
                    if err.is_decode() {
                        error!(%err, "skipping undecodable ProgramA event");
                        stats.dropped += 1;
                    } else {
                        error!(%err, "ProgramA watch stream error");
                        stats.watch_errors += 1;
                    }
                    last_error = Some(err);
                }
            }
        }

        debug!(delivered, "ProgramA watch stream ended");
        match last_error {
            Some(err) if delivered == 0 => Err(ControllerError::WatchRejected(err)),
            _ => Ok(()),
        }
    }

    pub async fn process_event(&self, event: ProgramEvent, stats: &mut ReconcileStats) {
        match event {
            ProgramEvent::Added(program) => {
                info!(name = %program.metadata.name, "new ProgramA resource detected");
                self.reconcile(&program, stats).await;
            }
            ProgramEvent::Modified(program) => {
                info!(name = %program.metadata.name, "ProgramA resource modified");
                self.reconcile(&program, stats).await;
            }
            ProgramEvent::Deleted(program) => {
                info!(name = %program.name, "ProgramA resource deleted");
                stats.ignored += 1;
            }
        }
    }

    async fn reconcile(&self, program: &ProgramAObj, stats: &mut ReconcileStats) {
        match self.apply(program).await {
            Ok(deployment) => {
                info!(name = %deployment.metadata.name, "created deployment");
                stats.created += 1;
            }
            Err(err) => {
                if err.is_conflict() {
                    error!(%err, "deployment already exists, not updated");
                } else {
                    error!(%err, "error applying ProgramA");
                }
                stats.failed += 1;
            }
        }
    }

    /// Validate a ProgramA and submit exactly one create for its Deployment
    #[instrument(skip(self, program), fields(name = %program.metadata.name))]
    pub async fn apply(
        &self,
        program: &ProgramAObj,
    ) -> Result<K8Obj<K8DeploymentSpec>, ApplyError> {
        let instance =
            ProgramInstance::try_from(program).map_err(|source| ApplyError::InvalidSpec {
                name: program.metadata.name.clone(),
                source,
            })?;

        info!(
            env_var_value = instance.env_var_value(),
            "creating deployment"
        );

        let input = generate_deployment(&instance);
        let name = input.metadata.name.clone();
        trace!(?input, "deployment input");

        self.store
            .create_deployment(input)
            .await
            .map_err(|source| ApplyError::Create { name, source })
    }
}
