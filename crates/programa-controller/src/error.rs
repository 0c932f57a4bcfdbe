use programa_metadata::SpecError;

/// Errors returned by a [`ProgramStore`](crate::store::ProgramStore)
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("{0} already exists")]
    AlreadyExists(String),
    #[error("undecodable watch event: {0}")]
    Decode(#[source] anyhow::Error),
    #[error("Kubernetes client error: {0}")]
    K8Client(#[from] anyhow::Error),
}

impl StoreError {
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists(_))
    }

    /// a single watch item that could not be decoded, the stream itself is fine
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

/// Failure to turn a single ProgramA object into a Deployment.
/// Never fatal to the controller loop.
#[derive(thiserror::Error, Debug)]
pub enum ApplyError {
    #[error("invalid ProgramA {name}: {source}")]
    InvalidSpec {
        name: String,
        #[source]
        source: SpecError,
    },
    #[error("failed to create deployment {name}: {source}")]
    Create {
        name: String,
        #[source]
        source: StoreError,
    },
}

impl ApplyError {
    /// true if the deployment was rejected because it already exists
    pub fn is_conflict(&self) -> bool {
        match self {
            Self::Create { source, .. } => source.is_already_exists(),
            Self::InvalidSpec { .. } => false,
        }
    }
}

/// Errors that stop the controller
#[derive(thiserror::Error, Debug)]
pub enum ControllerError {
    /// the watch closed having delivered only errors, e.g. a rejected request
    #[error("ProgramA watch could not be established: {0}")]
    WatchRejected(#[source] StoreError),
}
