//!
//! # ProgramA metadata
//!
//! Definition of the ProgramA custom resource as stored in the Kubernetes key value store.
//!

pub mod program;

pub use program::*;

pub mod k8_types {
    pub use ::k8_types::*;
}
