//!
//! # ProgramA Controller
//!
//! Watches ProgramA custom resources and creates one Deployment per object.
//!
pub mod cli;
pub mod config;
pub mod error;
pub mod store;
pub mod k8;

pub use k8::controllers::ProgramADeploymentController;
pub use k8::controllers::ReconcileStats;
