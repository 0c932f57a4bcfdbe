//!
//! # Kubernetes side of the ProgramA controller
//!
//! Store adapter over the Kubernetes API, Deployment synthesis and the
//! reconcile loop.
//!

pub mod controllers;
pub mod objects;
mod client;

#[cfg(test)]
pub(crate) mod fixture;
