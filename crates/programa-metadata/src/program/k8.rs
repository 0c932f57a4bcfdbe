//!
//! # ProgramA CRD
//!
//! Binds the ProgramA spec to its custom resource definition
//!
use crate::k8_types::{Spec, Crd, DefaultHeader, Status};

use super::ProgramASpec;
use super::ProgramAStatus;

pub use crd::PROGRAMA_API;

mod crd {

    use crate::k8_types::{Crd, CrdNames};

    pub const GROUP: &str = "crds.example.com";
    pub const V1: &str = "v1";

    pub const PROGRAMA_API: Crd = Crd {
        group: GROUP,
        version: V1,
        names: CrdNames {
            kind: "ProgramA",
            plural: "programas",
            singular: "programa",
        },
    };
}

impl Spec for ProgramASpec {
    type Status = ProgramAStatus;
    type Header = DefaultHeader;

    fn metadata() -> &'static Crd {
        &PROGRAMA_API
    }
}

impl Status for ProgramAStatus {}
