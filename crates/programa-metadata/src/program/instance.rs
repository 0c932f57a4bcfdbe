use crate::k8_types::K8Obj;

use super::ProgramASpec;

/// Environment variable that carries `spec.envVarValue` into the workload
pub const ENV_VAR_NAME: &str = "MY_ENV_VAR";

/// ProgramA object as stored in Kubernetes
pub type ProgramAObj = K8Obj<ProgramASpec>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    #[error("metadata.{0} is missing")]
    MissingMetadata(&'static str),
    #[error("spec is missing")]
    MissingSpec,
    #[error("spec.{0} is missing")]
    MissingField(&'static str),
    #[error("spec.{field} must be a string, found {found}")]
    InvalidField {
        field: &'static str,
        found: &'static str,
    },
}

/// Validated view of a ProgramA object.
/// Only the fields the controller derives its workload from are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramInstance {
    name: String,
    namespace: String,
    env_var_value: String,
}

impl ProgramInstance {
    pub fn new(
        name: impl Into<String>,
        namespace: impl Into<String>,
        env_var_value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            env_var_value: env_var_value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn env_var_value(&self) -> &str {
        &self.env_var_value
    }
}

impl TryFrom<&ProgramAObj> for ProgramInstance {
    type Error = SpecError;

    fn try_from(obj: &ProgramAObj) -> Result<Self, Self::Error> {
        if obj.metadata.name.is_empty() {
            return Err(SpecError::MissingMetadata("name"));
        }
        if obj.metadata.namespace.is_empty() {
            return Err(SpecError::MissingMetadata("namespace"));
        }
        let env_var_value = obj.spec.env_var_value()?;

        Ok(Self::new(
            obj.metadata.name.clone(),
            obj.metadata.namespace.clone(),
            env_var_value,
        ))
    }
}

/// Name and namespace of a ProgramA object, all that is carried by a delete event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramRef {
    pub name: String,
    pub namespace: String,
}

impl ProgramRef {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }
}

impl From<&ProgramAObj> for ProgramRef {
    fn from(obj: &ProgramAObj) -> Self {
        Self::new(obj.metadata.name.clone(), obj.metadata.namespace.clone())
    }
}
