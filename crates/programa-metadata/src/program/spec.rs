//!
//! # ProgramA Spec
//!
//! ProgramA spec fields stay semi-structured: a malformed object must not fail
//! a whole list or watch batch. Fields are validated on access.
//!
use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use super::SpecError;

pub const ENV_VAR_VALUE_FIELD: &str = "envVarValue";

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct ProgramASpec(Option<Map<String, Value>>);

impl ProgramASpec {
    /// spec with only `envVarValue` set
    pub fn with_env_var_value(value: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(ENV_VAR_VALUE_FIELD.to_owned(), Value::String(value.into()));
        Self(Some(fields))
    }

    /// raw spec fields, none if the object has no spec
    pub fn fields(&self) -> Option<&Map<String, Value>> {
        self.0.as_ref()
    }

    pub fn env_var_value(&self) -> Result<&str, SpecError> {
        let fields = self.fields().ok_or(SpecError::MissingSpec)?;
        match fields.get(ENV_VAR_VALUE_FIELD) {
            None => Err(SpecError::MissingField(ENV_VAR_VALUE_FIELD)),
            Some(Value::String(value)) => Ok(value.as_str()),
            Some(other) => Err(SpecError::InvalidField {
                field: ENV_VAR_VALUE_FIELD,
                found: json_kind(other),
            }),
        }
    }
}

impl From<Map<String, Value>> for ProgramASpec {
    fn from(fields: Map<String, Value>) -> Self {
        Self(Some(fields))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
