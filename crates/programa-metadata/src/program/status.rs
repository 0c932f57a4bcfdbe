use std::fmt;

use serde::{Deserialize, Serialize};

/// ProgramA objects carry no status; the controller never writes one back.
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct ProgramAStatus {}

impl fmt::Display for ProgramAStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ProgramAStatus")
    }
}
