use serde::{Deserialize, Serialize};

/// Body returned by the JSON api whenever a request fails
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonError {
    pub error_message: String,
}
