// src/health/response.rs

use crate::error::TransportError;
use serde_json::Value;

/// Body of `GET /health`. Fields other than `database` are ignored.
#[derive(Debug, Clone, Default)]
pub struct HealthResponse {
    pub database: Option<Value>,
}

impl HealthResponse {
    /// Reads `database` off any JSON value. Arrays and scalars simply lack the
    /// field; only `null` cannot be read at all.
    pub fn from_json(body: Value) -> Result<Self, TransportError> {
        if body.is_null() {
            return Err(TransportError::NullBody);
        }

        Ok(Self {
            database: body.get("database").cloned(),
        })
    }

    /// Only the exact string `"ok"` counts as a healthy database.
    pub fn database_ok(&self) -> bool {
        matches!(&self.database, Some(Value::String(s)) if s == "ok")
    }
}
