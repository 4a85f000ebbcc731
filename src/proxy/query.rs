//! Validation of the inbound order query body.

use serde_json::{json, Value};

use crate::cache::CacheKey;
use crate::proxy::error::ProxyError;

/// The three fields forwarded upstream, kept as the JSON values the caller
/// sent so they round-trip unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdersQuery {
    pub start_date: Value,
    pub end_date: Value,
    pub user_id: Value,
}

impl OrdersQuery {
    /// Extract and check the fields.
    ///
    /// `startDate` and `endDate` must be truthy. `userId` only has to be
    /// present and non-null, so `0` is accepted.
    pub fn from_body(body: &Value) -> Result<Self, ProxyError> {
        let field = |name: &str| body.get(name).cloned().unwrap_or(Value::Null);
        let start_date = field("startDate");
        let end_date = field("endDate");
        let user_id = field("userId");

        if !is_truthy(&start_date) || !is_truthy(&end_date) || user_id.is_null() {
            return Err(ProxyError::Validation);
        }

        Ok(Self {
            start_date,
            end_date,
            user_id,
        })
    }

    pub fn cache_key(&self) -> CacheKey {
        CacheKey::new(&self.user_id, &self.start_date, &self.end_date)
    }

    /// Body sent to the upstream API.
    pub fn upstream_body(&self) -> Value {
        json!({
            "startDate": self.start_date,
            "endDate": self.end_date,
            "userId": self.user_id,
        })
    }
}

/// Parse a raw request body. Anything that is not JSON counts as `{}`.
pub fn parse_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap_or_else(|_| Value::Object(Default::default()))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
