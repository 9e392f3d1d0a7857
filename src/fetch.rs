//! Fetching the raw monster collection.

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::{ForgeError, Result};

/// Fetch the raw record collection from `url`.
///
/// The body must be a JSON array. Elements are returned untyped; the
/// caller validates them with [`filter_valid`](crate::raw::filter_valid).
pub async fn fetch_raw_monsters(client: &Client, url: &str) -> Result<Vec<Value>> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ForgeError::HttpError {
            status: status.as_u16(),
            body,
        });
    }

    let records = records_from(response.json().await?)?;
    debug!("fetched {} raw records", records.len());
    Ok(records)
}

fn records_from(body: Value) -> Result<Vec<Value>> {
    match body {
        Value::Array(records) => Ok(records),
        other => Err(ForgeError::NotAnArray(type_name(&other).to_string())),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
