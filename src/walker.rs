//! Tree walk over a decoded wp-json document
//!
//! Every leaf scalar contributes the slash-joined chain of object keys that
//! leads to it, and every value under an `href` key is collected as a link.

use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::Value;

/// Key whose string values are collected as links
const HREF_KEY: &str = "href";

/// Endpoint paths and links extracted from one target
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScrapeResult {
    /// Key paths of every leaf scalar (duplicates kept)
    pub endpoints: Vec<String>,
    /// Values found under `href` keys
    #[serde(rename = "href_urls")]
    pub hrefs: Vec<String>,
}

/// Decode a response body and walk it
pub fn parse(body: &[u8]) -> Result<ScrapeResult> {
    let root: Value = serde_json::from_slice(body).map_err(Error::InvalidJson)?;
    walk(&root)
}

/// Walk a decoded document
pub fn walk(root: &Value) -> Result<ScrapeResult> {
    let mut result = ScrapeResult::default();
    let mut path = String::new();
    traverse(root, &mut path, &mut result)?;
    Ok(result)
}

// `path` is restored to its entry length before returning.
fn traverse(node: &Value, path: &mut String, result: &mut ScrapeResult) -> Result<()> {
    match node {
        Value::Object(map) => {
            for (key, value) in map {
                if key == HREF_KEY {
                    let href = value.as_str().ok_or_else(|| Error::NonStringHref {
                        path: format!("{}/{}", path, key),
                    })?;
                    result.hrefs.push(href.to_string());
                } else {
                    let len = path.len();
                    path.push('/');
                    path.push_str(key);
                    let walked = traverse(value, path, result);
                    path.truncate(len);
                    walked?;
                }
            }
        }
        // Array indices are not part of the path.
        Value::Array(items) => {
            for item in items {
                traverse(item, path, result)?;
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            if !path.is_empty() {
                result.endpoints.push(path.clone());
            }
        }
    }
    Ok(())
}
