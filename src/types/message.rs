//! Wire shapes for the host ⇄ client message channel.
//!
//! The channel itself carries loose `serde_json::Value`s (a postMessage-style
//! channel accepts anything from any origin), so every receive path goes
//! through a `from_value` that reads fields optionally and returns `None` for
//! shapes it does not recognize. Senders build values from these structs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Client → host: the embedded document loaded, hash-navigated, or changed
/// its title. `page` is the client's absolute location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavigationReport {
    pub page: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Client → host: latest vertical scroll offset, at most one per debounce
/// window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScrollReport {
    #[serde(rename = "scrollY")]
    pub scroll_y: u32,
}

/// Host → client: replay a saved scroll offset after a full reload.
/// Consumed at most once per client lifetime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RestoreCommand {
    #[serde(rename = "restoreScrollY")]
    pub restore_scroll_y: u32,
}

impl NavigationReport {
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Reads `{page, title?}`. A missing `page` means this is not a
    /// navigation report.
    pub fn from_value(msg: &Value) -> Option<Self> {
        let page = msg.get("page")?.as_str()?.to_string();
        let title = msg.get("title").and_then(|v| v.as_str()).map(String::from);
        Some(Self { page, title })
    }
}

impl ScrollReport {
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn from_value(msg: &Value) -> Option<Self> {
        let scroll_y = msg.get("scrollY")?.as_u64()?;
        Some(Self {
            scroll_y: u32::try_from(scroll_y).ok()?,
        })
    }
}

impl RestoreCommand {
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn from_value(msg: &Value) -> Option<Self> {
        let restore_scroll_y = msg.get("restoreScrollY")?.as_u64()?;
        Some(Self {
            restore_scroll_y: u32::try_from(restore_scroll_y).ok()?,
        })
    }
}
