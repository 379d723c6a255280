//! Collaborator types referenced by a tile
//!
//! A tile does not render, post, or launch anything itself; it holds
//! references to values owned by the surrounding system: an avatar icon,
//! a posted status notification, a launch intent, a contacts URI, and
//! the shortcut descriptor a tile can be built from. These types are
//! serde-serializable so the tile codec can carry them as opaque blobs
//! without inspecting their structure.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Reference into an external contacts or content store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Uri(String);

impl Uri {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Image handle for a tile avatar
///
/// Tagged variant: a stream carries whichever icon source the producing
/// side had on hand, and the consumer resolves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Icon {
    /// Drawable resource packaged with an application
    Resource {
        package: String,
        #[serde(rename = "resId")]
        res_id: i32,
    },
    /// Content URI resolvable by the consumer
    Uri { uri: Uri },
    /// Raw encoded image bytes
    Bitmap { data: Vec<u8> },
}

/// Launch descriptor for opening a conversation directly
///
/// Used when a tile has no backing shortcut to launch; the tile builder
/// derives the owning package from the intent when no explicit package
/// is supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaunchIntent {
    /// Action verb, e.g. "android.intent.action.VIEW"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    /// Package the intent resolves to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    /// Data URI the intent carries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Uri>,

    /// Free-form extras bundle
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extras: HashMap<String, Value>,
}

impl LaunchIntent {
    /// Create an empty intent
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an intent resolving to a specific package
    ///
    /// # Examples
    ///
    /// ```
    /// use people_tile_protocol::LaunchIntent;
    ///
    /// let intent = LaunchIntent::for_package("com.example.messages");
    /// assert_eq!(intent.package.as_deref(), Some("com.example.messages"));
    /// ```
    pub fn for_package(package: impl Into<String>) -> Self {
        Self {
            package: Some(package.into()),
            ..Self::default()
        }
    }

    /// Builder pattern: set the action verb
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Builder pattern: set the data URI
    pub fn with_data(mut self, data: Uri) -> Self {
        self.data = Some(data);
        self
    }

    /// Builder pattern: add an extras entry
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }
}

/// Reference to a notification posted for the conversation
///
/// Externally owned; the tile holds it so a renderer can surface the
/// active notification alongside the conversation, but never manages
/// its lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusNotification {
    /// Stable key of the posted notification
    pub key: String,

    /// Package that posted the notification
    pub package: String,

    /// Post time, UNIX epoch milliseconds
    #[serde(rename = "postTime")]
    pub post_time: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl StatusNotification {
    pub fn new(key: impl Into<String>, package: impl Into<String>, post_time: i64) -> Self {
        Self {
            key: key.into(),
            package: package.into(),
            post_time,
            title: None,
            text: None,
        }
    }
}

/// Descriptor for a pre-existing launcher shortcut backing a tile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shortcut {
    /// Shortcut ID, also used as the tile ID
    pub id: String,

    /// Display label
    pub label: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,

    /// Numeric user/account id owning the shortcut
    #[serde(rename = "userId")]
    pub user_id: i32,

    /// Package that published the shortcut
    pub package: String,
}

impl Shortcut {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        user_id: i32,
        package: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            user_id,
            package: package.into(),
        }
    }

    /// Builder pattern: set the shortcut icon
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_icon_is_tagged() {
        let icon = Icon::Resource {
            package: "com.example".to_string(),
            res_id: 42,
        };
        let value = serde_json::to_value(&icon).unwrap();
        assert_eq!(
            value,
            json!({"kind": "resource", "package": "com.example", "resId": 42})
        );
    }

    #[test]
    fn test_intent_omits_unset_fields() {
        let intent = LaunchIntent::for_package("com.example.messages");
        let value = serde_json::to_value(&intent).unwrap();
        assert_eq!(value, json!({"package": "com.example.messages"}));
    }

    #[test]
    fn test_intent_extras_round_trip() {
        let intent = LaunchIntent::for_package("com.example.messages")
            .with_action("view")
            .with_extra("conversationId", "abc");

        let blob = serde_json::to_vec(&intent).unwrap();
        let decoded: LaunchIntent = serde_json::from_slice(&blob).unwrap();
        assert_eq!(decoded, intent);
    }
}
