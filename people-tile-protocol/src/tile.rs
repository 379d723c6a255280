//! Conversation tile record, builder, and wire codec
//!
//! A tile carries everything needed to render one conversation in a
//! people surface: identity, display name and avatar, the owning
//! package, the last interaction time, importance/hidden flags, the
//! active notification if one is posted, and an optional launch intent
//! for tiles with no backing shortcut.
//!
//! Tiles are immutable once built. Construction goes through
//! [`PeopleTileBuilder`], either from scratch or from a launcher
//! [`Shortcut`](crate::Shortcut).
//!
//! ## Wire Format
//!
//! A tile serializes to a flat field sequence with no header:
//!
//! ```text
//! id                          nullable string
//! userName                    nullable string
//! userIcon                    opaque, nullable
//! uid                         i32
//! packageName                 nullable string
//! lastInteractionTimestamp    i64
//! notification                opaque, nullable
//! isImportantConversation     bool
//! isHiddenConversation        bool
//! intent                      opaque, nullable
//! ```
//!
//! Decoding consumes fields in exactly this order. The contact URI is
//! not part of the format and does not survive a round-trip.
//!
//! ## Example
//!
//! ```
//! use people_tile_protocol::{LaunchIntent, PeopleTile, PeopleTileBuilder};
//!
//! let intent = LaunchIntent::for_package("com.example.messages");
//! let tile = PeopleTileBuilder::new("abc", "Alice", None, Some(intent))
//!     .with_important_conversation(true)
//!     .build();
//!
//! let bytes = tile.to_bytes().unwrap();
//! let decoded = PeopleTile::from_bytes(&bytes).unwrap();
//! assert_eq!(decoded.id(), "abc");
//! assert_eq!(decoded.package_name(), Some("com.example.messages"));
//! assert!(decoded.is_important_conversation());
//! ```

use crate::handles::{Icon, LaunchIntent, Shortcut, StatusNotification, Uri};
use crate::parcel::{Parcel, ParcelReader};
use crate::Result;
use chrono::Utc;
use std::io::Read;
use tracing::trace;

/// Immutable record describing one conversation's display and
/// interaction metadata
///
/// All fields are read-only; mutation happens on [`PeopleTileBuilder`]
/// before `build()`. The icon, notification, and intent handles are
/// externally owned — the tile references them but does not manage
/// their lifetime.
#[derive(Debug, Clone)]
pub struct PeopleTile {
    id: String,
    user_name: String,
    user_icon: Option<Icon>,
    uid: i32,
    contact_uri: Option<Uri>,
    package_name: Option<String>,
    last_interaction_timestamp: i64,
    is_important_conversation: bool,
    is_hidden_conversation: bool,
    notification: Option<StatusNotification>,
    intent: Option<LaunchIntent>,
}

impl PeopleTile {
    /// Stable tile identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name for the conversation
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Avatar icon, if one is set
    pub fn user_icon(&self) -> Option<&Icon> {
        self.user_icon.as_ref()
    }

    /// Numeric user/account id
    pub fn uid(&self) -> i32 {
        self.uid
    }

    /// URI associated with the user in the external contacts store
    pub fn contact_uri(&self) -> Option<&Uri> {
        self.contact_uri.as_ref()
    }

    /// Package that provided the conversation
    pub fn package_name(&self) -> Option<&str> {
        self.package_name.as_deref()
    }

    /// Timestamp of the last interaction, UNIX epoch milliseconds, 0 if unset
    pub fn last_interaction_timestamp(&self) -> i64 {
        self.last_interaction_timestamp
    }

    /// Whether the conversation is marked important
    pub fn is_important_conversation(&self) -> bool {
        self.is_important_conversation
    }

    /// Whether the conversation should be hidden
    pub fn is_hidden_conversation(&self) -> bool {
        self.is_hidden_conversation
    }

    /// The active notification mapped to this conversation, if any
    pub fn notification(&self) -> Option<&StatusNotification> {
        self.notification.as_ref()
    }

    /// Intent to launch on tile activation
    ///
    /// Only set for tiles constructed without a backing shortcut; when
    /// present, the consumer launches this intent instead of resolving
    /// the shortcut ID.
    pub fn intent(&self) -> Option<&LaunchIntent> {
        self.intent.as_ref()
    }

    /// Resource flags carried by the record; always 0, tiles reference
    /// no special resources
    pub fn contents_flags(&self) -> i32 {
        0
    }

    /// Serialize to the flat wire format
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut parcel = Parcel::new();
        parcel.write_string(Some(&self.id));
        parcel.write_string(Some(&self.user_name));
        parcel.write_object(self.user_icon.as_ref())?;
        parcel.write_i32(self.uid);
        parcel.write_string(self.package_name.as_deref());
        parcel.write_i64(self.last_interaction_timestamp);
        parcel.write_object(self.notification.as_ref())?;
        parcel.write_bool(self.is_important_conversation);
        parcel.write_bool(self.is_hidden_conversation);
        parcel.write_object(self.intent.as_ref())?;
        Ok(parcel.into_bytes())
    }

    /// Deserialize a tile from a byte source
    ///
    /// Field order mirrors [`to_bytes`](Self::to_bytes) exactly; in
    /// particular the two booleans sit between the notification and the
    /// intent. No semantic validation is performed — malformed input
    /// fails with whatever the primitive reader reports.
    pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
        let mut parcel = ParcelReader::new(reader);
        let id = parcel.read_string()?.unwrap_or_default();
        let user_name = parcel.read_string()?.unwrap_or_default();
        let user_icon = parcel.read_object()?;
        let uid = parcel.read_i32()?;
        let package_name = parcel.read_string()?;
        let last_interaction_timestamp = parcel.read_i64()?;
        let notification = parcel.read_object()?;
        let is_important_conversation = parcel.read_bool()?;
        let is_hidden_conversation = parcel.read_bool()?;
        let intent = parcel.read_object()?;

        trace!(id = %id, "decoded tile");

        Ok(Self {
            id,
            user_name,
            user_icon,
            uid,
            contact_uri: None,
            package_name,
            last_interaction_timestamp,
            is_important_conversation,
            is_hidden_conversation,
            notification,
            intent,
        })
    }

    /// Deserialize a tile from a byte slice
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut cursor = bytes;
        Self::from_reader(&mut cursor)
    }
}

/// Builder for a [`PeopleTile`]
///
/// Mutators store values without validation and return the builder for
/// chaining. `build()` snapshots the current state; the builder stays
/// usable afterwards and later mutation never affects tiles already
/// built.
#[derive(Debug, Clone, Default)]
pub struct PeopleTileBuilder {
    id: String,
    user_name: String,
    user_icon: Option<Icon>,
    uid: i32,
    contact_uri: Option<Uri>,
    package_name: Option<String>,
    last_interaction_timestamp: i64,
    is_important_conversation: bool,
    is_hidden_conversation: bool,
    notification: Option<StatusNotification>,
    intent: Option<LaunchIntent>,
}

impl PeopleTileBuilder {
    /// Builder for tiles without a backing shortcut
    ///
    /// The package name is derived from the intent's package when an
    /// intent is supplied, otherwise it stays unset.
    pub fn new(
        id: impl Into<String>,
        user_name: impl Into<String>,
        user_icon: Option<Icon>,
        intent: Option<LaunchIntent>,
    ) -> Self {
        let package_name = intent.as_ref().and_then(|i| i.package.clone());
        Self {
            id: id.into(),
            user_name: user_name.into(),
            user_icon,
            package_name,
            intent,
            ..Self::default()
        }
    }

    /// Builder seeded from an existing launcher shortcut
    ///
    /// Copies id, label, icon, user id, and package; the intent stays
    /// unset because the consumer launches the shortcut itself.
    pub fn from_shortcut(shortcut: &Shortcut) -> Self {
        Self {
            id: shortcut.id.clone(),
            user_name: shortcut.label.clone(),
            user_icon: shortcut.icon.clone(),
            uid: shortcut.user_id,
            package_name: Some(shortcut.package.clone()),
            ..Self::default()
        }
    }

    /// Set the tile ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the display name
    pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self
    }

    /// Set the avatar icon
    pub fn with_user_icon(mut self, user_icon: Icon) -> Self {
        self.user_icon = Some(user_icon);
        self
    }

    /// Set the numeric user/account id
    pub fn with_uid(mut self, uid: i32) -> Self {
        self.uid = uid;
        self
    }

    /// Set the URI of the user in the external contacts store
    pub fn with_contact_uri(mut self, contact_uri: Uri) -> Self {
        self.contact_uri = Some(contact_uri);
        self
    }

    /// Set the owning package
    pub fn with_package_name(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = Some(package_name.into());
        self
    }

    /// Set the last interaction timestamp, UNIX epoch milliseconds
    pub fn with_last_interaction_timestamp(mut self, timestamp: i64) -> Self {
        self.last_interaction_timestamp = timestamp;
        self
    }

    /// Mark the conversation important
    pub fn with_important_conversation(mut self, important: bool) -> Self {
        self.is_important_conversation = important;
        self
    }

    /// Mark the conversation hidden
    pub fn with_hidden_conversation(mut self, hidden: bool) -> Self {
        self.is_hidden_conversation = hidden;
        self
    }

    /// Attach the active notification for the conversation
    pub fn with_notification(mut self, notification: StatusNotification) -> Self {
        self.notification = Some(notification);
        self
    }

    /// Set the intent to launch on activation
    pub fn with_intent(mut self, intent: LaunchIntent) -> Self {
        self.intent = Some(intent);
        self
    }

    /// Build an immutable tile from the current builder state
    pub fn build(&self) -> PeopleTile {
        PeopleTile {
            id: self.id.clone(),
            user_name: self.user_name.clone(),
            user_icon: self.user_icon.clone(),
            uid: self.uid,
            contact_uri: self.contact_uri.clone(),
            package_name: self.package_name.clone(),
            last_interaction_timestamp: self.last_interaction_timestamp,
            is_important_conversation: self.is_important_conversation,
            is_hidden_conversation: self.is_hidden_conversation,
            notification: self.notification.clone(),
            intent: self.intent.clone(),
        }
    }
}

/// Current UNIX timestamp in milliseconds, the unit interaction times
/// are recorded in
pub fn current_timestamp() -> i64 {
    Utc::now().timestamp_millis()
}
