//! People Tile Protocol
//!
//! Immutable conversation tile records with a fluent builder and a fixed
//! field-order binary codec. A tile bundles the metadata a people
//! surface needs to render one conversation: identity, display name and
//! avatar, owning package, last interaction time, importance and hidden
//! flags, the active notification, and an optional launch intent.

pub mod handles;
pub mod parcel;
pub mod tile;

mod error;

pub use error::{Result, TileError};
pub use handles::{Icon, LaunchIntent, Shortcut, StatusNotification, Uri};
pub use tile::{current_timestamp, PeopleTile, PeopleTileBuilder};
