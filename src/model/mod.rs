//! Data model for the video library
//!
//! This module defines the catalog's video records and the playlists
//! that reference them.

mod catalog;
mod playlist;
mod video;

pub use catalog::Catalog;
pub use playlist::Playlist;
pub use video::{Video, DEFAULT_FLAG_REASON};
