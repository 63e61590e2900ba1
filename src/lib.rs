//! Video Library - single-user video player and playlist manager
//!
//! This library tracks a fixed catalog of videos, keeps at most one video
//! playing or paused, and lets the user organize videos into playlists.

pub mod loader;
pub mod model;
pub mod player;
pub mod session;

pub use player::{Event, PlayerError, VideoPlayer};
pub use session::{Session, SessionConfig};
