//! The video player core
//!
//! `VideoPlayer` owns the catalog, the playlists and the playback state.
//! Every operation either succeeds with a list of `Event`s or fails with a
//! `PlayerError` without changing anything.
//!
//! The player is not thread-safe by itself; a host that shares it across
//! threads should put the whole player behind one `Mutex`.

mod error;
mod events;
mod playback;
mod playlists;
mod search;

pub use error::{PlayerError, Result};
pub use events::Event;
pub use playback::{NowPlaying, PlaybackState};
pub use playlists::PlaylistStore;
pub use search::{SearchKind, SearchResults};

use crate::model::{Catalog, Video};

/// Single-user video player over a fixed catalog
#[derive(Debug, Clone)]
pub struct VideoPlayer {
    catalog: Catalog,
    playlists: PlaylistStore,
    playback: PlaybackState,
}

impl VideoPlayer {
    /// Create a player over the given catalog, idle and with no playlists
    pub fn new(catalog: Catalog) -> Self {
        log::debug!("Creating player over {} videos", catalog.len());
        Self {
            catalog,
            playlists: PlaylistStore::new(),
            playback: PlaybackState::Idle,
        }
    }

    /// The catalog backing this player
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The playlists created so far
    pub fn playlists(&self) -> &PlaylistStore {
        &self.playlists
    }

    /// Current playback state
    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    /// Total number of videos in the catalog, flagged or not
    pub fn number_of_videos(&self) -> usize {
        self.catalog.len()
    }

    /// Unflagged videos, sorted by title
    pub fn available_videos(&self) -> Vec<&Video> {
        self.catalog
            .sorted_by_title()
            .into_iter()
            .filter(|v| !v.is_flagged())
            .collect()
    }

    /// Look up a video that must exist
    fn video(&self, id: &str) -> Result<&Video> {
        self.catalog
            .get(id)
            .ok_or_else(|| PlayerError::VideoNotFound { id: id.to_string() })
    }

    /// Look up a video that must exist and must not be flagged
    fn playable_video(&self, id: &str) -> Result<&Video> {
        let video = self.video(id)?;
        match video.flag_reason() {
            Some(reason) => Err(PlayerError::VideoFlagged {
                id: id.to_string(),
                reason: reason.to_string(),
            }),
            None => Ok(video),
        }
    }

    /// Title of a catalog video, for events about it
    fn title_of(&self, id: &str) -> String {
        self.catalog
            .get(id)
            .map(|v| v.title.clone())
            .unwrap_or_default()
    }
}
