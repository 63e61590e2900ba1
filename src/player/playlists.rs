//! Named playlists with case-insensitive names

use super::{Event, PlayerError, Result, VideoPlayer};
use crate::model::Playlist;
use std::collections::BTreeMap;

/// All playlists, keyed by their upper-cased name
///
/// Keying on the folded name makes case-insensitive uniqueness structural.
/// The playlist itself keeps the name as it was created. Iteration follows
/// the folded key, which gives the case-insensitive ascending listing order.
#[derive(Debug, Clone, Default)]
pub struct PlaylistStore {
    playlists: BTreeMap<String, Playlist>,
}

/// Upper-case, so key order matches the listing order of upper-cased names
fn fold(name: &str) -> String {
    name.to_uppercase()
}

impl PlaylistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive lookup
    pub fn find(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&fold(name))
    }

    fn find_mut(&mut self, name: &str) -> Result<&mut Playlist> {
        self.playlists
            .get_mut(&fold(name))
            .ok_or_else(|| PlayerError::PlaylistNotFound {
                name: name.to_string(),
            })
    }

    /// All playlists, sorted by name ignoring case
    pub fn list_all(&self) -> Vec<&Playlist> {
        self.playlists.values().collect()
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    fn contains(&self, name: &str) -> bool {
        self.playlists.contains_key(&fold(name))
    }
}

impl VideoPlayer {
    /// Create an empty playlist, keeping the name's case
    pub fn create_playlist(&mut self, name: &str) -> Result<Vec<Event>> {
        let key = fold(name);
        if self.playlists.playlists.contains_key(&key) {
            return Err(PlayerError::DuplicateName {
                name: name.to_string(),
            });
        }

        self.playlists
            .playlists
            .insert(key, Playlist::new(name.to_string()));
        log::debug!("Created playlist {}", name);
        Ok(vec![Event::PlaylistCreated {
            name: name.to_string(),
        }])
    }

    /// Case-insensitive playlist lookup
    pub fn find_playlist(&self, name: &str) -> Option<&Playlist> {
        self.playlists.find(name)
    }

    /// Playlist contents for display
    pub fn show_playlist(&self, name: &str) -> Result<&Playlist> {
        self.playlists
            .find(name)
            .ok_or_else(|| PlayerError::PlaylistNotFound {
                name: name.to_string(),
            })
    }

    /// Append a video to a playlist
    ///
    /// A flagged video is refused as flagged even when it is already in the
    /// playlist.
    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) -> Result<Vec<Event>> {
        if !self.playlists.contains(name) {
            return Err(PlayerError::PlaylistNotFound {
                name: name.to_string(),
            });
        }
        let video = self.playable_video(video_id)?;
        let event = Event::AddedToPlaylist {
            playlist: name.to_string(),
            id: video.id.clone(),
            title: video.title.clone(),
        };

        let playlist = self.playlists.find_mut(name)?;
        if !playlist.add_video(video_id.to_string()) {
            return Err(PlayerError::AlreadyInPlaylist {
                playlist: name.to_string(),
                id: video_id.to_string(),
            });
        }
        log::debug!("Added {} to playlist {}", video_id, playlist.name);
        Ok(vec![event])
    }

    /// Remove a video from a playlist
    ///
    /// The video must exist in the catalog before its membership is checked.
    pub fn remove_from_playlist(&mut self, name: &str, video_id: &str) -> Result<Vec<Event>> {
        if !self.playlists.contains(name) {
            return Err(PlayerError::PlaylistNotFound {
                name: name.to_string(),
            });
        }
        let video = self.video(video_id)?;
        let event = Event::RemovedFromPlaylist {
            playlist: name.to_string(),
            id: video.id.clone(),
            title: video.title.clone(),
        };

        let playlist = self.playlists.find_mut(name)?;
        if !playlist.remove_video(video_id) {
            return Err(PlayerError::NotInPlaylist {
                playlist: name.to_string(),
                id: video_id.to_string(),
            });
        }
        log::debug!("Removed {} from playlist {}", video_id, playlist.name);
        Ok(vec![event])
    }

    /// Remove every video from a playlist, keeping the playlist
    pub fn clear_playlist(&mut self, name: &str) -> Result<Vec<Event>> {
        self.playlists.find_mut(name)?.clear();
        log::debug!("Cleared playlist {}", name);
        Ok(vec![Event::PlaylistCleared {
            playlist: name.to_string(),
        }])
    }

    /// Delete a playlist permanently
    pub fn delete_playlist(&mut self, name: &str) -> Result<Vec<Event>> {
        self.playlists
            .playlists
            .remove(&fold(name))
            .ok_or_else(|| PlayerError::PlaylistNotFound {
                name: name.to_string(),
            })?;
        log::debug!("Deleted playlist {}", name);
        Ok(vec![Event::PlaylistDeleted {
            playlist: name.to_string(),
        }])
    }
}
