use serde::{Deserialize, Serialize};

/// Represents a user playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name, in the case it was created with
    pub name: String,

    /// Video IDs (references Video::id), in insertion order, no duplicates
    video_ids: Vec<String>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: String) -> Self {
        Self {
            name,
            video_ids: Vec::new(),
        }
    }

    /// Video IDs in insertion order
    pub fn video_ids(&self) -> &[String] {
        &self.video_ids
    }

    /// Check whether a video is in this playlist
    pub fn contains(&self, video_id: &str) -> bool {
        self.video_ids.iter().any(|id| id == video_id)
    }

    /// Append a video. Returns false if it was already present.
    pub(crate) fn add_video(&mut self, video_id: String) -> bool {
        if self.contains(&video_id) {
            return false;
        }
        self.video_ids.push(video_id);
        true
    }

    /// Remove a video, keeping the order of the rest. Returns false if absent.
    pub(crate) fn remove_video(&mut self, video_id: &str) -> bool {
        let before = self.video_ids.len();
        self.video_ids.retain(|id| id != video_id);
        self.video_ids.len() != before
    }

    pub(crate) fn clear(&mut self) {
        self.video_ids.clear();
    }

    /// Number of videos in this playlist
    pub fn len(&self) -> usize {
        self.video_ids.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.video_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_rejects_duplicates() {
        let mut playlist = Playlist::new("Favourites".to_string());
        assert!(playlist.add_video("a".to_string()));
        assert!(playlist.add_video("b".to_string()));
        assert!(!playlist.add_video("a".to_string()));
        assert_eq!(playlist.video_ids(), ["a", "b"]);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut playlist = Playlist::new("Mix".to_string());
        for id in ["a", "b", "c"] {
            playlist.add_video(id.to_string());
        }

        assert!(playlist.remove_video("b"));
        assert!(!playlist.remove_video("b"));
        assert_eq!(playlist.video_ids(), ["a", "c"]);

        playlist.clear();
        assert!(playlist.is_empty());
    }
}
