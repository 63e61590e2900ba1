use super::Video;
use std::collections::HashMap;

/// The fixed set of videos known to the player, indexed by ID
///
/// The catalog is the single owner of every `Video`. Playlists and the
/// playback state refer to videos by ID only, so flag changes made here are
/// visible everywhere.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    videos: HashMap<String, Video>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a video to the catalog. Returns false (and keeps the existing
    /// entry) if the ID is already taken.
    pub fn add_video(&mut self, video: Video) -> bool {
        if self.videos.contains_key(&video.id) {
            return false;
        }
        self.videos.insert(video.id.clone(), video);
        true
    }

    /// Get a video by ID
    pub fn get(&self, id: &str) -> Option<&Video> {
        self.videos.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Video> {
        self.videos.get_mut(id)
    }

    /// Get all videos, in no particular order
    pub fn videos(&self) -> impl Iterator<Item = &Video> {
        self.videos.values()
    }

    /// Snapshot of all videos sorted by title (ID breaks ties)
    pub fn sorted_by_title(&self) -> Vec<&Video> {
        let mut videos: Vec<&Video> = self.videos.values().collect();
        videos.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
        videos
    }

    /// Total number of videos
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

impl FromIterator<Video> for Catalog {
    fn from_iter<I: IntoIterator<Item = Video>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for video in iter {
            catalog.add_video(video);
        }
        catalog
    }
}
