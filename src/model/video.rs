use serde::{Deserialize, Serialize};
use std::fmt;

/// Reason recorded when a video is flagged without one
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// A single video in the catalog
///
/// Identity fields (`id`, `title`, `tags`) never change after the catalog is
/// built. Only the flag state is mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique identifier for this video
    pub id: String,

    /// Video title
    pub title: String,

    /// Tags, in catalog order
    pub tags: Vec<String>,

    /// Flag state (None = not flagged)
    flag: Option<String>,
}

impl Video {
    /// Create a new, unflagged video
    pub fn new(id: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags,
            flag: None,
        }
    }

    /// Whether this video is currently flagged
    pub fn is_flagged(&self) -> bool {
        self.flag.is_some()
    }

    /// Reason the video was flagged, if it is
    pub fn flag_reason(&self) -> Option<&str> {
        self.flag.as_deref()
    }

    /// Case-insensitive substring match on the title
    pub fn title_contains(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(&term.to_lowercase())
    }

    /// Case-insensitive exact match against any tag
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }

    /// Mark the video as flagged. An empty reason becomes the default one.
    pub(crate) fn set_flag(&mut self, reason: &str) {
        let reason = if reason.is_empty() {
            DEFAULT_FLAG_REASON
        } else {
            reason
        };
        self.flag = Some(reason.to_string());
    }

    pub(crate) fn clear_flag(&mut self) {
        self.flag = None;
    }
}

impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tags.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_video() -> Video {
        Video::new(
            "amazing_cats_video_id",
            "Amazing Cats",
            vec!["#cat".to_string(), "#animal".to_string()],
        )
    }

    #[test]
    fn test_display_format() {
        assert_eq!(
            cat_video().to_string(),
            "Amazing Cats (amazing_cats_video_id) [#cat #animal]"
        );

        let untagged = Video::new("nothing_video_id", "Video about nothing", Vec::new());
        assert_eq!(untagged.to_string(), "Video about nothing (nothing_video_id) []");
    }

    #[test]
    fn test_matching_ignores_case() {
        let video = cat_video();
        assert!(video.title_contains("CATS"));
        assert!(video.title_contains("mazing"));
        assert!(!video.title_contains("dog"));

        assert!(video.has_tag("#CAT"));
        // Tags match exactly, not by substring
        assert!(!video.has_tag("#ca"));
    }

    #[test]
    fn test_empty_reason_uses_default() {
        let mut video = cat_video();
        video.set_flag("");
        assert!(video.is_flagged());
        assert_eq!(video.flag_reason(), Some(DEFAULT_FLAG_REASON));

        video.clear_flag();
        assert!(!video.is_flagged());
        assert_eq!(video.flag_reason(), None);
    }
}
