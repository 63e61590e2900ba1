use thiserror::Error;

/// Reasons a player operation can be refused
///
/// Every failure is reported before any state is touched. The `Display`
/// text is the user-facing detail; callers add the action prefix
/// ("Cannot play video: ...") where one applies.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    #[error("Video does not exist")]
    VideoNotFound { id: String },

    #[error("Video is currently flagged (reason: {reason})")]
    VideoFlagged { id: String, reason: String },

    #[error("Playlist does not exist")]
    PlaylistNotFound { name: String },

    #[error("A playlist with the same name already exists")]
    DuplicateName { name: String },

    #[error("Video already added")]
    AlreadyInPlaylist { playlist: String, id: String },

    #[error("Video is not in playlist")]
    NotInPlaylist { playlist: String, id: String },

    #[error("No video is currently playing")]
    NoActiveVideo,

    #[error("Video already paused: {title}")]
    AlreadyPaused { id: String, title: String },

    #[error("Video is not paused")]
    NotPaused { id: String },

    #[error("No videos available")]
    NoVideosAvailable,

    #[error("No search results for {query}")]
    NoResults { query: String },

    #[error("Video is already flagged")]
    AlreadyFlagged { id: String },

    #[error("Video is not flagged")]
    NotFlagged { id: String },
}

/// Result type alias for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;

impl PlayerError {
    /// Whether the message stands on its own rather than completing a
    /// "Cannot <action>:" prefix
    pub fn is_standalone(&self) -> bool {
        matches!(
            self,
            PlayerError::AlreadyPaused { .. }
                | PlayerError::NoVideosAvailable
                | PlayerError::NoResults { .. }
        )
    }
}
