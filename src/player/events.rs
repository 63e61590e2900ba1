//! Structured notifications produced by successful player operations

use serde::Serialize;

/// Something observable that an operation did
///
/// Operations return their events in the order they happened, so an
/// implicit stop always precedes the play or flag that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Event {
    Stopped { id: String, title: String },
    Playing { id: String, title: String },
    Paused { id: String, title: String },
    Continued { id: String, title: String },
    Flagged { id: String, title: String, reason: String },
    Unflagged { id: String, title: String },
    PlaylistCreated { name: String },
    AddedToPlaylist { playlist: String, id: String, title: String },
    RemovedFromPlaylist { playlist: String, id: String, title: String },
    PlaylistCleared { playlist: String },
    PlaylistDeleted { playlist: String },
}
