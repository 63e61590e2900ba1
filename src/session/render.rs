//! Turns player results into the lines shown to the user

use crate::model::{Playlist, Video};
use crate::player::{Event, NowPlaying, PlayerError, SearchResults, VideoPlayer};

/// Line for a single event
pub fn event_line(event: &Event) -> String {
    match event {
        Event::Stopped { title, .. } => format!("Stopping video: {}", title),
        Event::Playing { title, .. } => format!("Playing video: {}", title),
        Event::Paused { title, .. } => format!("Pausing video: {}", title),
        Event::Continued { title, .. } => format!("Continuing video: {}", title),
        Event::Flagged { title, reason, .. } => {
            format!("Successfully flagged video: {} (reason: {})", title, reason)
        }
        Event::Unflagged { title, .. } => {
            format!("Successfully removed flag from video: {}", title)
        }
        Event::PlaylistCreated { name } => format!("Successfully created new playlist: {}", name),
        Event::AddedToPlaylist {
            playlist, title, ..
        } => format!("Added video to {}: {}", playlist, title),
        Event::RemovedFromPlaylist {
            playlist, title, ..
        } => format!("Removed video from {}: {}", playlist, title),
        Event::PlaylistCleared { playlist } => {
            format!("Successfully removed all videos from {}", playlist)
        }
        Event::PlaylistDeleted { playlist } => format!("Deleted playlist: {}", playlist),
    }
}

/// Line for a refused operation, prefixed with what was attempted
///
/// `action` reads like "play video" or "add video to Mix".
pub fn error_line(action: &str, err: &PlayerError) -> String {
    if err.is_standalone() {
        err.to_string()
    } else {
        format!("Cannot {}: {}", action, err)
    }
}

/// A video as listed, with its flag marker if flagged
pub fn video_line(video: &Video) -> String {
    match video.flag_reason() {
        Some(reason) => format!("{} - FLAGGED (reason: {})", video, reason),
        None => video.to_string(),
    }
}

pub fn all_videos(videos: &[&Video]) -> Vec<String> {
    std::iter::once("Here's a list of all available videos:".to_string())
        .chain(videos.iter().map(|v| video_line(v)))
        .collect()
}

pub fn now_playing(current: Option<NowPlaying<'_>>) -> String {
    match current {
        None => "No video is currently playing".to_string(),
        Some(NowPlaying { video, paused }) => format!(
            "Currently playing: {}{}",
            video,
            if paused { " - PAUSED" } else { "" }
        ),
    }
}

/// Playlist heading plus one line per video. `shown_as` is the name as typed.
pub fn playlist(player: &VideoPlayer, shown_as: &str, playlist: &Playlist) -> Vec<String> {
    let mut lines = vec![format!("Showing playlist: {}", shown_as)];
    if playlist.is_empty() {
        lines.push(" No videos here yet".to_string());
        return lines;
    }
    lines.extend(
        playlist
            .video_ids()
            .iter()
            .filter_map(|id| player.catalog().get(id))
            .map(video_line),
    );
    lines
}

pub fn all_playlists(playlists: &[&Playlist]) -> Vec<String> {
    if playlists.is_empty() {
        return vec!["No playlists exist yet".to_string()];
    }
    std::iter::once("Showing all playlists:".to_string())
        .chain(playlists.iter().map(|p| format!(" {}", p.name)))
        .collect()
}

/// Numbered search hits followed by the selection prompt
pub fn search_results(player: &VideoPlayer, results: &SearchResults) -> Vec<String> {
    let mut lines = vec![format!("Here are the results for {}:", results.query)];
    lines.extend(
        results
            .video_ids()
            .iter()
            .filter_map(|id| player.catalog().get(id))
            .enumerate()
            .map(|(i, video)| format!(" {}) {}", i + 1, video)),
    );
    lines.push(
        "Would you like to play any of the above? If yes, specify the number of the video."
            .to_string(),
    );
    lines.push("If your answer is not a valid number, we will assume it's a no.".to_string());
    lines
}
