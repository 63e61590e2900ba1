//! Command line parsing

use std::str::FromStr;
use thiserror::Error;

/// One user command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play { video_id: String },
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist { name: String },
    AddToPlaylist { name: String, video_id: String },
    RemoveFromPlaylist { name: String, video_id: String },
    ClearPlaylist { name: String },
    DeletePlaylist { name: String },
    ShowPlaylist { name: String },
    ShowAllPlaylists,
    SearchVideos { term: String },
    SearchVideosWithTag { tag: String },
    FlagVideo { video_id: String, reason: Option<String> },
    AllowVideo { video_id: String },
    Help,
    Exit,
}

/// Reasons a line could not be turned into a command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("{command} expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
}

/// Text printed for HELP
pub const HELP_TEXT: &str = "\
Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, url and paused status of the video that is currently playing (or paused).
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist
    CLEAR_PLAYLIST <playlist_name> - Removes all the videos from the playlist.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.
    SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.
    SHOW_ALL_PLAYLISTS - Display all the available playlists.
    SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.
    SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contains the provided tag.
    FLAG_VIDEO <video_id> <flag_reason> - Mark a video as flagged.
    ALLOW_VIDEO <video_id> - Removes a flag from a video.
    HELP - Displays help.
    EXIT - Terminates the program execution.";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let keyword = words.next().ok_or(CommandError::Empty)?.to_uppercase();
        let args: Vec<&str> = words.collect();

        let arg = |index: usize, command: &'static str, expected: &'static str| {
            args.get(index)
                .map(|s| s.to_string())
                .ok_or(CommandError::MissingArgument { command, expected })
        };

        let command = match keyword.as_str() {
            "NUMBER_OF_VIDEOS" => Command::NumberOfVideos,
            "SHOW_ALL_VIDEOS" => Command::ShowAllVideos,
            "PLAY" => Command::Play {
                video_id: arg(0, "PLAY", "<video_id>")?,
            },
            "PLAY_RANDOM" => Command::PlayRandom,
            "STOP" => Command::Stop,
            "PAUSE" => Command::Pause,
            "CONTINUE" => Command::Continue,
            "SHOW_PLAYING" => Command::ShowPlaying,
            "CREATE_PLAYLIST" => Command::CreatePlaylist {
                name: arg(0, "CREATE_PLAYLIST", "<playlist_name>")?,
            },
            "ADD_TO_PLAYLIST" => Command::AddToPlaylist {
                name: arg(0, "ADD_TO_PLAYLIST", "<playlist_name> <video_id>")?,
                video_id: arg(1, "ADD_TO_PLAYLIST", "<playlist_name> <video_id>")?,
            },
            "REMOVE_FROM_PLAYLIST" => Command::RemoveFromPlaylist {
                name: arg(0, "REMOVE_FROM_PLAYLIST", "<playlist_name> <video_id>")?,
                video_id: arg(1, "REMOVE_FROM_PLAYLIST", "<playlist_name> <video_id>")?,
            },
            "CLEAR_PLAYLIST" => Command::ClearPlaylist {
                name: arg(0, "CLEAR_PLAYLIST", "<playlist_name>")?,
            },
            "DELETE_PLAYLIST" => Command::DeletePlaylist {
                name: arg(0, "DELETE_PLAYLIST", "<playlist_name>")?,
            },
            "SHOW_PLAYLIST" => Command::ShowPlaylist {
                name: arg(0, "SHOW_PLAYLIST", "<playlist_name>")?,
            },
            "SHOW_ALL_PLAYLISTS" => Command::ShowAllPlaylists,
            "SEARCH_VIDEOS" => Command::SearchVideos {
                term: arg(0, "SEARCH_VIDEOS", "<search_term>")?,
            },
            "SEARCH_VIDEOS_WITH_TAG" => Command::SearchVideosWithTag {
                tag: arg(0, "SEARCH_VIDEOS_WITH_TAG", "<tag_name>")?,
            },
            "FLAG_VIDEO" => Command::FlagVideo {
                video_id: arg(0, "FLAG_VIDEO", "<video_id>")?,
                // The reason may span several words
                reason: (args.len() > 1).then(|| args[1..].join(" ")),
            },
            "ALLOW_VIDEO" => Command::AllowVideo {
                video_id: arg(0, "ALLOW_VIDEO", "<video_id>")?,
            },
            "HELP" => Command::Help,
            "EXIT" => Command::Exit,
            _ => return Err(CommandError::Unknown(keyword)),
        };

        Ok(command)
    }
}
