//! Playback state machine: play, stop, pause, continue, random play and flagging

use super::{Event, PlayerError, Result, VideoPlayer};
use crate::model::Video;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Which video, if any, is active
///
/// Holding the ID inside the variant makes "playing and paused at once"
/// unrepresentable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing(String),
    Paused(String),
}

impl PlaybackState {
    /// ID of the playing or paused video
    pub fn active_id(&self) -> Option<&str> {
        match self {
            PlaybackState::Idle => None,
            PlaybackState::Playing(id) | PlaybackState::Paused(id) => Some(id),
        }
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, PlaybackState::Paused(_))
    }
}

/// The active video together with its pause status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NowPlaying<'a> {
    pub video: &'a Video,
    pub paused: bool,
}

impl VideoPlayer {
    /// Play a video, stopping whatever is active first
    ///
    /// Replaying the video that is already playing stops and restarts it.
    pub fn play(&mut self, video_id: &str) -> Result<Vec<Event>> {
        let video = self.playable_video(video_id)?;
        let playing = Event::Playing {
            id: video.id.clone(),
            title: video.title.clone(),
        };

        let mut events: Vec<Event> = self.stop_active().into_iter().collect();
        self.playback = PlaybackState::Playing(video_id.to_string());
        log::debug!("Playback: playing {}", video_id);
        events.push(playing);
        Ok(events)
    }

    /// Stop the active video
    pub fn stop(&mut self) -> Result<Vec<Event>> {
        self.stop_active()
            .map(|event| vec![event])
            .ok_or(PlayerError::NoActiveVideo)
    }

    /// Play an unflagged video chosen uniformly at random
    pub fn play_random(&mut self) -> Result<Vec<Event>> {
        self.play_random_with(&mut rand::thread_rng())
    }

    /// Same as `play_random`, drawing from the given RNG
    ///
    /// Candidates are taken in title order so a seeded RNG always picks the
    /// same video.
    pub fn play_random_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Vec<Event>> {
        let chosen = self
            .available_videos()
            .choose(rng)
            .map(|v| v.id.clone())
            .ok_or(PlayerError::NoVideosAvailable)?;
        log::debug!("Random pick: {}", chosen);
        self.play(&chosen)
    }

    /// Pause the playing video
    pub fn pause(&mut self) -> Result<Vec<Event>> {
        match &self.playback {
            PlaybackState::Idle => Err(PlayerError::NoActiveVideo),
            PlaybackState::Paused(id) => Err(PlayerError::AlreadyPaused {
                id: id.clone(),
                title: self.title_of(id),
            }),
            PlaybackState::Playing(id) => {
                let id = id.clone();
                let event = Event::Paused {
                    title: self.title_of(&id),
                    id: id.clone(),
                };
                log::debug!("Playback: paused {}", id);
                self.playback = PlaybackState::Paused(id);
                Ok(vec![event])
            }
        }
    }

    /// Continue the paused video
    pub fn resume(&mut self) -> Result<Vec<Event>> {
        match &self.playback {
            PlaybackState::Idle => Err(PlayerError::NoActiveVideo),
            PlaybackState::Playing(id) => Err(PlayerError::NotPaused { id: id.clone() }),
            PlaybackState::Paused(id) => {
                let id = id.clone();
                let event = Event::Continued {
                    title: self.title_of(&id),
                    id: id.clone(),
                };
                log::debug!("Playback: continuing {}", id);
                self.playback = PlaybackState::Playing(id);
                Ok(vec![event])
            }
        }
    }

    /// The active video, if any
    pub fn current(&self) -> Option<NowPlaying<'_>> {
        let id = self.playback.active_id()?;
        let video = self.catalog.get(id)?;
        Some(NowPlaying {
            video,
            paused: self.playback.is_paused(),
        })
    }

    /// Flag a video with the default reason
    pub fn flag(&mut self, video_id: &str) -> Result<Vec<Event>> {
        self.flag_with_reason(video_id, "")
    }

    /// Flag a video, stopping it first if it is the active one
    ///
    /// An empty reason is recorded as "Not supplied".
    pub fn flag_with_reason(&mut self, video_id: &str, reason: &str) -> Result<Vec<Event>> {
        let video = self.video(video_id)?;
        if video.is_flagged() {
            return Err(PlayerError::AlreadyFlagged {
                id: video_id.to_string(),
            });
        }

        let mut events = Vec::new();
        if self.playback.active_id() == Some(video_id) {
            events.extend(self.stop_active());
        }

        let video = self
            .catalog
            .get_mut(video_id)
            .ok_or_else(|| PlayerError::VideoNotFound {
                id: video_id.to_string(),
            })?;
        video.set_flag(reason);
        log::debug!("Flagged {}: {:?}", video_id, video.flag_reason());

        events.push(Event::Flagged {
            id: video.id.clone(),
            title: video.title.clone(),
            reason: video.flag_reason().unwrap_or_default().to_string(),
        });
        Ok(events)
    }

    /// Remove the flag from a video
    pub fn unflag(&mut self, video_id: &str) -> Result<Vec<Event>> {
        let video = self
            .catalog
            .get_mut(video_id)
            .ok_or_else(|| PlayerError::VideoNotFound {
                id: video_id.to_string(),
            })?;
        if !video.is_flagged() {
            return Err(PlayerError::NotFlagged {
                id: video_id.to_string(),
            });
        }

        video.clear_flag();
        log::debug!("Unflagged {}", video_id);
        Ok(vec![Event::Unflagged {
            id: video.id.clone(),
            title: video.title.clone(),
        }])
    }

    /// Move to Idle, returning the stop event if something was active
    fn stop_active(&mut self) -> Option<Event> {
        let id = match std::mem::take(&mut self.playback) {
            PlaybackState::Idle => return None,
            PlaybackState::Playing(id) | PlaybackState::Paused(id) => id,
        };
        log::debug!("Playback: stopped {}", id);
        Some(Event::Stopped {
            title: self.title_of(&id),
            id,
        })
    }
}
