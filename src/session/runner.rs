//! Read-eval-print loop driving a `VideoPlayer`

use super::command::{Command, CommandError, HELP_TEXT};
use super::config::SessionConfig;
use super::render;
use crate::player::{self, Event, SearchResults, VideoPlayer};
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{BufRead, Write};

pub const WELCOME: &str = "Hello and welcome to YouTube, what would you like to do?\n\
Enter HELP for list of available commands or EXIT to terminate.";

pub const GOODBYE: &str = "YouTube has now terminated its execution. Thank you and goodbye!";

const INVALID_COMMAND: &str =
    "Please enter a valid command, type HELP for a list of available commands.";

/// Whether the loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// One interactive session over an input and an output
pub struct Session<R: BufRead, W: Write> {
    config: SessionConfig,
    player: VideoPlayer,
    input: R,
    output: W,
    rng: StdRng,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a new session
    pub fn new(config: SessionConfig, player: VideoPlayer, input: R, output: W) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            player,
            input,
            output,
            rng,
        }
    }

    /// The player, for inspection after a run
    pub fn player(&self) -> &VideoPlayer {
        &self.player
    }

    /// Run until EXIT or end of input
    pub fn run(&mut self) -> Result<()> {
        log::info!(
            "Session started with {} videos",
            self.player.number_of_videos()
        );
        self.write_line(WELCOME)?;

        while let Some(line) = self.prompt_line()? {
            if self.config.echo {
                self.write_line(line.trim_end())?;
            }

            match line.parse::<Command>() {
                Ok(command) => {
                    log::debug!("Executing {:?}", command);
                    if self.execute(command)? == Flow::Exit {
                        break;
                    }
                }
                Err(CommandError::Empty) => {}
                Err(err) => {
                    log::debug!("Rejected input {:?}: {}", line.trim_end(), err);
                    self.write_line(INVALID_COMMAND)?;
                }
            }
        }

        self.write_line(GOODBYE)?;
        log::info!("Session ended");
        Ok(())
    }

    fn execute(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::NumberOfVideos => {
                let line = format!("{} videos in the library", self.player.number_of_videos());
                self.write_line(&line)?;
            }
            Command::ShowAllVideos => {
                let lines = render::all_videos(&self.player.available_videos());
                self.write_lines(&lines)?;
            }
            Command::Play { video_id } => {
                let outcome = self.player.play(&video_id);
                self.report("play video", outcome)?;
            }
            Command::PlayRandom => {
                let outcome = self.player.play_random_with(&mut self.rng);
                self.report("play video", outcome)?;
            }
            Command::Stop => {
                let outcome = self.player.stop();
                self.report("stop video", outcome)?;
            }
            Command::Pause => {
                let outcome = self.player.pause();
                self.report("pause video", outcome)?;
            }
            Command::Continue => {
                let outcome = self.player.resume();
                self.report("continue video", outcome)?;
            }
            Command::ShowPlaying => {
                let line = render::now_playing(self.player.current());
                self.write_line(&line)?;
            }
            Command::CreatePlaylist { name } => {
                let outcome = self.player.create_playlist(&name);
                self.report("create playlist", outcome)?;
            }
            Command::AddToPlaylist { name, video_id } => {
                let outcome = self.player.add_to_playlist(&name, &video_id);
                self.report(&format!("add video to {}", name), outcome)?;
            }
            Command::RemoveFromPlaylist { name, video_id } => {
                let outcome = self.player.remove_from_playlist(&name, &video_id);
                self.report(&format!("remove video from {}", name), outcome)?;
            }
            Command::ClearPlaylist { name } => {
                let outcome = self.player.clear_playlist(&name);
                self.report(&format!("clear playlist {}", name), outcome)?;
            }
            Command::DeletePlaylist { name } => {
                let outcome = self.player.delete_playlist(&name);
                self.report(&format!("delete playlist {}", name), outcome)?;
            }
            Command::ShowPlaylist { name } => {
                let lines = match self.player.show_playlist(&name) {
                    Ok(playlist) => render::playlist(&self.player, &name, playlist),
                    Err(err) => {
                        vec![render::error_line(&format!("show playlist {}", name), &err)]
                    }
                };
                self.write_lines(&lines)?;
            }
            Command::ShowAllPlaylists => {
                let lines = render::all_playlists(&self.player.playlists().list_all());
                self.write_lines(&lines)?;
            }
            Command::SearchVideos { term } => {
                let results = self.player.search_by_title(&term);
                self.search_follow_up(results)?;
            }
            Command::SearchVideosWithTag { tag } => {
                let results = self.player.search_by_tag(&tag);
                self.search_follow_up(results)?;
            }
            Command::FlagVideo { video_id, reason } => {
                let outcome = match reason {
                    Some(reason) => self.player.flag_with_reason(&video_id, &reason),
                    None => self.player.flag(&video_id),
                };
                self.report("flag video", outcome)?;
            }
            Command::AllowVideo { video_id } => {
                let outcome = self.player.unflag(&video_id);
                self.report("remove flag from video", outcome)?;
            }
            Command::Help => self.write_line(HELP_TEXT)?,
            Command::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    /// Show search hits and play the one the user picks, if any
    fn search_follow_up(&mut self, results: player::Result<SearchResults>) -> Result<()> {
        let results = match results {
            Ok(results) => results,
            Err(err) => return self.write_line(&render::error_line("search videos", &err)),
        };

        let lines = render::search_results(&self.player, &results);
        self.write_lines(&lines)?;

        // End of input counts as "no"
        let answer = self.read_line()?.unwrap_or_default();
        if self.config.echo {
            self.write_line(&answer)?;
        }
        let outcome = self.player.select_from_results(&results, &answer);
        self.report("play video", outcome)
    }

    fn report(&mut self, action: &str, outcome: player::Result<Vec<Event>>) -> Result<()> {
        match outcome {
            Ok(events) => {
                let lines: Vec<String> = events.iter().map(render::event_line).collect();
                self.write_lines(&lines)
            }
            Err(err) => {
                log::debug!("{} refused: {:?}", action, err);
                self.write_line(&render::error_line(action, &err))
            }
        }
    }

    fn prompt_line(&mut self) -> Result<Option<String>> {
        if !self.config.prompt.is_empty() {
            write!(self.output, "{}", self.config.prompt).context("Failed to write prompt")?;
            self.output.flush().context("Failed to flush output")?;
        }
        self.read_line()
    }

    /// Next input line without its line ending, or None at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line).context("Failed to write output")
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            self.write_line(line)?;
        }
        Ok(())
    }
}
