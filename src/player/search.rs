//! Title and tag search over unflagged videos

use super::{Event, PlayerError, Result, VideoPlayer};
use crate::model::Video;

/// How a search matched videos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    /// Case-insensitive substring of the title
    Title,
    /// Case-insensitive exact tag
    Tag,
}

/// Non-empty search hits, sorted by title
///
/// Hits are numbered from 1 for follow-up selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub query: String,
    pub kind: SearchKind,
    video_ids: Vec<String>,
}

impl SearchResults {
    /// Matching video IDs, in display order
    pub fn video_ids(&self) -> &[String] {
        &self.video_ids
    }

    /// Video ID for a 1-based position
    pub fn get(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|i| self.video_ids.get(i))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.video_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.video_ids.is_empty()
    }
}

impl VideoPlayer {
    /// Unflagged videos whose title contains `term`
    pub fn search_by_title(&self, term: &str) -> Result<SearchResults> {
        self.search(term, SearchKind::Title, |v| v.title_contains(term))
    }

    /// Unflagged videos carrying `tag`
    pub fn search_by_tag(&self, tag: &str) -> Result<SearchResults> {
        self.search(tag, SearchKind::Tag, |v| v.has_tag(tag))
    }

    fn search<F>(&self, query: &str, kind: SearchKind, matches: F) -> Result<SearchResults>
    where
        F: Fn(&Video) -> bool,
    {
        let video_ids: Vec<String> = self
            .available_videos()
            .into_iter()
            .filter(|v| matches(*v))
            .map(|v| v.id.clone())
            .collect();

        log::debug!("{:?} search for {:?}: {} hit(s)", kind, query, video_ids.len());
        if video_ids.is_empty() {
            return Err(PlayerError::NoResults {
                query: query.to_string(),
            });
        }

        Ok(SearchResults {
            query: query.to_string(),
            kind,
            video_ids,
        })
    }

    /// Play the hit picked by a raw 1-based answer
    ///
    /// Anything that is not a number in range is treated as "no" and does
    /// nothing.
    pub fn select_from_results(
        &mut self,
        results: &SearchResults,
        answer: &str,
    ) -> Result<Vec<Event>> {
        let picked = answer
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| results.get(n));

        match picked {
            Some(id) => self.play(id),
            None => {
                log::debug!("Ignoring search selection {:?}", answer);
                Ok(Vec::new())
            }
        }
    }
}
