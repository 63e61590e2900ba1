//! Catalog text parser
//!
//! Each non-blank line describes one video:
//!
//! ```text
//! Funny Dogs | funny_dogs_video_id | #dog , #animal
//! ```
//!
//! The tag field is optional and comma separated.

use crate::model::{Catalog, Video};

/// Parse catalog text and build a catalog from every well-formed line
///
/// Malformed lines and duplicate IDs are skipped with a warning.
pub fn parse_catalog(text: &str) -> Catalog {
    let mut catalog = Catalog::new();

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let Some(video) = parse_line(line) else {
            log::warn!("Skipping malformed catalog line {}: {:?}", line_no, line);
            continue;
        };

        let id = video.id.clone();
        if !catalog.add_video(video) {
            log::warn!("Skipping duplicate video ID on line {}: {}", line_no, id);
        }
    }

    log::info!("Parsed {} videos from catalog", catalog.len());
    catalog
}

/// Convert one catalog line into a video. Needs at minimum a title and an ID.
fn parse_line(line: &str) -> Option<Video> {
    let mut fields = line.split('|').map(str::trim);

    let title = fields.next().filter(|s| !s.is_empty())?;
    let id = fields.next().filter(|s| !s.is_empty())?;
    let tags = fields
        .next()
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Some(Video::new(id, title, tags))
}
