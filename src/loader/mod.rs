//! Catalog loading
//!
//! The catalog is supplied as pipe-delimited text and is read-only once
//! built. A default catalog ships with the binary.

mod parser;

pub use parser::parse_catalog;

use crate::model::Catalog;

/// Videos available when no other catalog is supplied
pub const BUILTIN_CATALOG: &str = "\
Funny Dogs | funny_dogs_video_id |  #dog , #animal
Amazing Cats | amazing_cats_video_id |  #cat , #animal
Another Cat Video | another_cat_video_id |  #cat , #animal
Life at Google | life_at_google_video_id |  #google , #career
Video about nothing | nothing_video_id |
";

/// Build the default catalog
pub fn builtin_catalog() -> Catalog {
    log::debug!("Loading built-in catalog");
    parse_catalog(BUILTIN_CATALOG)
}
