//! Built-in stickers and the seam for an external media search provider.

use crate::elements::ElementKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Glyphs offered by the emoji picker.
pub const EMOJI_PALETTE: &[&str] = &[
    "😀", "😍", "🎨", "🌟", "💖", "✨", "🎮", "🎯", "🎪", "🎭",
];

/// Suggested debounce for search-as-you-type callers.
pub const SEARCH_DEBOUNCE_MS: u64 = 500;
/// Queries this short (after trimming) are not worth sending.
pub const MIN_QUERY_CHARS: usize = 3;

/// An entry of the built-in sticker picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sticker {
    pub name: String,
    pub kind: ElementKind,
    pub content: String,
}

impl Sticker {
    pub fn new(name: &str, kind: ElementKind, content: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
            content: content.to_string(),
        }
    }
}

/// The built-in sticker set.
pub fn builtin_stickers() -> Vec<Sticker> {
    use ElementKind::*;
    vec![
        Sticker::new("star", Emoji, "🌟"),
        Sticker::new("art", Emoji, "🎨"),
        Sticker::new("rainbow", Emoji, "🌈"),
        Sticker::new("heart", Emoji, "💖"),
        Sticker::new("sparkle", Emoji, "✨"),
        Sticker::new("laughing", AnimatedImage, "/laughing-429_256.gif"),
        Sticker::new("rocket", AnimatedImage, "/rocket-12318_256.gif"),
        Sticker::new("bee", AnimatedImage, "/bee-11140_256.gif"),
        Sticker::new("magic", AnimatedImage, "/magic-5966_256.gif"),
        Sticker::new("eyes", AnimatedImage, "/eyes-4836_256.gif"),
        Sticker::new("burst", Image, "/rb_2149311079.png"),
        Sticker::new("picture", Image, "/image.png"),
        Sticker::new("nebula", Image, "/coloured-nebula-background.png"),
        Sticker::new("with", Image, "/with.png"),
    ]
}

/// Look up a built-in sticker by name.
pub fn find_sticker(name: &str) -> Option<Sticker> {
    builtin_stickers().into_iter().find(|s| s.name == name)
}

/// One hit from a media search provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaResult {
    pub id: String,
    pub thumbnail_url: String,
    pub full_url: String,
}

impl MediaResult {
    /// URL to store as element content.
    pub fn content(&self, prefer_thumbnail: bool) -> &str {
        if prefer_thumbnail {
            &self.thumbnail_url
        } else {
            &self.full_url
        }
    }
}

#[derive(Debug, Error)]
pub enum MediaSearchError {
    #[error("Search request failed: {0}")]
    Request(String),
    #[error("Unexpected search response: {0}")]
    Response(String),
}

/// External sticker/animated-image search.
///
/// Fetching, debouncing and result rendering live with the caller; the board
/// only receives the chosen URL through `Board::place_media`.
pub trait MediaSearch {
    fn search(&self, query: &str) -> Result<Vec<MediaResult>, MediaSearchError>;
}

/// Whether a query is long enough to send to a provider.
pub fn should_search(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSearch(Vec<MediaResult>);

    impl MediaSearch for FixedSearch {
        fn search(&self, query: &str) -> Result<Vec<MediaResult>, MediaSearchError> {
            if query.is_empty() {
                return Err(MediaSearchError::Request("empty query".to_string()));
            }
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_builtin_stickers_have_unique_names() {
        let stickers = builtin_stickers();
        let mut names: Vec<&str> = stickers.iter().map(|s| s.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), stickers.len());
    }

    #[test]
    fn test_find_sticker() {
        let bee = find_sticker("bee").unwrap();
        assert_eq!(bee.kind, ElementKind::AnimatedImage);
        assert_eq!(bee.content, "/bee-11140_256.gif");
        assert!(find_sticker("nope").is_none());
    }

    #[test]
    fn test_should_search() {
        assert!(!should_search(""));
        assert!(!should_search("  ca "));
        assert!(should_search("cat"));
    }

    #[test]
    fn test_media_result_content() {
        let search = FixedSearch(vec![MediaResult {
            id: "1".to_string(),
            thumbnail_url: "https://media.example/thumb.gif".to_string(),
            full_url: "https://media.example/full.gif".to_string(),
        }]);

        let results = search.search("cats").unwrap();
        assert_eq!(results[0].content(false), "https://media.example/full.gif");
        assert_eq!(results[0].content(true), "https://media.example/thumb.gif");
        assert!(search.search("").is_err());
    }
}
