use std::collections::HashMap;
use std::fmt;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Where an image can be found. Never the image bytes themselves, except as
/// an encoded inline payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageLocator {
    Url(String),
    Inline { mime_type: String, data: String },
}

impl ImageLocator {
    pub fn inline(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self::Inline {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Decodes an inline payload. URLs have no local bytes and yield `None`.
    pub fn decode_inline(&self) -> Option<Result<Vec<u8>, DomainError>> {
        match self {
            Self::Url(_) => None,
            Self::Inline { data, .. } => Some(
                BASE64
                    .decode(data.as_bytes())
                    .map_err(|e| DomainError::invalid_input(format!("invalid image payload: {e}"))),
            ),
        }
    }

    /// File extension matching the inline mime type.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Inline { mime_type, .. } => match mime_type.as_str() {
                "image/jpeg" | "image/jpg" => "jpg",
                "image/webp" => "webp",
                "image/gif" => "gif",
                _ => "png",
            },
            Self::Url(_) => "jpg",
        }
    }
}

impl fmt::Display for ImageLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::Inline { mime_type, data } => write!(f, "data:{mime_type};base64,{data}"),
        }
    }
}

/// Permission to write one cache entry, stamped with the result-list
/// generation it was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageTicket {
    index: usize,
    generation: u64,
}

/// Image locators keyed by position in the current recommendation list.
///
/// An entry at index `i` is only meaningful for the recommendation at `i` in
/// the list of the current generation. [`ImageCache::reset`] clears every
/// entry and starts a new generation, so tickets issued earlier can no
/// longer write.
#[derive(Debug, Default)]
pub struct ImageCache {
    entries: HashMap<usize, ImageLocator>,
    generation: u64,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.entries.clear();
        self.generation += 1;
    }

    pub fn get(&self, index: usize) -> Option<&ImageLocator> {
        self.entries.get(&index)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a ticket to resolve `index`, or `None` when already cached.
    ///
    /// No in-flight coalescing: two tickets for the same index can be
    /// outstanding at once and the last completion wins.
    pub fn begin(&self, index: usize) -> Option<ImageTicket> {
        if self.contains(index) {
            return None;
        }
        Some(ImageTicket {
            index,
            generation: self.generation,
        })
    }

    /// Stores the locator if the ticket belongs to the current generation.
    /// Returns whether the entry was written.
    pub fn complete(&mut self, ticket: ImageTicket, locator: ImageLocator) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.entries.insert(ticket.index, locator);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cached_index_yields_no_ticket() {
        let mut cache = ImageCache::new();
        let ticket = cache.begin(0).unwrap();
        assert!(cache.complete(ticket, ImageLocator::Url("https://a".into())));
        assert!(cache.begin(0).is_none());
        assert!(cache.begin(1).is_some());
    }

    #[test]
    fn stale_ticket_is_discarded_after_reset() {
        let mut cache = ImageCache::new();
        let ticket = cache.begin(0).unwrap();
        cache.reset();
        assert!(!cache.complete(ticket, ImageLocator::Url("https://old".into())));
        assert!(cache.is_empty());
    }

    #[test]
    fn racing_tickets_last_write_wins() {
        let mut cache = ImageCache::new();
        let first = cache.begin(2).unwrap();
        let second = cache.begin(2).unwrap();
        cache.complete(first, ImageLocator::Url("https://first".into()));
        cache.complete(second, ImageLocator::Url("https://second".into()));
        assert_eq!(cache.get(2), Some(&ImageLocator::Url("https://second".into())));
    }

    #[test]
    fn inline_locator_renders_data_uri_and_decodes() {
        let locator = ImageLocator::inline("image/png", "aGVsbG8=");
        assert_eq!(locator.to_string(), "data:image/png;base64,aGVsbG8=");
        assert_eq!(locator.decode_inline().unwrap().unwrap(), b"hello");
        assert!(ImageLocator::Url("https://x".into()).decode_inline().is_none());
    }
}
