//! # Search Filters
//!
//! [`SearchFilters`] is a set of result-category flags. Each flag becomes a
//! `filter:<name>` operator appended to the search query, narrowing results
//! to tweets that carry images, links, native video and so on.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A set of search filter flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchFilters(u32);

/// Flag names in bit order; index `i` names the flag `1 << i`.
const FLAG_NAMES: [&str; 14] = [
    "hashtags",
    "images",
    "links",
    "media",
    "native_video",
    "news",
    "periscope",
    "replies",
    "retweets",
    "safe",
    "twimg",
    "verified",
    "videos",
    "vine",
];

impl SearchFilters {
    /// No filter.
    pub const NONE: Self = Self(0);
    /// Tweets containing hashtags.
    pub const HASHTAGS: Self = Self(1u32 << 0);
    /// Tweets with attached images.
    pub const IMAGES: Self = Self(1u32 << 1);
    /// Tweets containing links.
    pub const LINKS: Self = Self(1u32 << 2);
    /// Tweets with any attached media.
    pub const MEDIA: Self = Self(1u32 << 3);
    /// Tweets with natively uploaded video.
    pub const NATIVE_VIDEO: Self = Self(1u32 << 4);
    /// Tweets linking to news sources.
    pub const NEWS: Self = Self(1u32 << 5);
    /// Tweets with Periscope links.
    pub const PERISCOPE: Self = Self(1u32 << 6);
    /// Replies.
    pub const REPLIES: Self = Self(1u32 << 7);
    /// Retweets.
    pub const RETWEETS: Self = Self(1u32 << 8);
    /// Tweets not marked as potentially sensitive.
    pub const SAFE: Self = Self(1u32 << 9);
    /// Tweets with pic.twitter.com images.
    pub const TWIMG: Self = Self(1u32 << 10);
    /// Tweets from verified accounts.
    pub const VERIFIED: Self = Self(1u32 << 11);
    /// Tweets with any video.
    pub const VIDEOS: Self = Self(1u32 << 12);
    /// Tweets with Vine links.
    pub const VINE: Self = Self(1u32 << 13);
    /// Every filter.
    pub const ALL: Self = Self((1u32 << FLAG_NAMES.len()) - 1);

    /// Raw bit representation.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Build a set from raw bits, dropping unknown bits.
    pub fn from_bits_truncate(bits: u32) -> Self {
        Self(bits & Self::ALL.0)
    }

    /// Whether no flag is set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether every flag in `other` is also set in `self`.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Add the flags in `other`.
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Iterate over the individual flags, lowest bit first.
    pub fn iter(self) -> impl Iterator<Item = SearchFilters> {
        (0..FLAG_NAMES.len())
            .map(|bit| Self(1u32 << bit))
            .filter(move |flag| self.contains(*flag))
    }

    /// Name of a single flag (`"images"`), or `None` for an empty or
    /// multi-flag set.
    pub fn name(self) -> Option<&'static str> {
        if self.0.count_ones() != 1 {
            return None;
        }
        FLAG_NAMES.get(self.0.trailing_zeros() as usize).copied()
    }

    /// Query operator for a single flag (`"filter:images"`).
    pub fn operator(self) -> Option<String> {
        self.name().map(|name| format!("filter:{name}"))
    }

    /// Query operators for every flag in the set, lowest bit first.
    pub fn operators(self) -> Vec<String> {
        self.iter().filter_map(Self::operator).collect()
    }
}

impl std::ops::BitOr for SearchFilters {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for SearchFilters {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

impl std::str::FromStr for SearchFilters {
    type Err = ValidationError;

    /// Parse a single flag name. `none` and `all` are accepted as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace('-', "_");
        match name.as_str() {
            "none" => return Ok(Self::NONE),
            "all" => return Ok(Self::ALL),
            _ => {}
        }
        FLAG_NAMES
            .iter()
            .position(|flag| *flag == name)
            .map(|bit| Self(1u32 << bit))
            .ok_or_else(|| ValidationError::UnknownFilter(s.to_string()))
    }
}
