use std::collections::HashSet;

use tracing::debug;

use crate::query::PROFILE_PATTERN;
use crate::tavily::SearchResult;

/// Unique profile URLs in first-seen order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProfileUrls {
    seen: HashSet<String>,
    urls: Vec<String>,
}

impl ProfileUrls {
    /// Keep results pointing at a profile page, strip query strings, drop repeats.
    pub fn collect(results: &[SearchResult]) -> Self {
        let mut profiles = ProfileUrls::default();

        for result in results {
            let Some(url) = result.url.as_deref() else {
                continue;
            };
            let clean = normalize(url);
            if clean.is_empty() || !clean.contains(PROFILE_PATTERN) {
                continue;
            }
            if profiles.push(clean) {
                debug!(
                    "Kept profile {} ({})",
                    clean,
                    result.title.as_deref().unwrap_or("untitled")
                );
            }
        }

        profiles
    }

    fn push(&mut self, url: &str) -> bool {
        if !self.seen.insert(url.to_string()) {
            return false;
        }
        self.urls.push(url.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }
}

/// Everything before the first `?`.
pub fn normalize(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}
