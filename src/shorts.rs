//! Short-form video feed.

use crate::youtube_api::{SearchResult, YouTubeClient};

/// How many shorts one feed load pulls in.
const FEED_SIZE: u32 = 15;

/// A loaded shorts feed with a cursor over its items.
///
/// The cursor clamps at both ends; `next`/`prev` report whether they moved so
/// the front end can disable the corresponding control.
#[derive(Debug)]
pub struct ShortsFeed {
    items: Vec<SearchResult>,
    current: usize,
}

impl ShortsFeed {
    /// Loads a fresh feed of short-form videos.
    pub async fn load(yt: &YouTubeClient) -> eyre::Result<Self> {
        let items = yt.search_shorts(FEED_SIZE).await?;
        Ok(Self::from_items(items))
    }

    /// Builds a feed over already-fetched items, cursor at the start.
    pub fn from_items(items: Vec<SearchResult>) -> Self {
        Self { items, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The short the cursor is on, or `None` for an empty feed.
    pub fn current(&self) -> Option<&SearchResult> {
        self.items.get(self.current)
    }

    /// Advances to the next short; returns whether the cursor moved.
    pub fn next(&mut self) -> bool {
        if self.current + 1 < self.items.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Steps back to the previous short; returns whether the cursor moved.
    pub fn prev(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// The external watch URL for the current short.
    pub fn watch_url(&self) -> Option<String> {
        self.current()
            .map(|short| format!("https://www.youtube.com/shorts/{}", short.id.video_id))
    }
}
