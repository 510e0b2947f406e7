//! Static video catalog
//!
//! The two galleries shown on the page. Entries are authored here, in display
//! order, and never change at runtime.

use std::collections::HashSet;

use serde::Serialize;

use crate::video::{VideoId, extract_video_id};
use crate::{Result, ShowreelError};

/// One gallery entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoEntry {
    pub title: &'static str,
    pub url: &'static str,
}

impl VideoEntry {
    pub const fn new(title: &'static str, url: &'static str) -> Self {
        Self { title, url }
    }

    /// Resolves the hosted video identifier for this entry, if the URL has one.
    pub fn video_id(&self) -> Option<VideoId> {
        extract_video_id(self.url)
    }
}

/// Which gallery a collection belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    Records,
    Broadcast,
}

impl CollectionKind {
    /// Anchor id of the section rendering this collection.
    pub fn anchor(self) -> &'static str {
        match self {
            CollectionKind::Records => "records",
            CollectionKind::Broadcast => "broadcast",
        }
    }
}

/// Ordered, fixed list of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub kind: CollectionKind,
    entries: &'static [VideoEntry],
}

impl Collection {
    pub const fn new(kind: CollectionKind, entries: &'static [VideoEntry]) -> Self {
        Self { kind, entries }
    }

    /// Entries in display order.
    pub fn entries(&self) -> &'static [VideoEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks that every title is non-empty and unique within the collection.
    ///
    /// # Errors
    /// - `ShowreelError::EmptyTitle` - An entry has a blank title
    /// - `ShowreelError::DuplicateTitle` - Two entries share a title
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (position, entry) in self.entries.iter().enumerate() {
            if entry.title.trim().is_empty() {
                return Err(ShowreelError::EmptyTitle {
                    collection: self.kind.anchor(),
                    position,
                });
            }
            if !seen.insert(entry.title) {
                return Err(ShowreelError::DuplicateTitle {
                    collection: self.kind.anchor(),
                    title: entry.title.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Both galleries of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub records: Collection,
    pub broadcast: Collection,
}

impl Catalog {
    /// The portfolio as published.
    pub fn portfolio() -> Self {
        Self {
            records: Collection::new(CollectionKind::Records, RECORDS),
            broadcast: Collection::new(CollectionKind::Broadcast, BROADCAST),
        }
    }

    /// Validates both collections.
    ///
    /// # Errors
    /// - `ShowreelError::EmptyTitle` / `ShowreelError::DuplicateTitle` - See [`Collection::validate`]
    pub fn validate(&self) -> Result<()> {
        self.records.validate()?;
        self.broadcast.validate()
    }

    pub fn collections(&self) -> [&Collection; 2] {
        [&self.records, &self.broadcast]
    }

    /// Every entry across both collections, records first.
    pub fn entries(&self) -> impl Iterator<Item = &'static VideoEntry> + '_ {
        self.collections()
            .into_iter()
            .flat_map(|collection| collection.entries().iter())
    }

    /// Finds the entry whose URL resolves to `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&'static VideoEntry> {
        self.entries()
            .find(|entry| entry.video_id().is_some_and(|resolved| resolved.as_str() == id))
    }

    /// Distinct identifiers the page can activate, in display order.
    pub fn video_ids(&self) -> Vec<VideoId> {
        let mut seen = HashSet::new();
        self.entries()
            .filter_map(VideoEntry::video_id)
            .filter(|id| seen.insert(id.clone()))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::portfolio()
    }
}

const RECORDS: &[VideoEntry] = &[
    VideoEntry::new(
        "Don Broco & Nickelback — Songwriting",
        "https://youtu.be/jcrNNpMkBQ4",
    ),
    VideoEntry::new(
        "Dottie Andersson — Songwriting / Production",
        "https://www.youtube.com/watch?v=enomoC1cSO4",
    ),
    VideoEntry::new(
        "Rag’n’Bone Man — Songwriting / Keys / Arrangement",
        "https://www.youtube.com/watch?v=JYEEGTIWmoI&list=RDJYEEGTIWmoI&start_radio=1",
    ),
    VideoEntry::new(
        "Rag’n’Bone Man — Songwriting",
        "https://www.youtube.com/watch?v=EsmaAk5MDz8",
    ),
    VideoEntry::new(
        "P!nk — Songwriting / Production / Piano",
        "https://www.youtube.com/watch?v=ilut9TzMfXs",
    ),
    VideoEntry::new(
        "Sam Fischer — Songwriting",
        "https://www.youtube.com/watch?v=8U6Zll3ikIg&list=RD8U6Zll3ikIg&start_radio=1",
    ),
    VideoEntry::new(
        "Nothing But Thieves — Songwriting",
        "https://www.youtube.com/watch?v=xVf2DXAnQFo",
    ),
    VideoEntry::new(
        "Alissic — Songwriting",
        "https://www.youtube.com/watch?v=nL5RVGKEfpA",
    ),
    VideoEntry::new(
        "Jamie Grey — Songwriting",
        "https://www.youtube.com/watch?v=DwhTlXvLMr8",
    ),
    VideoEntry::new(
        "Valencia Grace — Songwriting / Production",
        "https://www.youtube.com/watch?v=Ca9GmeOKVN0",
    ),
    VideoEntry::new(
        "Lucy Blue — Songwriting / Production",
        "https://www.youtube.com/watch?v=u96C-Yu_I5Q",
    ),
    VideoEntry::new(
        "Muroki — Songwriting",
        "https://www.youtube.com/watch?v=cE3nBiuTfQ4&list=RDcE3nBiuTfQ4&start_radio=1",
    ),
];

const BROADCAST: &[VideoEntry] = &[
    VideoEntry::new(
        "Rag’n’Bone Man — Musical Director / Keys",
        "https://www.youtube.com/watch?v=zA-zoyipi6A",
    ),
    VideoEntry::new(
        "The BRIT Awards (Calvin Harris) — Vocal Arrangement",
        "https://www.youtube.com/watch?v=SMRVFIrPevA",
    ),
    VideoEntry::new(
        "The BRIT Awards (Jorja Smith) — Arrangement / Keys",
        "https://www.youtube.com/watch?v=mcJu5owNQtM",
    ),
    VideoEntry::new(
        "Echo Awards (Germany) — Arrangement / Keys",
        "https://www.youtube.com/watch?v=CdVojfp5Ulw",
    ),
    VideoEntry::new(
        "BBC Radio 1 Live Lounge — Arrangement / Keys",
        "https://www.youtube.com/watch?v=_W6IaB642FM",
    ),
    VideoEntry::new(
        "BBC Live Lounge — Arrangement / Keys",
        "https://www.youtube.com/watch?v=YYTLxoEcVF0",
    ),
    VideoEntry::new(
        "BBC Radio 2 Piano Room — Arrangement / Keys",
        "https://www.youtube.com/watch?v=lH5wI35WMHo",
    ),
    VideoEntry::new(
        "MTV Push — Arrangement / Keys",
        "https://www.youtube.com/watch?v=rjBDxcnfSMw",
    ),
];
