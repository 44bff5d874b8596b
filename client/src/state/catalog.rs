//! Catalog browsing state.
//!
//! DESIGN
//! ======
//! `CatalogEntry` wraps the untouched wire `Video` and adds the display
//! aliases the UI binds to, so the server record stays exactly as received.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::Video;

/// A catalog record plus its display aliases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub video: Video,
    /// Alias of `video.category`.
    pub genre: String,
    /// Alias of `video.thumbnail_url`.
    pub thumbnail: String,
}

impl From<Video> for CatalogEntry {
    fn from(video: Video) -> Self {
        let genre = video.category.clone();
        let thumbnail = video.thumbnail_url.clone();
        Self { video, genre, thumbnail }
    }
}

/// Entries sharing one genre, in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenreGroup {
    pub genre: String,
    pub entries: Vec<CatalogEntry>,
}

/// Group entries by genre in first-appearance order.
///
/// Within the selected entry's genre the selected entry comes first; the
/// rest keep catalog order.
pub fn group_by_genre(entries: &[CatalogEntry], selected: Option<u64>) -> Vec<GenreGroup> {
    let mut groups: Vec<GenreGroup> = Vec::new();
    for entry in entries {
        match groups.iter_mut().find(|g| g.genre == entry.genre) {
            Some(group) => group.entries.push(entry.clone()),
            None => groups.push(GenreGroup { genre: entry.genre.clone(), entries: vec![entry.clone()] }),
        }
    }

    if let Some(id) = selected {
        for group in &mut groups {
            if let Some(pos) = group.entries.iter().position(|e| e.video.id == id) {
                let chosen = group.entries.remove(pos);
                group.entries.insert(0, chosen);
            }
        }
    }
    groups
}

/// Exact match on an already-normalized slug.
pub fn find_by_slug<'a>(entries: &'a [CatalogEntry], slug: &str) -> Option<&'a CatalogEntry> {
    entries.iter().find(|e| e.video.slug == slug)
}

/// Catalog page state.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub entries: Vec<CatalogEntry>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected: Option<u64>,
}

impl CatalogState {
    /// Replace the entries; keep the selection if it still exists, else pick
    /// the first entry.
    pub fn load(&mut self, entries: Vec<CatalogEntry>) {
        let keep = self.selected.filter(|id| entries.iter().any(|e| e.video.id == *id));
        self.selected = keep.or_else(|| entries.first().map(|e| e.video.id));
        self.entries = entries;
        self.loading = false;
        self.error = None;
    }

    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn select(&mut self, id: u64) {
        if self.entries.iter().any(|e| e.video.id == id) {
            self.selected = Some(id);
        }
    }

    pub fn selected_entry(&self) -> Option<&CatalogEntry> {
        let id = self.selected?;
        self.entries.iter().find(|e| e.video.id == id)
    }

    pub fn groups(&self) -> Vec<GenreGroup> {
        group_by_genre(&self.entries, self.selected)
    }
}
