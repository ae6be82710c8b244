//! An in-memory playlist.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::media::PlaylistSink;

/// A playlist held in memory, with the player's move semantics.
///
/// Useful for previewing what a plan does to a playlist.
///
/// # Examples
///
/// ```
/// use dirload::media::PlaylistSink;
/// use dirload::operations::MemoryPlaylist;
///
/// let mut playlist = MemoryPlaylist::with_entries(["c", "a", "b"]);
/// playlist.move_entry(0, 3).unwrap();
/// assert_eq!(playlist.entries(), ["a", "b", "c"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MemoryPlaylist {
    entries: Vec<String>,
}

impl MemoryPlaylist {
    /// An empty playlist.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A playlist holding `entries` in order.
    #[must_use]
    pub fn with_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// The entries in playlist order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Consumes the playlist, returning its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}

impl PlaylistSink for MemoryPlaylist {
    fn append(&mut self, file: &str) -> Result<()> {
        self.entries.push(file.to_string());
        Ok(())
    }

    fn move_entry(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.entries.len();
        if from >= len || to > len {
            return Err(Error::Playlist {
                details: format!("cannot move entry {from} to {to} in a playlist of {len}"),
            });
        }

        let entry = self.entries.remove(from);
        let target = if to > from { to - 1 } else { to };
        self.entries.insert(target, entry);
        Ok(())
    }

    fn count(&self) -> usize {
        self.entries.len()
    }
}
