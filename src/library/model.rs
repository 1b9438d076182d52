/// One song as described by a single Takeout record file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    pub album: String,
    pub artist: String,
    /// Length in whatever unit the export uses; 0 when the field was not numeric.
    pub duration: i64,
    /// Marked as removed in the source; dropped when writing, kept everywhere else.
    pub removed: bool,
    /// Playlist position hint, 0 when absent. Carried through, never sorted on.
    pub index: i64,
}

impl Track {
    /// Ordering key: title, album and artist glued together with no separator.
    ///
    /// `("AB", "")` and `("A", "B")` therefore compare equal on the first two
    /// fields. Output order depends on this, so leave it as is.
    pub fn sort_key(&self) -> String {
        let mut key = String::with_capacity(self.title.len() + self.album.len() + self.artist.len());
        key.push_str(&self.title);
        key.push_str(&self.album);
        key.push_str(&self.artist);
        key
    }
}
