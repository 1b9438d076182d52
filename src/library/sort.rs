use super::Track;

/// Order tracks by [`Track::sort_key`], plain code-point comparison.
pub fn sort_collection(tracks: &mut [Track]) {
    tracks.sort_by_cached_key(Track::sort_key);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(title: &str, album: &str, artist: &str) -> Track {
        Track {
            title: title.into(),
            album: album.into(),
            artist: artist.into(),
            duration: 0,
            removed: false,
            index: 0,
        }
    }

    fn titles(tracks: &[Track]) -> Vec<&str> {
        tracks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn sorts_by_title_then_album_then_artist() {
        let mut tracks = vec![
            t("Song", "B", "X"),
            t("Alpha", "Z", "Z"),
            t("Song", "A", "Y"),
        ];
        sort_collection(&mut tracks);

        let keys: Vec<String> = tracks.iter().map(Track::sort_key).collect();
        assert_eq!(keys, vec!["AlphaZZ", "SongAY", "SongBX"]);
    }

    #[test]
    fn comparison_is_case_sensitive_code_point_order() {
        let mut tracks = vec![t("alpha", "", ""), t("Zeta", "", ""), t("Émile", "", "")];
        sort_collection(&mut tracks);
        assert_eq!(titles(&tracks), vec!["Zeta", "alpha", "Émile"]);
    }

    #[test]
    fn fields_are_joined_without_separator() {
        assert_eq!(t("AB", "", "C").sort_key(), t("A", "B", "C").sort_key());

        // "Ab" + "" beats "A" + "c" only because of the concatenation.
        let mut tracks = vec![t("A", "c", ""), t("Ab", "", "")];
        sort_collection(&mut tracks);
        assert_eq!(titles(&tracks), vec!["Ab", "A"]);
    }

    #[test]
    fn removed_tracks_are_still_sorted() {
        let mut tracks = vec![t("B", "", ""), t("A", "", "")];
        tracks[1].removed = true;
        sort_collection(&mut tracks);
        assert_eq!(titles(&tracks), vec!["A", "B"]);
        assert!(tracks[0].removed);
    }
}
