use super::page::Entry;
use serde::Deserialize;
use std::fmt;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Artist {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Track {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
}

impl Track {
    pub fn artist_names(&self) -> String {
        self.artists
            .iter()
            .map(|artist| artist.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.artist_names())
    }
}

#[derive(Deserialize, Debug)]
pub struct PlaylistItem {
    #[serde(default)]
    pub track: Option<Track>,
}

impl Entry for PlaylistItem {
    type Entity = Track;

    fn into_entity(self) -> Option<Track> {
        self.track
    }
}
