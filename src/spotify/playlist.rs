use super::page::Entry;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct TracksRef {
    pub href: String,
    pub total: Option<u32>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub tracks: TracksRef,
}

impl Entry for Playlist {
    type Entity = Playlist;

    fn into_entity(self) -> Option<Playlist> {
        Some(self)
    }
}
