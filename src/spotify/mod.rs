pub mod client;
pub mod page;
pub mod playlist;
pub mod token;
pub mod track;


pub use client::Spotify;
pub use page::Paginator;
pub use playlist::Playlist;
pub use token::{Auth, Credentials, Token};
pub use track::PlaylistItem;
