use crate::error::Result;
use crate::spotify::Spotify;
use std::io::Write;

/// Writes one `<track> - <artists>` line per track of every playlist owned
/// by `user_id`, playlist by playlist. Returns the number of lines written.
pub async fn print_user_tracks<W: Write>(
    spotify: &mut Spotify<'_>,
    user_id: &str,
    out: &mut W,
) -> Result<usize> {
    let playlists = spotify.user_playlists(user_id)?.collect_all().await?;
    log::info!("{} has {} playlists", user_id, playlists.len());

    let mut written = 0;
    for playlist in &playlists {
        log::info!(
            "listing {} [{}] ({} tracks)",
            playlist.name,
            playlist.id,
            playlist
                .tracks
                .total
                .map_or_else(|| "?".to_string(), |total| total.to_string())
        );

        let mut tracks = spotify.playlist_tracks(playlist);
        while let Some(track) = tracks.next().await? {
            writeln!(out, "{}", track)?;
            written += 1;
        }
        log::debug!("{} spanned {} pages", playlist.name, tracks.pages());
    }

    out.flush()?;
    Ok(written)
}
