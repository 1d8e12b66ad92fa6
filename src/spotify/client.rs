use crate::config::Settings;
use crate::error::{Error, Result};
use crate::spotify::{Auth, Credentials, Paginator, Playlist, PlaylistItem, Token};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

pub struct Spotify<'a> {
    http: Client,
    settings: Settings,
    credentials: Option<Credentials<'a>>,
    access_token: Option<Token>,
}

impl<'a> Spotify<'a> {
    pub fn new(settings: Settings, auth: Auth<'a>) -> Self {
        let (credentials, access_token) = match auth {
            Auth::Token(token) => (None, Some(Token::bearer(token))),
            Auth::ClientCredentials(credentials) => (Some(credentials), None),
        };

        Self {
            http: Client::new(),
            settings,
            credentials,
            access_token,
        }
    }

    /// Exchanges the client credentials for a token unless a usable one is
    /// already held. A user-supplied token is never exchanged.
    pub async fn request_access_token(&mut self) -> Result<()> {
        let credentials = match (&self.access_token, &self.credentials) {
            (Some(token), _) if !token.is_expired() => return Ok(()),
            (_, Some(credentials)) => credentials,
            (Some(_), None) => return Ok(()),
            (None, None) => return Err(Error::MissingCredentials),
        };

        let url = format!(
            "{}/api/token",
            self.settings.accounts_url.trim_end_matches('/')
        );
        log::info!("requesting access token from {}", url);

        let response = self
            .http
            .post(&url)
            .basic_auth(credentials.client_id, Some(credentials.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::TokenExchange {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let token: Token = response.json().await?;
        if let Some(expiration) = token.expiration {
            log::debug!("access token valid until {}", expiration);
        }
        self.access_token = Some(token);
        Ok(())
    }

    /// Authenticated GET against an absolute URL.
    pub async fn get<T: DeserializeOwned>(&mut self, url: &str) -> Result<T> {
        self.request_access_token().await?;

        let token = self
            .access_token
            .as_ref()
            .ok_or(Error::MissingCredentials)?;
        let response = self
            .http
            .get(url)
            .bearer_auth(&token.access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        Ok(response.json::<T>().await?)
    }

    pub fn user_playlists_url(&self, user_id: &str) -> Result<String> {
        let api_url = &self.settings.api_url;
        let mut url = Url::parse(api_url)
            .map_err(|e| Error::Config(format!("invalid api_url {}: {}", api_url, e)))?;

        url.path_segments_mut()
            .map_err(|()| Error::Config(format!("api_url {} cannot be a base", api_url)))?
            .pop_if_empty()
            .extend(["v1", "users", user_id, "playlists"]);

        Ok(url.into())
    }

    pub fn user_playlists(&mut self, user_id: &str) -> Result<Paginator<'_, 'a, Playlist>> {
        let url = self.user_playlists_url(user_id)?;
        Ok(Paginator::new(self, url))
    }

    pub fn playlist_tracks(&mut self, playlist: &Playlist) -> Paginator<'_, 'a, PlaylistItem> {
        Paginator::new(self, playlist.tracks.href.clone())
    }
}
