use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no credentials: set AUTH_TOKEN, or CLIENT_ID and CLIENT_SECRET")]
    MissingCredentials,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid settings file: {0}")]
    Settings(#[from] toml::de::Error),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{url} responded with {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("token exchange failed with {status}: {body}")]
    TokenExchange { status: u16, body: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
