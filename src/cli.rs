use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "trackdump")]
#[command(version, about = "Print every track of a Spotify user's playlists", long_about = None)]
pub struct Cli {
    /// Spotify user whose playlists are listed
    pub username: String,

    /// Pre-obtained bearer token, skips the credential exchange
    #[arg(long, env = "AUTH_TOKEN", hide_env_values = true)]
    pub auth_token: Option<String>,

    #[arg(long, env = "CLIENT_ID")]
    pub client_id: Option<String>,

    #[arg(long, env = "CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// TOML file overriding the API endpoints
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn username_is_required() {
        assert!(Cli::try_parse_from(["trackdump"]).is_err());
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from([
            "trackdump",
            "someone",
            "--auth-token",
            "tok",
            "--config",
            "alt.toml",
        ])
        .unwrap();

        assert_eq!(cli.username, "someone");
        assert_eq!(cli.auth_token.as_deref(), Some("tok"));
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
    }
}
