use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer};

pub struct Token {
    pub access_token: String,
    pub expiration: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct TokenData {
    access_token: String,
    expires_in: Option<i64>,
}

impl<'de> Deserialize<'de> for Token {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token_data = TokenData::deserialize(deserializer)?;
        let expiration = token_data
            .expires_in
            .map(|secs| Utc::now() + Duration::seconds(secs - 1));

        Ok(Token {
            access_token: token_data.access_token,
            expiration,
        })
    }
}

impl Token {
    /// A token handed in by the user; its lifetime is unknown.
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            expiration: None,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expiration.is_some_and(|at| Utc::now() >= at)
    }
}

pub struct Credentials<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
}

/// How the client obtains its bearer token.
pub enum Auth<'a> {
    Token(String),
    ClientCredentials(Credentials<'a>),
}

impl<'a> Auth<'a> {
    /// A non-empty token wins over client credentials.
    pub fn resolve(
        auth_token: Option<&'a str>,
        client_id: Option<&'a str>,
        client_secret: Option<&'a str>,
    ) -> Option<Self> {
        let present = |v: Option<&'a str>| v.filter(|s| !s.is_empty());

        if let Some(token) = present(auth_token) {
            return Some(Auth::Token(token.to_string()));
        }

        match (present(client_id), present(client_secret)) {
            (Some(client_id), Some(client_secret)) => Some(Auth::ClientCredentials(Credentials {
                client_id,
                client_secret,
            })),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_expiry_from_expires_in() {
        let token: Token = serde_json::from_str(
            r#"{"access_token":"abc","token_type":"Bearer","expires_in":3600}"#,
        )
        .unwrap();

        assert_eq!(token.access_token, "abc");
        let expiration = token.expiration.unwrap();
        assert!(expiration > Utc::now() + Duration::seconds(3500));
        assert!(!token.is_expired());
    }

    #[test]
    fn zero_lifetime_is_expired() {
        let token: Token =
            serde_json::from_str(r#"{"access_token":"abc","expires_in":0}"#).unwrap();
        assert!(token.is_expired());
    }

    #[test]
    fn user_token_never_expires() {
        assert!(!Token::bearer("abc").is_expired());
    }

    #[test]
    fn token_takes_precedence() {
        let auth = Auth::resolve(Some("tok"), Some("id"), Some("secret"));
        assert!(matches!(auth, Some(Auth::Token(t)) if t == "tok"));
    }

    #[test]
    fn empty_token_falls_back_to_credentials() {
        let auth = Auth::resolve(Some(""), Some("id"), Some("secret"));
        match auth {
            Some(Auth::ClientCredentials(creds)) => {
                assert_eq!(creds.client_id, "id");
                assert_eq!(creds.client_secret, "secret");
            }
            _ => panic!("expected client credentials"),
        }
    }

    #[test]
    fn nothing_usable() {
        assert!(Auth::resolve(None, Some("id"), None).is_none());
        assert!(Auth::resolve(Some(""), Some(""), Some("secret")).is_none());
    }
}
