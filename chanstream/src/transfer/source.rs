use std::{error::Error, fmt::Display, io, path::PathBuf};

use log::debug;
use reqwest::Client;
use url::Url;

use crate::Config;

/// Where the playlist text comes from.
#[derive(Debug, Clone)]
pub enum PlaylistSource {
    Http { client: Client, url: Url },
    File(PathBuf),
}

impl PlaylistSource {
    /// A configured `playlistFile` wins over the URL built from `baseUrl`.
    pub fn from_config(config: &Config, client: Client) -> Result<Self, url::ParseError> {
        if let Some(file) = &config.playlist_file {
            return Ok(Self::File(file.into()));
        }

        Ok(Self::Http {
            client,
            url: config.playlist_url()?,
        })
    }

    /// Returns the raw body; decoding is left to the parser.
    pub async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        debug!("Fetching playlist from {}", self);

        match self {
            Self::Http { client, url } => {
                let response = client.get(url.clone()).send().await?;
                if !response.status().is_success() {
                    return Err(FetchError::RequestNotSuccess(response.status().as_u16()));
                }

                Ok(response.bytes().await?.to_vec())
            }
            Self::File(path) => Ok(tokio::fs::read(path).await?),
        }
    }
}

impl Display for PlaylistSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http { url, .. } => write!(f, "{}", url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug)]
pub enum FetchError {
    RequestError(reqwest::Error),
    RequestNotSuccess(u16),
    IoError(io::Error),
}

impl Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RequestError(e) => e.fmt(f),
            Self::RequestNotSuccess(status_code) => {
                write!(f, "Server respond with status code {}", status_code)
            }
            Self::IoError(e) => e.fmt(f),
        }
    }
}

impl Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(value: reqwest::Error) -> Self {
        Self::RequestError(value)
    }
}

impl From<io::Error> for FetchError {
    fn from(value: io::Error) -> Self {
        Self::IoError(value)
    }
}
