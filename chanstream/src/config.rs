use std::{fs::File, path::Path};

use anyhow::Result;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_PLAYLIST_PATH: &str = "playlist.m3u";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub listen_addr: String,
    pub base_url: String,
    pub playlist_path: Option<String>,
    /// Local playlist, used instead of `baseUrl` when set
    pub playlist_file: Option<String>,
    pub load_on_startup: Option<bool>,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpConfig {
    pub user_agent: Option<String>,
    pub proxy: Option<String>,
}

impl Config {
    /// `playlistPath` resolved against `baseUrl`.
    pub fn playlist_url(&self) -> Result<Url, url::ParseError> {
        let mut base = Url::parse(&self.base_url)?;
        // keep the last segment of the base, join would replace it
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        base.join(
            self.playlist_path
                .as_deref()
                .unwrap_or(DEFAULT_PLAYLIST_PATH),
        )
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    let file = File::open(path.as_ref())?;
    let config: Config = serde_yaml::from_reader(file)?;
    Ok(config)
}
