use std::sync::Arc;

use anyhow::Result;
use log::info;
use reqwest::{Client, Proxy};

use crate::{Config, service::ChannelService, transfer::PlaylistSource};

pub type AppStateRef = Arc<AppState>;
pub struct AppState {
    pub config: Arc<Config>,
    pub channel_service: Arc<ChannelService>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let config = Arc::new(config);

        let mut builder = Client::builder();
        if let Some(user_agent) = &config.http.user_agent {
            builder = builder.user_agent(user_agent)
        }

        if let Some(proxy) = &config.http.proxy {
            info!("With proxy: {}", proxy);
            builder = builder.proxy(Proxy::all(proxy)?);
        }
        let http_client = builder.build()?;

        let source = PlaylistSource::from_config(&config, http_client)?;
        info!("Playlist source: {}", source);

        Ok(Self {
            config,
            channel_service: ChannelService::new(source),
        })
    }
}
