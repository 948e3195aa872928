use std::{error::Error, fmt::Display, sync::Arc};

use log::{debug, error, info};
use m3ulite_rs::category::{Category, ChannelLibrary, DisplayChannel, group_channels};
use tokio::{
    sync::{Mutex, RwLock},
    task::JoinError,
};

use crate::transfer::{FetchError, PlaylistSource, parse_playlist_async};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    NotLoaded,
    Loading,
    Loaded { channels: usize, categories: usize },
    Failed(String),
}

impl Display for LoadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotLoaded => write!(f, "Playlist not in memory"),
            Self::Loading => write!(f, "Loading playlist"),
            Self::Loaded { .. } => write!(f, "Playlist is now in memory"),
            Self::Failed(e) => write!(f, "Failed to load playlist: {}", e),
        }
    }
}

#[derive(Debug)]
pub enum LoadError {
    FetchError(FetchError),
    JoinError(JoinError),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FetchError(e) => e.fmt(f),
            Self::JoinError(e) => e.fmt(f),
        }
    }
}

impl Error for LoadError {}

impl From<FetchError> for LoadError {
    fn from(value: FetchError) -> Self {
        Self::FetchError(value)
    }
}

impl From<JoinError> for LoadError {
    fn from(value: JoinError) -> Self {
        Self::JoinError(value)
    }
}

/// Holds the channels of the last loaded playlist.
pub struct ChannelService {
    source: PlaylistSource,
    status: RwLock<LoadStatus>,
    library: RwLock<ChannelLibrary>,
    updating: Mutex<()>,
}

impl ChannelService {
    pub fn new(source: PlaylistSource) -> Arc<Self> {
        Arc::new(Self {
            source,
            status: RwLock::new(LoadStatus::NotLoaded),
            library: RwLock::new(ChannelLibrary::default()),
            updating: Mutex::new(()),
        })
    }

    pub async fn status(&self) -> LoadStatus {
        self.status.read().await.clone()
    }

    async fn set_status(&self, status: LoadStatus) {
        *self.status.write().await = status;
    }

    /// Fetches, parses and groups the playlist, replacing what was loaded
    /// before. Concurrent calls run one after another.
    pub async fn update(&self) -> Result<LoadStatus, LoadError> {
        let _guard = self.updating.lock().await;

        info!("Loading playlist from {}", self.source);
        self.set_status(LoadStatus::Loading).await;
        // release the previous playlist before fetching the next one
        *self.library.write().await = ChannelLibrary::default();

        match self.load().await {
            Ok(library) => {
                let status = LoadStatus::Loaded {
                    channels: library.channels().len(),
                    categories: library.categories().len(),
                };
                *self.library.write().await = library;
                self.set_status(status.clone()).await;

                info!("Playlist loaded: {:?}", status);
                Ok(status)
            }
            Err(e) => {
                error!("Error while loading playlist {}: {}", self.source, e);
                self.set_status(LoadStatus::Failed(e.to_string())).await;
                Err(e)
            }
        }
    }

    async fn load(&self) -> Result<ChannelLibrary, LoadError> {
        let bytes = self.source.fetch().await?;
        debug!("Fetched {} bytes", bytes.len());

        let mut document = parse_playlist_async(bytes).await?;
        document.headers = None;

        Ok(group_channels(document))
    }

    pub async fn channels(&self) -> Vec<DisplayChannel> {
        self.library.read().await.channels().to_vec()
    }

    pub async fn categories(&self) -> Vec<Category> {
        self.library.read().await.categories().iter().cloned().collect()
    }

    pub async fn channels_in(&self, category: impl AsRef<str>) -> Option<Vec<DisplayChannel>> {
        self.library
            .read()
            .await
            .channels_in(category.as_ref())
            .map(|x| x.into_iter().cloned().collect())
    }

    /// Flips the favorite flag, returns the updated channel.
    pub async fn toggle_favorite(&self, index: usize) -> Option<DisplayChannel> {
        let mut library = self.library.write().await;
        let channel = library.channel_mut(index)?;
        channel.favorite = !channel.favorite;
        Some(channel.clone())
    }
}
