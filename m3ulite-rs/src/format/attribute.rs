use std::{collections::HashMap, fmt::Display};

use lazy_static::lazy_static;

/// Attribute keys the parser keeps. Everything else is consumed and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Attribute {
    TvgName,
    GroupTitle,
    TvgGroup,
    TvgType,
    TvgLogo,
    /// EPG reference, header line only
    XTvgUrl,
    /// EPG reference, header line only
    UrlTvg,
}

lazy_static! {
    static ref ATTRIBUTE_KEYS: HashMap<&'static str, Attribute> = Attribute::ALL
        .iter()
        .map(|x| (x.key(), *x))
        .collect();
}

impl Attribute {
    pub const ALL: [Attribute; 7] = [
        Self::TvgName,
        Self::GroupTitle,
        Self::TvgGroup,
        Self::TvgType,
        Self::TvgLogo,
        Self::XTvgUrl,
        Self::UrlTvg,
    ];

    /// Looks up a raw attribute key, ignoring ASCII case.
    pub fn from_key(raw: impl AsRef<str>) -> Option<Self> {
        let raw = raw.as_ref();
        if raw.bytes().any(|x| x.is_ascii_uppercase()) {
            ATTRIBUTE_KEYS.get(raw.to_ascii_lowercase().as_str()).copied()
        } else {
            ATTRIBUTE_KEYS.get(raw).copied()
        }
    }

    /// Canonical (lowercase) key as written in playlists.
    pub fn key(&self) -> &'static str {
        match self {
            Self::TvgName => "tvg-name",
            Self::GroupTitle => "group-title",
            Self::TvgGroup => "tvg-group",
            Self::TvgType => "tvg-type",
            Self::TvgLogo => "tvg-logo",
            Self::XTvgUrl => "x-tvg-url",
            Self::UrlTvg => "url-tvg",
        }
    }

    /// Whether the attribute may be stored on a channel entry.
    pub fn is_channel_scoped(&self) -> bool {
        !matches!(self, Self::XTvgUrl | Self::UrlTvg)
    }
}

impl Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
