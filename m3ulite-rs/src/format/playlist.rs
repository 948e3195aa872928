use smol_str::SmolStr;
use std::collections::HashMap;

use crate::format::{Attribute, ChannelEntry};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaylistDocument {
    /// Channels of this playlist, in source order
    pub entries: Vec<ChannelEntry>,
    /// Attributes of the `#EXTM3U` line, `None` if the line is missing
    pub headers: Option<HeaderAttributes>,
}

impl PlaylistDocument {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Document-scoped attributes, kept apart from any channel's attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderAttributes(HashMap<Attribute, SmolStr>);

impl HeaderAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, attribute: Attribute) -> Option<&SmolStr> {
        self.0.get(&attribute)
    }

    pub fn insert(&mut self, attribute: Attribute, value: impl Into<SmolStr>) -> Option<SmolStr> {
        self.0.insert(attribute, value.into())
    }

    /// EPG location, `x-tvg-url` first then `url-tvg`.
    pub fn epg_url(&self) -> Option<&SmolStr> {
        self.get(Attribute::XTvgUrl)
            .or_else(|| self.get(Attribute::UrlTvg))
    }

    /// Iterates in vocabulary order, so output is stable.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &SmolStr)> {
        Attribute::ALL
            .into_iter()
            .filter_map(|x| self.0.get(&x).map(|value| (x, value)))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::format::{Attribute, HeaderAttributes};

    #[test]
    fn epg_url_prefers_x_tvg_url() {
        let mut headers = HeaderAttributes::new();
        assert!(headers.epg_url().is_none());

        headers.insert(Attribute::UrlTvg, "b");
        assert_eq!(headers.epg_url().unwrap(), "b");

        headers.insert(Attribute::XTvgUrl, "a");
        assert_eq!(headers.epg_url().unwrap(), "a");
        assert_eq!(
            headers.iter().map(|x| x.0).collect::<Vec<_>>(),
            vec![Attribute::XTvgUrl, Attribute::UrlTvg]
        );
    }
}
