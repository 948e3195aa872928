use smol_str::SmolStr;

use crate::format::Attribute;

/// Separator between categories packed into one grouping attribute.
pub const CATEGORY_SEPARATOR: char = ';';

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ChannelEntry {
    /// Playback location, never empty on a committed entry
    pub url: SmolStr,
    /// Text after the comma of the `#EXTINF:` line
    pub name: Option<SmolStr>,
    pub tvg_name: Option<SmolStr>,
    pub group_title: Option<SmolStr>,
    pub tvg_group: Option<SmolStr>,
    pub tvg_type: Option<SmolStr>,
    pub tvg_logo: Option<SmolStr>,
}

impl ChannelEntry {
    pub fn new(url: impl Into<SmolStr>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Returns the value of a channel-scoped attribute.
    pub fn get(&self, attribute: Attribute) -> Option<&SmolStr> {
        match attribute {
            Attribute::TvgName => self.tvg_name.as_ref(),
            Attribute::GroupTitle => self.group_title.as_ref(),
            Attribute::TvgGroup => self.tvg_group.as_ref(),
            Attribute::TvgType => self.tvg_type.as_ref(),
            Attribute::TvgLogo => self.tvg_logo.as_ref(),
            Attribute::XTvgUrl | Attribute::UrlTvg => None,
        }
    }

    /// Stores an attribute value. Header-only attributes are ignored and
    /// `false` is returned.
    pub fn set(&mut self, attribute: Attribute, value: impl Into<SmolStr>) -> bool {
        let slot = match attribute {
            Attribute::TvgName => &mut self.tvg_name,
            Attribute::GroupTitle => &mut self.group_title,
            Attribute::TvgGroup => &mut self.tvg_group,
            Attribute::TvgType => &mut self.tvg_type,
            Attribute::TvgLogo => &mut self.tvg_logo,
            Attribute::XTvgUrl | Attribute::UrlTvg => return false,
        };
        *slot = Some(value.into());
        true
    }

    /// Attributes present on this entry, in vocabulary order.
    pub fn attributes(&self) -> impl Iterator<Item = (Attribute, &SmolStr)> {
        Attribute::ALL
            .into_iter()
            .filter_map(|x| self.get(x).map(|value| (x, value)))
    }

    /// Raw grouping value: the first non-empty of `group-title`, `tvg-group`
    /// and `tvg-type`.
    pub fn grouping(&self) -> Option<&str> {
        [&self.group_title, &self.tvg_group, &self.tvg_type]
            .into_iter()
            .flatten()
            .map(|x| x.as_str())
            .find(|x| !x.is_empty())
    }

    /// Categories this entry declares, split on `;`.
    pub fn categories(&self) -> Option<impl Iterator<Item = &str>> {
        self.grouping().map(|x| x.split(CATEGORY_SEPARATOR))
    }
}

#[cfg(test)]
mod tests {
    use crate::format::{Attribute, ChannelEntry};

    #[test]
    fn set_and_get() {
        let mut entry = ChannelEntry::new("http://example.com/a.m3u8");
        assert!(entry.set(Attribute::TvgLogo, "http://example.com/a.png"));
        assert!(!entry.set(Attribute::XTvgUrl, "http://example.com/epg.xml"));

        assert_eq!(entry.get(Attribute::TvgLogo).unwrap(), "http://example.com/a.png");
        assert_eq!(entry.get(Attribute::XTvgUrl), None);
        assert_eq!(entry.attributes().count(), 1);
    }

    #[test]
    fn grouping_falls_through_empty_values() {
        let mut entry = ChannelEntry::new("http://example.com/a.m3u8");
        assert!(entry.categories().is_none());

        entry.tvg_type = Some("movies".into());
        entry.group_title = Some("".into());
        assert_eq!(entry.grouping(), Some("movies"));

        entry.tvg_group = Some("News;Sports".into());
        let categories = entry.categories().unwrap().collect::<Vec<_>>();
        assert_eq!(categories, vec!["News", "Sports"]);
    }
}
