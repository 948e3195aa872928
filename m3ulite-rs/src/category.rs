//! Grouping of parsed channels into categories, and the compact records a
//! channel list is displayed from.

use std::collections::HashMap;

use smol_str::SmolStr;

use crate::format::{ChannelEntry, PlaylistDocument};

pub const DEFAULT_CATEGORY_NAME: &str = "Uncategorized";
pub const DEFAULT_CHANNEL_NAME: &str = "Unnamed";

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DisplayChannel {
    pub name: SmolStr,
    pub url: SmolStr,
    pub image_url: Option<SmolStr>,
    pub favorite: bool,
}

fn non_empty(value: &Option<SmolStr>) -> Option<&SmolStr> {
    value.as_ref().filter(|x| !x.is_empty())
}

impl From<&ChannelEntry> for DisplayChannel {
    fn from(value: &ChannelEntry) -> Self {
        let name = non_empty(&value.name)
            .or_else(|| non_empty(&value.tvg_name))
            .cloned()
            .unwrap_or_else(|| SmolStr::new_static(DEFAULT_CHANNEL_NAME));

        Self {
            name,
            url: value.url.clone(),
            image_url: non_empty(&value.tvg_logo).cloned(),
            favorite: false,
        }
    }
}

impl From<ChannelEntry> for DisplayChannel {
    fn from(value: ChannelEntry) -> Self {
        Self::from(&value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Category {
    pub name: SmolStr,
    /// Positions into the channel list, ascending
    pub channels: Vec<usize>,
}

/// Category name to channel positions, enumerated in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    lookup: HashMap<SmolStr, usize>,
    categories: Vec<Category>,
}

impl CategoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index over `entries`. Entries without a grouping attribute
    /// land in [`DEFAULT_CATEGORY_NAME`].
    pub fn build(entries: &[ChannelEntry]) -> Self {
        let mut index = Self::new();
        for (position, entry) in entries.iter().enumerate() {
            match entry.categories() {
                Some(categories) => categories.for_each(|x| index.insert(x, position)),
                None => index.insert(DEFAULT_CATEGORY_NAME, position),
            }
        }

        index
    }

    pub fn insert(&mut self, name: &str, position: usize) {
        match self.lookup.get(name) {
            Some(slot) => {
                let channels = &mut self.categories[*slot].channels;
                if channels.last() != Some(&position) {
                    channels.push(position);
                }
            }
            None => {
                let name = SmolStr::new(name);
                self.lookup.insert(name.clone(), self.categories.len());
                self.categories.push(Category {
                    name,
                    channels: vec![position],
                });
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&[usize]> {
        self.lookup
            .get(name)
            .map(|x| self.categories[*x].channels.as_slice())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|x| x.name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl PartialEq for CategoryIndex {
    fn eq(&self, other: &Self) -> bool {
        self.categories == other.categories
    }
}

impl Eq for CategoryIndex {}

/// Display records plus the categories they belong to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelLibrary {
    channels: Vec<DisplayChannel>,
    categories: CategoryIndex,
}

impl ChannelLibrary {
    pub fn channels(&self) -> &[DisplayChannel] {
        &self.channels
    }

    pub fn channel_mut(&mut self, position: usize) -> Option<&mut DisplayChannel> {
        self.channels.get_mut(position)
    }

    pub fn categories(&self) -> &CategoryIndex {
        &self.categories
    }

    /// Channels of one category, in playlist order.
    pub fn channels_in(&self, category: &str) -> Option<Vec<&DisplayChannel>> {
        self.categories
            .get(category)
            .map(|x| x.iter().filter_map(|x| self.channels.get(*x)).collect())
    }

    pub fn into_parts(self) -> (Vec<DisplayChannel>, CategoryIndex) {
        (self.channels, self.categories)
    }
}

/// Groups a parsed document. Header attributes are not needed afterwards and
/// are dropped with the document.
pub fn group_channels(document: PlaylistDocument) -> ChannelLibrary {
    let categories = CategoryIndex::build(&document.entries);
    let channels = document
        .entries
        .into_iter()
        .map(DisplayChannel::from)
        .collect();

    ChannelLibrary {
        channels,
        categories,
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        category::{CategoryIndex, DEFAULT_CHANNEL_NAME, DisplayChannel, group_channels},
        format::ChannelEntry,
        parse,
    };

    #[test]
    fn multi_category_and_fallback() {
        let mut first = ChannelEntry::new("http://example.com/1");
        first.group_title = Some("A;B".into());
        let second = ChannelEntry::new("http://example.com/2");

        let index = CategoryIndex::build(&[first, second]);
        assert_eq!(index.names().collect::<Vec<_>>(), vec!["A", "B", "Uncategorized"]);
        assert_eq!(index.get("A").unwrap(), &[0]);
        assert_eq!(index.get("B").unwrap(), &[0]);
        assert_eq!(index.get("Uncategorized").unwrap(), &[1]);
    }

    #[test]
    fn news_and_sports_only() {
        let library = group_channels(parse(
            r#"#EXTM3U
#EXTINF:-1 group-title="Movies",M
http://example.com/m
#EXTINF:-1 group-title="News;Sports",NS
http://example.com/ns
#EXTINF:-1 tvg-group="News",N
http://example.com/n
"#,
        ));

        let categories = library.categories();
        assert_eq!(
            categories.names().collect::<Vec<_>>(),
            vec!["Movies", "News", "Sports"]
        );
        assert_eq!(categories.get("Movies").unwrap(), &[0]);
        assert_eq!(categories.get("News").unwrap(), &[1, 2]);
        assert_eq!(categories.get("Sports").unwrap(), &[1]);
        assert!(categories.get("Uncategorized").is_none());
    }

    #[test]
    fn category_fallback_order() {
        let mut entry = ChannelEntry::new("http://example.com/1");
        entry.tvg_type = Some("Type".into());
        entry.tvg_group = Some("Group".into());
        let index = CategoryIndex::build(&[entry.clone()]);
        assert_eq!(index.names().collect::<Vec<_>>(), vec!["Group"]);

        entry.group_title = Some("Title".into());
        let index = CategoryIndex::build(&[entry]);
        assert_eq!(index.names().collect::<Vec<_>>(), vec!["Title"]);
    }

    #[test]
    fn repeated_category_indexes_once() {
        let mut entry = ChannelEntry::new("http://example.com/1");
        entry.group_title = Some("A;A".into());

        let index = CategoryIndex::build(&[entry]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("A").unwrap(), &[0]);
    }

    #[test]
    fn display_name_fallback() {
        let mut entry = ChannelEntry::new("http://example.com/1");
        assert_eq!(DisplayChannel::from(&entry).name, DEFAULT_CHANNEL_NAME);

        entry.tvg_name = Some("Tvg".into());
        assert_eq!(DisplayChannel::from(&entry).name, "Tvg");

        entry.name = Some("Name".into());
        entry.tvg_logo = Some("http://example.com/1.png".into());
        let channel = DisplayChannel::from(entry);
        assert_eq!(channel.name, "Name");
        assert_eq!(channel.url, "http://example.com/1");
        assert_eq!(channel.image_url.unwrap(), "http://example.com/1.png");
        assert!(!channel.favorite);
    }

    #[test]
    fn library_lookup() {
        let mut library = group_channels(parse(
            "#EXTINF:-1 group-title=\"A\",One\nhttp://example.com/1\n#EXTINF:-1,Two\nhttp://example.com/2\n",
        ));

        let in_a = library.channels_in("A").unwrap();
        assert_eq!(in_a.len(), 1);
        assert_eq!(in_a[0].name, "One");
        assert!(library.channels_in("B").is_none());

        library.channel_mut(1).unwrap().favorite = true;
        assert!(library.channel_mut(2).is_none());

        let (channels, categories) = library.into_parts();
        assert!(channels[1].favorite);
        assert_eq!(categories.get("Uncategorized").unwrap(), &[1]);
    }
}
