use std::mem::take;

use smol_str::SmolStr;

use crate::{
    format::{Attribute, ChannelEntry, HeaderAttributes, PlaylistDocument},
    scanner::{CharClass, Cursor, ParseState, Tag},
};

/// Parses playlist text in a single pass. Malformed input never fails, it
/// only yields fewer entries.
pub fn parse(text: &str) -> PlaylistDocument {
    Parser::new(text).parse()
}

/// Same as [`parse`], invalid UTF-8 sequences are replaced first.
pub fn parse_bytes(bytes: &[u8]) -> PlaylistDocument {
    parse(&String::from_utf8_lossy(bytes))
}

/// Collects header attributes and the in-progress channel until a URL line
/// commits it.
#[derive(Debug, Default)]
pub struct EntryBuilder {
    entries: Vec<ChannelEntry>,
    headers: Option<HeaderAttributes>,
    current: ChannelEntry,
}

impl EntryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_header(&mut self) {
        self.headers.get_or_insert_with(HeaderAttributes::new);
    }

    /// Drops whatever the previous `#EXTINF:` collected.
    pub fn begin_channel(&mut self) {
        self.current = ChannelEntry::default();
    }

    pub fn set_name(&mut self, name: &str) {
        self.current.name = (!name.is_empty()).then(|| SmolStr::new(name));
    }

    /// Stores a recognised attribute according to the line it was found on.
    /// Returns whether the value was kept.
    pub fn apply(&mut self, state: ParseState, attribute: Attribute, value: &str) -> bool {
        match state {
            ParseState::Header => {
                self.headers
                    .get_or_insert_with(HeaderAttributes::new)
                    .insert(attribute, value);
                true
            }
            ParseState::Channel if attribute.is_channel_scoped() => {
                self.current.set(attribute, value)
            }
            ParseState::Channel | ParseState::None | ParseState::Http => false,
        }
    }

    /// The only place an entry enters the document.
    pub fn commit(&mut self, url: &str) {
        let mut entry = take(&mut self.current);
        entry.url = url.into();
        self.entries.push(entry);
    }

    pub fn pending(&self) -> &ChannelEntry {
        &self.current
    }

    /// Finishes the document; an uncommitted entry is discarded.
    pub fn finish(self) -> PlaylistDocument {
        PlaylistDocument {
            entries: self.entries,
            headers: self.headers,
        }
    }
}

pub struct Parser<'a> {
    cursor: Cursor<'a>,
    state: ParseState,
    attribute: Option<&'a str>,
    builder: EntryBuilder,
}

impl<'a> Parser<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            cursor: Cursor::new(text),
            state: ParseState::None,
            attribute: None,
            builder: EntryBuilder::new(),
        }
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    pub fn parse(mut self) -> PlaylistDocument {
        while let Some(byte) = self.cursor.peek() {
            self.step(byte);
        }

        self.builder.finish()
    }

    /// Runs the transition for one classified byte. Every transition moves
    /// the cursor forward by at least one byte.
    fn step(&mut self, byte: u8) {
        match CharClass::of(byte) {
            CharClass::Whitespace => self.on_whitespace(byte),
            CharClass::Marker => self.on_marker(),
            CharClass::UrlStart => self.on_url(),
            CharClass::Separator => self.on_separator(),
            CharClass::Identifier => self.on_identifier(),
            CharClass::ValueStart => self.on_value(),
            CharClass::Other => self.cursor.advance(1),
        }
    }

    fn on_whitespace(&mut self, byte: u8) {
        if byte == b'\n' {
            self.attribute = None;
        }
        self.cursor.advance(1);
    }

    fn on_marker(&mut self) {
        self.state = ParseState::None;

        let tag = self.cursor.tag();
        match tag {
            Tag::Header => {
                self.state = ParseState::Header;
                self.builder.begin_header();
            }
            Tag::ChannelInfo => {
                self.state = ParseState::Channel;
                self.builder.begin_channel();
            }
            Tag::Comment => {}
        }

        match tag.marker_len() {
            Some(len) => self.cursor.advance(len),
            None => self.cursor.seek(self.cursor.line_end()),
        }
    }

    fn on_url(&mut self) {
        self.state = ParseState::Http;

        let url = self.cursor.rest_of_line(self.cursor.position());
        self.builder.commit(url);
        self.cursor.seek(self.cursor.line_end());
    }

    fn on_separator(&mut self) {
        if self.state != ParseState::Channel {
            self.cursor.advance(1);
            return;
        }

        let name = self.cursor.rest_of_line(self.cursor.position() + 1);
        self.builder.set_name(name);
        self.state = ParseState::None;
        self.cursor.seek(self.cursor.line_end());
    }

    fn on_identifier(&mut self) {
        self.attribute = Some(self.cursor.attribute_name());
    }

    fn on_value(&mut self) {
        let value = self.cursor.quoted_value();
        if let Some(attribute) = self.attribute.take().and_then(|x| Attribute::from_key(x)) {
            self.builder.apply(self.state, attribute, value);
        }
    }
}
