//! Byte-level cursor over playlist text.
//!
//! Every byte the scanner stops on or slices at (`#`, `=`, `"`, `,`, `\n`,
//! ASCII letters) is ASCII, so all slice boundaries are also UTF-8 character
//! boundaries.

const HEADER_MARKER: &[u8] = b"#EXTM3U";
const CHANNEL_MARKER: &[u8] = b"#EXTINF:";

/// Which line the scanner is currently inside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseState {
    #[default]
    None,
    /// `#EXTM3U` line, attributes go to the document headers
    Header,
    /// `#EXTINF:` line, attributes go to the in-progress entry
    Channel,
    /// A playback URL line was just committed
    Http,
}

/// Classification of the byte under the cursor, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Whitespace,
    Marker,
    UrlStart,
    Separator,
    Identifier,
    ValueStart,
    Other,
}

impl CharClass {
    pub fn of(byte: u8) -> Self {
        match byte {
            b' ' | b'\t' | b'\r' | b'\n' => Self::Whitespace,
            b'#' => Self::Marker,
            b'h' | b'H' => Self::UrlStart,
            b',' => Self::Separator,
            b'-' => Self::Identifier,
            x if x.is_ascii_alphabetic() => Self::Identifier,
            b'=' => Self::ValueStart,
            _ => Self::Other,
        }
    }
}

/// What a `#` introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Header,
    ChannelInfo,
    Comment,
}

impl Tag {
    /// Bytes the marker occupies, comments have no fixed length.
    pub fn marker_len(&self) -> Option<usize> {
        match self {
            Self::Header => Some(HEADER_MARKER.len()),
            Self::ChannelInfo => Some(CHANNEL_MARKER.len()),
            Self::Comment => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_eof(&self) -> bool {
        self.position >= self.text.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.position).copied()
    }

    /// Moves forward, never past the end of the text.
    pub fn advance(&mut self, count: usize) {
        self.position = self.text.len().min(self.position + count);
    }

    pub fn seek(&mut self, position: usize) {
        debug_assert!(position >= self.position);
        self.position = self.text.len().min(position);
    }

    fn find_from(&self, from: usize, needle: u8) -> Option<usize> {
        self.text
            .as_bytes()
            .get(from..)?
            .iter()
            .position(|x| *x == needle)
            .map(|x| x + from)
    }

    /// Index of the next `\n` at or after the cursor, or the end of the text.
    pub fn line_end(&self) -> usize {
        self.find_from(self.position, b'\n')
            .unwrap_or(self.text.len())
    }

    /// Trimmed text from `from` to the end of the current line.
    pub fn rest_of_line(&self, from: usize) -> &'a str {
        let end = self.line_end();
        self.text.get(from.min(end)..end).unwrap_or_default().trim()
    }

    /// Classifies the `#` under the cursor. Lookahead is bounded by the
    /// marker length and the end of the text.
    pub fn tag(&self) -> Tag {
        let rest = &self.text.as_bytes()[self.position..];
        if rest.starts_with(HEADER_MARKER) {
            Tag::Header
        } else if rest.starts_with(CHANNEL_MARKER) {
            Tag::ChannelInfo
        } else {
            Tag::Comment
        }
    }

    /// Reads an attribute name starting at the cursor. The name ends before
    /// the next `=`, whitespace, `,` or the end of the text; the cursor is
    /// left on that terminator.
    pub fn attribute_name(&mut self) -> &'a str {
        let start = self.position;
        let end = self.text.as_bytes()[start..]
            .iter()
            .position(|x| matches!(x, b'=' | b',' | b' ' | b'\t' | b'\r' | b'\n'))
            .map(|x| x + start)
            .unwrap_or(self.text.len());

        self.position = end;
        &self.text[start..end]
    }

    /// Reads a quoted value with the cursor on `=`. The character after `=`
    /// is taken as the opening quote; the value runs to the next `"` or to
    /// the end of the text when unterminated. Escapes are not recognised.
    pub fn quoted_value(&mut self) -> &'a str {
        // '='
        self.advance(1);

        // opening quote, whatever character it actually is
        let width = self.text[self.position..]
            .chars()
            .next()
            .map(char::len_utf8)
            .unwrap_or(0);
        self.advance(width);

        let start = self.position;
        match self.find_from(start, b'"') {
            Some(end) => {
                self.position = end + 1;
                &self.text[start..end]
            }
            None => {
                self.position = self.text.len();
                &self.text[start..]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CharClass, Cursor, Tag};

    #[test]
    fn classification_priority() {
        assert_eq!(CharClass::of(b'\n'), CharClass::Whitespace);
        assert_eq!(CharClass::of(b'#'), CharClass::Marker);
        // 'h' starts a URL before it could start an identifier
        assert_eq!(CharClass::of(b'h'), CharClass::UrlStart);
        assert_eq!(CharClass::of(b'H'), CharClass::UrlStart);
        assert_eq!(CharClass::of(b'g'), CharClass::Identifier);
        assert_eq!(CharClass::of(b'-'), CharClass::Identifier);
        assert_eq!(CharClass::of(b','), CharClass::Separator);
        assert_eq!(CharClass::of(b'='), CharClass::ValueStart);
        assert_eq!(CharClass::of(b'1'), CharClass::Other);
        assert_eq!(CharClass::of(0xC3), CharClass::Other);
    }

    #[test]
    fn tags() {
        assert_eq!(Cursor::new("#EXTM3U x=\"1\"").tag(), Tag::Header);
        assert_eq!(Cursor::new("#EXTINF:-1,A").tag(), Tag::ChannelInfo);
        assert_eq!(Cursor::new("#EXTINF-1,A").tag(), Tag::Comment);
        assert_eq!(Cursor::new("#EXT").tag(), Tag::Comment);
        assert_eq!(Cursor::new("#").tag(), Tag::Comment);
        assert_eq!(Tag::ChannelInfo.marker_len(), Some(8));
    }

    #[test]
    fn line_end_and_rest() {
        let mut cursor = Cursor::new("abc \r\ndef");
        assert_eq!(cursor.line_end(), 5);
        assert_eq!(cursor.rest_of_line(0), "abc");

        cursor.advance(6);
        assert_eq!(cursor.line_end(), 9);
        assert_eq!(cursor.rest_of_line(6), "def");

        cursor.advance(100);
        assert!(cursor.is_eof());
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.rest_of_line(9), "");
    }

    #[test]
    fn attribute_name_stops_at_separators() {
        let mut cursor = Cursor::new("tvg-name=\"x\"");
        assert_eq!(cursor.attribute_name(), "tvg-name");
        assert_eq!(cursor.peek(), Some(b'='));

        let mut cursor = Cursor::new("-1 tvg-name=\"x\"");
        assert_eq!(cursor.attribute_name(), "-1");
        assert_eq!(cursor.peek(), Some(b' '));

        let mut cursor = Cursor::new("-1,Name");
        assert_eq!(cursor.attribute_name(), "-1");
        assert_eq!(cursor.peek(), Some(b','));

        let mut cursor = Cursor::new("dangling");
        assert_eq!(cursor.attribute_name(), "dangling");
        assert!(cursor.is_eof());
    }

    #[test]
    fn quoted_values() {
        let mut cursor = Cursor::new("=\"News\" rest");
        assert_eq!(cursor.quoted_value(), "News");
        assert_eq!(cursor.peek(), Some(b' '));

        let mut cursor = Cursor::new("=\"\"");
        assert_eq!(cursor.quoted_value(), "");
        assert!(cursor.is_eof());

        // an escaped quote ends the value early
        let mut cursor = Cursor::new("=\"a\\\"b\"");
        assert_eq!(cursor.quoted_value(), "a\\");
    }

    #[test]
    fn unterminated_value_runs_to_end() {
        let mut cursor = Cursor::new("=\"open value\nnext line");
        assert_eq!(cursor.quoted_value(), "open value\nnext line");
        assert!(cursor.is_eof());

        let mut cursor = Cursor::new("=");
        assert_eq!(cursor.quoted_value(), "");
        assert!(cursor.is_eof());
    }

    #[test]
    fn non_ascii_opening_character() {
        let mut cursor = Cursor::new("=éabc\"");
        assert_eq!(cursor.quoted_value(), "abc");
        assert!(cursor.is_eof());
    }
}
