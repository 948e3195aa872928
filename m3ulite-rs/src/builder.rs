use std::{borrow::Cow, fmt::Display};

use crate::format::{ChannelEntry, PlaylistDocument, directives};

/// M3U has no escapes: a `"` would close an attribute value early and a line
/// break would end the line, so both are replaced.
fn quoted_value(value: &str) -> Cow<'_, str> {
    if !value.contains(['"', '\r', '\n']) {
        return Cow::Borrowed(value);
    }

    value
        .chars()
        .map(|x| match x {
            '"' => '\'',
            '\r' | '\n' => ' ',
            x => x,
        })
        .collect()
}

fn single_line(value: &str) -> Cow<'_, str> {
    if !value.contains(['\r', '\n']) {
        return Cow::Borrowed(value);
    }

    value.replace(['\r', '\n'], " ").into()
}

/// Writes the playlist as M3U text.
///
/// A document returned by [`crate::parse`] parses back to equal entries and
/// headers. Other documents are normalised on the way out: `"` in attribute
/// values becomes `'`, line breaks become spaces, and the reader trims names
/// and treats an empty name as absent.
impl Display for PlaylistDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // header
        write!(f, "{}", directives::EXTM3U)?;
        if let Some(headers) = &self.headers {
            for (key, value) in headers.iter() {
                write!(f, " {}=\"{}\"", key, quoted_value(value))?;
            }
        }
        write!(f, "\n")?;

        // channels
        for it in self.entries.iter() {
            write!(f, "\n")?;
            it.fmt(f)?;
        }

        Ok(())
    }
}

impl Display for ChannelEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // #EXTINF:-1 attributes...,name
        write!(f, "{}:{}", directives::EXTINF, directives::LIVE_DURATION)?;
        for (key, value) in self.attributes() {
            write!(f, " {}=\"{}\"", key, quoted_value(value))?;
        }

        write!(f, ",")?;
        if let Some(name) = &self.name {
            write!(f, "{}", single_line(name))?;
        }
        write!(f, "\n")?;

        writeln!(f, "{}", single_line(&self.url))?;

        Ok(())
    }
}
