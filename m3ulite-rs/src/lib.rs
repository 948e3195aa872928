//! # m3ulite-rs
//! A single-pass parser for extended M3U channel playlists
//!
//! # Example
//! ```rust
//! use m3ulite_rs::{category::group_channels, parse};
//!
//! // 1. Parse
//! let playlist = parse(r#"
//! #EXTM3U x-tvg-url="http://example.com/epg.xml"
//! #EXTINF:-1 tvg-name="A" group-title="News;Sports",Channel A
//! http://example.com/A.m3u8"#);
//! assert_eq!(playlist.entries.len(), 1);
//!
//! // 2. Generate
//! println!("{}", playlist.to_string());
//!
//! // 3. Group
//! let library = group_channels(playlist);
//! assert_eq!(library.categories().names().collect::<Vec<_>>(), ["News", "Sports"]);
//! ```

mod builder;
pub mod category;
pub mod format;
mod parser;
pub mod scanner;
pub use parser::*;
