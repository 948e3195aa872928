mod playlist_parse;
mod source;
pub use playlist_parse::*;
pub use source::*;
