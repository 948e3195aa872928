mod attribute;
mod channel;
mod playlist;
pub use attribute::*;
pub use channel::*;
pub use playlist::*;

pub mod directives {
    pub const EXTM3U: &str = "#EXTM3U";
    pub const EXTINF: &str = "#EXTINF";
    /// Duration written for every channel, live streams have no length
    pub const LIVE_DURATION: &str = "-1";
}
