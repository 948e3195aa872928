use m3ulite_rs::format::PlaylistDocument;
use tokio::task::JoinError;

/// Parses on the blocking pool so large playlists don't stall the runtime.
/// Invalid UTF-8 in the body is replaced rather than rejected.
pub async fn parse_playlist_async(bytes: Vec<u8>) -> Result<PlaylistDocument, JoinError> {
    tokio::task::spawn_blocking(move || m3ulite_rs::parse_bytes(&bytes)).await
}

#[cfg(test)]
mod tests {
    use crate::transfer::parse_playlist_async;

    #[tokio::test]
    async fn parse_off_runtime() {
        let playlist = parse_playlist_async(
            b"#EXTM3U\n#EXTINF:-1,A\nhttp://example.com/a\n#EXTINF:-1,B\n".to_vec(),
        )
        .await
        .unwrap();

        assert_eq!(playlist.entries.len(), 1);
        assert!(playlist.headers.is_some());
    }

    #[tokio::test]
    async fn invalid_utf8_body() {
        let mut body = b"#EXTINF:-1,Caf".to_vec();
        body.push(0xff);
        body.extend_from_slice(b"\nhttp://example.com/a\n");

        let playlist = parse_playlist_async(body).await.unwrap();
        assert_eq!(playlist.entries.len(), 1);
        assert_eq!(playlist.entries[0].name.as_deref(), Some("Caf\u{fffd}"));
        assert_eq!(playlist.entries[0].url, "http://example.com/a");
    }
}
