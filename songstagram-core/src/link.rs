use std::sync::Arc;

use url::Url;

use crate::view::View;

/// A Spotify web link or URI pasted into the search box.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpotifyLink {
    Artist(Arc<str>),
    Album(Arc<str>),
    Track(Arc<str>),
}

impl SpotifyLink {
    /// Accepts `https://open.spotify.com/<entity>/<id>` and
    /// `spotify:<entity>:<id>`.
    pub fn parse(link: &str) -> Option<Self> {
        let url = Url::parse(link.trim()).ok()?;
        let (entity, id) = match url.scheme() {
            "spotify" => url.path().split_once(':')?,
            "http" | "https" if url.host_str() == Some("open.spotify.com") => {
                let mut segments = url.path_segments()?;
                (segments.next()?, segments.next()?)
            }
            _ => return None,
        };
        if id.is_empty() {
            return None;
        }
        match entity {
            "artist" => Some(Self::Artist(id.into())),
            "album" => Some(Self::Album(id.into())),
            "track" => Some(Self::Track(id.into())),
            _ => None,
        }
    }

    pub fn into_view(self) -> View {
        match self {
            SpotifyLink::Artist(id) => View::Artist(id),
            SpotifyLink::Album(id) => View::Album(id),
            SpotifyLink::Track(id) => View::Track(id),
        }
    }
}
