use std::{fmt, str::FromStr, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewKind {
    Home,
    Search,
    Artist,
    Album,
    Discography,
    RelatedArtists,
    Track,
}

impl ViewKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewKind::Home => "home",
            ViewKind::Search => "search",
            ViewKind::Artist => "artist",
            ViewKind::Album => "album",
            ViewKind::Discography => "discography",
            ViewKind::RelatedArtists => "relatedArtists",
            ViewKind::Track => "track",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(ViewKind::Home),
            "search" => Ok(ViewKind::Search),
            "artist" => Ok(ViewKind::Artist),
            "album" => Ok(ViewKind::Album),
            "discography" => Ok(ViewKind::Discography),
            "relatedArtists" | "related-artists" => Ok(ViewKind::RelatedArtists),
            "track" => Ok(ViewKind::Track),
            _ => Err(Error::UnknownViewKind(s.to_string())),
        }
    }
}

/// Release filter applied when a discography view opens.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ReleaseType {
    #[default]
    Album,
    Single,
    Compilation,
}

impl ReleaseType {
    pub fn label(self) -> &'static str {
        match self {
            ReleaseType::Album => "Albums",
            ReleaseType::Single => "Singles and EPs",
            ReleaseType::Compilation => "Compilations",
        }
    }
}

impl FromStr for ReleaseType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "album" => Ok(ReleaseType::Album),
            "single" => Ok(ReleaseType::Single),
            "compilation" => Ok(ReleaseType::Compilation),
            _ => Err(Error::UnknownReleaseType(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscographyRequest {
    pub id: Arc<str>,
    #[serde(default)]
    pub initial_filter: ReleaseType,
}

/// A navigable view of the explore panel, tagged by kind and carrying the
/// input the view needs to render.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(into = "WireView", try_from = "WireView")]
pub enum View {
    Home,
    Search(Arc<str>),
    Artist(Arc<str>),
    Album(Arc<str>),
    Discography(DiscographyRequest),
    RelatedArtists(Arc<str>),
    Track(Arc<str>),
}

/// `{ "kind": .., "payload": .. }`, where home carries an empty string.
#[derive(Deserialize, Serialize)]
#[serde(tag = "kind", content = "payload", rename_all = "camelCase")]
enum WireView {
    Home(String),
    Search(Arc<str>),
    Artist(Arc<str>),
    Album(Arc<str>),
    Discography(DiscographyRequest),
    RelatedArtists(Arc<str>),
    Track(Arc<str>),
}

impl From<View> for WireView {
    fn from(view: View) -> Self {
        match view {
            View::Home => WireView::Home(String::new()),
            View::Search(query) => WireView::Search(query),
            View::Artist(id) => WireView::Artist(id),
            View::Album(id) => WireView::Album(id),
            View::Discography(request) => WireView::Discography(request),
            View::RelatedArtists(id) => WireView::RelatedArtists(id),
            View::Track(id) => WireView::Track(id),
        }
    }
}

impl TryFrom<WireView> for View {
    type Error = Error;

    fn try_from(wire: WireView) -> Result<Self, Self::Error> {
        Ok(match wire {
            WireView::Home(_) => View::Home,
            WireView::Search(query) => View::Search(require_arg(ViewKind::Search, &query)?),
            WireView::Artist(id) => View::Artist(require_arg(ViewKind::Artist, &id)?),
            WireView::Album(id) => View::Album(require_arg(ViewKind::Album, &id)?),
            WireView::Discography(request) => View::Discography(DiscographyRequest {
                id: require_arg(ViewKind::Discography, &request.id)?,
                initial_filter: request.initial_filter,
            }),
            WireView::RelatedArtists(id) => {
                View::RelatedArtists(require_arg(ViewKind::RelatedArtists, &id)?)
            }
            WireView::Track(id) => View::Track(require_arg(ViewKind::Track, &id)?),
        })
    }
}

fn require_arg(kind: ViewKind, arg: &str) -> Result<Arc<str>, Error> {
    let arg = arg.trim();
    if arg.is_empty() {
        return Err(Error::InvalidPayload {
            kind,
            reason: "missing argument",
        });
    }
    Ok(arg.into())
}

impl View {
    /// Builds a view from its kind and a plain string argument. Id-carrying
    /// kinds reject a missing or blank argument; `filter` only applies to
    /// discography views.
    pub fn from_parts(
        kind: ViewKind,
        arg: Option<&str>,
        filter: Option<ReleaseType>,
    ) -> Result<Self, Error> {
        if kind == ViewKind::Home {
            return Ok(View::Home);
        }
        let arg = require_arg(kind, arg.unwrap_or_default())?;
        Ok(match kind {
            ViewKind::Home => View::Home,
            ViewKind::Search => View::Search(arg),
            ViewKind::Artist => View::Artist(arg),
            ViewKind::Album => View::Album(arg),
            ViewKind::Discography => View::Discography(DiscographyRequest {
                id: arg,
                initial_filter: filter.unwrap_or_default(),
            }),
            ViewKind::RelatedArtists => View::RelatedArtists(arg),
            ViewKind::Track => View::Track(arg),
        })
    }

    pub fn kind(&self) -> ViewKind {
        match self {
            View::Home => ViewKind::Home,
            View::Search(_) => ViewKind::Search,
            View::Artist(_) => ViewKind::Artist,
            View::Album(_) => ViewKind::Album,
            View::Discography(_) => ViewKind::Discography,
            View::RelatedArtists(_) => ViewKind::RelatedArtists,
            View::Track(_) => ViewKind::Track,
        }
    }

    /// Object-shaped payloads take part in history deduplication, scalar ones
    /// never do.
    pub fn is_structured(&self) -> bool {
        matches!(self, View::Discography(_))
    }

    pub fn title(&self) -> String {
        match self {
            View::Home => "Home".to_string(),
            View::Search(query) => query.to_string(),
            View::Artist(id) | View::Album(id) | View::Track(id) => id.to_string(),
            View::Discography(request) => request.initial_filter.label().to_string(),
            View::RelatedArtists(_) => "Related Artists".to_string(),
        }
    }

    pub fn full_title(&self) -> String {
        match self {
            View::Home => "Home".to_string(),
            View::Search(query) => format!("Search “{}”", query),
            View::Artist(id) => format!("Artist “{}”", id),
            View::Album(id) => format!("Album “{}”", id),
            View::Track(id) => format!("Track “{}”", id),
            View::Discography(request) => format!(
                "Discography “{}” ({})",
                request.id,
                request.initial_filter.label()
            ),
            View::RelatedArtists(id) => format!("Related Artists “{}”", id),
        }
    }
}

/// One entry of the navigation history.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ViewState {
    #[serde(flatten)]
    pub view: View,
    pub position: usize,
}

impl ViewState {
    pub fn kind(&self) -> ViewKind {
        self.view.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in [
            ViewKind::Home,
            ViewKind::Search,
            ViewKind::Artist,
            ViewKind::Album,
            ViewKind::Discography,
            ViewKind::RelatedArtists,
            ViewKind::Track,
        ] {
            assert_eq!(kind.as_str().parse::<ViewKind>().unwrap(), kind);
        }
        assert!(matches!(
            "playlist".parse::<ViewKind>(),
            Err(Error::UnknownViewKind(name)) if name == "playlist"
        ));
    }

    #[test]
    fn test_from_parts() {
        assert_eq!(
            View::from_parts(ViewKind::Home, Some("ignored"), None).unwrap(),
            View::Home
        );
        assert_eq!(
            View::from_parts(ViewKind::Artist, Some(" abc123 "), None).unwrap(),
            View::Artist("abc123".into())
        );
        assert_eq!(
            View::from_parts(ViewKind::Discography, Some("x"), None).unwrap(),
            View::Discography(DiscographyRequest {
                id: "x".into(),
                initial_filter: ReleaseType::Album,
            })
        );
        assert!(matches!(
            View::from_parts(ViewKind::Album, Some("  "), None),
            Err(Error::InvalidPayload {
                kind: ViewKind::Album,
                ..
            })
        ));
        assert!(View::from_parts(ViewKind::Track, None, None).is_err());
    }

    #[test]
    fn test_only_discography_is_structured() {
        assert!(View::Discography(DiscographyRequest {
            id: "x".into(),
            initial_filter: ReleaseType::Single,
        })
        .is_structured());
        assert!(!View::Artist("x".into()).is_structured());
        assert!(!View::Search("x".into()).is_structured());
        assert!(!View::Home.is_structured());
    }

    #[test]
    fn test_titles() {
        assert_eq!(View::Home.full_title(), "Home");
        assert_eq!(View::Search("muse".into()).title(), "muse");
        assert_eq!(View::Search("muse".into()).full_title(), "Search “muse”");
        let discography = View::Discography(DiscographyRequest {
            id: "abc".into(),
            initial_filter: ReleaseType::Compilation,
        });
        assert_eq!(discography.title(), "Compilations");
        assert_eq!(discography.full_title(), "Discography “abc” (Compilations)");
    }

    #[test]
    fn test_json_shape() {
        let artist = serde_json::to_value(View::Artist("abc123".into())).unwrap();
        assert_eq!(
            artist,
            serde_json::json!({ "kind": "artist", "payload": "abc123" })
        );

        let view: View = serde_json::from_str(
            r#"{"kind":"discography","payload":{"id":"x","initialFilter":"single"}}"#,
        )
        .unwrap();
        assert_eq!(
            view,
            View::Discography(DiscographyRequest {
                id: "x".into(),
                initial_filter: ReleaseType::Single,
            })
        );

        let state = ViewState {
            view: View::RelatedArtists("abc".into()),
            position: 3,
        };
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            serde_json::json!({ "kind": "relatedArtists", "payload": "abc", "position": 3 })
        );
    }

    #[test]
    fn test_home_json_carries_empty_payload() {
        let history = crate::history::NavigationHistory::new();
        let json = serde_json::to_value(history.current()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "home", "payload": "", "position": 0 })
        );

        let state: ViewState = serde_json::from_value(json).unwrap();
        assert_eq!(&state, history.current());

        let view: View = serde_json::from_str(r#"{"kind":"home","payload":""}"#).unwrap();
        assert_eq!(view, View::Home);
    }

    #[test]
    fn test_json_rejects_blank_ids() {
        for json in [
            r#"{"kind":"artist","payload":"  "}"#,
            r#"{"kind":"search","payload":""}"#,
            r#"{"kind":"discography","payload":{"id":" ","initialFilter":"album"}}"#,
        ] {
            assert!(serde_json::from_str::<View>(json).is_err(), "{}", json);
        }

        let view: View = serde_json::from_str(r#"{"kind":"track","payload":" t1 "}"#).unwrap();
        assert_eq!(view, View::Track("t1".into()));
    }
}
