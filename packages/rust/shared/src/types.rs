//! Shared vocabulary types for sitelift.

use serde::{Deserialize, Serialize};
use url::Url;

// ---------------------------------------------------------------------------
// ClosePolicy
// ---------------------------------------------------------------------------

/// How an element without children is closed when serialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClosePolicy {
    /// `<div id="x"/>` for every empty element.
    #[default]
    SelfClose,
    /// `<div id="x"></div>` for every empty element.
    AlwaysPair,
    /// HTML void elements (`br`, `img`, ...) self-close; all others pair.
    Html,
}

impl ClosePolicy {
    /// Config-file spelling of this policy.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SelfClose => "self-close",
            Self::AlwaysPair => "always-pair",
            Self::Html => "html",
        }
    }
}

impl std::fmt::Display for ClosePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SiteEntry
// ---------------------------------------------------------------------------

/// The kind of a site entry, used as its hAtom class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    WebPage,
    AnnouncementsPage,
    Announcement,
    FileCabinet,
    ListPage,
}

impl EntryKind {
    /// Lowercase name as it appears in exported markup.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WebPage => "webpage",
            Self::AnnouncementsPage => "announcementspage",
            Self::Announcement => "announcement",
            Self::FileCabinet => "filecabinet",
            Self::ListPage => "listpage",
        }
    }
}

/// Handle on one exported page: just enough of the entry to seed its root element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteEntry {
    /// Feed id of the entry (e.g. `https://sites.example.com/feeds/content/site/12345`).
    pub id: Url,
    /// Entry kind.
    pub kind: EntryKind,
    /// Display title.
    pub title: String,
}

impl SiteEntry {
    /// Short id: the last non-empty path segment of the feed id.
    pub fn short_id(&self) -> Option<&str> {
        self.id
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).next_back())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str) -> SiteEntry {
        SiteEntry {
            id: Url::parse(id).expect("valid url"),
            kind: EntryKind::WebPage,
            title: "Home".into(),
        }
    }

    #[test]
    fn short_id_is_last_segment() {
        let e = entry("https://sites.example.com/feeds/content/site/4711");
        assert_eq!(e.short_id(), Some("4711"));

        let e = entry("https://sites.example.com/feeds/content/site/4711/");
        assert_eq!(e.short_id(), Some("4711"));
    }

    #[test]
    fn short_id_missing_for_bare_host() {
        let e = entry("https://sites.example.com/");
        assert_eq!(e.short_id(), None);
    }

    #[test]
    fn entry_json_roundtrip() {
        let json = r#"{
            "id": "https://sites.example.com/feeds/content/site/77",
            "kind": "announcementspage",
            "title": "News"
        }"#;
        let parsed: SiteEntry = serde_json::from_str(json).expect("deserialize entry");
        assert_eq!(parsed.kind, EntryKind::AnnouncementsPage);
        assert_eq!(parsed.title, "News");

        let back = serde_json::to_string(&parsed).expect("serialize entry");
        assert!(back.contains(r#""title":"News""#));
    }

    #[test]
    fn close_policy_spelling() {
        assert_eq!(ClosePolicy::default(), ClosePolicy::SelfClose);
        assert_eq!(ClosePolicy::AlwaysPair.to_string(), "always-pair");
        assert_eq!(ClosePolicy::Html.as_str(), "html");
    }
}
