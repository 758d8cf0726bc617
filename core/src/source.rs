use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// MusicBrainz identifier as handed out by Last.fm.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mbid(String);

impl Mbid {
    /// Last.fm sends `""` for artists it has no MBID for, so blank input is absent.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Mbid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One artist as reported by the upstream service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistRecord {
    pub name: String,
    pub mbid: Option<Mbid>,
}

impl ArtistRecord {
    pub fn new(name: impl Into<String>, mbid: Option<Mbid>) -> Self {
        Self {
            name: name.into(),
            mbid,
        }
    }

    pub fn with_mbid(name: impl Into<String>, mbid: &str) -> Self {
        Self::new(name, Mbid::parse(mbid))
    }

    pub fn without_mbid(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }
}

/// Listening-history window accepted by `user.gettopartists`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeWindow {
    #[default]
    #[serde(rename = "overall")]
    Overall,
    #[serde(rename = "7day")]
    SevenDay,
    #[serde(rename = "1month")]
    OneMonth,
    #[serde(rename = "3month")]
    ThreeMonth,
    #[serde(rename = "6month")]
    SixMonth,
    #[serde(rename = "12month")]
    TwelveMonth,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 6] = [
        TimeWindow::Overall,
        TimeWindow::SevenDay,
        TimeWindow::OneMonth,
        TimeWindow::ThreeMonth,
        TimeWindow::SixMonth,
        TimeWindow::TwelveMonth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::Overall => "overall",
            TimeWindow::SevenDay => "7day",
            TimeWindow::OneMonth => "1month",
            TimeWindow::ThreeMonth => "3month",
            TimeWindow::SixMonth => "6month",
            TimeWindow::TwelveMonth => "12month",
        }
    }

    /// `overall | 7day | 1month | 3month | 6month | 12month`
    pub fn choices() -> String {
        Self::ALL
            .iter()
            .map(TimeWindow::as_str)
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized time window '{0}'")]
pub struct UnknownTimeWindow(pub String);

impl FromStr for TimeWindow {
    type Err = UnknownTimeWindow;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|window| window.as_str() == wanted)
            .ok_or_else(|| UnknownTimeWindow(s.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("Last.fm error {code}: {message}")]
    Api { code: u32, message: String },
}

/// Where listened and related artists come from.
///
/// `related_artists` returns an empty list, not an error, when the upstream
/// service does not recognize the identifier.
pub trait ArtistSource {
    fn top_artists(
        &self,
        listener: &str,
        sample_size: usize,
        window: TimeWindow,
    ) -> Result<Vec<ArtistRecord>, SourceError>;

    fn related_artists(&self, mbid: &Mbid, limit: usize) -> Result<Vec<ArtistRecord>, SourceError>;
}
