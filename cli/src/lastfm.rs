use artistmap_core::{ArtistRecord, ArtistSource, Mbid, SourceError, TimeWindow};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

pub const API_ROOT: &str = "http://ws.audioscrobbler.com/2.0/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct TopArtistsResponse {
    topartists: Option<LastFmArtistList>,
    error: Option<u32>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SimilarArtistsResponse {
    similarartists: Option<LastFmArtistList>,
    error: Option<u32>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LastFmArtistList {
    #[serde(default)]
    artist: OneOrMany<LastFmArtist>,
}

#[derive(Debug, Deserialize)]
pub struct LastFmArtist {
    pub name: String,
    #[serde(default)]
    pub mbid: Option<String>,
}

/// Last.fm collapses single-element lists into a bare object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

impl From<LastFmArtist> for ArtistRecord {
    fn from(artist: LastFmArtist) -> Self {
        let mbid = artist.mbid.as_deref().and_then(Mbid::parse);
        ArtistRecord::new(artist.name, mbid)
    }
}

pub fn parse_top_artists(body: &str) -> Result<Vec<ArtistRecord>, SourceError> {
    let response: TopArtistsResponse = decode(body)?;

    if let Some(code) = response.error {
        return Err(api_error(code, response.message));
    }

    let list = response
        .topartists
        .ok_or_else(|| SourceError::Decode("response has no topartists section".to_string()))?;

    Ok(into_records(list))
}

/// A response without a `similarartists` section means Last.fm did not
/// recognize the MBID, which is reported as no related artists.
pub fn parse_similar_artists(body: &str) -> Result<Vec<ArtistRecord>, SourceError> {
    let response: SimilarArtistsResponse = decode(body)?;

    match response.similarartists {
        Some(list) => Ok(into_records(list)),
        None => {
            debug!(
                code = response.error,
                message = response.message.as_deref().unwrap_or(""),
                "no similarartists section"
            );
            Ok(Vec::new())
        }
    }
}

fn decode<'a, T: Deserialize<'a>>(body: &'a str) -> Result<T, SourceError> {
    serde_json::from_str(body).map_err(|error| SourceError::Decode(error.to_string()))
}

fn api_error(code: u32, message: Option<String>) -> SourceError {
    SourceError::Api {
        code,
        message: message.unwrap_or_else(|| "unknown error".to_string()),
    }
}

fn into_records(list: LastFmArtistList) -> Vec<ArtistRecord> {
    list.artist.into_vec().into_iter().map(ArtistRecord::from).collect()
}

pub struct LastFmClient {
    client: Client,
    api_key: String,
    api_root: String,
}

impl LastFmClient {
    pub fn new(api_key: String) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|error| SourceError::Transport(error.to_string()))?;

        Ok(Self {
            client,
            api_key,
            api_root: API_ROOT.to_string(),
        })
    }

    pub fn with_api_root(mut self, api_root: impl Into<String>) -> Self {
        self.api_root = api_root.into();
        self
    }

    pub fn top_artists_url(&self, user: &str, limit: usize, period: TimeWindow) -> String {
        format!(
            "{}?method=user.gettopartists&user={}&limit={}&period={}&api_key={}&format=json",
            self.api_root,
            urlencoding::encode(user),
            limit,
            period.as_str(),
            self.api_key
        )
    }

    pub fn similar_artists_url(&self, mbid: &Mbid, limit: usize) -> String {
        format!(
            "{}?method=artist.getsimilar&mbid={}&limit={}&api_key={}&format=json",
            self.api_root,
            urlencoding::encode(mbid.as_str()),
            limit,
            self.api_key
        )
    }

    // Last.fm reports most failures in the JSON body, so the status is not checked.
    fn fetch(&self, url: &str) -> Result<String, SourceError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|error| SourceError::Transport(error.to_string()))?;

        debug!(status = %response.status(), "Last.fm responded");

        response
            .text()
            .map_err(|error| SourceError::Transport(error.to_string()))
    }
}

impl ArtistSource for LastFmClient {
    fn top_artists(
        &self,
        listener: &str,
        sample_size: usize,
        window: TimeWindow,
    ) -> Result<Vec<ArtistRecord>, SourceError> {
        let body = self.fetch(&self.top_artists_url(listener, sample_size, window))?;
        parse_top_artists(&body)
    }

    fn related_artists(&self, mbid: &Mbid, limit: usize) -> Result<Vec<ArtistRecord>, SourceError> {
        let body = self.fetch(&self.similar_artists_url(mbid, limit))?;
        parse_similar_artists(&body)
    }
}
