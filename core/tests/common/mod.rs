use artistmap_core::{ArtistRecord, ArtistSource, Mbid, SourceError, TimeWindow};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory `ArtistSource` that replays canned responses and records calls.
#[derive(Default)]
pub struct ScriptedSource {
    pub top: Vec<ArtistRecord>,
    pub related: HashMap<String, Vec<ArtistRecord>>,
    pub failing: Vec<String>,
    pub top_error: Option<(u32, String)>,
    pub related_calls: RefCell<Vec<(String, usize)>>,
    pub top_calls: RefCell<Vec<(String, usize, TimeWindow)>>,
}

impl ScriptedSource {
    pub fn new(top: Vec<ArtistRecord>) -> Self {
        Self {
            top,
            ..Self::default()
        }
    }

    pub fn relate(mut self, mbid: &str, related: Vec<ArtistRecord>) -> Self {
        self.related.insert(mbid.to_string(), related);
        self
    }

    pub fn fail_on(mut self, mbid: &str) -> Self {
        self.failing.push(mbid.to_string());
        self
    }

    pub fn queried_mbids(&self) -> Vec<String> {
        self.related_calls
            .borrow()
            .iter()
            .map(|(mbid, _)| mbid.clone())
            .collect()
    }
}

impl ArtistSource for ScriptedSource {
    fn top_artists(
        &self,
        listener: &str,
        sample_size: usize,
        window: TimeWindow,
    ) -> Result<Vec<ArtistRecord>, SourceError> {
        self.top_calls
            .borrow_mut()
            .push((listener.to_string(), sample_size, window));

        if let Some((code, message)) = &self.top_error {
            return Err(SourceError::Api {
                code: *code,
                message: message.clone(),
            });
        }

        Ok(self.top.iter().take(sample_size).cloned().collect())
    }

    fn related_artists(&self, mbid: &Mbid, limit: usize) -> Result<Vec<ArtistRecord>, SourceError> {
        self.related_calls
            .borrow_mut()
            .push((mbid.to_string(), limit));

        if self.failing.iter().any(|failing| failing == mbid.as_str()) {
            return Err(SourceError::Transport("connection reset".to_string()));
        }

        Ok(self
            .related
            .get(mbid.as_str())
            .map(|related| related.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }
}

pub fn listened(name: &str, mbid: &str) -> ArtistRecord {
    ArtistRecord::with_mbid(name, mbid)
}
