use crate::error::RegistryError;
use crate::map_config::LinkPolicy;
use crate::source::Mbid;
use rustc_hash::FxHashMap;
use tracing::trace;

/// One artist discovered while walking a listener's history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    pub name: String,
    pub external_id: Option<Mbid>,
    /// Appeared in the listener's top artists. Never reset once set.
    pub listened: bool,
    /// How many times the artist was reported as related, starting at 1.
    pub relatedness_count: u32,
    /// Neighbor names in link order. Repeats record multiplicity.
    pub neighbors: Vec<String>,
}

impl Artist {
    fn new(name: &str, external_id: Option<Mbid>, listened: bool) -> Self {
        Self {
            name: name.to_string(),
            external_id,
            listened,
            relatedness_count: 1,
            neighbors: Vec::new(),
        }
    }

    /// Related-only artist linked from exactly one place.
    pub fn is_isolated_related(&self) -> bool {
        !self.listened && self.neighbors.len() == 1
    }

    /// Without an MBID there is nothing to ask `artist.getsimilar` about.
    pub fn can_seed_discovery(&self) -> bool {
        self.external_id.is_some()
    }
}

/// Name-keyed store of every artist seen during a traversal.
#[derive(Debug, Default)]
pub struct ArtistRegistry {
    artists: FxHashMap<String, Artist>,
    discovery_order: Vec<String>,
    link_policy: LinkPolicy,
}

impl ArtistRegistry {
    pub fn new(link_policy: LinkPolicy) -> Self {
        Self {
            link_policy,
            ..Self::default()
        }
    }

    pub fn link_policy(&self) -> LinkPolicy {
        self.link_policy
    }

    pub fn record_listened(&mut self, name: &str, external_id: Option<Mbid>) {
        match self.artists.get_mut(name) {
            Some(artist) => {
                artist.listened = true;
                if artist.external_id.is_none() {
                    artist.external_id = external_id;
                }
            }
            None => self.insert(Artist::new(name, external_id, true)),
        }
    }

    pub fn record_related(
        &mut self,
        source_name: &str,
        related_name: &str,
        external_id: Option<Mbid>,
    ) -> Result<(), RegistryError> {
        if !self.artists.contains_key(source_name) {
            return Err(RegistryError::UnknownSource(source_name.to_string()));
        }

        // Counted even for listened artists.
        match self.artists.get_mut(related_name) {
            Some(related) => related.relatedness_count += 1,
            None => self.insert(Artist::new(related_name, external_id, false)),
        }

        self.push_neighbor(source_name, related_name);
        if self.link_policy == LinkPolicy::Bidirectional {
            self.push_neighbor(related_name, source_name);
        }

        Ok(())
    }

    /// Removes related-only artists with a single neighbor entry and returns
    /// their names. Neighbor lists elsewhere keep pointing at them.
    pub fn prune_isolated_related(&mut self) -> Vec<String> {
        let doomed: Vec<String> = self
            .discovery_order
            .iter()
            .filter(|name| {
                self.artists
                    .get(name.as_str())
                    .is_some_and(Artist::is_isolated_related)
            })
            .cloned()
            .collect();

        for name in &doomed {
            self.artists.remove(name);
        }
        self.discovery_order
            .retain(|name| self.artists.contains_key(name));

        trace!(pruned = doomed.len(), remaining = self.artists.len(), "pruned isolated related artists");
        doomed
    }

    pub fn get(&self, name: &str) -> Option<&Artist> {
        self.artists.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.artists.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    /// Freezes the registry for graph assembly.
    pub fn snapshot(self) -> ArtistSnapshot {
        ArtistSnapshot {
            artists: self.artists,
            order: self.discovery_order,
        }
    }

    fn insert(&mut self, artist: Artist) {
        self.discovery_order.push(artist.name.clone());
        self.artists.insert(artist.name.clone(), artist);
    }

    fn push_neighbor(&mut self, from: &str, to: &str) {
        if let Some(artist) = self.artists.get_mut(from) {
            artist.neighbors.push(to.to_string());
        }
    }
}

/// Finished artist map, iterated in discovery order.
#[derive(Debug, Clone, Default)]
pub struct ArtistSnapshot {
    artists: FxHashMap<String, Artist>,
    order: Vec<String>,
}

impl ArtistSnapshot {
    pub fn get(&self, name: &str) -> Option<&Artist> {
        self.artists.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.artists.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artist> {
        self.order.iter().filter_map(|name| self.artists.get(name))
    }

    pub fn listened_count(&self) -> usize {
        self.artists.values().filter(|artist| artist.listened).count()
    }
}
