use crate::source::SourceError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("artist '{0}' must be registered before related artists can be linked to it")]
    UnknownSource(String),
}

#[derive(Debug, Error)]
pub enum MapError {
    #[error("could not fetch top artists for '{listener}': {source}")]
    TopArtists {
        listener: String,
        #[source]
        source: SourceError,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
