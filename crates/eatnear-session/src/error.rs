use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// A random suggestion was requested before any search results arrived.
    #[error("no candidates available: the search results are empty")]
    NoCandidates,
}
