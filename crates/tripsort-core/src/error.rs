use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    /// The trip carries no album that could receive unmatched media.
    #[error("trip has no usable destination album")]
    NoDestinationAlbum,
}
