use thiserror::Error;

/// Rejected attempts to move a [`Stream`](crate::Stream) outside its text.
///
/// These are programming errors on the caller's side. A recognizer or bounds
/// search that simply finds nothing is reported as `false`/`None`, never as a
/// `ScanError`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("stream bounds {pos}..{end} fall outside text of length {len}")]
    OutOfBounds { pos: usize, end: usize, len: usize },

    #[error("offset {0} is not on a character boundary")]
    NotCharBoundary(usize),

    #[error("stream belongs to a different scanner")]
    ForeignStream,
}
