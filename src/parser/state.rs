use crate::types::SchemeType;

/// URL parser state machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Scan up to the first `:`
    SchemeExtraction,
    /// `//` then authority (http family) or bare host (file)
    AuthorityAndPath(SchemeType),
    /// Path, query and fragment
    PathOnly,
}
