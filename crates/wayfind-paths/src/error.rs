use std::fmt;

/// Errors returned by [`PathSearch`](crate::PathSearch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The frontier ran dry before the goal was reached: the goal is not
    /// reachable from the origin.
    PathNotFound,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PathNotFound => f.write_str("no path between origin and goal"),
        }
    }
}

impl std::error::Error for SearchError {}
