//! Error types for arena configuration.

/// Errors raised when a tournament or evolution run is misconfigured.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArenaError {
    /// The population has fewer individuals than the run needs.
    #[error("population of {found} is too small, need at least {min}")]
    PopulationTooSmall {
        /// Number of individuals supplied.
        found: usize,
        /// Minimum required.
        min: usize,
    },
    /// A search depth of zero was configured.
    #[error("search depth must be at least 1")]
    ZeroDepth,
    /// A search depth the searcher cannot reach was configured.
    #[error("search depth {depth} exceeds the maximum of {max}")]
    DepthTooLarge {
        /// Depth configured.
        depth: u8,
        /// Deepest allowed search.
        max: usize,
    },
    /// Zero games per pairing, generations, or round length were configured.
    #[error("{what} must be at least 1")]
    ZeroGames {
        /// Which count is zero.
        what: &'static str,
    },
    /// Zero worker threads were configured.
    #[error("thread count must be at least 1")]
    ZeroThreads,
    /// A ply cap of zero was configured.
    #[error("max_plies must be at least 1 when set")]
    ZeroPlyCap,
    /// A mutation parameter lies outside its valid range.
    #[error("{name} = {value} is out of range")]
    BadMutation {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
}
