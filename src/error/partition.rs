use core::fmt;

/// Errors occurring while computing a cube partition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum PartitionError {
    /// The SFC partitioner requires `ne` to factor into `{2, 3, 5}`.
    UnfactorableNe(u32),
    /// The band search requires at least 4 processes (smaller counts are
    /// handled by the whole-panel special cases).
    NprocTooSmall(u32),
    /// More processes than elements (`nproc > 6·ne²`).
    NprocTooLarge(u32),
    /// A `(rank, local id)` pair has no owning element.
    MissingLocalId {
        /// The rank whose element table is incomplete.
        rank: u32,
        /// The first local id with no matching element.
        lid: u32,
    },
}

impl fmt::Display for PartitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::UnfactorableNe(ne) => {
                write!(f, "ne ({ne}) has a prime factor outside {{2, 3, 5}}")
            }
            Self::NprocTooSmall(nproc) => {
                write!(f, "band search requires at least 4 ranks (got {nproc})")
            }
            Self::NprocTooLarge(nproc) => {
                write!(f, "more ranks ({nproc}) than elements")
            }
            Self::MissingLocalId { rank, lid } => {
                write!(f, "no element owns local id {lid} on rank {rank}")
            }
        }
    }
}

impl std::error::Error for PartitionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}
