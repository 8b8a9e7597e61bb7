use thiserror::Error;

/// Failure kinds of the allocating container operations.
///
/// Lookups with stale or foreign handles are not errors; they surface as
/// `None` on the operation itself.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotError {
    /// The reallocation primitive returned null. The container keeps its
    /// prior block and contents.
    #[error("allocation of {bytes} bytes failed")]
    AllocFailed { bytes: usize },
    /// The next capacity would exceed the container maximum.
    #[error("capacity overflow: {needed} slots exceed the maximum of {max}")]
    CapacityOverflow { needed: u64, max: u64 },
}

pub type Result<T> = std::result::Result<T, SlotError>;
