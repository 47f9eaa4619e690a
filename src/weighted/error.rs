use thiserror::Error;

/// Rejected input to a selection. All of these are caller errors; none are
/// transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("no items to select from")]
    Empty,
    #[error("weight {weight} is negative")]
    NegativeWeight { weight: i64 },
    #[error("total weight is zero")]
    ZeroTotalWeight,
    #[error("total weight does not fit in 64 bits")]
    WeightOverflow,
    #[error("chance {0} is outside 0..=100")]
    ChanceOutOfRange(i32),
}
