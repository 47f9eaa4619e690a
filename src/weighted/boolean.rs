use super::error::SelectError;
use super::roller::Roller;
use super::selector::select_one;
use super::table::WeightTable;
use log::warn;

/// Returns `true` with `chance_percent`% probability.
///
/// A chance outside `0..=100` always returns `false` rather than failing. Use
/// [`try_weighted_bool`] to have that rejected instead.
pub fn weighted_bool(chance_percent: i32) -> bool {
    weighted_bool_with(chance_percent, &mut rand::thread_rng())
}

pub fn weighted_bool_with<R: Roller + ?Sized>(chance_percent: i32, roller: &mut R) -> bool {
    match try_weighted_bool(chance_percent, roller) {
        Ok(result) => result,
        Err(err) => {
            warn!("Weighted bool returning false: {}", err);
            false
        }
    }
}

pub fn try_weighted_bool<R: Roller + ?Sized>(
    chance_percent: i32,
    roller: &mut R,
) -> Result<bool, SelectError> {
    if !(0..=100).contains(&chance_percent) {
        return Err(SelectError::ChanceOutOfRange(chance_percent));
    }
    let weights = WeightTable::from([
        (true, i64::from(chance_percent)),
        (false, i64::from(100 - chance_percent)),
    ]);
    select_one(&weights, roller)
}
