use super::error::SelectError;
use super::roller::Roller;
use super::table::WeightTable;
use log::{trace, warn};
use std::fmt::Debug;
use std::hash::Hash;

///
/// Picks one item from `table` with probability proportional to its weight.
///
/// Items are scanned in ascending weight order, ties in insertion order. The
/// roll is drawn from `0..total` and walked down the scan, subtracting each
/// weight it passes. Should the roller ever hand back a value outside that
/// range, the last item scanned (the heaviest) is returned.
///
pub fn select_one<T, R>(table: &WeightTable<T>, roller: &mut R) -> Result<T, SelectError>
where
    T: Clone + Eq + Hash + Debug,
    R: Roller + ?Sized,
{
    if table.is_empty() {
        return Err(SelectError::Empty);
    }

    let mut sorted: Vec<(&T, u64)> = Vec::with_capacity(table.len());
    for (item, weight) in table.iter() {
        let weight = u64::try_from(weight).map_err(|_| SelectError::NegativeWeight { weight })?;
        sorted.push((item, weight));
    }
    // Stable, so equal weights stay in insertion order
    sorted.sort_by_key(|(_, weight)| *weight);

    let total = sorted
        .iter()
        .try_fold(0u64, |sum, (_, weight)| sum.checked_add(*weight))
        .ok_or(SelectError::WeightOverflow)?;
    if total == 0 {
        return Err(SelectError::ZeroTotalWeight);
    }

    let mut roll = roller.roll_below(total);
    trace!("Rolled {} of {}", roll, total);

    for (item, weight) in sorted.iter() {
        if roll < *weight {
            trace!("Selected {:?}", item);
            return Ok((*item).clone());
        }
        roll -= weight;
    }

    let Some(&(fallback, _)) = sorted.last() else {
        return Err(SelectError::Empty);
    };
    warn!(
        "Roll ran past every weight (total {}), falling back to {:?}",
        total, fallback
    );
    Ok(fallback.clone())
}

///
/// Reads as `WeightedRandomizer::from(&weights).take_one()`.
///
pub struct WeightedRandomizer<'a, T: Clone + Eq + Hash> {
    weights: &'a WeightTable<T>,
}

impl<'a, T: Clone + Eq + Hash> From<&'a WeightTable<T>> for WeightedRandomizer<'a, T> {
    fn from(weights: &'a WeightTable<T>) -> WeightedRandomizer<'a, T> {
        WeightedRandomizer { weights }
    }
}

impl<'a, T: Clone + Eq + Hash + Debug> WeightedRandomizer<'a, T> {
    /// Selects using the thread-local generator
    pub fn take_one(&self) -> Result<T, SelectError> {
        self.take_one_with(&mut rand::thread_rng())
    }

    pub fn take_one_with<R: Roller + ?Sized>(&self, roller: &mut R) -> Result<T, SelectError> {
        select_one(self.weights, roller)
    }
}
