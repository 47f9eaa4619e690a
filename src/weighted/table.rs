use linked_hash_set::LinkedHashSet;
use std::collections::HashMap;
use std::hash::Hash;

///
/// A mapping from item to weight that remembers the order items were first
/// inserted in. That order is what breaks ties between equal weights.
///
/// Weights are signed so that a bad weight can be carried to selection and
/// rejected there, rather than silently wrapping.
///
#[derive(Debug, Clone)]
pub struct WeightTable<T: Clone + Eq + Hash> {
    order: LinkedHashSet<T>,
    weights: HashMap<T, i64>,
}

impl<T: Clone + Eq + Hash> WeightTable<T> {
    pub fn new() -> WeightTable<T> {
        WeightTable {
            order: LinkedHashSet::new(),
            weights: HashMap::new(),
        }
    }

    /// Sets the weight of `item`, returning the previous weight if it was already present.
    /// A replaced item keeps its original position.
    pub fn insert(&mut self, item: T, weight: i64) -> Option<i64> {
        if !self.order.contains(&item) {
            self.order.insert(item.clone());
        }
        self.weights.insert(item, weight)
    }

    pub fn weight(&self, item: &T) -> Option<i64> {
        self.weights.get(item).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Items and weights in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&T, i64)> + '_ {
        self.order
            .iter()
            .filter_map(move |item| self.weights.get(item).map(|weight| (item, *weight)))
    }
}

impl<T: Clone + Eq + Hash> Default for WeightTable<T> {
    fn default() -> Self {
        WeightTable::new()
    }
}

impl<T: Clone + Eq + Hash> FromIterator<(T, i64)> for WeightTable<T> {
    fn from_iter<I: IntoIterator<Item = (T, i64)>>(iter: I) -> Self {
        let mut table = WeightTable::new();
        for (item, weight) in iter {
            table.insert(item, weight);
        }
        table
    }
}

impl<T: Clone + Eq + Hash, const N: usize> From<[(T, i64); N]> for WeightTable<T> {
    fn from(entries: [(T, i64); N]) -> Self {
        entries.into_iter().collect()
    }
}
