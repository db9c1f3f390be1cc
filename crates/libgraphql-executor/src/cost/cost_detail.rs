use indexmap::IndexMap;

/// A map from field path (e.g. `example.deep.a`, or `example.x=a` for an
/// aliased field) to the weight contributed at that path.
///
/// Each entry only carries the weight of the field at that path; the weights
/// of its descendants have entries of their own.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct CostDetail(IndexMap<String, u64>);
impl CostDetail {
    /// Record `cost` at `path`. Selecting the same path more than once adds
    /// up rather than overwriting, so [`CostDetail::sum()`] always matches
    /// the total it was computed alongside. Costs saturate at `u64::MAX`.
    pub(crate) fn add(&mut self, path: impl Into<String>, cost: u64) {
        let entry = self.0.entry(path.into()).or_insert(0);
        *entry = entry.saturating_add(cost);
    }

    pub fn get(&self, path: &str) -> Option<u64> {
        self.0.get(path).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(path, cost)` entries in the order they were first recorded.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(path, cost)| (path.as_str(), *cost))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn merge(&mut self, other: CostDetail) {
        for (path, cost) in other.0 {
            self.add(path, cost);
        }
    }

    pub fn sum(&self) -> u64 {
        self.0.values().copied().fold(0, u64::saturating_add)
    }
}
impl<'a> IntoIterator for &'a CostDetail {
    type Item = (&'a String, &'a u64);
    type IntoIter = indexmap::map::Iter<'a, String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
