//! The test registry: the latest known record for every test seen so far.

use super::{outcome::Outcome, record::TestRecord};
use indexmap::IndexMap;

/// An insertion-ordered store of test records, keyed by test identifier.
///
/// The registry only grows or overwrites; records are never removed.  Order is
/// the order in which each identifier was first seen, and only matters for
/// display.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    tests: IndexMap<String, TestRecord>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record`, replacing any previous record for the same test in
    /// place.
    ///
    /// # Examples
    ///
    /// ```
    /// use litr::model::{Outcome, Registry, TestRecord};
    ///
    /// let mut registry = Registry::new();
    /// let record = |outcome: &str| TestRecord {
    ///     id: "t1".to_owned(),
    ///     outcome: Outcome::new(outcome),
    ///     payload: Default::default(),
    /// };
    /// registry.upsert(record("failed"));
    /// registry.upsert(record("passed"));
    ///
    /// assert_eq!(registry.len(), 1);
    /// assert_eq!(registry.get("t1").map(|r| r.outcome.as_str()), Some("passed"));
    /// ```
    pub fn upsert(&mut self, record: TestRecord) {
        self.tests.insert(record.id.clone(), record);
    }

    /// Gets the record for the test with identifier `id`, if any.
    pub fn get(&self, id: &str) -> Option<&TestRecord> {
        self.tests.get(id)
    }

    /// Lists every test with its current outcome.
    pub fn list(&self) -> impl Iterator<Item = (&str, &Outcome)> + '_ {
        self.tests.values().map(|r| (r.id.as_str(), &r.outcome))
    }

    /// Gets the identifiers of every test whose latest outcome is `outcome`.
    pub fn filter_by_outcome(&self, outcome: &Outcome) -> Vec<String> {
        self.tests
            .values()
            .filter(|r| &r.outcome == outcome)
            .map(|r| r.id.clone())
            .collect()
    }

    /// Tallies how many tests currently sit at each outcome.
    ///
    /// Outcomes appear in the order they were first tallied.
    pub fn count_by_outcome(&self) -> IndexMap<Outcome, usize> {
        let mut tally = IndexMap::new();
        for record in self.tests.values() {
            *tally.entry(record.outcome.clone()).or_insert(0) += 1;
        }
        tally
    }

    /// Gets the number of tests in the registry.
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Gets whether no tests have been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}
