//! The [TestRecord] type.

use super::outcome::Outcome;
use serde_json::{Map, Value};

/// Payload keys that the record lifts into its own fields.
pub mod key {
    /// Key of the event discriminator.
    pub const TYPE: &str = "_type";
    /// Key of the test identifier.
    pub const ID: &str = "id";
    /// Key of the test outcome.
    pub const OUTCOME: &str = "outcome";
}

/// The latest known result of one test.
#[derive(Clone, Debug, PartialEq)]
pub struct TestRecord {
    /// The identifier of the test, also used as its selector.
    pub id: String,
    /// The outcome the runner reported.
    pub outcome: Outcome,
    /// The full event that produced this record, kept for inspection.
    pub payload: Map<String, Value>,
}

impl TestRecord {
    /// Tries to build a record from a `test_result` payload.
    ///
    /// Returns `None` if the payload lacks a string `id` or `outcome`.
    ///
    /// # Examples
    ///
    /// ```
    /// use litr::model::TestRecord;
    /// let payload = serde_json::json!({"id": "t1", "outcome": "passed", "duration": 0.5});
    /// let record = TestRecord::from_payload(payload.as_object().unwrap().clone()).unwrap();
    /// assert_eq!(record.id, "t1");
    /// assert_eq!(record.outcome.as_str(), "passed");
    ///
    /// let partial = serde_json::json!({"id": "t1"});
    /// assert!(TestRecord::from_payload(partial.as_object().unwrap().clone()).is_none());
    /// ```
    pub fn from_payload(payload: Map<String, Value>) -> Option<Self> {
        let id = payload.get(key::ID)?.as_str()?.to_owned();
        let outcome = Outcome::new(payload.get(key::OUTCOME)?.as_str()?);
        Some(Self {
            id,
            outcome,
            payload,
        })
    }

    /// Iterates over the payload fields that aren't already lifted into the
    /// record, in the order the runner sent them.
    pub fn details(&self) -> impl Iterator<Item = (&String, &Value)> + '_ {
        self.payload
            .iter()
            .filter(|(k, _)| !matches!(k.as_str(), key::TYPE | key::ID | key::OUTCOME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_non_string_id_is_incomplete() {
        assert!(TestRecord::from_payload(object(json!({"id": 4, "outcome": "passed"}))).is_none());
        assert!(TestRecord::from_payload(object(json!({"id": "t", "outcome": null}))).is_none());
    }

    #[test]
    fn test_details_skip_lifted_keys() {
        let record = TestRecord::from_payload(object(json!({
            "_type": "test_result",
            "id": "t1",
            "outcome": "failed",
            "stdout": "hello",
            "duration": 1.5,
        })))
        .unwrap();

        let keys: Vec<&str> = record.details().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["stdout", "duration"]);
    }
}
