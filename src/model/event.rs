//! Events decoded from the test runner's JSON-lines output.
//!
//! Decoding is lenient throughout: the runner and its pipe are allowed to be
//! partial or noisy mid-stream, so nothing here ever fails.  Lines that aren't
//! JSON decode to nothing; JSON that isn't a recognised event decodes to
//! [Event::Unrecognized] or [Event::Incomplete].

use super::record::{key, TestRecord};
use serde_json::Value;

/// Discriminator values for recognised events.
pub mod tag {
    /// Tag of the event sent once when the runner starts a session.
    pub const SESSION_START: &str = "session_start";
    /// Tag of the event sent once per finished test.
    pub const TEST_RESULT: &str = "test_result";
}

/// Key of the expected test count on session start events.
const TEST_NUMBER: &str = "test_number";

/// A decoded event.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// The runner started a session and declared how many tests it expects
    /// to run, if it knows.
    SessionStart {
        /// The expected number of tests.
        test_number: Option<u64>,
    },
    /// A test finished.
    TestResult(TestRecord),
    /// A `test_result` event without an identifier or outcome.
    Incomplete,
    /// Valid JSON that isn't an event we understand; displayed raw.
    Unrecognized(Value),
}

impl Event {
    /// Decodes one line of runner output.
    ///
    /// Returns `None` if the line isn't JSON at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use litr::model::Event;
    /// assert_eq!(
    ///     Event::decode(br#"{"_type": "session_start", "test_number": 3}"#),
    ///     Some(Event::SessionStart { test_number: Some(3) })
    /// );
    /// assert_eq!(Event::decode(b"collecting ... "), None);
    /// ```
    pub fn decode(line: &[u8]) -> Option<Self> {
        serde_json::from_slice(line).ok().map(Self::from_value)
    }

    /// Interprets an already-parsed JSON value as an event.
    pub fn from_value(value: Value) -> Self {
        let ty = value.get(key::TYPE).and_then(Value::as_str).map(str::to_owned);
        match (ty.as_deref(), value) {
            (Some(tag::SESSION_START), value) => Self::SessionStart {
                test_number: value.get(TEST_NUMBER).and_then(Value::as_u64),
            },
            (Some(tag::TEST_RESULT), Value::Object(payload)) => {
                TestRecord::from_payload(payload).map_or(Self::Incomplete, Self::TestResult)
            }
            (_, value) => Self::Unrecognized(value),
        }
    }
}
