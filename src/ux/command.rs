//! Commands understood at the prompt.

/// String representations of commands, used for parsing and completion.
pub mod string {
    /// Lists every recorded test.
    pub const PRINT: &str = "print";
    /// Short form of [PRINT].
    pub const PRINT_SHORT: &str = "p";
    /// Runs the default selection.
    pub const RUN: &str = "run";
    /// Short form of [RUN].
    pub const RUN_SHORT: &str = "r";
    /// Re-runs the tests that last failed.
    pub const FAILED: &str = "failed";
    /// Short form of [FAILED].
    pub const FAILED_SHORT: &str = "f";
    /// Shows everything recorded about one test.
    pub const DETAILS: &str = "details";
    /// Short form of [DETAILS].
    pub const DETAILS_SHORT: &str = "d";

    /// All command words, long forms first.
    pub const ALL: &[&str] = &[
        PRINT,
        RUN,
        FAILED,
        DETAILS,
        PRINT_SHORT,
        RUN_SHORT,
        FAILED_SHORT,
        DETAILS_SHORT,
    ];
}

/// A command entered at the prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the identifier and outcome of every recorded test.
    Print,
    /// Run the default selection of tests.
    Run,
    /// Re-run every test whose latest outcome is `failed`.
    Failed,
    /// Print the recorded payload of the test with this identifier.
    Details(String),
}

impl Command {
    /// Parses a line of input into a command.
    ///
    /// Command words are matched case-insensitively after trimming; anything
    /// unrecognised, including `details` without an identifier, is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use litr::ux::Command;
    /// assert_eq!(Command::parse("r"), Some(Command::Run));
    /// assert_eq!(Command::parse("  FAILED "), Some(Command::Failed));
    /// assert_eq!(Command::parse("d tests/a.py::t1"), Some(Command::Details("tests/a.py::t1".to_owned())));
    /// assert_eq!(Command::parse("rerun"), None);
    /// ```
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, r)| (w, r.trim()));

        match (&*word.to_lowercase(), rest) {
            (string::PRINT | string::PRINT_SHORT, "") => Some(Self::Print),
            (string::RUN | string::RUN_SHORT, "") => Some(Self::Run),
            (string::FAILED | string::FAILED_SHORT, "") => Some(Self::Failed),
            (string::DETAILS | string::DETAILS_SHORT, id) if !id.is_empty() => {
                Some(Self::Details(id.to_owned()))
            }
            _ => None,
        }
    }
}
