//! Shell command templates with a single substitution point for selectors.

use super::err::{Error, TemplateError};
use serde::{Deserialize, Serialize};

/// The placeholder that marks where selectors go.
pub const PLACEHOLDER: &str = "%s";

/// A validated command template.
///
/// Templates use `printf`-style escaping: `%s` is the (single) placeholder for
/// the selector list, and `%%` stands for a literal `%`.  A template without
/// a placeholder always runs as written, and any selectors are dropped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Template {
    /// The template as written, kept for dumping.
    raw: String,
    /// The unescaped text before the placeholder.
    before: String,
    /// The unescaped text after the placeholder.
    after: String,
    /// Whether the template has a placeholder at all.
    placeholder: bool,
}

impl Template {
    /// Fills the template with `selectors`, each single-quoted, joined with
    /// spaces.  No selectors fill the placeholder with nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use litr::config::Template;
    ///
    /// let t: Template = "pytest %s --json-report".parse().unwrap();
    /// assert_eq!(t.fill(&["a b", "c"]), "pytest 'a b' 'c' --json-report");
    /// assert_eq!(t.fill::<&str>(&[]), "pytest  --json-report");
    /// ```
    pub fn fill<S: AsRef<str>>(&self, selectors: &[S]) -> String {
        if !self.placeholder {
            if !selectors.is_empty() {
                tracing::warn!(
                    count = selectors.len(),
                    "command template has no '%s'; running it without the selected tests"
                );
            }
            return self.before.clone();
        }
        let tests = selectors
            .iter()
            .map(|s| quote(s.as_ref()))
            .collect::<Vec<_>>()
            .join(" ");
        format!("{}{}{}", self.before, tests, self.after)
    }

    /// Gets the template as it was written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Gets whether the template has somewhere to put selectors.
    pub fn has_placeholder(&self) -> bool {
        self.placeholder
    }
}

/// Wraps a selector in single quotes so that the shell sees one word.
///
/// An embedded single quote closes the quoting, is escaped, and reopens it.
///
/// # Examples
///
/// ```
/// use litr::config::template::quote;
/// assert_eq!(quote("tests/a.py::test_x[1-2]"), "'tests/a.py::test_x[1-2]'");
/// assert_eq!(quote("it's"), r"'it'\''s'");
/// ```
pub fn quote(selector: &str) -> String {
    format!("'{}'", selector.replace('\'', r"'\''"))
}

fn parse(raw: &str) -> std::result::Result<(String, String, bool), TemplateError> {
    let mut before = String::new();
    let mut after = String::new();
    let mut seen = false;

    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        let c = if c == '%' {
            match chars.next() {
                Some('%') => '%',
                Some('s') if seen => return Err(TemplateError::ExtraPlaceholder),
                Some('s') => {
                    seen = true;
                    continue;
                }
                Some(d) => return Err(TemplateError::BadDirective(d)),
                None => return Err(TemplateError::TrailingPercent),
            }
        } else {
            c
        };
        let out = if seen { &mut after } else { &mut before };
        out.push(c);
    }

    Ok((before, after, seen))
}

impl TryFrom<String> for Template {
    type Error = Error;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        match parse(&raw) {
            Ok((before, after, placeholder)) => Ok(Self {
                raw,
                before,
                after,
                placeholder,
            }),
            Err(source) => Err(Error::Template {
                template: raw,
                source,
            }),
        }
    }
}

impl std::str::FromStr for Template {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl From<Template> for String {
    fn from(t: Template) -> Self {
        t.raw
    }
}
