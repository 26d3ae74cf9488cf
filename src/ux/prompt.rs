//! Reading commands from the operator.

use super::{command::string, err::Result};
use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Context, Helper,
};

/// The prompt shown before each command.
pub const PROMPT: &str = "> ";

/// Trait of things that can supply lines of input.
pub trait Prompt {
    /// Shows `prompt` and reads one line.
    ///
    /// Returns `None` once there is no more input, either because it ended or
    /// because the operator interrupted it.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// An interactive line editor with history and command completion.
pub struct Editor {
    editor: rustyline::Editor<CommandHelper, DefaultHistory>,
}

impl Editor {
    /// Constructs an editor with an empty, in-memory history.
    pub fn new() -> Result<Self> {
        let mut editor = rustyline::Editor::new()?;
        editor.set_helper(Some(CommandHelper));
        Ok(Self { editor })
    }
}

impl Prompt for Editor {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Completes command words, ignoring case.
pub struct CommandHelper;

impl CommandHelper {
    /// Gets the command words completing the start of `line` up to `pos`.
    fn candidates(line: &str, pos: usize) -> Vec<&'static str> {
        let prefix = &line[..pos];
        if prefix.contains(char::is_whitespace) {
            return vec![];
        }
        let prefix = prefix.to_lowercase();
        string::ALL
            .iter()
            .copied()
            .filter(|w| w.len() > prefix.len() && w.starts_with(&prefix))
            .collect()
    }
}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let pairs = Self::candidates(line, pos)
            .into_iter()
            .map(|w| Pair {
                display: w.to_owned(),
                replacement: w.to_owned(),
            })
            .collect();
        Ok((0, pairs))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {}

impl Validator for CommandHelper {}

impl Helper for CommandHelper {}

#[cfg(test)]
mod tests {
    use super::CommandHelper;

    #[test]
    fn test_completes_prefixes() {
        assert_eq!(CommandHelper::candidates("fa", 2), vec!["failed"]);
        assert_eq!(CommandHelper::candidates("PR", 2), vec!["print"]);
        assert_eq!(CommandHelper::candidates("", 0).len(), 8);
    }

    #[test]
    fn test_only_first_word() {
        assert!(CommandHelper::candidates("d fa", 4).is_empty());
        assert!(CommandHelper::candidates("run", 3).is_empty());
    }
}
