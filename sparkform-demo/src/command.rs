//! Line commands understood by the demo.

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Help,
    /// Focus by label or 1-based position.
    Focus(String),
    Blur,
    Next,
    Prev,
    /// Type characters into the focused field.
    Type(String),
    Backspace,
    /// Replace the focused field's text.
    Set(String),
    /// Pick an option of the focused select.
    Select(String),
    Clear,
    Reset,
    Submit,
    Save,
    Valid,
    Quit,
}

impl Command {
    /// Parse a line. Returns `None` for blank lines and `Err` with a message
    /// for anything unknown.
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(' ') {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word {
            "show" | "ls" => Command::Show,
            "help" | "?" => Command::Help,
            "focus" => Command::Focus(required(word, rest)?),
            "blur" => Command::Blur,
            "tab" | "next" => Command::Next,
            "prev" => Command::Prev,
            "type" => Command::Type(required(word, rest)?),
            "bs" | "backspace" => Command::Backspace,
            "set" => Command::Set(rest.to_string()),
            "select" => Command::Select(rest.to_string()),
            "clear" => Command::Clear,
            "reset" => Command::Reset,
            "submit" => Command::Submit,
            "save" => Command::Save,
            "valid" => Command::Valid,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(format!("unknown command '{}', try 'help'", other)),
        };
        Ok(Some(command))
    }
}

fn required(word: &str, rest: &str) -> Result<String, String> {
    if rest.is_empty() {
        Err(format!("'{}' needs an argument", word))
    } else {
        Ok(rest.to_string())
    }
}

pub const HELP: &str = "\
commands:
  show                 print every field
  focus <label|n>      focus a field
  blur | tab | prev    move focus
  type <text>          type into the focused field
  backspace            delete the last character
  set <text>           replace the focused field's text
  select <option>      pick an option of the focused select
  clear                empty the focused field
  reset | save         reset or save the whole form
  submit               tap the submit button
  valid                revalidate and print the aggregate
  quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_argument() {
        assert_eq!(
            Command::parse("type hello world").unwrap(),
            Some(Command::Type("hello world".to_string()))
        );
        assert_eq!(
            Command::parse("  focus Email ").unwrap(),
            Some(Command::Focus("Email".to_string()))
        );
    }

    #[test]
    fn test_parse_set_allows_empty() {
        assert_eq!(
            Command::parse("set").unwrap(),
            Some(Command::Set(String::new()))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse("type").is_err());
        assert!(Command::parse("dance").is_err());
        assert_eq!(Command::parse("   ").unwrap(), None);
    }
}
