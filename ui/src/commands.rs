use crate::controller::{SessionView, TypeFilter};

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Any line not starting with `:` replaces the query.
    Query(String),
    Page(u64),
    Next,
    Prev,
    Filter(TypeFilter),
    /// 1-based question position and option number.
    Select { question: usize, option: usize },
    Check { question: usize },
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("unknown command :{0} (try :help)")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("{0}")]
    BadFilter(String),

    #[error("no question #{0} on this page")]
    NoSuchQuestion(usize),
}

pub const HELP: &str = "\
Type to search. Commands:
  :page N          go to page N
  :next / :prev    move one page
  :type ALL|MCQ|MCM  filter the shown page by type
  :select Q O      pick option O of question Q (toggles for MCM)
  :check Q         check the answer to question Q
  :help            show this text
  :quit            exit";

pub fn parse_input(line: &str) -> Result<Input, InputError> {
    let Some(command) = line.strip_prefix(':') else {
        return Ok(Input::Query(line.to_string()));
    };

    let mut words = command.split_whitespace();
    let name = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    match (name, args.as_slice()) {
        ("page", [n]) => Ok(Input::Page(positive(n, "page N")?)),
        ("page", _) => Err(InputError::Usage(":page N")),
        ("next", []) => Ok(Input::Next),
        ("prev", []) => Ok(Input::Prev),
        ("type", [t]) => t.parse().map(Input::Filter).map_err(InputError::BadFilter),
        ("type", _) => Err(InputError::Usage(":type ALL|MCQ|MCM")),
        ("select", [q, o]) => Ok(Input::Select {
            question: positive(q, ":select Q O")? as usize,
            option: positive(o, ":select Q O")? as usize,
        }),
        ("select", _) => Err(InputError::Usage(":select Q O")),
        ("check", [q]) => Ok(Input::Check {
            question: positive(q, ":check Q")? as usize,
        }),
        ("check", _) => Err(InputError::Usage(":check Q")),
        ("help", _) => Ok(Input::Help),
        ("quit" | "q" | "exit", _) => Ok(Input::Quit),
        (other, _) => Err(InputError::UnknownCommand(other.to_string())),
    }
}

fn positive(raw: &str, usage: &'static str) -> Result<u64, InputError> {
    match raw.parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(InputError::Usage(usage)),
    }
}

/// Maps a 1-based position on screen to the question id.
pub fn resolve_question(view: &SessionView, position: usize) -> Result<String, InputError> {
    position
        .checked_sub(1)
        .and_then(|i| view.questions.get(i))
        .map(|q| q.question.id.clone())
        .ok_or(InputError::NoSuchQuestion(position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quest_search::questions::types::QuestionType;

    #[test]
    fn test_plain_text_is_query() {
        assert_eq!(parse_input("algebra"), Ok(Input::Query("algebra".to_string())));
        assert_eq!(parse_input(""), Ok(Input::Query(String::new())));
        assert_eq!(parse_input(" x: y"), Ok(Input::Query(" x: y".to_string())));
    }

    #[test]
    fn test_navigation_commands() {
        assert_eq!(parse_input(":page 3"), Ok(Input::Page(3)));
        assert_eq!(parse_input(":next"), Ok(Input::Next));
        assert_eq!(parse_input(":prev"), Ok(Input::Prev));
        assert!(matches!(parse_input(":page 0"), Err(InputError::Usage(_))));
        assert!(matches!(parse_input(":page"), Err(InputError::Usage(_))));
    }

    #[test]
    fn test_filter_command() {
        assert_eq!(parse_input(":type mcm"), Ok(Input::Filter(TypeFilter::Only(QuestionType::Mcm))));
        assert_eq!(parse_input(":type ALL"), Ok(Input::Filter(TypeFilter::All)));
        assert!(matches!(parse_input(":type ANAGRAM"), Err(InputError::BadFilter(_))));
    }

    #[test]
    fn test_answer_commands() {
        assert_eq!(
            parse_input(":select 2 4"),
            Ok(Input::Select { question: 2, option: 4 })
        );
        assert_eq!(parse_input(":check 1"), Ok(Input::Check { question: 1 }));
        assert!(matches!(parse_input(":select 2"), Err(InputError::Usage(_))));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_input(":frobnicate"),
            Err(InputError::UnknownCommand("frobnicate".to_string()))
        );
        assert_eq!(parse_input(":quit"), Ok(Input::Quit));
    }
}
