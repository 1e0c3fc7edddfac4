//! Line commands understood by the headless driver.

use crate::content::{ContentKind, Language, Section, Subsection};
use std::str::FromStr;

/// Separator between paragraphs in a `body` command.
pub const PARAGRAPH_SEPARATOR: &str = "||";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Section(Section),
    Subsection(Subsection),
    Kind(ContentKind),
    Lang(Language),
    List,
    Show,
    Open(usize),
    Title(String),
    /// Stored-text paragraphs for the draft body.
    Body(Vec<String>),
    Bold {
        block: usize,
        start: usize,
        end: usize,
    },
    Save,
    Add,
    Move {
        from: usize,
        to: usize,
    },
    Remove(usize),
    Discard,
    Keep,
    Help,
    Quit,
}

/// Usage lines printed by `help`.
pub const USAGE: &[(&str, &str)] = &[
    ("section NAME", "select a section (players, formations, ...)"),
    ("subsection NAME", "select a subsection of the current section"),
    ("kind NAME", "select content kind (functions, news, tips, main)"),
    ("lang cz|en", "select the editing language"),
    ("list", "show the item list"),
    ("show", "show the active item and its draft"),
    ("open N", "open item N"),
    ("title TEXT", "set the draft title"),
    ("body HTML", "set the draft body, paragraphs separated by ||"),
    ("bold [P] START END", "toggle bold on characters START..END of paragraph P"),
    ("save", "save the draft into the active item"),
    ("add", "append a new item"),
    ("move FROM TO", "move an item"),
    ("remove N", "remove item N"),
    ("discard", "drop unsaved changes and open the requested item"),
    ("keep", "stay on the current item"),
    ("help", "show this help"),
    ("quit", "exit"),
];

fn parse_index(word: Option<&str>, what: &str) -> Result<usize, String> {
    let word = word.ok_or_else(|| format!("missing {}", what))?;
    word.parse()
        .map_err(|_| format!("'{}' is not a valid {}", word, what))
}

fn parse_value<T: FromStr<Err = String>>(rest: &str, what: &str) -> Result<T, String> {
    if rest.is_empty() {
        return Err(format!("missing {}", what));
    }
    rest.parse()
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map(|(verb, rest)| (verb, rest.trim()))
            .unwrap_or((line, ""));
        let mut args = rest.split_whitespace();

        let command = match verb.to_lowercase().as_str() {
            "section" => Command::Section(parse_value(rest, "section")?),
            "subsection" => Command::Subsection(parse_value(rest, "subsection")?),
            "kind" => Command::Kind(parse_value(rest, "content kind")?),
            "lang" | "language" => Command::Lang(parse_value(rest, "language")?),
            "list" | "ls" => Command::List,
            "show" => Command::Show,
            "open" => Command::Open(parse_index(args.next(), "index")?),
            "title" => Command::Title(rest.to_string()),
            "body" => Command::Body(
                rest.split(PARAGRAPH_SEPARATOR)
                    .map(|paragraph| paragraph.trim().to_string())
                    .collect(),
            ),
            "bold" => {
                let numbers: Vec<&str> = args.collect();
                match numbers.as_slice() {
                    [start, end] => Command::Bold {
                        block: 0,
                        start: parse_index(Some(start), "start offset")?,
                        end: parse_index(Some(end), "end offset")?,
                    },
                    [block, start, end] => Command::Bold {
                        block: parse_index(Some(block), "paragraph")?,
                        start: parse_index(Some(start), "start offset")?,
                        end: parse_index(Some(end), "end offset")?,
                    },
                    _ => return Err("usage: bold [P] START END".to_string()),
                }
            }
            "save" => Command::Save,
            "add" => Command::Add,
            "move" | "mv" => Command::Move {
                from: parse_index(args.next(), "source index")?,
                to: parse_index(args.next(), "target index")?,
            },
            "remove" | "rm" => Command::Remove(parse_index(args.next(), "index")?),
            "discard" => Command::Discard,
            "keep" => Command::Keep,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(format!("unknown command '{}', try 'help'", other)),
        };
        Ok(command)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection_commands() {
        assert_eq!("section teams".parse(), Ok(Command::Section(Section::Teams)));
        assert_eq!(
            "subsection h2h".parse(),
            Ok(Command::Subsection(Subsection::HeadToHead))
        );
        assert_eq!("kind main".parse(), Ok(Command::Kind(ContentKind::Main)));
        assert_eq!("LANG en".parse(), Ok(Command::Lang(Language::En)));
        assert!("kind".parse::<Command>().is_err());
        assert!("section nowhere".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_text_arguments_keep_spacing() {
        assert_eq!(
            "title  Ligový  percentil ".parse(),
            Ok(Command::Title("Ligový  percentil".to_string()))
        );
        assert_eq!(
            "body <b>A</b> text || second".parse(),
            Ok(Command::Body(vec![
                "<b>A</b> text".to_string(),
                "second".to_string()
            ]))
        );
    }

    #[test]
    fn test_parse_indices() {
        assert_eq!("open 3".parse(), Ok(Command::Open(3)));
        assert_eq!("move 0 2".parse(), Ok(Command::Move { from: 0, to: 2 }));
        assert_eq!("rm 1".parse(), Ok(Command::Remove(1)));
        assert!("open x".parse::<Command>().is_err());
        assert!("move 1".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_bold() {
        assert_eq!(
            "bold 0 5".parse(),
            Ok(Command::Bold { block: 0, start: 0, end: 5 })
        );
        assert_eq!(
            "bold 1 2 4".parse(),
            Ok(Command::Bold { block: 1, start: 2, end: 4 })
        );
        assert!("bold 1".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_unknown() {
        let err = "frobnicate".parse::<Command>().unwrap_err();
        assert!(err.contains("frobnicate"));
    }
}
