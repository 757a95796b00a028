//! Input processing for the terminal client.
//!
//! This module owns the text-to-command mapping so the app loop stays
//! agnostic about spellings and shortcuts.

/// High-level outcome of one line typed at the turn prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Roll,
    CastSpell,
    Status,
    Board,
    Help,
    Quit,
}

impl Command {
    /// Decode a command line. Blank input rolls.
    pub fn parse(line: &str) -> Option<Self> {
        let word = line.trim().to_ascii_lowercase();
        let command = match word.as_str() {
            "" | "r" | "roll" => Self::Roll,
            "s" | "spell" | "cast" => Self::CastSpell,
            "st" | "status" => Self::Status,
            "b" | "board" | "map" => Self::Board,
            "h" | "?" | "help" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => return None,
        };
        Some(command)
    }
}

pub const HELP: &str = "commands: [r]oll (or enter), [s]pell, [st]atus, [b]oard, [h]elp, [q]uit";

/// Decode a yes/no answer.
pub fn parse_yes_no(line: &str) -> Option<bool> {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcuts_and_words_agree() {
        for (line, expected) in [
            ("r", Command::Roll),
            ("ROLL", Command::Roll),
            ("  ", Command::Roll),
            ("s", Command::CastSpell),
            ("cast", Command::CastSpell),
            ("status", Command::Status),
            ("b", Command::Board),
            ("?", Command::Help),
            ("exit\n", Command::Quit),
        ] {
            assert_eq!(Command::parse(line), Some(expected), "{line:?}");
        }
    }

    #[test]
    fn unknown_words_are_rejected() {
        assert_eq!(Command::parse("dance"), None);
    }

    #[test]
    fn yes_no_answers() {
        assert_eq!(parse_yes_no("Y"), Some(true));
        assert_eq!(parse_yes_no(" no "), Some(false));
        assert_eq!(parse_yes_no("maybe"), None);
    }
}
