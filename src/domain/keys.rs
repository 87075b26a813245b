//! Key bindings and interpretation of a typed line.

use super::error::{DomainError, DomainResult};
use super::room::Side;

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Go(Side),
    Quit,
}

/// Why a typed line was not accepted as a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Nothing but whitespace
    Blank,
    /// First character is not bound to anything
    Unknown(char),
}

/// Single-letter keys for the three choices (defaults: `e`, `d`, `s`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub left: char,
    pub right: char,
    pub quit: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: 'e',
            right: 'd',
            quit: 's',
        }
    }
}

impl KeyBindings {
    /// Lower-cases the keys and checks they are usable and distinct.
    pub fn normalized(self) -> DomainResult<Self> {
        let keys = Self {
            left: fold(self.left),
            right: fold(self.right),
            quit: fold(self.quit),
        };

        for (role, key) in [("left", keys.left), ("right", keys.right), ("quit", keys.quit)] {
            if key.is_whitespace() || key.is_control() {
                return Err(DomainError::InvalidKeyBindings {
                    reason: format!("{role} key must be a visible character, got {key:?}"),
                });
            }
        }
        if keys.left == keys.right || keys.left == keys.quit || keys.right == keys.quit {
            return Err(DomainError::InvalidKeyBindings {
                reason: format!(
                    "keys must differ (left={}, right={}, quit={})",
                    keys.left, keys.right, keys.quit
                ),
            });
        }
        Ok(keys)
    }

    pub fn key_for(&self, side: Side) -> char {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Interprets the first non-whitespace character of `line`, ignoring case.
    pub fn parse(&self, line: &str) -> Result<Choice, Rejection> {
        let first = line
            .chars()
            .find(|c| !c.is_whitespace())
            .ok_or(Rejection::Blank)?;

        match fold(first) {
            c if c == self.quit => Ok(Choice::Quit),
            c if c == self.left => Ok(Choice::Go(Side::Left)),
            c if c == self.right => Ok(Choice::Go(Side::Right)),
            c => Err(Rejection::Unknown(c)),
        }
    }
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("e\n", Ok(Choice::Go(Side::Left)))]
    #[case("E\n", Ok(Choice::Go(Side::Left)))]
    #[case("   d\n", Ok(Choice::Go(Side::Right)))]
    #[case("direita\n", Ok(Choice::Go(Side::Right)))]
    #[case("\tS", Ok(Choice::Quit))]
    #[case("sair", Ok(Choice::Quit))]
    #[case("\n", Err(Rejection::Blank))]
    #[case("   \t \n", Err(Rejection::Blank))]
    #[case("", Err(Rejection::Blank))]
    #[case("x\n", Err(Rejection::Unknown('x')))]
    #[case(" Q", Err(Rejection::Unknown('q')))]
    fn parse_default_keys(#[case] line: &str, #[case] expected: Result<Choice, Rejection>) {
        assert_eq!(KeyBindings::default().parse(line), expected);
    }

    #[test]
    fn parse_custom_keys() {
        let keys = KeyBindings {
            left: 'l',
            right: 'r',
            quit: 'q',
        };
        assert_eq!(keys.parse("L"), Ok(Choice::Go(Side::Left)));
        assert_eq!(keys.parse("q"), Ok(Choice::Quit));
        assert_eq!(keys.parse("e"), Err(Rejection::Unknown('e')));
    }

    #[test]
    fn normalized_lowercases() {
        let keys = KeyBindings {
            left: 'A',
            right: 'B',
            quit: 'C',
        }
        .normalized()
        .unwrap();
        assert_eq!((keys.left, keys.right, keys.quit), ('a', 'b', 'c'));
    }

    #[rstest]
    #[case('a', 'a', 'c')]
    #[case('a', 'B', 'b')]
    #[case(' ', 'b', 'c')]
    #[case('a', 'b', '\n')]
    fn normalized_rejects_unusable_keys(#[case] left: char, #[case] right: char, #[case] quit: char) {
        let result = KeyBindings { left, right, quit }.normalized();
        assert!(matches!(result, Err(DomainError::InvalidKeyBindings { .. })));
    }
}
