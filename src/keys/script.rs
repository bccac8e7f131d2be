//! Key scripts: a compact text form of a key sequence.
//!
//! Every non-whitespace character is one key; named keys are written in
//! braces, e.g. `12+7{Enter}` or `3.14{Backspace}`.

use super::classify_key;
use crate::calculator::Input;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// Matches either a braced key name or a single non-space character.
    static ref KEY_TOKEN: Regex = Regex::new(r"\{([A-Za-z]+)\}|\S").unwrap();
}

/// Errors raised while reading a key script.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("Unknown key {key:?} at offset {offset}")]
    UnknownKey { key: String, offset: usize },
}

/// Parse a key script into calculator inputs.
pub fn parse_script(script: &str) -> Result<Vec<Input>, ScriptError> {
    KEY_TOKEN
        .captures_iter(script)
        .map(|caps| {
            let key = caps.get(1).map_or(&caps[0], |name| name.as_str());
            classify_key(key).ok_or_else(|| ScriptError::UnknownKey {
                key: key.to_string(),
                offset: caps.get(0).map_or(0, |m| m.start()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operator;

    #[test]
    fn test_single_character_keys() {
        assert_eq!(
            parse_script("5+3=").unwrap(),
            vec![
                Input::Digit('5'),
                Input::Operator(Operator::Add),
                Input::Digit('3'),
                Input::Equals,
            ]
        );
    }

    #[test]
    fn test_named_keys_and_whitespace() {
        assert_eq!(
            parse_script(" 7 {Backspace} {Enter}\nc").unwrap(),
            vec![Input::Digit('7'), Input::Backspace, Input::Equals, Input::Clear]
        );
    }

    #[test]
    fn test_empty_script() {
        assert!(parse_script("   ").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert_eq!(
            parse_script("1+x"),
            Err(ScriptError::UnknownKey {
                key: "x".to_string(),
                offset: 2
            })
        );
        assert_eq!(
            parse_script("1{Tab}"),
            Err(ScriptError::UnknownKey {
                key: "Tab".to_string(),
                offset: 1
            })
        );
    }
}
