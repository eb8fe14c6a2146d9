//! Quote-aware splitting of chat messages into command tokens.

use super::TokenizeError;

/// A trigger-prefixed line split into command name and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Command name as typed (lowercased).
    pub name: String,
    /// Argument tokens, quotes removed.
    pub args: Vec<String>,
}

/// A trigger-prefixed line that could not be tokenized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedCommandLine {
    /// First whitespace-delimited word after the trigger (lowercased).
    pub name: String,
    /// Tokenizer failure.
    pub error: TokenizeError,
}

/// Splits a message into command name and arguments.
///
/// Returns `None` when the message does not start with `trigger`, is only
/// the trigger, or holds no token after it.
#[must_use]
pub fn split_command(
    content: &str,
    trigger: char,
) -> Option<Result<CommandLine, MalformedCommandLine>> {
    let line = content.strip_prefix(trigger)?;
    if line.is_empty() {
        return None;
    }

    match tokenize(line) {
        Ok(tokens) => {
            let mut remaining = tokens.into_iter();
            let name = remaining.next()?.to_lowercase();
            Some(Ok(CommandLine {
                name,
                args: remaining.collect(),
            }))
        }
        Err(error) => {
            let name = line.split_whitespace().next()?.to_lowercase();
            Some(Err(MalformedCommandLine { name, error }))
        }
    }
}

/// Splits text on whitespace, keeping quoted runs together.
///
/// A token opening with `"` or `'` runs to the matching closing quote, which
/// also ends the token; the bounding quotes are dropped. Backslashes are
/// ordinary characters everywhere, and quotes inside an unquoted word are
/// literal.
///
/// # Errors
///
/// Returns [`TokenizeError::UnterminatedQuote`] when a quoted run is never
/// closed.
pub fn tokenize(input: &str) -> Result<Vec<String>, TokenizeError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut in_quotes: Option<char> = None;

    for character in input.chars() {
        if let Some(quote_char) = in_quotes {
            if character == quote_char {
                in_quotes = None;
                tokens.push(std::mem::take(&mut current));
            } else {
                current.push(character);
            }
            continue;
        }

        match character {
            _ if character.is_whitespace() => {
                if in_word {
                    tokens.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            '"' | '\'' if !in_word => in_quotes = Some(character),
            _ => {
                current.push(character);
                in_word = true;
            }
        }
    }

    if in_quotes.is_some() {
        return Err(TokenizeError::UnterminatedQuote);
    }
    if in_word {
        tokens.push(current);
    }

    Ok(tokens)
}
