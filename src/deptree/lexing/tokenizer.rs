//! Artifact line tokenizer
//!
//! Single forward scan over the characters of one line, driven by [`ScanState`].

use std::mem;

/// Raw tokens of one artifact line, in line order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArtifactTokens {
    pub tokens: Vec<String>,
    /// Set once the scanner entered free-text description mode
    pub has_description: bool,
    /// The line opened with `(`
    pub omitted: bool,
}

impl ArtifactTokens {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Where the scanner stands relative to tokens and the free-text description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Between coordinate tokens
    Separator,
    /// Inside a coordinate token
    Token,
    /// Between tokens after the description started
    DescriptionSeparator,
    /// Inside a description token; spaces are content here
    Description,
}

impl ScanState {
    fn in_token(self) -> bool {
        matches!(self, ScanState::Token | ScanState::Description)
    }

    fn in_description(self) -> bool {
        matches!(self, ScanState::DescriptionSeparator | ScanState::Description)
    }

    fn opened(self) -> Self {
        if self.in_description() {
            ScanState::Description
        } else {
            ScanState::Token
        }
    }

    fn closed(self) -> Self {
        if self.in_description() {
            ScanState::DescriptionSeparator
        } else {
            ScanState::Separator
        }
    }
}

/// Index of the first token that can only be free text in a colon delimited line
const DESCRIPTION_FIELD: usize = 5;

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | ':' | '(' | ')' | '-')
}

/// Split one artifact line into raw tokens.
///
/// Never fails: validating the token count is the field mapper's job.
pub fn tokenize(line: &str) -> ArtifactTokens {
    let mut output = ArtifactTokens {
        tokens: Vec::with_capacity(7),
        ..ArtifactTokens::default()
    };
    let mut state = ScanState::Separator;
    let mut current = String::new();
    let mut chars = line.chars().enumerate().peekable();

    while let Some((index, c)) = chars.next() {
        let next = chars.peek().map(|&(_, n)| n);
        match c {
            ':' => {
                output.tokens.push(mem::take(&mut current));
                state = state.closed();
            }
            ' ' => match state {
                // Past the scope, colon delimited free text keeps its spaces in one token
                ScanState::Token
                    if output.tokens.len() >= DESCRIPTION_FIELD
                        && next.is_some_and(|n| !is_separator(n)) =>
                {
                    current.push(c);
                    state = ScanState::Description;
                }
                ScanState::Token => {
                    output.tokens.push(mem::take(&mut current));
                    state = ScanState::DescriptionSeparator;
                }
                ScanState::Description => current.push(c),
                ScanState::Separator | ScanState::DescriptionSeparator => {}
            },
            ')' if next.is_none() => {
                if state.in_token() {
                    output.tokens.push(mem::take(&mut current));
                    state = state.closed();
                }
            }
            '(' if index == 0 => output.omitted = true,
            '(' | ')' | '-' => {
                if state.in_token() {
                    current.push(c);
                }
            }
            _ => {
                current.push(c);
                state = state.opened();
            }
        }
    }

    if state.in_token() {
        output.tokens.push(current);
    }
    output.has_description = state.in_description();
    output
}
