// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// The first space-delimited token of a text, when it starts with `@`.
///
/// Only ever the first token: a mention later in the text is not a mention for the purpose of
/// highlighting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MentionToken<'a> {
    text: &'a str,
    range: Range<usize>,
}

impl<'a> MentionToken<'a> {
    /// The token, including its leading `@`.
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Byte range of the token within the source text.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Exact, case-sensitive comparison with a normalized handle.
    pub fn matches(&self, handle: &str) -> bool {
        self.text == handle
    }
}

/// Extracts the mention token from `text`, if any.
///
/// Only the literal space character delimits tokens. Runs of spaces and leading spaces are
/// skipped, while tabs and newlines belong to the token.
///
/// ```
/// use growing_text::extract_mention;
///
/// let token = extract_mention("@Nickname hello").unwrap();
/// assert_eq!(token.as_str(), "@Nickname");
/// assert_eq!(token.range(), 0..9);
///
/// assert!(extract_mention("hello @Nickname").is_none());
/// ```
pub fn extract_mention(text: &str) -> Option<MentionToken<'_>> {
    let start = text.find(|c| c != ' ')?;
    let rest = &text[start..];
    let end = start + rest.find(' ').unwrap_or(rest.len());
    let token = &text[start..end];
    token.starts_with('@').then(|| MentionToken {
        text: token,
        range: start..end,
    })
}
