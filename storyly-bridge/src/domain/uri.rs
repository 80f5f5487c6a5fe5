use std::fmt;
use thiserror::Error;
use url::{ParseError, Url};

/// URI reference handed to the widget by `openStoryUri`.
///
/// Absolute URIs and relative references are both accepted and kept exactly as
/// the host sent them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StoryUri(String);

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoryUriError {
    #[error("uri is empty")]
    Empty,
    #[error("character {character:?} is not allowed in a uri")]
    InvalidCharacter { character: char },
    #[error("percent sign must be followed by two hex digits")]
    InvalidEscape,
    #[error("first segment of a relative reference cannot contain a colon")]
    ColonInFirstSegment,
    #[error(transparent)]
    Malformed(#[from] ParseError),
}

impl StoryUri {
    pub fn parse(value: &str) -> Result<Self, StoryUriError> {
        if value.is_empty() {
            return Err(StoryUriError::Empty);
        }
        check_characters(value)?;
        match Url::parse(value) {
            Ok(_) => {}
            Err(ParseError::RelativeUrlWithoutBase) => {
                let first_segment = value
                    .split(|c: char| matches!(c, '/' | '?' | '#'))
                    .next()
                    .unwrap_or("");
                if first_segment.contains(':') {
                    return Err(StoryUriError::ColonInFirstSegment);
                }
            }
            Err(err) => return Err(err.into()),
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoryUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn check_characters(value: &str) -> Result<(), StoryUriError> {
    let mut chars = value.chars();
    while let Some(character) = chars.next() {
        if character == '%' {
            let escape_ok = matches!(
                (chars.next(), chars.next()),
                (Some(hi), Some(lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
            );
            if !escape_ok {
                return Err(StoryUriError::InvalidEscape);
            }
        } else if !is_uri_char(character) {
            return Err(StoryUriError::InvalidCharacter { character });
        }
    }
    Ok(())
}

// RFC 3986 unreserved, gen-delims and sub-delims.
fn is_uri_char(character: char) -> bool {
    character.is_ascii_alphanumeric() || "-._~:/?#[]@!$&'()*+,;=".contains(character)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_absolute_uri_verbatim() {
        let uri = StoryUri::parse("storyly://open?g=1").unwrap();
        assert_eq!(uri.as_str(), "storyly://open?g=1");
        assert_eq!(
            StoryUri::parse("https://open.storyly.io/share/abc").unwrap().to_string(),
            "https://open.storyly.io/share/abc"
        );
    }

    #[test]
    fn accepts_relative_references() {
        for value in ["share/abc?g=1", "/share/abc", "//cdn.example.com/x", "?g=2", "a/b:c"] {
            assert_eq!(StoryUri::parse(value).unwrap().as_str(), value);
        }
        assert_eq!(
            StoryUri::parse("share%20it").unwrap().as_str(),
            "share%20it"
        );
    }

    #[test]
    fn rejects_malformed_strings() {
        assert_eq!(StoryUri::parse(""), Err(StoryUriError::Empty));
        assert_eq!(
            StoryUri::parse("not a uri"),
            Err(StoryUriError::InvalidCharacter { character: ' ' })
        );
        assert_eq!(StoryUri::parse("%%%"), Err(StoryUriError::InvalidEscape));
        assert_eq!(StoryUri::parse("share%2"), Err(StoryUriError::InvalidEscape));
        assert_eq!(
            StoryUri::parse("::not-a-uri"),
            Err(StoryUriError::ColonInFirstSegment)
        );
        assert!(matches!(
            StoryUri::parse("http://[::1"),
            Err(StoryUriError::Malformed(_))
        ));
    }
}
