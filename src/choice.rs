use crate::error::{Error, Result};
use alloc::boxed::Box;

/// An answer option owned by exactly one [`Question`](crate::Question).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Choice {
    /// Sequential identifier within the owning question.
    pub(crate) id: u32,
    /// Text displayed to the participant.
    pub(crate) text: Box<str>,
    /// Whether selecting this choice counts as a correct answer.
    pub(crate) is_correct: bool,
}

impl Choice {
    pub const MAX_TEXT_LEN: usize = 100;

    pub(crate) fn new(id: u32, text: &str, is_correct: bool) -> Result<Self> {
        validate_text(text)?;
        Ok(Self { id, text: text.into(), is_correct })
    }

    pub const fn id(&self) -> u32 {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn is_correct(&self) -> bool {
        self.is_correct
    }
}

fn validate_text(text: &str) -> Result<()> {
    if text.is_empty() {
        return Err(Error::EmptyText);
    }

    if text.chars().count() > Choice::MAX_TEXT_LEN {
        return Err(Error::TextTooLong);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_text() {
        assert_eq!(Choice::new(1, "", false), Err(Error::EmptyText));
    }

    #[test]
    fn rejects_long_text() {
        let text = "a".repeat(101);
        assert_eq!(Choice::new(1, &text, false), Err(Error::TextTooLong));
    }

    #[test]
    fn counts_characters_instead_of_bytes() {
        // Each of these is three bytes in UTF-8.
        let text = "問".repeat(100);
        let choice = Choice::new(1, &text, true).unwrap();
        assert_eq!(choice.text().chars().count(), 100);
        assert!(choice.is_correct());
    }

    #[test]
    fn accepts_boundary_lengths() {
        assert!(Choice::new(1, "a", false).is_ok());
        assert!(Choice::new(2, &"a".repeat(100), false).is_ok());
    }
}
