use crate::{
    choice::Choice,
    error::{Error, Result},
};
use alloc::{boxed::Box, vec::Vec};
use core::{
    num::{NonZeroU64, NonZeroUsize},
    sync::atomic::{AtomicU64, Ordering},
};

/// Number of questions constructed so far in this process. Never reset.
static QUESTION_COUNT: AtomicU64 = AtomicU64::new(0);

fn next_question_id() -> NonZeroU64 {
    let count = QUESTION_COUNT.fetch_add(1, Ordering::Relaxed);
    NonZeroU64::MIN.saturating_add(count)
}

/// A quiz question along with the answer choices it owns.
///
/// Every question receives a process-wide unique identifier upon construction. Choices are
/// numbered per question starting from `1`. Removing a single choice never frees its
/// identifier for reuse, but [`Question::remove_all_choices`] starts the numbering over.
#[derive(Debug)]
pub struct Question {
    id: NonZeroU64,
    title: Box<str>,
    points: u8,
    /// Upper bound on correct choices accepted by [`Question::select_choices`].
    max_selections: NonZeroUsize,
    choices: Vec<Choice>,
    /// Identifier of the most recently added choice (or zero if none since the last wipe).
    last_choice_id: u32,
}

impl Question {
    pub const MAX_TITLE_LEN: usize = 200;
    pub const MIN_POINTS: u8 = 1;
    pub const MAX_POINTS: u8 = 100;
    pub const DEFAULT_POINTS: u8 = 1;

    /// Creates a question worth a single point that accepts a single selection.
    pub fn new(title: &str) -> Result<Self> {
        Self::with_scoring(title, Self::DEFAULT_POINTS, 1)
    }

    pub fn with_scoring(title: &str, points: u8, max_selections: usize) -> Result<Self> {
        if title.is_empty() {
            return Err(Error::EmptyTitle);
        }

        if title.chars().count() > Self::MAX_TITLE_LEN {
            return Err(Error::TitleTooLong);
        }

        if !(Self::MIN_POINTS..=Self::MAX_POINTS).contains(&points) {
            return Err(Error::PointsOutOfRange);
        }

        let max_selections = NonZeroUsize::new(max_selections).ok_or(Error::NoSelectionsAllowed)?;

        // Only draw an identifier once the input is known to be valid.
        let id = next_question_id();
        log::debug!("Created question {id} worth {points} point(s).");
        Ok(Self {
            id,
            title: title.into(),
            points,
            max_selections,
            choices: Vec::new(),
            last_choice_id: 0,
        })
    }

    pub const fn id(&self) -> NonZeroU64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub const fn points(&self) -> u8 {
        self.points
    }

    pub const fn max_selections(&self) -> NonZeroUsize {
        self.max_selections
    }

    /// All choices in insertion order.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn choice(&self, id: u32) -> Option<&Choice> {
        self.choices.iter().find(|choice| choice.id == id)
    }

    pub fn correct_choices(&self) -> impl Iterator<Item = &Choice> {
        self.choices.iter().filter(|choice| choice.is_correct)
    }

    /// Appends a new choice and returns a reference to it.
    pub fn add_choice(&mut self, text: &str, is_correct: bool) -> Result<&Choice> {
        let id = self.last_choice_id + 1;
        let choice = Choice::new(id, text, is_correct)?;
        self.last_choice_id = id;

        log::debug!("Added choice {id} to question {}.", self.id);
        let index = self.choices.len();
        self.choices.push(choice);
        Ok(&self.choices[index])
    }

    pub fn remove_choice_by_id(&mut self, id: u32) -> Result<()> {
        let Some(index) = self.choices.iter().position(|choice| choice.id == id) else {
            log::warn!("Question {} has no choice {id} to remove.", self.id);
            return Err(Error::InvalidChoiceId(id));
        };

        self.choices.remove(index);
        log::debug!("Removed choice {id} from question {}.", self.id);
        Ok(())
    }

    /// Removes every choice and restarts choice numbering from `1`.
    pub fn remove_all_choices(&mut self) {
        self.choices.clear();
        self.last_choice_id = 0;
        log::debug!("Removed all choices from question {}.", self.id);
    }

    /// Filters `ids` down to the correct choices, preserving input order. Unknown and incorrect
    /// identifiers are silently dropped. Fails if more correct choices remain than the question
    /// permits.
    pub fn select_choices(&self, ids: &[u32]) -> Result<Vec<u32>> {
        let selected: Vec<_> = ids
            .iter()
            .copied()
            .filter(|&id| self.choice(id).is_some_and(Choice::is_correct))
            .collect();

        let max = self.max_selections.get();
        log::trace!("Question {} selected {} of {} choice(s).", self.id, selected.len(), ids.len());
        if selected.len() > max {
            return Err(Error::TooManySelections { max });
        }

        Ok(selected)
    }

    /// Marks exactly the choices in `ids` as correct and all others as incorrect.
    pub fn set_correct_choices(&mut self, ids: &[u32]) {
        for choice in &mut self.choices {
            choice.is_correct = ids.contains(&choice.id);
        }
        log::trace!("Question {} now has {} correct choice(s).", self.id, self.correct_choices().count());
    }
}
