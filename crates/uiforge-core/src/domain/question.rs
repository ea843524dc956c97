//! Question and questionnaire definitions.
//!
//! A [`Questionnaire`] is an ordered list of [`Question`]s. Each question may
//! carry a [`Visibility`] predicate over the answers collected so far. The
//! predicate declares the keys it reads, and construction rejects any
//! predicate that reads a key not asked by a strictly earlier question.

use std::collections::HashSet;

use crate::domain::answers::{AnswerRecord, AnswerValue};
use crate::domain::error::DomainError;

/// Shape check run against trimmed free-text input.
pub type TextValidator = fn(&str) -> Result<(), String>;

/// Lines printed after a question is answered, computed from the record.
pub type FollowUp = fn(&AnswerRecord) -> Vec<String>;

/// Lines printed once every question has been answered.
pub type Summary = fn(&AnswerRecord) -> Vec<String>;

/// One selectable option of a single-choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    /// Tag stored in the answer record.
    pub value: &'static str,
    /// Text shown in the numbered list.
    pub label: &'static str,
}

impl Choice {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// Predicate deciding whether a question is asked at all.
#[derive(Debug, Clone, Copy)]
pub struct Visibility {
    reads: &'static [&'static str],
    predicate: fn(&AnswerRecord) -> bool,
}

impl Visibility {
    /// `reads` must list every key the predicate inspects.
    pub const fn new(reads: &'static [&'static str], predicate: fn(&AnswerRecord) -> bool) -> Self {
        Self { reads, predicate }
    }

    pub fn reads(&self) -> &'static [&'static str] {
        self.reads
    }

    pub fn is_visible(&self, record: &AnswerRecord) -> bool {
        (self.predicate)(record)
    }
}

#[derive(Debug, Clone)]
pub enum QuestionKind {
    SingleChoice { choices: Vec<Choice> },
    FreeText {
        required: bool,
        validator: Option<TextValidator>,
    },
    Confirm,
}

#[derive(Debug, Clone)]
pub struct Question {
    id: &'static str,
    message: &'static str,
    kind: QuestionKind,
    default: Option<AnswerValue>,
    visibility: Option<Visibility>,
    preamble: Vec<String>,
    follow_up: Option<FollowUp>,
}

impl Question {
    fn with_kind(id: &'static str, message: &'static str, kind: QuestionKind) -> Self {
        Self {
            id,
            message,
            kind,
            default: None,
            visibility: None,
            preamble: Vec::new(),
            follow_up: None,
        }
    }

    pub fn single_choice(id: &'static str, message: &'static str, choices: Vec<Choice>) -> Self {
        Self::with_kind(id, message, QuestionKind::SingleChoice { choices })
    }

    pub fn text(id: &'static str, message: &'static str) -> Self {
        Self::with_kind(
            id,
            message,
            QuestionKind::FreeText {
                required: false,
                validator: None,
            },
        )
    }

    pub fn confirm(id: &'static str, message: &'static str, default: bool) -> Self {
        Self::with_kind(id, message, QuestionKind::Confirm).with_default(AnswerValue::Flag(default))
    }

    pub fn with_default(mut self, default: AnswerValue) -> Self {
        self.default = Some(default);
        self
    }

    /// Mark a free-text question as required. No effect on other kinds.
    pub fn required(mut self) -> Self {
        if let QuestionKind::FreeText { required, .. } = &mut self.kind {
            *required = true;
        }
        self
    }

    /// Attach a shape validator to a free-text question.
    pub fn validated_by(mut self, check: TextValidator) -> Self {
        if let QuestionKind::FreeText { validator, .. } = &mut self.kind {
            *validator = Some(check);
        }
        self
    }

    pub fn visible_when(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn with_preamble<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preamble = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_follow_up(mut self, follow_up: FollowUp) -> Self {
        self.follow_up = Some(follow_up);
        self
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    pub fn default(&self) -> Option<&AnswerValue> {
        self.default.as_ref()
    }

    pub fn preamble(&self) -> &[String] {
        &self.preamble
    }

    pub fn follow_up(&self) -> Option<FollowUp> {
        self.follow_up
    }

    pub fn visibility(&self) -> Option<&Visibility> {
        self.visibility.as_ref()
    }

    /// Whether the question should be asked given the answers so far.
    pub fn is_visible(&self, record: &AnswerRecord) -> bool {
        self.visibility.is_none_or(|v| v.is_visible(record))
    }

    /// Zero-based index of the default choice, for single-choice questions.
    pub fn default_choice_index(&self) -> Option<usize> {
        let QuestionKind::SingleChoice { choices } = &self.kind else {
            return None;
        };
        let tag = self.default.as_ref()?.as_str()?;
        choices.iter().position(|c| c.value == tag)
    }

    fn check_default(&self) -> Result<(), DomainError> {
        let Some(default) = &self.default else {
            return Ok(());
        };
        let invalid = |reason: String| DomainError::InvalidDefault {
            question: self.id,
            reason,
        };
        match (&self.kind, default) {
            (QuestionKind::SingleChoice { .. }, AnswerValue::Choice(tag)) => {
                if self.default_choice_index().is_none() {
                    return Err(invalid(format!("'{tag}' is not one of the choices")));
                }
            }
            (QuestionKind::FreeText { .. }, AnswerValue::Text(_)) => {}
            (QuestionKind::Confirm, AnswerValue::Flag(_)) => {}
            _ => return Err(invalid("default does not match the question kind".into())),
        }
        Ok(())
    }
}

/// An ordered, validated list of questions.
#[derive(Debug, Clone)]
pub struct Questionnaire {
    title: &'static str,
    questions: Vec<Question>,
    summary: Option<Summary>,
    confirmation: Option<&'static str>,
}

impl Questionnaire {
    /// Build a questionnaire, checking ids, choices, defaults and visibility
    /// dependencies.
    pub fn new(title: &'static str, questions: Vec<Question>) -> Result<Self, DomainError> {
        let mut seen: HashSet<&'static str> = HashSet::new();

        for question in &questions {
            if let Some(visibility) = question.visibility() {
                if let Some(key) = visibility.reads().iter().copied().find(|k| !seen.contains(k)) {
                    return Err(DomainError::ForwardReference {
                        question: question.id(),
                        key,
                    });
                }
            }

            if let QuestionKind::SingleChoice { choices } = question.kind() {
                if choices.is_empty() {
                    return Err(DomainError::EmptyChoices {
                        question: question.id(),
                    });
                }
            }

            question.check_default()?;

            if !seen.insert(question.id()) {
                return Err(DomainError::DuplicateQuestion { id: question.id() });
            }
        }

        Ok(Self {
            title,
            questions,
            summary: None,
            confirmation: None,
        })
    }

    pub fn with_summary(mut self, summary: Summary) -> Self {
        self.summary = Some(summary);
        self
    }

    /// Ask `message` once after the last question; declining cancels the run.
    pub fn with_confirmation(mut self, message: &'static str) -> Self {
        self.confirmation = Some(message);
        self
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn summary(&self) -> Option<Summary> {
        self.summary
    }

    pub fn confirmation(&self) -> Option<&'static str> {
        self.confirmation
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
