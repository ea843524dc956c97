//! Prompt Sequencer - drives a questionnaire over a terminal.
//!
//! Questions are asked strictly in order. Invalid input is reported and the
//! same question is asked again in a loop; only closed input or a terminal
//! failure ends the run early.

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Terminal},
    domain::{AnswerRecord, AnswerValue, Choice, Question, QuestionKind, Questionnaire},
    error::ForgeResult,
};

/// Result of running a questionnaire to the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Completed(AnswerRecord),
    /// The user declined the final confirmation.
    Cancelled,
}

/// Parse a 1-based menu selection. Empty input picks `default`.
fn parse_choice(input: &str, count: usize, default: Option<usize>) -> Option<usize> {
    let input = input.trim();
    if input.is_empty() {
        return default;
    }
    match input.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Some(n - 1),
        _ => None,
    }
}

fn parse_confirm(input: &str, default: bool) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

pub struct PromptSequencer<'t> {
    terminal: &'t mut dyn Terminal,
}

impl<'t> PromptSequencer<'t> {
    pub fn new(terminal: &'t mut dyn Terminal) -> Self {
        Self { terminal }
    }

    /// Direct access to the terminal for output between prompts.
    pub fn terminal(&mut self) -> &mut dyn Terminal {
        &mut *self.terminal
    }

    /// Ask every visible question and collect the answers.
    #[instrument(skip_all, fields(questionnaire = questionnaire.title()))]
    pub fn run(&mut self, questionnaire: &Questionnaire) -> ForgeResult<SessionOutcome> {
        let mut record = AnswerRecord::new();

        for question in questionnaire.questions() {
            if !question.is_visible(&record) {
                debug!(question = question.id(), "Skipping question");
                continue;
            }

            for line in question.preamble() {
                self.terminal.write_heading(line)?;
            }

            let value = self.ask(question)?;
            debug!(question = question.id(), answer = %value, "Answer recorded");
            record.insert(question.id(), value)?;

            if let Some(follow_up) = question.follow_up() {
                for line in follow_up(&record) {
                    self.terminal.write_line(&line)?;
                }
            }
        }

        if let Some(summary) = questionnaire.summary() {
            for line in summary(&record) {
                self.terminal.write_line(&line)?;
            }
        }

        if let Some(message) = questionnaire.confirmation() {
            if !self.confirm(message, true)? {
                info!("Session cancelled at confirmation");
                return Ok(SessionOutcome::Cancelled);
            }
        }

        info!(answers = record.len(), "Session completed");
        Ok(SessionOutcome::Completed(record))
    }

    fn ask(&mut self, question: &Question) -> ForgeResult<AnswerValue> {
        match question.kind() {
            QuestionKind::SingleChoice { choices } => {
                let index =
                    self.choose_for(question.id(), question.message(), choices, question.default_choice_index())?;
                Ok(AnswerValue::choice(choices[index].value))
            }
            QuestionKind::Confirm => {
                let default = question.default().and_then(AnswerValue::as_flag).unwrap_or(false);
                self.confirm_for(question.id(), question.message(), default)
                    .map(AnswerValue::Flag)
            }
            QuestionKind::FreeText { required, validator } => {
                let default = question.default().and_then(AnswerValue::as_str);
                let prompt = match default {
                    Some(d) => format!("{} [{d}]: ", question.message()),
                    None => format!("{} ", question.message()),
                };

                loop {
                    let input = self.read(question.id(), &prompt)?;
                    let input = input.trim();
                    let answer = match (input.is_empty(), default) {
                        (true, Some(d)) => d,
                        _ => input,
                    };

                    if answer.is_empty() && *required {
                        self.terminal.write_error("This field is required.")?;
                        continue;
                    }
                    if let Some(check) = validator {
                        if let Err(message) = check(answer) {
                            self.terminal.write_error(&message)?;
                            continue;
                        }
                    }
                    return Ok(AnswerValue::text(answer));
                }
            }
        }
    }

    /// Show a numbered menu and return the zero-based index picked.
    pub fn choose(
        &mut self,
        message: &str,
        choices: &[Choice],
        default: Option<usize>,
    ) -> ForgeResult<usize> {
        self.choose_for(message, message, choices, default)
    }

    /// Ask a yes/no question.
    pub fn confirm(&mut self, message: &str, default: bool) -> ForgeResult<bool> {
        self.confirm_for(message, message, default)
    }

    fn choose_for(
        &mut self,
        id: &str,
        message: &str,
        choices: &[Choice],
        default: Option<usize>,
    ) -> ForgeResult<usize> {
        let count = choices.len();
        let prompt = match default {
            Some(d) => format!("Enter your choice (1-{count}) [{}]: ", d + 1),
            None => format!("Enter your choice (1-{count}): "),
        };

        loop {
            self.terminal.write_line(message)?;
            for (n, choice) in choices.iter().enumerate() {
                self.terminal.write_line(&format!("{}. {}", n + 1, choice.label))?;
            }

            let input = self.read(id, &prompt)?;
            match parse_choice(&input, count, default) {
                Some(index) => return Ok(index),
                None => {
                    debug!(question = id, input = %input, "Rejected choice");
                    self.terminal
                        .write_error(&format!("Invalid choice. Please select 1-{count}."))?;
                }
            }
        }
    }

    fn confirm_for(&mut self, id: &str, message: &str, default: bool) -> ForgeResult<bool> {
        let hint = if default { "Y/n" } else { "y/N" };
        let prompt = format!("{message} ({hint}): ");

        loop {
            let input = self.read(id, &prompt)?;
            match parse_confirm(&input, default) {
                Some(answer) => return Ok(answer),
                None => self.terminal.write_error("Please answer y or n.")?,
            }
        }
    }

    fn read(&mut self, id: &str, prompt: &str) -> ForgeResult<String> {
        self.terminal.read_line(prompt)?.ok_or_else(|| {
            ApplicationError::InputClosed {
                question: id.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::FakeTerminal;
    use crate::domain::wizards::builder::{self, BuilderDefaults, keys};
    use crate::domain::Visibility;
    use crate::error::ForgeError;

    fn colors() -> Questionnaire {
        Questionnaire::new(
            "colors",
            vec![Question::single_choice(
                "color",
                "Pick a color",
                vec![
                    Choice::new("red", "Red"),
                    Choice::new("green", "Green"),
                    Choice::new("blue", "Blue"),
                ],
            )],
        )
        .unwrap()
    }

    fn completed(outcome: SessionOutcome) -> AnswerRecord {
        match outcome {
            SessionOutcome::Completed(record) => record,
            SessionOutcome::Cancelled => panic!("session was cancelled"),
        }
    }

    #[test]
    fn parse_choice_bounds() {
        assert_eq!(parse_choice("1", 3, None), Some(0));
        assert_eq!(parse_choice(" 3 ", 3, None), Some(2));
        assert_eq!(parse_choice("0", 3, None), None);
        assert_eq!(parse_choice("4", 3, None), None);
        assert_eq!(parse_choice("-1", 3, None), None);
        assert_eq!(parse_choice("two", 3, None), None);
        assert_eq!(parse_choice("", 3, Some(1)), Some(1));
        assert_eq!(parse_choice("", 3, None), None);
    }

    #[test]
    fn out_of_range_choices_are_reprompted() {
        let mut terminal = FakeTerminal::new(&["0", "4", "2"]);
        let record = completed(PromptSequencer::new(&mut terminal).run(&colors()).unwrap());

        assert_eq!(record.text("color"), Some("green"));
        assert_eq!(terminal.prompts.len(), 3);
        assert_eq!(
            terminal.errors,
            vec!["Invalid choice. Please select 1-3."; 2]
        );
        // The numbered list is shown again on every attempt.
        assert_eq!(terminal.lines.iter().filter(|l| *l == "1. Red").count(), 3);
    }

    #[test]
    fn confirm_accepts_words_and_default() {
        let questionnaire = Questionnaire::new(
            "flags",
            vec![
                Question::confirm("a", "A?", true),
                Question::confirm("b", "B?", true),
                Question::confirm("c", "C?", false),
            ],
        )
        .unwrap();
        let mut terminal = FakeTerminal::new(&["maybe", "NO", "", "Yes"]);
        let record = completed(PromptSequencer::new(&mut terminal).run(&questionnaire).unwrap());

        assert_eq!(record.flag("a"), Some(false));
        assert_eq!(record.flag("b"), Some(true));
        assert_eq!(record.flag("c"), Some(true));
        assert_eq!(terminal.errors, vec!["Please answer y or n."]);
    }

    #[test]
    fn required_text_is_reprompted_and_trimmed() {
        let questionnaire =
            Questionnaire::new("text", vec![Question::text("name", "Name?").required()]).unwrap();
        let mut terminal = FakeTerminal::new(&["   ", "  Ada "]);
        let record = completed(PromptSequencer::new(&mut terminal).run(&questionnaire).unwrap());

        assert_eq!(record.text("name"), Some("Ada"));
        assert_eq!(terminal.errors, vec!["This field is required."]);
    }

    #[test]
    fn optional_text_records_empty_string() {
        let questionnaire =
            Questionnaire::new("text", vec![Question::text("notes", "Notes?")]).unwrap();
        let mut terminal = FakeTerminal::new(&[""]);
        let record = completed(PromptSequencer::new(&mut terminal).run(&questionnaire).unwrap());

        assert_eq!(record.text("notes"), Some(""));
    }

    #[test]
    fn hidden_questions_store_nothing() {
        fn never(_: &AnswerRecord) -> bool {
            false
        }
        let questionnaire = Questionnaire::new(
            "visibility",
            vec![
                Question::confirm("router", "Router?", true),
                Question::text("routes", "Routes?")
                    .visible_when(Visibility::new(&["router"], never)),
            ],
        )
        .unwrap();
        let mut terminal = FakeTerminal::new(&["y"]);
        let record = completed(PromptSequencer::new(&mut terminal).run(&questionnaire).unwrap());

        assert_eq!(record.len(), 1);
        assert!(!record.contains("routes"));
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut terminal = FakeTerminal::new(&[]);
        let err = PromptSequencer::new(&mut terminal).run(&colors()).unwrap_err();

        assert!(matches!(
            err,
            ForgeError::Application(ApplicationError::InputClosed { ref question }) if question == "color"
        ));
    }

    #[test]
    fn declining_confirmation_cancels() {
        let questionnaire = builder::questionnaire(&BuilderDefaults::default()).unwrap();
        // ui type, theme, style, ecosystem (vanilla), css, name, then decline.
        let mut terminal = FakeTerminal::new(&["", "", "", "4", "", "demo", "n"]);
        let outcome = PromptSequencer::new(&mut terminal).run(&questionnaire).unwrap();

        assert_eq!(outcome, SessionOutcome::Cancelled);
        assert!(terminal.lines.iter().any(|l| l == "Project Name: demo"));
    }

    #[test]
    fn builder_run_uses_defaults_and_skips_hidden_questions() {
        let questionnaire = builder::questionnaire(&BuilderDefaults::default()).unwrap();
        // react, router yes, state management yes, redux, proceed.
        let mut terminal = FakeTerminal::new(&["", "2", "", "1", "1", "", "", "y", "1", ""]);
        let record = completed(PromptSequencer::new(&mut terminal).run(&questionnaire).unwrap());

        assert_eq!(record.text(keys::COLOR_THEME), Some("dark"));
        assert_eq!(record.text(keys::CSS_FRAMEWORK), Some("tailwind"));
        assert_eq!(record.text(keys::PROJECT_NAME), Some(builder::DEFAULT_PROJECT_NAME));
        assert_eq!(record.flag(keys::INCLUDE_ROUTER), Some(true));
        assert_eq!(record.text(keys::STATE_MANAGER), Some("redux"));
    }

    #[test]
    fn invalid_project_name_shows_validator_message() {
        let questionnaire = builder::questionnaire(&BuilderDefaults::default()).unwrap();
        let mut terminal =
            FakeTerminal::new(&["", "", "", "4", "", "my app", "my-app", "y"]);
        let record = completed(PromptSequencer::new(&mut terminal).run(&questionnaire).unwrap());

        assert_eq!(record.text(keys::PROJECT_NAME), Some("my-app"));
        assert_eq!(terminal.errors.len(), 1);
        assert!(terminal.errors[0].contains("letters, numbers"));
    }

    #[test]
    fn follow_up_lines_follow_the_answer() {
        fn echo(record: &AnswerRecord) -> Vec<String> {
            vec![format!("picked {}", record.text("color").unwrap_or_default())]
        }
        let questionnaire = Questionnaire::new(
            "follow",
            vec![Question::single_choice("color", "Pick", vec![Choice::new("red", "Red")])
                .with_follow_up(echo)],
        )
        .unwrap();
        let mut terminal = FakeTerminal::new(&["1"]);
        PromptSequencer::new(&mut terminal).run(&questionnaire).unwrap();

        assert_eq!(terminal.lines.last().unwrap(), "picked red");
    }
}
