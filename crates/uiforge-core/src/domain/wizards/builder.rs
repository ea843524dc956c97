//! UI builder questionnaire.

use std::str::FromStr;

use crate::domain::answers::{AnswerRecord, AnswerValue};
use crate::domain::choices::{ColorTheme, CssFramework, DesignStyle, Ecosystem, StateManager, UiType};
use crate::domain::error::DomainError;
use crate::domain::question::{Question, Questionnaire, Visibility};

pub const DEFAULT_PROJECT_NAME: &str = "my-ui-project";

pub mod keys {
    pub const UI_TYPE: &str = "uiType";
    pub const COLOR_THEME: &str = "colorTheme";
    pub const DESIGN_STYLE: &str = "designStyle";
    pub const ECOSYSTEM: &str = "ecosystem";
    pub const CSS_FRAMEWORK: &str = "cssFramework";
    pub const PROJECT_NAME: &str = "projectName";
    pub const INCLUDE_ROUTER: &str = "includeRouter";
    pub const INCLUDE_STATE_MANAGEMENT: &str = "includeStateManagement";
    pub const STATE_MANAGER: &str = "stateManager";
}

/// Defaults offered by the builder prompts.
#[derive(Debug, Clone)]
pub struct BuilderDefaults {
    pub project_name: String,
    pub ecosystem: Ecosystem,
}

impl Default for BuilderDefaults {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            ecosystem: Ecosystem::default(),
        }
    }
}

/// Project names become directory names, so only a safe subset is allowed.
pub fn validate_project_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Project name cannot be empty".into());
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(
            "Project name can only contain letters, numbers, hyphens, and underscores".into(),
        );
    }
    Ok(())
}

fn ecosystem_of(record: &AnswerRecord) -> Option<Ecosystem> {
    record.text(keys::ECOSYSTEM).and_then(|tag| tag.parse().ok())
}

fn offers_routing(record: &AnswerRecord) -> bool {
    ecosystem_of(record).is_some_and(|e| e.supports_routing())
}

fn offers_state_management(record: &AnswerRecord) -> bool {
    ecosystem_of(record).is_some_and(|e| e.supports_state_management())
}

fn wants_state_management(record: &AnswerRecord) -> bool {
    record.flag(keys::INCLUDE_STATE_MANAGEMENT) == Some(true)
}

pub fn questionnaire(defaults: &BuilderDefaults) -> Result<Questionnaire, DomainError> {
    Questionnaire::new(
        "UI builder",
        vec![
            Question::single_choice(keys::UI_TYPE, "What type of UI do you want to build?", UiType::choices())
                .with_default(AnswerValue::choice(UiType::default().as_str())),
            Question::single_choice(
                keys::COLOR_THEME,
                "Choose a color theme for your UI:",
                ColorTheme::choices(),
            )
            .with_default(AnswerValue::choice(ColorTheme::default().as_str())),
            Question::single_choice(
                keys::DESIGN_STYLE,
                "What design style would you prefer?",
                DesignStyle::choices(),
            )
            .with_default(AnswerValue::choice(DesignStyle::default().as_str())),
            Question::single_choice(
                keys::ECOSYSTEM,
                "Select a frontend framework to use:",
                Ecosystem::choices(),
            )
            .with_default(AnswerValue::choice(defaults.ecosystem.as_str())),
            Question::single_choice(
                keys::CSS_FRAMEWORK,
                "Choose a CSS framework or utility library:",
                CssFramework::choices(),
            )
            .with_default(AnswerValue::choice(CssFramework::default().as_str())),
            Question::text(keys::PROJECT_NAME, "What should be the name of your project folder?")
                .with_default(AnswerValue::text(defaults.project_name.as_str()))
                .required()
                .validated_by(validate_project_name),
            Question::confirm(keys::INCLUDE_ROUTER, "Include routing setup?", true)
                .visible_when(Visibility::new(&[keys::ECOSYSTEM], offers_routing)),
            Question::confirm(keys::INCLUDE_STATE_MANAGEMENT, "Include state management?", false)
                .visible_when(Visibility::new(&[keys::ECOSYSTEM], offers_state_management)),
            Question::single_choice(
                keys::STATE_MANAGER,
                "Which state management library?",
                StateManager::choices(),
            )
            .with_default(AnswerValue::choice(StateManager::default().as_str()))
            .visible_when(Visibility::new(
                &[keys::INCLUDE_STATE_MANAGEMENT],
                wants_state_management,
            )),
        ],
    )
    .map(|q| {
        q.with_summary(summary)
            .with_confirmation("Proceed with project generation?")
    })
}

fn label<T>(record: &AnswerRecord, key: &str, describe: fn(&T) -> &'static str) -> String
where
    T: FromStr,
{
    let tag = record.text(key).unwrap_or_default();
    tag.parse::<T>()
        .map(|v| describe(&v).to_string())
        .unwrap_or_else(|_| tag.to_string())
}

/// Summary of the choices shown before the final confirmation.
pub fn summary(record: &AnswerRecord) -> Vec<String> {
    let mut lines = vec![
        "Summary of Your Choices:".to_string(),
        format!("UI Type: {}", label(record, keys::UI_TYPE, UiType::label)),
        format!("Color Theme: {}", label(record, keys::COLOR_THEME, ColorTheme::label)),
        format!("Design Style: {}", label(record, keys::DESIGN_STYLE, DesignStyle::label)),
        format!("Framework: {}", label(record, keys::ECOSYSTEM, Ecosystem::label)),
        format!("CSS Framework: {}", label(record, keys::CSS_FRAMEWORK, CssFramework::label)),
        format!(
            "Project Name: {}",
            record.text(keys::PROJECT_NAME).unwrap_or(DEFAULT_PROJECT_NAME)
        ),
    ];
    if let Some(router) = record.flag(keys::INCLUDE_ROUTER) {
        lines.push(format!("Routing: {}", AnswerValue::Flag(router)));
    }
    if record.flag(keys::INCLUDE_STATE_MANAGEMENT) == Some(true) {
        lines.push(format!(
            "State Management: {}",
            label(record, keys::STATE_MANAGER, StateManager::label)
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn questionnaire_is_well_formed() {
        let questionnaire = questionnaire(&BuilderDefaults::default()).unwrap();
        assert_eq!(questionnaire.len(), 9);
        assert!(questionnaire.confirmation().is_some());
    }

    #[test]
    fn project_name_shape() {
        assert!(validate_project_name("my-app_2").is_ok());
        assert!(validate_project_name("").is_err());
        assert!(validate_project_name("my app").is_err());
        assert!(validate_project_name("../up").is_err());
    }

    #[test]
    fn routing_hidden_for_vanilla() {
        let questionnaire = questionnaire(&BuilderDefaults::default()).unwrap();
        let router = &questionnaire.questions()[6];
        assert_eq!(router.id(), keys::INCLUDE_ROUTER);

        let mut record = AnswerRecord::new();
        record.insert(keys::ECOSYSTEM, AnswerValue::choice("vanilla")).unwrap();
        assert!(!router.is_visible(&record));

        record.clear();
        record.insert(keys::ECOSYSTEM, AnswerValue::choice("svelte")).unwrap();
        assert!(router.is_visible(&record));
    }

    #[test]
    fn state_management_offered_for_react_and_vue_only() {
        let questionnaire = questionnaire(&BuilderDefaults::default()).unwrap();
        let state = &questionnaire.questions()[7];

        for (ecosystem, visible) in [("react", true), ("vue", true), ("svelte", false), ("vanilla", false)] {
            let mut record = AnswerRecord::new();
            record.insert(keys::ECOSYSTEM, AnswerValue::choice(ecosystem)).unwrap();
            assert_eq!(state.is_visible(&record), visible, "{ecosystem}");
        }
    }

    #[test]
    fn summary_uses_labels() {
        let mut record = AnswerRecord::new();
        record.insert(keys::UI_TYPE, AnswerValue::choice("dashboard")).unwrap();
        record.insert(keys::ECOSYSTEM, AnswerValue::choice("vue")).unwrap();
        record.insert(keys::PROJECT_NAME, AnswerValue::text("panel")).unwrap();

        let lines = summary(&record);
        assert!(lines.contains(&"UI Type: Dashboard".to_string()));
        assert!(lines.contains(&"Framework: Vue.js".to_string()));
        assert!(lines.contains(&"Project Name: panel".to_string()));
    }

    #[test]
    fn configured_defaults_are_offered() {
        let defaults = BuilderDefaults {
            project_name: "starter".into(),
            ecosystem: Ecosystem::Svelte,
        };
        let questionnaire = questionnaire(&defaults).unwrap();
        let ecosystem = &questionnaire.questions()[3];
        assert_eq!(ecosystem.default_choice_index(), Some(2));
        assert_eq!(
            questionnaire.questions()[5].default(),
            Some(&AnswerValue::text("starter"))
        );
    }
}
