use std::str::FromStr;

use serde::Serialize;

use crate::domain::answers::{AnswerRecord, AnswerValue};
use crate::domain::choices::{ColorTheme, CssFramework, DesignStyle, Ecosystem, StateManager, UiType};
use crate::domain::error::DomainError;
use crate::domain::wizards::builder::{self, keys};

/// Typed view of a UI builder answer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildSelection {
    pub project_name: String,
    #[serde(serialize_with = "as_tag")]
    pub ui_type: UiType,
    #[serde(serialize_with = "as_tag")]
    pub color_theme: ColorTheme,
    #[serde(serialize_with = "as_tag")]
    pub design_style: DesignStyle,
    #[serde(serialize_with = "as_tag")]
    pub ecosystem: Ecosystem,
    #[serde(serialize_with = "as_tag")]
    pub css_framework: CssFramework,
    pub include_router: bool,
    #[serde(serialize_with = "as_optional_tag")]
    pub state_manager: Option<StateManager>,
}

impl TryFrom<&AnswerRecord> for BuildSelection {
    type Error = DomainError;

    /// Missing choices take the question default. Missing flags count as
    /// "no". The state manager is only read when state management is on.
    fn try_from(record: &AnswerRecord) -> Result<Self, Self::Error> {
        let project_name = record
            .non_empty_text(keys::PROJECT_NAME)
            .unwrap_or(builder::DEFAULT_PROJECT_NAME);
        builder::validate_project_name(project_name).map_err(|reason| DomainError::InvalidAnswer {
            key: keys::PROJECT_NAME.into(),
            reason,
        })?;

        let state_manager = if flag(record, keys::INCLUDE_STATE_MANAGEMENT)? {
            record
                .get(keys::STATE_MANAGER)
                .map(|value| parse_tag(keys::STATE_MANAGER, value))
                .transpose()?
        } else {
            None
        };

        Ok(Self {
            project_name: project_name.to_string(),
            ui_type: choice_or_default(record, keys::UI_TYPE)?,
            color_theme: choice_or_default(record, keys::COLOR_THEME)?,
            design_style: choice_or_default(record, keys::DESIGN_STYLE)?,
            ecosystem: choice_or_default(record, keys::ECOSYSTEM)?,
            css_framework: choice_or_default(record, keys::CSS_FRAMEWORK)?,
            include_router: flag(record, keys::INCLUDE_ROUTER)?,
            state_manager,
        })
    }
}

fn choice_or_default<T>(record: &AnswerRecord, key: &str) -> Result<T, DomainError>
where
    T: FromStr<Err = DomainError> + Default,
{
    record
        .get(key)
        .map_or_else(|| Ok(T::default()), |value| parse_tag(key, value))
}

fn parse_tag<T>(key: &str, value: &AnswerValue) -> Result<T, DomainError>
where
    T: FromStr<Err = DomainError>,
{
    let tag = value.as_str().ok_or_else(|| DomainError::InvalidAnswer {
        key: key.into(),
        reason: "expected a choice, found a yes/no answer".into(),
    })?;
    tag.parse().map_err(|e: DomainError| DomainError::InvalidAnswer {
        key: key.into(),
        reason: e.to_string(),
    })
}

fn flag(record: &AnswerRecord, key: &str) -> Result<bool, DomainError> {
    match record.get(key) {
        None => Ok(false),
        Some(value) => value.as_flag().ok_or_else(|| DomainError::InvalidAnswer {
            key: key.into(),
            reason: format!("expected yes or no, found '{value}'"),
        }),
    }
}

fn as_tag<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
    T: std::fmt::Display,
{
    serializer.collect_str(value)
}

fn as_optional_tag<S>(value: &Option<StateManager>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match value {
        Some(manager) => serializer.serialize_some(manager.as_str()),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, AnswerValue)]) -> AnswerRecord {
        let mut record = AnswerRecord::new();
        for (key, value) in pairs {
            record.insert(*key, value.clone()).unwrap();
        }
        record
    }

    #[test]
    fn empty_record_takes_defaults() {
        let selection = BuildSelection::try_from(&AnswerRecord::new()).unwrap();

        assert_eq!(selection.project_name, "my-ui-project");
        assert_eq!(selection.ecosystem, Ecosystem::React);
        assert_eq!(selection.ui_type, UiType::Landing);
        assert_eq!(selection.css_framework, CssFramework::Plain);
        assert!(!selection.include_router);
        assert_eq!(selection.state_manager, None);
    }

    #[test]
    fn unknown_closed_choice_is_invalid_answer() {
        let err = BuildSelection::try_from(&record(&[(
            keys::ECOSYSTEM,
            AnswerValue::choice("angular"),
        )]))
        .unwrap_err();

        assert!(matches!(err, DomainError::InvalidAnswer { ref key, .. } if key == "ecosystem"));
    }

    #[test]
    fn state_manager_ignored_without_flag() {
        let selection = BuildSelection::try_from(&record(&[
            (keys::ECOSYSTEM, AnswerValue::choice("react")),
            (keys::STATE_MANAGER, AnswerValue::choice("redux")),
        ]))
        .unwrap();
        assert_eq!(selection.state_manager, None);
    }

    #[test]
    fn state_flag_without_sub_choice_is_not_an_error() {
        let selection = BuildSelection::try_from(&record(&[
            (keys::ECOSYSTEM, AnswerValue::choice("vue")),
            (keys::INCLUDE_STATE_MANAGEMENT, AnswerValue::Flag(true)),
        ]))
        .unwrap();
        assert_eq!(selection.state_manager, None);
    }

    #[test]
    fn rejects_project_name_with_path_segments() {
        let err = BuildSelection::try_from(&record(&[(
            keys::PROJECT_NAME,
            AnswerValue::text("../escape"),
        )]))
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidAnswer { .. }));
    }

    #[test]
    fn flag_key_holding_text_is_invalid() {
        let err = BuildSelection::try_from(&record(&[(
            keys::INCLUDE_ROUTER,
            AnswerValue::text("sure"),
        )]))
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidAnswer { ref key, .. } if key == "includeRouter"));
    }

    #[test]
    fn serializes_tags() {
        let selection = BuildSelection::try_from(&record(&[(
            keys::ECOSYSTEM,
            AnswerValue::choice("svelte"),
        )]))
        .unwrap();
        let json = serde_json::to_value(&selection).unwrap();
        assert_eq!(json["ecosystem"], "svelte");
        assert_eq!(json["state_manager"], serde_json::Value::Null);
    }
}
