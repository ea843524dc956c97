//! UI designer questionnaire and follow-up menu.

use crate::domain::answers::AnswerRecord;
use crate::domain::choices::{InterfaceType, VisualStyle};
use crate::domain::error::DomainError;
use crate::domain::question::{Choice, Question, Questionnaire, Visibility};

pub mod keys {
    pub const INTERFACE_TYPE: &str = "interfaceType";
    pub const PURPOSE: &str = "purpose";
    pub const TARGET_USERS: &str = "targetUsers";
    pub const SCREEN_COUNT: &str = "screenCount";
    pub const FEATURES: &str = "features";
    pub const DESIGN_STYLE: &str = "designStyle";
    pub const COLOR_PREFERENCE: &str = "colorPreference";
    pub const ADDITIONAL_REQUIREMENTS: &str = "additionalReqs";
}

/// A field echoed in the design prompt.
#[derive(Debug, Clone, Copy)]
pub struct PromptField {
    pub key: &'static str,
    pub label: &'static str,
    /// Omitted from the prompt when answered with an empty string.
    pub optional: bool,
}

const fn field(key: &'static str, label: &'static str, optional: bool) -> PromptField {
    PromptField { key, label, optional }
}

/// Fields shown in the prompt, in display order.
pub const PROMPT_FIELDS: &[PromptField] = &[
    field(keys::INTERFACE_TYPE, "Project Type", false),
    field(keys::PURPOSE, "Purpose", false),
    field(keys::TARGET_USERS, "Target Users", false),
    field(keys::SCREEN_COUNT, "Screen Count", true),
    field(keys::FEATURES, "Key Features", false),
    field(keys::DESIGN_STYLE, "Design Style", false),
    field(keys::COLOR_PREFERENCE, "Color Preferences", true),
    field(keys::ADDITIONAL_REQUIREMENTS, "Additional Requirements", true),
];

fn has_screens(record: &AnswerRecord) -> bool {
    record.text(keys::INTERFACE_TYPE) != Some(InterfaceType::CommandLine.as_str())
}

fn design_intro(record: &AnswerRecord) -> Vec<String> {
    let kind = record.text(keys::INTERFACE_TYPE).unwrap_or("interface");
    vec![format!("Great! Let's design your {kind}")]
}

pub fn questionnaire() -> Result<Questionnaire, DomainError> {
    Questionnaire::new(
        "UI designer",
        vec![
            Question::single_choice(
                keys::INTERFACE_TYPE,
                "What type of interface would you like to design?",
                InterfaceType::choices(),
            )
            .with_follow_up(design_intro),
            Question::text(keys::PURPOSE, "What is the main purpose of your app?"),
            Question::text(
                keys::TARGET_USERS,
                "Who are your target users? (e.g., teenagers, professionals, elderly)",
            ),
            Question::text(keys::SCREEN_COUNT, "How many screens/pages do you need?")
                .visible_when(Visibility::new(&[keys::INTERFACE_TYPE], has_screens)),
            Question::text(keys::FEATURES, "What are the key features? (separate with commas)"),
            Question::single_choice(
                keys::DESIGN_STYLE,
                "Select your preferred design style:",
                VisualStyle::choices(),
            ),
            Question::text(keys::COLOR_PREFERENCE, "Any color preferences? (optional)"),
            Question::text(
                keys::ADDITIONAL_REQUIREMENTS,
                "Any additional requirements or constraints? (optional)",
            ),
        ],
    )
}

/// Actions offered after a design prompt is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    CreateAnother,
    SavePrompt,
    ColorPalettes,
    MobileGuidelines,
    AccessibilityChecklist,
    WebsiteWorkflow,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 7] = [
        Self::CreateAnother,
        Self::SavePrompt,
        Self::ColorPalettes,
        Self::MobileGuidelines,
        Self::AccessibilityChecklist,
        Self::WebsiteWorkflow,
        Self::Exit,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::CreateAnother => "Create another design",
            Self::SavePrompt => "Save current prompt to file",
            Self::ColorPalettes => "Generate color palette suggestions",
            Self::MobileGuidelines => "View mobile-specific guidelines",
            Self::AccessibilityChecklist => "View web accessibility checklist",
            Self::WebsiteWorkflow => "Create full website design",
            Self::Exit => "Exit",
        }
    }

    const fn tag(self) -> &'static str {
        match self {
            Self::CreateAnother => "another",
            Self::SavePrompt => "save",
            Self::ColorPalettes => "palettes",
            Self::MobileGuidelines => "mobile",
            Self::AccessibilityChecklist => "accessibility",
            Self::WebsiteWorkflow => "website",
            Self::Exit => "exit",
        }
    }

    pub fn choices() -> Vec<Choice> {
        Self::ALL
            .iter()
            .map(|a| Choice::new(a.tag(), a.label()))
            .collect()
    }

    /// Action at a zero-based menu position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}
