//! Plain-text rendering of designer prompts and website reports.
//!
//! Rendering is a pure function of the answer record and the format. The
//! generation timestamp is supplied by the caller.

use crate::domain::answers::AnswerRecord;
use crate::domain::tables::{designer, website as website_table};
use crate::domain::wizards::designer::{PROMPT_FIELDS, keys as designer_keys};
use crate::domain::wizards::website::{REPORT_SECTIONS, keys as website_keys};

pub const DESIGN_PROMPT_PREFIX: &str = "ui-design-prompt";
pub const WEBSITE_REPORT_PREFIX: &str = "website-design-report";

/// How a report is laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportFormat {
    /// Shown on the terminal.
    Display,
    /// Written to a file, ending with the generation timestamp.
    Saved { generated_on: String },
}

impl ReportFormat {
    pub fn saved(generated_on: impl Into<String>) -> Self {
        Self::Saved {
            generated_on: generated_on.into(),
        }
    }

    fn bullet(&self) -> &'static str {
        match self {
            Self::Display => "•",
            Self::Saved { .. } => "-",
        }
    }
}

fn push_list(out: &mut String, heading: &str, items: &[&str], bullet: &str) {
    out.push('\n');
    out.push_str(heading);
    out.push('\n');
    for item in items {
        out.push_str(&format!("{bullet} {item}\n"));
    }
}

fn push_footer(out: &mut String, format: &ReportFormat) {
    if let ReportFormat::Saved { generated_on } = format {
        out.push_str(&format!("\nGenerated on: {generated_on}\n"));
    }
}

/// Render the UI/UX design prompt for a designer answer record.
pub fn render_design_prompt(record: &AnswerRecord, format: &ReportFormat) -> String {
    let mut out = String::new();
    out.push_str("UI/UX DESIGN PROMPT\n");
    out.push_str(&"=".repeat(50));
    out.push_str("\n\n");

    for field in PROMPT_FIELDS {
        match (record.non_empty_text(field.key), field.optional) {
            (Some(value), _) => {
                out.push_str(&format!("{}: {value}\n", field.label));
            }
            (None, false) => {
                out.push_str(&format!("{}: \n", field.label));
            }
            (None, true) => {}
        }
    }

    let category = record.text(designer_keys::INTERFACE_TYPE).unwrap_or_default();
    let bullet = format.bullet();
    push_list(
        &mut out,
        "DESIGN RECOMMENDATIONS:",
        designer::design_recommendations(category),
        bullet,
    );
    push_list(
        &mut out,
        "IMPLEMENTATION SUGGESTIONS:",
        designer::implementation_suggestions(category),
        bullet,
    );

    out.push_str("\nWIREFRAME TEMPLATE:\n");
    out.push_str(designer::wireframe(category).trim_end());
    out.push('\n');

    push_footer(&mut out, format);
    out
}

/// Swatch lines for a palette, one hex value per line.
pub fn palette_lines(palette: &[&str]) -> Vec<String> {
    palette.iter().map(|hex| format!("██████ {hex}")).collect()
}

/// Render the comprehensive website design report.
pub fn render_website_report(record: &AnswerRecord, format: &ReportFormat) -> String {
    let mut out = String::new();
    out.push_str("COMPREHENSIVE WEBSITE DESIGN REPORT\n");
    out.push_str(&"=".repeat(60));
    out.push('\n');

    for section in REPORT_SECTIONS {
        out.push('\n');
        out.push_str(section.title);
        out.push('\n');
        out.push_str(&"-".repeat(section.title.chars().count()));
        out.push('\n');
        for (key, label) in section.fields {
            out.push_str(&format!("{label}: {}\n", record.text(key).unwrap_or_default()));
        }
    }

    if matches!(format, ReportFormat::Display) {
        out.push_str("\nSELECTED COLOR PALETTE:\n");
        let scheme = record.text(website_keys::COLOR_SCHEME).unwrap_or_default();
        for line in palette_lines(website_table::scheme_palette(scheme)) {
            out.push_str(&line);
            out.push('\n');
        }
    }

    out.push_str("\nRECOMMENDED NEXT STEPS\n");
    for (index, step) in website_table::NEXT_STEPS.iter().enumerate() {
        out.push_str(&format!("{}. {step}\n", index + 1));
    }

    push_footer(&mut out, format);
    out
}
