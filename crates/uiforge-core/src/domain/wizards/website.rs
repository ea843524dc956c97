//! The eight-step website design workflow.

use crate::domain::answers::AnswerRecord;
use crate::domain::choices::ColorScheme;
use crate::domain::error::DomainError;
use crate::domain::question::{Question, Questionnaire};
use crate::domain::report::palette_lines;
use crate::domain::tables::website as table;

pub mod keys {
    pub const PURPOSE: &str = "purpose";
    pub const BUSINESS_GOALS: &str = "businessGoals";
    pub const TARGET_AUDIENCE: &str = "targetAudience";
    pub const USER_PERSONAS: &str = "userPersonas";
    pub const GEOGRAPHY: &str = "geography";
    pub const COMPETITORS: &str = "competitors";
    pub const INSPIRATION: &str = "inspiration";
    pub const INDUSTRY: &str = "industry";
    pub const TRENDS: &str = "trends";
    pub const MAIN_PAGES: &str = "mainPages";
    pub const SUB_PAGES: &str = "subPages";
    pub const USER_FLOWS: &str = "userFlows";
    pub const NAVIGATION: &str = "navigation";
    pub const LAYOUT: &str = "layout";
    pub const CONTENT_PRIORITY: &str = "contentPriority";
    pub const CTA_ELEMENTS: &str = "ctaElements";
    pub const COLOR_SCHEME: &str = "colorScheme";
    pub const TYPOGRAPHY: &str = "typography";
    pub const IMAGERY: &str = "imagery";
    pub const BRAND_GUIDELINES: &str = "brandGuidelines";
    pub const DESIGN_TOOL: &str = "designTool";
    pub const DESIGN_SYSTEM: &str = "designSystem";
    pub const RESPONSIVE_BREAKPOINTS: &str = "responsiveBreakpoints";
    pub const TESTING_METHODS: &str = "testingMethods";
    pub const TESTING_TOOLS: &str = "testingTools";
    pub const FEEDBACK_SOURCES: &str = "feedbackSources";
    pub const TECH_STACK: &str = "techStack";
    pub const DEVELOPER: &str = "developer";
    pub const TIMELINE: &str = "timeline";
}

/// One titled block of the final report.
#[derive(Debug, Clone, Copy)]
pub struct ReportSection {
    pub title: &'static str,
    /// `(answer key, label)` pairs in display order.
    pub fields: &'static [(&'static str, &'static str)],
}

pub const REPORT_SECTIONS: &[ReportSection] = &[
    ReportSection {
        title: "PROJECT OVERVIEW",
        fields: &[
            (keys::PURPOSE, "Purpose"),
            (keys::BUSINESS_GOALS, "Business Goals"),
            (keys::TARGET_AUDIENCE, "Target Audience"),
            (keys::USER_PERSONAS, "User Personas"),
            (keys::GEOGRAPHY, "Geographic Target"),
        ],
    },
    ReportSection {
        title: "RESEARCH & INSPIRATION",
        fields: &[
            (keys::INDUSTRY, "Industry"),
            (keys::COMPETITORS, "Competitors"),
            (keys::INSPIRATION, "Inspiration"),
            (keys::TRENDS, "Design Trends"),
        ],
    },
    ReportSection {
        title: "SITE STRUCTURE",
        fields: &[
            (keys::MAIN_PAGES, "Main Pages"),
            (keys::SUB_PAGES, "Sub Pages"),
            (keys::NAVIGATION, "Navigation Style"),
            (keys::USER_FLOWS, "User Flows"),
        ],
    },
    ReportSection {
        title: "VISUAL DESIGN",
        fields: &[
            (keys::COLOR_SCHEME, "Color Scheme"),
            (keys::TYPOGRAPHY, "Typography"),
            (keys::IMAGERY, "Imagery Style"),
            (keys::BRAND_GUIDELINES, "Brand Guidelines"),
            (keys::LAYOUT, "Layout Structure"),
            (keys::CONTENT_PRIORITY, "Content Priority"),
            (keys::CTA_ELEMENTS, "Call-to-Action Elements"),
        ],
    },
    ReportSection {
        title: "DEVELOPMENT DETAILS",
        fields: &[
            (keys::DESIGN_TOOL, "Design Tool"),
            (keys::DESIGN_SYSTEM, "Design System"),
            (keys::RESPONSIVE_BREAKPOINTS, "Responsive Breakpoints"),
            (keys::TECH_STACK, "Tech Stack"),
            (keys::DEVELOPER, "Developer"),
            (keys::TIMELINE, "Timeline"),
        ],
    },
    ReportSection {
        title: "TESTING STRATEGY",
        fields: &[
            (keys::TESTING_METHODS, "Testing Methods"),
            (keys::TESTING_TOOLS, "Testing Tools"),
            (keys::FEEDBACK_SOURCES, "Feedback Sources"),
        ],
    },
];

fn bullets(heading: &str, items: &[&str], marker: &str) -> Vec<String> {
    let mut lines = vec![String::new(), heading.to_string()];
    lines.extend(items.iter().map(|item| format!("{marker} {item}")));
    lines
}

fn complete(step: u8, title: &str) -> String {
    format!("Step {step} Complete: {title}")
}

/// Swatch lines for the selected color scheme.
pub fn scheme_swatches(record: &AnswerRecord) -> Vec<String> {
    let scheme = record.text(keys::COLOR_SCHEME).unwrap_or_default();
    palette_lines(table::scheme_palette(scheme))
}

fn after_objectives(_: &AnswerRecord) -> Vec<String> {
    vec![complete(1, "Objectives and Audience Defined")]
}

fn after_research(_: &AnswerRecord) -> Vec<String> {
    let mut lines = bullets("RESEARCH RECOMMENDATIONS:", table::RESEARCH_TIPS, "•");
    lines.push(complete(2, "Research and Inspiration Gathered"));
    lines
}

fn site_map_preview(record: &AnswerRecord) -> Vec<String> {
    let mut lines = vec![String::new(), "GENERATED SITE MAP STRUCTURE:".to_string()];
    lines.extend(table::site_map(record.text(keys::MAIN_PAGES).unwrap_or_default()));
    lines
}

fn after_site_map(record: &AnswerRecord) -> Vec<String> {
    let mut lines = site_map_preview(record);
    lines.push(complete(3, "Site Map Created"));
    lines
}

fn after_wireframes(record: &AnswerRecord) -> Vec<String> {
    let mut lines = bullets("WIREFRAME TOOLS RECOMMENDATIONS:", table::WIREFRAME_TOOLS, "•");
    lines.push(String::new());
    lines.push("HOMEPAGE WIREFRAME TEMPLATE:".to_string());
    lines.extend(
        table::homepage_wireframe(record.text(keys::CONTENT_PRIORITY))
            .lines()
            .map(str::to_string),
    );
    lines.push(complete(4, "Wireframes Designed"));
    lines
}

fn after_visual_style(record: &AnswerRecord) -> Vec<String> {
    let mut lines = bullets("VISUAL STYLE RECOMMENDATIONS:", table::STYLE_RECOMMENDATIONS, "•");
    lines.push(String::new());
    lines.push(format!(
        "Selected Color Scheme: {}",
        record.text(keys::COLOR_SCHEME).unwrap_or_default()
    ));
    lines.extend(scheme_swatches(record));
    lines.push(complete(5, "Visual Style Selected"));
    lines
}

fn after_high_fidelity(_: &AnswerRecord) -> Vec<String> {
    let mut lines = bullets("HIGH-FIDELITY DESIGN CHECKLIST:", table::HIGH_FIDELITY_CHECKLIST, "□");
    lines.push(complete(6, "High-Fidelity Designs Planned"));
    lines
}

fn after_testing(_: &AnswerRecord) -> Vec<String> {
    let mut lines = bullets("TESTING RECOMMENDATIONS:", table::TESTING_RECOMMENDATIONS, "•");
    lines.push(complete(7, "Testing Strategy Defined"));
    lines
}

fn after_handoff(_: &AnswerRecord) -> Vec<String> {
    let mut lines = bullets("DEVELOPMENT HANDOFF CHECKLIST:", table::HANDOFF_CHECKLIST, "□");
    lines.push(complete(8, "Development Handoff Prepared"));
    lines
}

pub fn questionnaire() -> Result<Questionnaire, DomainError> {
    Questionnaire::new(
        "Website design",
        vec![
            // Step 1
            Question::text(keys::PURPOSE, "What is the primary purpose of the website?")
                .with_preamble(["STEP 1: DEFINE OBJECTIVES AND AUDIENCE"]),
            Question::text(
                keys::BUSINESS_GOALS,
                "What are the main business goals? (e.g., increase sales, brand awareness)",
            ),
            Question::text(keys::TARGET_AUDIENCE, "Describe your target audience in detail:"),
            Question::text(
                keys::USER_PERSONAS,
                "List 2-3 key user personas (e.g., Young Professional, Retiree, Student):",
            ),
            Question::text(keys::GEOGRAPHY, "Geographic target (local, national, global):")
                .with_follow_up(after_objectives),
            // Step 2
            Question::text(keys::COMPETITORS, "List 3-5 competitor websites for analysis:")
                .with_preamble(["STEP 2: RESEARCH AND GATHER INSPIRATION"]),
            Question::text(keys::INSPIRATION, "Any websites you admire for design/functionality?"),
            Question::text(keys::INDUSTRY, "What industry/sector is this for?"),
            Question::text(keys::TRENDS, "Any specific design trends you want to incorporate?")
                .with_follow_up(after_research),
            // Step 3
            Question::text(
                keys::MAIN_PAGES,
                "List all main pages needed (e.g., Home, About, Services, Contact):",
            )
            .with_preamble(["STEP 3: CREATE SITE MAP"]),
            Question::text(keys::SUB_PAGES, "Any sub-pages or categories?"),
            Question::text(
                keys::USER_FLOWS,
                "Describe key user journeys (e.g., visitor to customer):",
            ),
            Question::text(
                keys::NAVIGATION,
                "Navigation style preference (header menu, sidebar, mega menu):",
            )
            .with_follow_up(after_site_map),
            // Step 4
            Question::text(
                keys::LAYOUT,
                "Preferred layout structure (header/sidebar/footer, full-width, grid):",
            )
            .with_preamble(["STEP 4: DESIGN WIREFRAMES"]),
            Question::text(
                keys::CONTENT_PRIORITY,
                "What content should be most prominent on homepage?",
            ),
            Question::text(keys::CTA_ELEMENTS, "Main call-to-action elements needed:")
                .with_follow_up(after_wireframes),
            // Step 5
            Question::single_choice(
                keys::COLOR_SCHEME,
                "Select your website color scheme:",
                ColorScheme::choices(),
            )
            .with_preamble(["STEP 5: SELECT VISUAL STYLE"]),
            Question::text(
                keys::TYPOGRAPHY,
                "Typography preference (modern, classic, playful, minimal):",
            ),
            Question::text(
                keys::IMAGERY,
                "Imagery style (photography, illustrations, icons, mixed):",
            ),
            Question::text(keys::BRAND_GUIDELINES, "Do you have existing brand guidelines? (y/n):")
                .with_follow_up(after_visual_style),
            // Step 6
            Question::text(
                keys::DESIGN_TOOL,
                "Preferred design tool (Figma, Sketch, Adobe XD, other):",
            )
            .with_preamble(["STEP 6: DEVELOP HIGH-FIDELITY DESIGNS"]),
            Question::text(
                keys::DESIGN_SYSTEM,
                "Will you create a design system/component library? (y/n):",
            ),
            Question::text(
                keys::RESPONSIVE_BREAKPOINTS,
                "Target breakpoints (desktop, tablet, mobile specific sizes):",
            )
            .with_follow_up(after_high_fidelity),
            // Step 7
            Question::text(
                keys::TESTING_METHODS,
                "Preferred testing methods (user testing, A/B testing, surveys):",
            )
            .with_preamble(["STEP 7: TEST AND ITERATE"]),
            Question::text(keys::TESTING_TOOLS, "Testing tools you plan to use (optional):"),
            Question::text(
                keys::FEEDBACK_SOURCES,
                "Who will provide feedback (stakeholders, users, team):",
            )
            .with_follow_up(after_testing),
            // Step 8
            Question::text(
                keys::TECH_STACK,
                "Planned technology stack (React, WordPress, etc.):",
            )
            .with_preamble(["STEP 8: HANDOFF TO DEVELOPMENT"]),
            Question::text(
                keys::DEVELOPER,
                "Who will develop this (in-house, freelancer, agency):",
            ),
            Question::text(keys::TIMELINE, "Development timeline/deadline:")
                .with_follow_up(after_handoff),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::answers::AnswerValue;

    #[test]
    fn questionnaire_has_all_steps() {
        let questionnaire = questionnaire().unwrap();
        assert_eq!(questionnaire.len(), 29);

        let headers: Vec<_> = questionnaire
            .questions()
            .iter()
            .filter(|q| !q.preamble().is_empty())
            .collect();
        assert_eq!(headers.len(), 8);
        assert!(headers[4].preamble()[0].starts_with("STEP 5"));
    }

    #[test]
    fn every_report_field_is_asked() {
        let questionnaire = questionnaire().unwrap();
        for section in REPORT_SECTIONS {
            for (key, _) in section.fields {
                assert!(
                    questionnaire.questions().iter().any(|q| q.id() == *key),
                    "{key}"
                );
            }
        }
    }

    #[test]
    fn site_map_follow_up_uses_main_pages() {
        let mut record = AnswerRecord::new();
        record
            .insert(keys::MAIN_PAGES, AnswerValue::text("Home, Pricing"))
            .unwrap();

        let lines = site_map_preview(&record);
        assert!(lines.iter().any(|l| l.ends_with("└─── PRICING")));
    }

    #[test]
    fn swatches_fall_back_to_corporate_blue() {
        let record = AnswerRecord::new();
        let swatches = scheme_swatches(&record);
        assert_eq!(swatches.len(), 5);
        assert_eq!(swatches[0], "██████ #0066CC");
    }

    #[test]
    fn checklists_use_box_marker() {
        let lines = after_handoff(&AnswerRecord::new());
        assert!(lines.iter().any(|l| l.starts_with("□ Export all design assets")));
        assert_eq!(lines.last().unwrap(), "Step 8 Complete: Development Handoff Prepared");
    }
}
