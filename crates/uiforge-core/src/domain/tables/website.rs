//! Tables for the website design workflow.

use crate::domain::choices::ColorScheme;
use crate::domain::render::RenderContext;

pub const RESEARCH_TIPS: &[&str] = &[
    "Analyze competitor user flows and navigation",
    "Study industry-specific design patterns",
    "Research current web design trends",
    "Review accessibility standards in your industry",
    "Analyze user reviews of competitor sites",
    "Study successful sites outside your industry for inspiration",
];

pub const WIREFRAME_TOOLS: &[&str] = &[
    "Figma - Free, collaborative, web-based",
    "Sketch - Mac-only, industry standard",
    "Adobe XD - Cross-platform, comprehensive",
    "Balsamiq - Quick, low-fidelity mockups",
    "Whimsical - Simple, fast wireframing",
    "Pen & Paper - Quick ideation phase",
];

pub const STYLE_RECOMMENDATIONS: &[&str] = &[
    "Maintain consistent visual hierarchy",
    "Use whitespace effectively for readability",
    "Ensure color contrast meets WCAG standards",
    "Choose fonts that reflect brand personality",
    "Optimize images for web performance",
    "Create a cohesive visual language",
    "Consider mobile-first design approach",
];

pub const HIGH_FIDELITY_CHECKLIST: &[&str] = &[
    "Create pixel-perfect layouts for all breakpoints",
    "Define interactive states (hover, active, focus)",
    "Specify exact typography scales and spacing",
    "Design error states and loading animations",
    "Create component variations and states",
    "Ensure accessibility compliance",
    "Test designs with real content",
    "Create style guide and documentation",
];

pub const TESTING_RECOMMENDATIONS: &[&str] = &[
    "Conduct usability testing with 5-8 users",
    "Test on multiple devices and browsers",
    "Validate accessibility with screen readers",
    "Check loading performance on slow connections",
    "Test form submissions and error handling",
    "Validate mobile touch interactions",
    "Review content readability and clarity",
    "Test conversion funnel effectiveness",
];

pub const HANDOFF_CHECKLIST: &[&str] = &[
    "Export all design assets (images, icons, fonts)",
    "Provide design specifications document",
    "Create component library/style guide",
    "Document interaction animations",
    "Specify responsive behavior guidelines",
    "Include accessibility requirements",
    "Provide content strategy document",
    "Set up design review checkpoints",
];

pub const NEXT_STEPS: &[&str] = &[
    "Create detailed wireframes in chosen design tool",
    "Develop high-fidelity mockups for all pages",
    "Build component library and style guide",
    "Conduct user testing on key pages",
    "Prepare development assets and documentation",
    "Set up regular review cycles with stakeholders",
    "Plan analytics and conversion tracking",
    "Execute development and launch strategy",
];

const HOMEPAGE_WIREFRAME: &str = include_str!("../../../templates/wireframes/homepage.txt");

impl ColorScheme {
    pub fn palette(self) -> &'static [&'static str] {
        match self {
            Self::CorporateBlue => &["#0066CC", "#FFFFFF", "#F8F9FA", "#E9ECEF", "#6C757D"],
            Self::NatureGreen => &["#2ECC71", "#27AE60", "#F1C40F", "#E67E22", "#8B4513"],
            Self::BoldRed => &["#E74C3C", "#C0392B", "#2C3E50", "#FFFFFF", "#BDC3C7"],
            Self::ModernPurple => &["#9B59B6", "#8E44AD", "#34495E", "#ECF0F1", "#95A5A6"],
            Self::WarmOrange => &["#F39C12", "#E67E22", "#F1C40F", "#FFF3CD", "#856404"],
            Self::Monochrome => &["#000000", "#2C3E50", "#FFFFFF", "#ECF0F1", "#BDC3C7"],
            Self::Custom => &["#4A90E2", "#7ED321", "#F5A623", "#D0021B", "#9013FE"],
        }
    }
}

/// Palette for a color scheme tag, falling back to Corporate Blue & White.
pub fn scheme_palette(scheme: &str) -> &'static [&'static str] {
    scheme
        .parse::<ColorScheme>()
        .unwrap_or(ColorScheme::CorporateBlue)
        .palette()
}

/// Tree of the site's main pages under the home page.
///
/// `pages` is a comma-separated list. Blank entries and "home" (any case)
/// are skipped. The last listed page gets the closing connector.
pub fn site_map(pages: &str) -> Vec<String> {
    let children: Vec<&str> = pages
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty() && !p.eq_ignore_ascii_case("home"))
        .collect();

    let mut lines = vec![
        "┌─────────────────────────────────────┐".to_string(),
        "│              HOME PAGE              │".to_string(),
        "└─────────────────┬───────────────────┘".to_string(),
        "                  │".to_string(),
    ];
    for (index, page) in children.iter().enumerate() {
        let connector = if index + 1 == children.len() { '└' } else { '├' };
        lines.push(format!("                  {connector}─── {}", page.to_uppercase()));
    }
    lines
}

/// Homepage wireframe with the primary content slot filled in.
pub fn homepage_wireframe(content_priority: Option<&str>) -> String {
    let content = content_priority
        .filter(|c| !c.is_empty())
        .unwrap_or("Key Content");
    RenderContext::default()
        .with_variable("CONTENT_PRIORITY", content)
        .render(HOMEPAGE_WIREFRAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_map_lists_non_home_pages_upper_cased() {
        let lines = site_map("Home, About, Services , contact");

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[4], "                  ├─── ABOUT");
        assert_eq!(lines[5], "                  ├─── SERVICES");
        assert_eq!(lines[6], "                  └─── CONTACT");
    }

    #[test]
    fn site_map_closes_on_last_page_even_when_home_is_last() {
        let lines = site_map("Blog, Shop, HOME");
        assert_eq!(lines.last().unwrap(), "                  └─── SHOP");
    }

    #[test]
    fn site_map_of_nothing_is_just_home() {
        assert_eq!(site_map(" , ").len(), 4);
    }

    #[test]
    fn homepage_wireframe_embeds_priority() {
        assert!(homepage_wireframe(Some("Product demo video")).contains("Product demo video"));
        assert!(homepage_wireframe(Some("")).contains("Key Content"));
        assert!(homepage_wireframe(None).contains("Key Content"));
    }

    #[test]
    fn unknown_scheme_uses_corporate_palette() {
        assert_eq!(scheme_palette("Rainbow"), ColorScheme::CorporateBlue.palette());
        assert_eq!(scheme_palette("Bold Red & Black")[0], "#E74C3C");
    }
}
