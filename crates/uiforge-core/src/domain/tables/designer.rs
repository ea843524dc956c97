//! Advice tables for the UI designer.
//!
//! Lookups take the raw category tag from the answer record. Unknown tags
//! resolve to the generic entries, so no lookup ever returns nothing.

use crate::domain::choices::{InterfaceType, VisualStyle};

pub const GENERIC_RECOMMENDATIONS: &[&str] = &[
    "Focus on user experience and usability",
    "Maintain consistency throughout the interface",
    "Test with real users early and often",
    "Keep the design simple and intuitive",
];

pub const GENERIC_SUGGESTIONS: &[&str] = &[
    "Choose appropriate technology stack",
    "Plan for scalability and maintenance",
    "Document design decisions and rationale",
];

pub const GENERIC_WIREFRAME: &str = include_str!("../../../templates/wireframes/generic.txt");

pub const MOBILE_GUIDELINES: &[&str] = &[
    "Minimum touch target size: 44px (iOS) / 48dp (Android)",
    "Use native navigation patterns",
    "Optimize for one-handed use",
    "Consider thumb-friendly zones",
    "Implement swipe gestures appropriately",
    "Use system fonts when possible",
    "Test on various screen sizes",
    "Consider battery usage in design decisions",
];

pub const ACCESSIBILITY_CHECKLIST: &[&str] = &[
    "Ensure sufficient color contrast (4.5:1 ratio)",
    "Provide alternative text for images",
    "Use semantic HTML elements",
    "Ensure keyboard navigation support",
    "Include focus indicators",
    "Use descriptive link text",
    "Provide captions for videos",
    "Test with screen readers",
    "Support browser zoom up to 200%",
    "Use ARIA labels when necessary",
];

impl InterfaceType {
    pub fn recommendations(self) -> &'static [&'static str] {
        match self {
            Self::Web => &[
                "Use responsive grid layout (12-column system)",
                "Implement consistent navigation patterns",
                "Focus on accessibility (WCAG guidelines)",
                "Optimize for both desktop and mobile views",
            ],
            Self::Mobile => &[
                "Use thumb-friendly touch targets (minimum 44px)",
                "Follow platform-specific guidelines (Material Design/Human Interface)",
                "Implement intuitive gesture controls",
                "Consider offline functionality",
            ],
            Self::Desktop => &[
                "Utilize available screen space effectively",
                "Implement keyboard shortcuts",
                "Use familiar desktop UI patterns",
                "Consider multi-window workflows",
            ],
            Self::CommandLine => &[
                "Design clear command structure",
                "Provide helpful error messages",
                "Include comprehensive help documentation",
                "Use consistent parameter naming",
            ],
            Self::Smartwatch => &[
                "Keep interactions minimal and quick",
                "Use large, easily tappable elements",
                "Leverage voice commands and haptic feedback",
                "Design for glanceable information",
            ],
            Self::Other => GENERIC_RECOMMENDATIONS,
        }
    }

    pub fn implementation_suggestions(self) -> &'static [&'static str] {
        match self {
            Self::Web => &[
                "Framework: React, Vue.js, or Angular",
                "CSS Framework: Tailwind CSS, Bootstrap, or Material-UI",
                "Tools: Figma for design, Storybook for components",
            ],
            Self::Mobile => &[
                "Native: Swift (iOS), Kotlin (Android)",
                "Cross-platform: React Native, Flutter, or Xamarin",
                "Design Tools: Sketch, Figma, or Adobe XD",
            ],
            Self::Desktop => &[
                "Framework: Electron, .NET, or Qt",
                "Design Tools: Figma, Sketch, or Adobe XD",
                "Consider platform-specific guidelines",
            ],
            Self::CommandLine => &[
                "Language: Python (Click), Node.js (Commander), or Go (Cobra)",
                "Focus on clear documentation and help text",
                "Consider auto-completion features",
            ],
            Self::Smartwatch => &[
                "Platform: WatchOS (Swift), Wear OS (Kotlin/Java)",
                "Focus on quick interactions and notifications",
                "Test on actual devices for accuracy",
            ],
            Self::Other => GENERIC_SUGGESTIONS,
        }
    }

    pub fn wireframe(self) -> &'static str {
        match self {
            Self::Web => include_str!("../../../templates/wireframes/web.txt"),
            Self::Mobile => include_str!("../../../templates/wireframes/mobile.txt"),
            Self::Desktop => include_str!("../../../templates/wireframes/desktop.txt"),
            Self::CommandLine | Self::Smartwatch | Self::Other => GENERIC_WIREFRAME,
        }
    }
}

impl VisualStyle {
    /// Hex palette for the style. Styles without a curated palette share
    /// the minimal one.
    pub fn palette(self) -> &'static [&'static str] {
        const MINIMAL: &[&str] = &["#FFFFFF", "#F8F9FA", "#E9ECEF", "#6C757D", "#212529"];
        match self {
            Self::Minimal => MINIMAL,
            Self::Vibrant => &["#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7"],
            Self::Corporate => &["#2C3E50", "#34495E", "#3498DB", "#E74C3C", "#F39C12"],
            Self::Dark => &["#1A1A1A", "#2D2D2D", "#404040", "#0066CC", "#00CC66"],
            Self::Nature => &["#2ECC71", "#27AE60", "#F1C40F", "#E67E22", "#8B4513"],
            Self::Playful | Self::Futuristic | Self::Classic => MINIMAL,
        }
    }
}

/// Recommendation lines for a designer category tag.
pub fn design_recommendations(tag: &str) -> &'static [&'static str] {
    InterfaceType::from_tag(tag).recommendations()
}

pub fn implementation_suggestions(tag: &str) -> &'static [&'static str] {
    InterfaceType::from_tag(tag).implementation_suggestions()
}

/// ASCII wireframe for a designer category tag.
pub fn wireframe(tag: &str) -> &'static str {
    InterfaceType::from_tag(tag).wireframe()
}

/// Palette for a visual style tag, falling back to Minimal & Clean.
pub fn color_palette(style: &str) -> &'static [&'static str] {
    style
        .parse::<VisualStyle>()
        .unwrap_or(VisualStyle::Minimal)
        .palette()
}
