//! Static template bodies compiled into the binary.
//!
//! Bodies live under `templates/` at the crate root and use `{{NAME}}`
//! placeholders filled by [`RenderContext`](crate::domain::RenderContext).

use crate::domain::choices::{ColorTheme, Ecosystem, UiType};

pub(crate) const BASE_CSS: &str = include_str!("../../templates/shared/base.css");
pub(crate) const COMPONENTS_CSS: &str = include_str!("../../templates/shared/components.css");
pub(crate) const README: &str = include_str!("../../templates/shared/readme.md");
pub(crate) const GITIGNORE: &str = include_str!("../../templates/shared/gitignore");

pub(crate) mod react {
    pub(crate) const APP: &str = include_str!("../../templates/react/App.js");
    pub(crate) const INDEX: &str = include_str!("../../templates/react/index.js");
    pub(crate) const HEADER: &str = include_str!("../../templates/react/Header.js");
    pub(crate) const INDEX_CSS: &str = include_str!("../../templates/react/index.css");
    pub(crate) const INDEX_HTML: &str = include_str!("../../templates/react/index.html");
}

pub(crate) mod vue {
    pub(crate) const APP: &str = include_str!("../../templates/vue/App.vue");
    pub(crate) const MAIN: &str = include_str!("../../templates/vue/main.js");
    pub(crate) const HEADER: &str = include_str!("../../templates/vue/Header.vue");
    pub(crate) const INDEX_HTML: &str = include_str!("../../templates/vue/index.html");
    pub(crate) const VITE_CONFIG: &str = include_str!("../../templates/vue/vite.config.js");
}

pub(crate) mod svelte {
    pub(crate) const APP: &str = include_str!("../../templates/svelte/App.svelte");
    pub(crate) const MAIN: &str = include_str!("../../templates/svelte/main.js");
    pub(crate) const HEADER: &str = include_str!("../../templates/svelte/Header.svelte");
    pub(crate) const APP_HTML: &str = include_str!("../../templates/svelte/app.html");
    pub(crate) const VITE_CONFIG: &str = include_str!("../../templates/svelte/vite.config.js");
    pub(crate) const ROUTE_PAGE: &str = include_str!("../../templates/svelte/page.svelte");
}

pub(crate) mod vanilla {
    pub(crate) const INDEX_HTML: &str = include_str!("../../templates/vanilla/index.html");
    pub(crate) const MAIN_JS: &str = include_str!("../../templates/vanilla/main.js");
    pub(crate) const ABOUT_HTML: &str = include_str!("../../templates/vanilla/about.html");
}

/// Directory tree shown in the generated README.
pub(crate) fn project_structure(ecosystem: Ecosystem) -> &'static str {
    match ecosystem {
        Ecosystem::React => include_str!("../../templates/structure/react.txt"),
        Ecosystem::Vue => include_str!("../../templates/structure/vue.txt"),
        Ecosystem::Svelte => include_str!("../../templates/structure/svelte.txt"),
        Ecosystem::Vanilla => include_str!("../../templates/structure/vanilla.txt"),
    }
}

/// Markup dialect of the page body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Markup {
    /// JSX, using `className`.
    Jsx,
    /// Plain HTML attributes, shared by Vue, Svelte and vanilla.
    Html,
}

impl Markup {
    pub(crate) fn for_ecosystem(ecosystem: Ecosystem) -> Self {
        match ecosystem {
            Ecosystem::React => Self::Jsx,
            Ecosystem::Vue | Ecosystem::Svelte | Ecosystem::Vanilla => Self::Html,
        }
    }

    pub(crate) fn class_attribute(self) -> &'static str {
        match self {
            Self::Jsx => "className",
            Self::Html => "class",
        }
    }
}

/// Page body for the chosen UI type. Placeholder layouts still carry a
/// `{{CLASS_ATTR}}` slot.
pub(crate) fn page_content(ui_type: UiType, markup: Markup) -> &'static str {
    match (ui_type, markup) {
        (UiType::Landing, Markup::Jsx) => include_str!("../../templates/content/landing.jsx"),
        (UiType::Landing, Markup::Html) => include_str!("../../templates/content/landing.html"),
        (UiType::Dashboard, Markup::Jsx) => include_str!("../../templates/content/dashboard.jsx"),
        (UiType::Dashboard, Markup::Html) => include_str!("../../templates/content/dashboard.html"),
        (UiType::Portfolio, Markup::Jsx) => include_str!("../../templates/content/portfolio.jsx"),
        (UiType::Portfolio, Markup::Html) => include_str!("../../templates/content/portfolio.html"),
        (UiType::Ecommerce, _) => include_str!("../../templates/content/ecommerce.html"),
        (UiType::Blog, _) => include_str!("../../templates/content/blog.html"),
        (UiType::Custom, _) => include_str!("../../templates/content/custom.html"),
    }
}

/// CSS custom properties for a color theme.
pub(crate) fn theme_variables(theme: ColorTheme) -> [(&'static str, &'static str); 5] {
    match theme {
        ColorTheme::Light => [
            ("--primary-color", "#3b82f6"),
            ("--secondary-color", "#64748b"),
            ("--background-color", "#ffffff"),
            ("--text-color", "#1f2937"),
            ("--border-color", "#e5e7eb"),
        ],
        ColorTheme::Dark => [
            ("--primary-color", "#60a5fa"),
            ("--secondary-color", "#94a3b8"),
            ("--background-color", "#111827"),
            ("--text-color", "#f9fafb"),
            ("--border-color", "#374151"),
        ],
        ColorTheme::Pastel => [
            ("--primary-color", "#fbbf24"),
            ("--secondary-color", "#f472b6"),
            ("--background-color", "#fef3c7"),
            ("--text-color", "#374151"),
            ("--border-color", "#fde68a"),
        ],
        ColorTheme::Neon => [
            ("--primary-color", "#10b981"),
            ("--secondary-color", "#8b5cf6"),
            ("--background-color", "#000000"),
            ("--text-color", "#00ff88"),
            ("--border-color", "#00ff88"),
        ],
        ColorTheme::Custom => [
            ("--primary-color", "#4f46e5"),
            ("--secondary-color", "#7c3aed"),
            ("--background-color", "#ffffff"),
            ("--text-color", "#1f2937"),
            ("--border-color", "#d1d5db"),
        ],
    }
}
