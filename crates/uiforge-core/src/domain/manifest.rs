//! Generated `package.json` model.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::choices::{CssFramework, Ecosystem, StateManager};
use crate::domain::error::DomainError;

/// State package for an ecosystem and manager choice.
///
/// Vue projects always get Pinia. React takes the chosen library, and the
/// Vue-only choice adds nothing there.
pub const fn state_package(
    ecosystem: Ecosystem,
    manager: StateManager,
) -> Option<(&'static str, &'static str)> {
    match (ecosystem, manager) {
        (Ecosystem::Vue, _) => Some(("pinia", "^2.1.0")),
        (Ecosystem::React, StateManager::Redux) => Some(("@reduxjs/toolkit", "^1.9.0")),
        (Ecosystem::React, StateManager::Zustand) => Some(("zustand", "^4.3.0")),
        (Ecosystem::React, StateManager::Recoil) => Some(("recoil", "^0.7.0")),
        (Ecosystem::React, StateManager::Vuex) | (Ecosystem::Svelte | Ecosystem::Vanilla, _) => None,
    }
}

/// Routing package for ecosystems that take one as a dependency.
pub const fn router_package(ecosystem: Ecosystem) -> Option<(&'static str, &'static str)> {
    match ecosystem {
        Ecosystem::React => Some(("react-router-dom", "^6.11.0")),
        Ecosystem::Vue => Some(("vue-router", "^4.2.0")),
        Ecosystem::Svelte | Ecosystem::Vanilla => None,
    }
}

const TAILWIND: (&str, &str) = ("tailwindcss", "^3.3.0");
const AUTOPREFIXER: (&str, &str) = ("autoprefixer", "^10.4.14");
const POSTCSS: (&str, &str) = ("postcss", "^8.4.24");
const BOOTSTRAP: (&str, &str) = ("bootstrap", "^5.3.0");
const EMOTION_REACT: (&str, &str) = ("@emotion/react", "^11.11.0");
const EMOTION_STYLED: (&str, &str) = ("@emotion/styled", "^11.11.0");

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    pub name: String,
    pub version: &'static str,
    pub private: bool,
    pub scripts: Map<String, Value>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub dependencies: Map<String, Value>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub dev_dependencies: Map<String, Value>,
}

impl PackageManifest {
    fn new(name: &str, version: &'static str, scripts: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_string(),
            version,
            private: true,
            scripts: to_map(scripts),
            dependencies: Map::new(),
            dev_dependencies: Map::new(),
        }
    }

    /// Base manifest for an ecosystem, or `None` when it ships without one.
    pub fn base(ecosystem: Ecosystem, name: &str) -> Option<Self> {
        let manifest = match ecosystem {
            Ecosystem::React => Self::new(
                name,
                "0.1.0",
                &[
                    ("start", "react-scripts start"),
                    ("build", "react-scripts build"),
                    ("test", "react-scripts test"),
                    ("eject", "react-scripts eject"),
                ],
            )
            .with_dependency(("react", "^18.2.0"))
            .with_dependency(("react-dom", "^18.2.0"))
            .with_dependency(("react-scripts", "5.0.1")),
            Ecosystem::Vue => Self::new(
                name,
                "0.0.0",
                &[("dev", "vite"), ("build", "vite build"), ("preview", "vite preview")],
            )
            .with_dependency(("vue", "^3.3.0"))
            .with_dev_dependency(("@vitejs/plugin-vue", "^4.2.0"))
            .with_dev_dependency(("vite", "^4.3.0")),
            Ecosystem::Svelte => Self::new(
                name,
                "0.0.1",
                &[("build", "vite build"), ("dev", "vite dev"), ("preview", "vite preview")],
            )
            .with_dev_dependency(("@sveltejs/adapter-auto", "^2.0.0"))
            .with_dev_dependency(("@sveltejs/kit", "^1.20.4"))
            .with_dev_dependency(("svelte", "^4.0.5"))
            .with_dev_dependency(("vite", "^4.4.2")),
            Ecosystem::Vanilla => return None,
        };
        Some(manifest)
    }

    /// Apply the styling add-on. Each ecosystem honours only the frameworks
    /// it has bindings for.
    pub fn with_css_framework(self, ecosystem: Ecosystem, css: CssFramework) -> Self {
        match (ecosystem, css) {
            (Ecosystem::React, CssFramework::Tailwind) => self
                .with_dependency(TAILWIND)
                .with_dev_dependency(AUTOPREFIXER)
                .with_dev_dependency(POSTCSS),
            (Ecosystem::React | Ecosystem::Vue, CssFramework::Bootstrap) => self.with_dependency(BOOTSTRAP),
            (Ecosystem::React, CssFramework::Mui) => self
                .with_dependency(("@mui/material", "^5.13.0"))
                .with_dependency(EMOTION_REACT)
                .with_dependency(EMOTION_STYLED),
            (Ecosystem::React, CssFramework::Chakra) => self
                .with_dependency(("@chakra-ui/react", "^2.7.0"))
                .with_dependency(EMOTION_REACT)
                .with_dependency(EMOTION_STYLED)
                .with_dependency(("framer-motion", "^10.12.0")),
            (Ecosystem::Vue, CssFramework::Tailwind) => self
                .with_dev_dependency(TAILWIND)
                .with_dev_dependency(AUTOPREFIXER)
                .with_dev_dependency(POSTCSS),
            (Ecosystem::Svelte, CssFramework::Tailwind) => self
                .with_dependency(TAILWIND)
                .with_dependency(AUTOPREFIXER)
                .with_dependency(POSTCSS),
            _ => self,
        }
    }

    pub fn with_dependency(mut self, (name, version): (&str, &str)) -> Self {
        self.dependencies.insert(name.to_string(), Value::from(version));
        self
    }

    pub fn with_dev_dependency(mut self, (name, version): (&str, &str)) -> Self {
        self.dev_dependencies.insert(name.to_string(), Value::from(version));
        self
    }

    /// Whether `name` appears in either dependency table.
    pub fn declares(&self, name: &str) -> bool {
        self.dependencies.contains_key(name) || self.dev_dependencies.contains_key(name)
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String, DomainError> {
        serde_json::to_string_pretty(self).map_err(|e| DomainError::Serialization {
            artifact: "package.json".into(),
            reason: e.to_string(),
        })
    }
}

fn to_map(pairs: &[(&str, &str)]) -> Map<String, Value> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), Value::from(*v)))
        .collect()
}
