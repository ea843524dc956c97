//! Selection resolver: answer record → content bundle.
//!
//! Each artifact generator reads only the [`BuildSelection`] and returns its
//! own files. The bundle is the merge of every generator's output, so no
//! generator depends on another's result or on the order they run in.

use crate::domain::answers::AnswerRecord;
use crate::domain::bundle::ContentBundle;
use crate::domain::choices::{CssFramework, Ecosystem, UiType};
use crate::domain::error::DomainError;
use crate::domain::manifest::{self, PackageManifest};
use crate::domain::render::RenderContext;
use crate::domain::selection::BuildSelection;
use crate::domain::templates::{self, Markup, react, svelte, vanilla, vue};

/// A single generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Artifact {
    path: &'static str,
    content: String,
}

impl Artifact {
    fn new(path: &'static str, content: impl Into<String>) -> Self {
        Self {
            path,
            content: content.into(),
        }
    }
}

type Generator = fn(&BuildSelection) -> Result<Vec<Artifact>, DomainError>;

const GENERATORS: &[Generator] = &[
    package_manifest,
    entry_points,
    pages,
    stylesheets,
    components,
    build_config,
    docs,
];

/// Resolve an answer record into the files of a new project.
pub fn resolve(record: &AnswerRecord) -> Result<ContentBundle, DomainError> {
    let selection = BuildSelection::try_from(record)?;
    resolve_selection(&selection)
}

pub fn resolve_selection(selection: &BuildSelection) -> Result<ContentBundle, DomainError> {
    let mut bundle = ContentBundle::new();
    for dir in directories(selection.ecosystem) {
        bundle.add_directory(*dir)?;
    }
    for generate in GENERATORS {
        for artifact in generate(selection)? {
            bundle.add_file(artifact.path, artifact.content)?;
        }
    }
    bundle.validate()?;
    Ok(bundle)
}

fn directories(ecosystem: Ecosystem) -> &'static [&'static str] {
    match ecosystem {
        Ecosystem::React => &["src", "src/components", "src/pages", "src/styles", "src/assets", "public"],
        Ecosystem::Vue => &["src", "src/components", "src/views", "src/assets", "src/styles", "public"],
        Ecosystem::Svelte => &["src", "src/components", "src/routes", "src/lib", "static"],
        Ecosystem::Vanilla => &["css", "js", "images", "assets"],
    }
}

fn context(selection: &BuildSelection) -> RenderContext {
    RenderContext::new(&selection.project_name)
}

// ============================================================================
// Generators
// ============================================================================

fn package_manifest(selection: &BuildSelection) -> Result<Vec<Artifact>, DomainError> {
    let Some(mut manifest) = PackageManifest::base(selection.ecosystem, &selection.project_name) else {
        return Ok(Vec::new());
    };
    manifest = manifest.with_css_framework(selection.ecosystem, selection.css_framework);
    if selection.include_router {
        if let Some(package) = manifest::router_package(selection.ecosystem) {
            manifest = manifest.with_dependency(package);
        }
    }
    if let Some(package) = selection
        .state_manager
        .and_then(|state| manifest::state_package(selection.ecosystem, state))
    {
        manifest = manifest.with_dependency(package);
    }
    Ok(vec![Artifact::new("package.json", manifest.to_json()?)])
}

fn entry_points(selection: &BuildSelection) -> Result<Vec<Artifact>, DomainError> {
    let ctx = context(selection);
    let artifacts = match selection.ecosystem {
        Ecosystem::React => vec![Artifact::new("src/index.js", react::INDEX)],
        Ecosystem::Vue => vec![Artifact::new("src/main.js", vue::MAIN)],
        Ecosystem::Svelte => vec![
            Artifact::new("src/main.js", svelte::MAIN),
            Artifact::new("src/app.html", ctx.render(svelte::APP_HTML)),
        ],
        Ecosystem::Vanilla => vec![
            Artifact::new(
                "index.html",
                ctx.clone()
                    .with_variable("CONTENT", page_body(selection))
                    .render(vanilla::INDEX_HTML),
            ),
            Artifact::new("js/main.js", ctx.render(vanilla::MAIN_JS)),
        ],
    };
    Ok(artifacts)
}

fn pages(selection: &BuildSelection) -> Result<Vec<Artifact>, DomainError> {
    let ctx = context(selection)
        .with_variable("CONTENT", page_body(selection))
        .with_variable("STYLES", main_stylesheet(selection).trim_end().to_string());

    let mut artifacts = match selection.ecosystem {
        Ecosystem::React => vec![
            Artifact::new(
                "src/App.js",
                ctx.clone()
                    .with_variable("IMPORTS", react_imports(selection))
                    .render(react::APP),
            ),
            Artifact::new("public/index.html", ctx.render(react::INDEX_HTML)),
        ],
        Ecosystem::Vue => vec![
            Artifact::new("src/App.vue", ctx.render(vue::APP)),
            Artifact::new("public/index.html", ctx.render(vue::INDEX_HTML)),
        ],
        Ecosystem::Svelte => vec![Artifact::new("src/App.svelte", ctx.render(svelte::APP))],
        Ecosystem::Vanilla => Vec::new(),
    };

    match selection.ecosystem {
        // SvelteKit routes from the filesystem, so routing means a page file.
        Ecosystem::Svelte if selection.include_router => {
            artifacts.push(Artifact::new("src/routes/+page.svelte", svelte::ROUTE_PAGE));
        }
        Ecosystem::Vanilla if selection.ui_type == UiType::Landing => {
            artifacts.push(Artifact::new("about.html", ctx.render(vanilla::ABOUT_HTML)));
        }
        _ => {}
    }
    Ok(artifacts)
}

fn stylesheets(selection: &BuildSelection) -> Result<Vec<Artifact>, DomainError> {
    let styles = main_stylesheet(selection);
    let artifacts = match selection.ecosystem {
        Ecosystem::React => vec![
            Artifact::new("src/App.css", styles),
            Artifact::new("src/index.css", react::INDEX_CSS),
        ],
        Ecosystem::Vue => vec![Artifact::new("src/style.css", styles)],
        Ecosystem::Svelte => vec![Artifact::new("src/app.css", styles)],
        Ecosystem::Vanilla => vec![Artifact::new("css/main.css", styles)],
    };
    Ok(artifacts)
}

fn components(selection: &BuildSelection) -> Result<Vec<Artifact>, DomainError> {
    let artifacts = match selection.ecosystem {
        Ecosystem::React => vec![Artifact::new("src/components/Header.js", react::HEADER)],
        Ecosystem::Vue => vec![Artifact::new("src/components/Header.vue", vue::HEADER)],
        Ecosystem::Svelte => vec![Artifact::new("src/components/Header.svelte", svelte::HEADER)],
        Ecosystem::Vanilla => Vec::new(),
    };
    Ok(artifacts)
}

fn build_config(selection: &BuildSelection) -> Result<Vec<Artifact>, DomainError> {
    let artifacts = match selection.ecosystem {
        Ecosystem::Vue => vec![Artifact::new("vite.config.js", vue::VITE_CONFIG)],
        Ecosystem::Svelte => vec![Artifact::new("vite.config.js", svelte::VITE_CONFIG)],
        Ecosystem::React | Ecosystem::Vanilla => Vec::new(),
    };
    Ok(artifacts)
}

fn docs(selection: &BuildSelection) -> Result<Vec<Artifact>, DomainError> {
    let ctx = context(selection);
    let structure = ctx.render(templates::project_structure(selection.ecosystem));
    let readme = ctx
        .with_variable("UI_TYPE", selection.ui_type.label())
        .with_variable("FRAMEWORK", selection.ecosystem.label())
        .with_variable("CSS_FRAMEWORK", selection.css_framework.label())
        .with_variable("COLOR_THEME", selection.color_theme.label())
        .with_variable("DESIGN_STYLE", selection.design_style.label())
        .with_variable("START_COMMAND", selection.ecosystem.start_command())
        .with_variable("DEV_PORT", selection.ecosystem.dev_port())
        .with_variable("PROJECT_STRUCTURE", structure.trim_end().to_string())
        .render(templates::README);

    Ok(vec![
        Artifact::new("README.md", readme),
        Artifact::new(".gitignore", templates::GITIGNORE),
    ])
}

// ============================================================================
// Shared fragments
// ============================================================================

/// Theme variables, base styles and component styles.
fn main_stylesheet(selection: &BuildSelection) -> String {
    let variables: String = templates::theme_variables(selection.color_theme)
        .iter()
        .map(|(name, value)| format!("  {name}: {value};\n"))
        .collect();
    format!(
        ":root {{\n{variables}}}\n\n{}\n{}",
        templates::BASE_CSS,
        templates::COMPONENTS_CSS
    )
}

fn page_body(selection: &BuildSelection) -> String {
    let markup = Markup::for_ecosystem(selection.ecosystem);
    RenderContext::default()
        .with_variable("CLASS_ATTR", markup.class_attribute())
        .render(templates::page_content(selection.ui_type, markup))
        .trim_end()
        .to_string()
}

fn react_imports(selection: &BuildSelection) -> String {
    let mut imports = vec!["import React from 'react';", "import './App.css';"];
    if selection.include_router {
        imports.push("import { BrowserRouter as Router, Routes, Route } from 'react-router-dom';");
    }
    match selection.css_framework {
        CssFramework::Mui => {
            imports.push("import { ThemeProvider, createTheme, CssBaseline } from '@mui/material';");
        }
        CssFramework::Chakra => imports.push("import { ChakraProvider } from '@chakra-ui/react';"),
        CssFramework::Tailwind | CssFramework::Bootstrap | CssFramework::Plain => {}
    }
    imports.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::answers::AnswerValue;
    use crate::domain::choices::{ColorTheme, DesignStyle, StateManager};
    use crate::domain::wizards::builder::keys;

    fn record(pairs: &[(&str, AnswerValue)]) -> AnswerRecord {
        let mut record = AnswerRecord::new();
        for (key, value) in pairs {
            record.insert(*key, value.clone()).unwrap();
        }
        record
    }

    fn selection(ecosystem: Ecosystem) -> BuildSelection {
        BuildSelection {
            project_name: "demo".into(),
            ui_type: UiType::Landing,
            color_theme: ColorTheme::Light,
            design_style: DesignStyle::Minimal,
            ecosystem,
            css_framework: CssFramework::Plain,
            include_router: false,
            state_manager: None,
        }
    }

    fn manifest_of(bundle: &ContentBundle) -> serde_json::Value {
        serde_json::from_str(bundle.file("package.json").unwrap()).unwrap()
    }

    const STATE_PACKAGES: [&str; 4] = ["@reduxjs/toolkit", "zustand", "recoil", "pinia"];

    #[test]
    fn vanilla_bundle_has_markup_without_manifest() {
        let bundle = resolve(&record(&[
            (keys::ECOSYSTEM, AnswerValue::choice("vanilla")),
            (keys::COLOR_THEME, AnswerValue::choice("dark")),
            (keys::PROJECT_NAME, AnswerValue::text("demo")),
        ]))
        .unwrap();

        assert!(bundle.contains("index.html"));
        assert!(bundle.contains("css/main.css"));
        assert!(bundle.contains("js/main.js"));
        assert!(!bundle.contains("package.json"));
        assert!(bundle.file("css/main.css").unwrap().contains("#111827"));
        assert!(bundle.file("index.html").unwrap().contains("<title>demo</title>"));
    }

    #[test]
    fn every_combination_yields_a_complete_bundle() {
        for ecosystem in Ecosystem::ALL {
            for ui_type in UiType::ALL {
                for theme in ColorTheme::ALL {
                    for css in CssFramework::ALL {
                        let selection = BuildSelection {
                            ui_type: *ui_type,
                            color_theme: *theme,
                            css_framework: *css,
                            ..selection(*ecosystem)
                        };
                        let bundle = resolve_selection(&selection).unwrap();

                        assert!(bundle.contains(ecosystem.entry_point()));
                        assert!(bundle.contains("README.md"));
                        assert!(bundle.contains(".gitignore"));
                        if ecosystem.uses_package_manager() {
                            assert!(!bundle.file("package.json").unwrap().is_empty());
                        }
                        for file in bundle.files() {
                            assert!(
                                !file.content.contains("{{"),
                                "unrendered placeholder in {}",
                                file.path.display()
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn resolving_twice_is_identical() {
        let record = record(&[
            (keys::UI_TYPE, AnswerValue::choice("dashboard")),
            (keys::ECOSYSTEM, AnswerValue::choice("react")),
            (keys::CSS_FRAMEWORK, AnswerValue::choice("chakra")),
            (keys::INCLUDE_ROUTER, AnswerValue::Flag(true)),
        ]);
        assert_eq!(resolve(&record).unwrap(), resolve(&record).unwrap());
    }

    #[test]
    fn redux_adds_only_the_toolkit_package() {
        let bundle = resolve(&record(&[
            (keys::ECOSYSTEM, AnswerValue::choice("react")),
            (keys::INCLUDE_STATE_MANAGEMENT, AnswerValue::Flag(true)),
            (keys::STATE_MANAGER, AnswerValue::choice("redux")),
        ]))
        .unwrap();

        let manifest = manifest_of(&bundle);
        let deps = manifest["dependencies"].as_object().unwrap();
        let declared: Vec<_> = STATE_PACKAGES
            .iter()
            .filter(|p| deps.contains_key(**p))
            .collect();
        assert_eq!(declared, vec![&"@reduxjs/toolkit"]);
        assert!(!deps.contains_key("react-redux"));
    }

    #[test]
    fn routing_dependency_follows_the_flag() {
        for ecosystem in [Ecosystem::React, Ecosystem::Vue] {
            let package = manifest::router_package(ecosystem).unwrap().0;
            for include_router in [true, false] {
                let bundle = resolve_selection(&BuildSelection {
                    include_router,
                    ..selection(ecosystem)
                })
                .unwrap();
                let manifest = manifest_of(&bundle);
                assert_eq!(
                    manifest["dependencies"].get(package).is_some(),
                    include_router,
                    "{ecosystem} router={include_router}"
                );
            }
        }
    }

    #[test]
    fn state_dependency_requires_flag_and_sub_choice() {
        let cases = [
            (Some(true), Some("zustand"), true),
            (Some(true), None, false),
            (Some(false), Some("zustand"), false),
            (None, None, false),
        ];
        for (flag, manager, expected) in cases {
            let mut pairs = vec![(keys::ECOSYSTEM, AnswerValue::choice("react"))];
            if let Some(flag) = flag {
                pairs.push((keys::INCLUDE_STATE_MANAGEMENT, AnswerValue::Flag(flag)));
            }
            if let Some(manager) = manager {
                pairs.push((keys::STATE_MANAGER, AnswerValue::choice(manager)));
            }
            let manifest = manifest_of(&resolve(&record(&pairs)).unwrap());
            let declared = STATE_PACKAGES
                .iter()
                .any(|p| manifest["dependencies"].get(*p).is_some());
            assert_eq!(declared, expected, "flag={flag:?} manager={manager:?}");
        }
    }

    #[test]
    fn vuex_maps_to_pinia() {
        let bundle = resolve_selection(&BuildSelection {
            state_manager: Some(StateManager::Vuex),
            ..selection(Ecosystem::Vue)
        })
        .unwrap();
        assert_eq!(manifest_of(&bundle)["dependencies"]["pinia"], "^2.1.0");
    }

    #[test]
    fn state_package_follows_the_ecosystem() {
        let expected = |ecosystem: Ecosystem, manager: StateManager| match (ecosystem, manager) {
            (Ecosystem::Vue, _) => Some("pinia"),
            (Ecosystem::React, StateManager::Redux) => Some("@reduxjs/toolkit"),
            (Ecosystem::React, StateManager::Zustand) => Some("zustand"),
            (Ecosystem::React, StateManager::Recoil) => Some("recoil"),
            _ => None,
        };

        for ecosystem in [Ecosystem::React, Ecosystem::Vue] {
            for manager in StateManager::ALL {
                let bundle = resolve(&record(&[
                    (keys::ECOSYSTEM, AnswerValue::choice(ecosystem.as_str())),
                    (keys::INCLUDE_STATE_MANAGEMENT, AnswerValue::Flag(true)),
                    (keys::STATE_MANAGER, AnswerValue::choice(manager.as_str())),
                ]))
                .unwrap();
                let manifest = manifest_of(&bundle);
                let declared: Vec<&str> = STATE_PACKAGES
                    .iter()
                    .copied()
                    .filter(|p| manifest["dependencies"].get(*p).is_some())
                    .collect();
                assert_eq!(
                    declared,
                    expected(ecosystem, *manager).into_iter().collect::<Vec<_>>(),
                    "{ecosystem} + {manager}"
                );
            }
        }
    }

    #[test]
    fn react_markup_uses_class_name() {
        let bundle = resolve_selection(&BuildSelection {
            ui_type: UiType::Blog,
            ..selection(Ecosystem::React)
        })
        .unwrap();
        let app = bundle.file("src/App.js").unwrap();
        assert!(app.contains(r#"className="blog-layout""#));

        let bundle = resolve_selection(&BuildSelection {
            ui_type: UiType::Blog,
            ..selection(Ecosystem::Vue)
        })
        .unwrap();
        assert!(bundle.file("src/App.vue").unwrap().contains(r#"class="blog-layout""#));
    }

    #[test]
    fn stylesheets_carry_theme_colors() {
        let neon = |ecosystem| BuildSelection {
            color_theme: ColorTheme::Neon,
            ..selection(ecosystem)
        };
        let react = resolve_selection(&neon(Ecosystem::React)).unwrap();
        assert!(react.file("src/App.css").unwrap().contains("--text-color: #00ff88;"));

        let vue = resolve_selection(&neon(Ecosystem::Vue)).unwrap();
        assert!(vue.file("src/style.css").unwrap().contains("#00ff88"));
        assert!(vue.file("src/App.vue").unwrap().contains("#00ff88"));

        let svelte = resolve_selection(&neon(Ecosystem::Svelte)).unwrap();
        assert!(svelte.file("src/app.css").unwrap().contains("#00ff88"));
    }

    #[test]
    fn react_imports_follow_options() {
        let app = |selection: BuildSelection| {
            resolve_selection(&selection)
                .unwrap()
                .file("src/App.js")
                .unwrap()
                .to_string()
        };

        let plain = app(selection(Ecosystem::React));
        assert!(!plain.contains("react-router-dom"));

        let routed = app(BuildSelection {
            include_router: true,
            css_framework: CssFramework::Mui,
            ..selection(Ecosystem::React)
        });
        assert!(routed.contains("from 'react-router-dom'"));
        assert!(routed.contains("from '@mui/material'"));
    }

    #[test]
    fn landing_vanilla_adds_about_page() {
        let landing = resolve_selection(&selection(Ecosystem::Vanilla)).unwrap();
        assert!(landing.contains("about.html"));

        let blog = resolve_selection(&BuildSelection {
            ui_type: UiType::Blog,
            ..selection(Ecosystem::Vanilla)
        })
        .unwrap();
        assert!(!blog.contains("about.html"));
    }

    #[test]
    fn svelte_routing_adds_route_page() {
        let bundle = resolve_selection(&BuildSelection {
            include_router: true,
            ..selection(Ecosystem::Svelte)
        })
        .unwrap();
        assert!(bundle.contains("src/routes/+page.svelte"));
        assert!(bundle.contains("vite.config.js"));
    }

    #[test]
    fn readme_describes_the_selection() {
        let bundle = resolve_selection(&BuildSelection {
            css_framework: CssFramework::Tailwind,
            ..selection(Ecosystem::Vue)
        })
        .unwrap();
        let readme = bundle.file("README.md").unwrap();

        assert!(readme.starts_with("# demo\n"));
        assert!(readme.contains("built with Vue.js and Tailwind CSS"));
        assert!(readme.contains("http://localhost:5173"));
        assert!(readme.contains("demo/\n├── public/"));
    }
}
