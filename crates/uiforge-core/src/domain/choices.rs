//! Closed sets of choices offered by the wizards.
//!
//! Builder choices are exhaustively matched by the resolver: an unknown tag
//! is an error. Designer categories ([`InterfaceType`], [`VisualStyle`],
//! [`ColorScheme`]) are looked up from free strings and keep a generic
//! fallback.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;
use crate::domain::question::Choice;

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident: $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => ($value:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Tag stored in the answer record.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value),+
                }
            }

            /// Human-readable label.
            pub const fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            /// Every variant as a menu choice, in declaration order.
            pub fn choices() -> Vec<Choice> {
                Self::ALL
                    .iter()
                    .map(|v| Choice::new(v.as_str(), v.label()))
                    .collect()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok(Self::$variant),)+
                    other => Err(DomainError::UnknownChoice {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

// ============================================================================
// UI builder
// ============================================================================

choice_enum! {
    /// The kind of interface the scaffolded project starts with.
    #[derive(Default)]
    UiType: "UI type" {
        #[default]
        Landing => ("landing", "Landing Page"),
        Dashboard => ("dashboard", "Dashboard"),
        Portfolio => ("portfolio", "Portfolio Website"),
        Ecommerce => ("ecommerce", "E-commerce App"),
        Blog => ("blog", "Blog Interface"),
        Custom => ("custom", "Custom Application"),
    }
}

choice_enum! {
    #[derive(Default)]
    ColorTheme: "color theme" {
        #[default]
        Light => ("light", "Light Theme"),
        Dark => ("dark", "Dark Theme"),
        Pastel => ("pastel", "Pastel Colors"),
        Neon => ("neon", "Neon/Vibrant"),
        Custom => ("custom", "Custom Colors"),
    }
}

choice_enum! {
    #[derive(Default)]
    DesignStyle: "design style" {
        #[default]
        Minimal => ("minimal", "Minimalistic"),
        Modern => ("modern", "Modern"),
        Material => ("material", "Material Design"),
        Glass => ("glass", "Glassmorphism"),
        Brutalist => ("brutalist", "Brutalist"),
    }
}

choice_enum! {
    /// Target frontend ecosystem.
    #[derive(Default)]
    Ecosystem: "ecosystem" {
        #[default]
        React => ("react", "React.js"),
        Vue => ("vue", "Vue.js"),
        Svelte => ("svelte", "Svelte"),
        Vanilla => ("vanilla", "Plain HTML/CSS/JS"),
    }
}

choice_enum! {
    #[derive(Default)]
    CssFramework: "CSS framework" {
        Tailwind => ("tailwind", "Tailwind CSS"),
        Bootstrap => ("bootstrap", "Bootstrap"),
        Mui => ("mui", "Material UI"),
        Chakra => ("chakra", "Chakra UI"),
        #[default]
        Plain => ("plain", "Plain CSS"),
    }
}

choice_enum! {
    #[derive(Default)]
    StateManager: "state manager" {
        Redux => ("redux", "Redux Toolkit"),
        #[default]
        Zustand => ("zustand", "Zustand"),
        Recoil => ("recoil", "Recoil"),
        Vuex => ("vuex", "Vuex/Pinia"),
    }
}

impl Ecosystem {
    /// Whether projects for this ecosystem ship a `package.json`.
    pub const fn uses_package_manager(&self) -> bool {
        !matches!(self, Self::Vanilla)
    }

    /// Whether the ecosystem has a routing package to offer.
    pub const fn supports_routing(&self) -> bool {
        !matches!(self, Self::Vanilla)
    }

    /// Whether the wizard offers state management for this ecosystem.
    pub const fn supports_state_management(&self) -> bool {
        matches!(self, Self::React | Self::Vue)
    }

    /// Command that starts the development server.
    pub const fn start_command(&self) -> &'static str {
        match self {
            Self::React => "npm start",
            Self::Vue | Self::Svelte => "npm run dev",
            Self::Vanilla => "Open index.html in your browser",
        }
    }

    pub const fn dev_port(&self) -> &'static str {
        match self {
            Self::React => "3000",
            Self::Vue | Self::Svelte => "5173",
            Self::Vanilla => "N/A",
        }
    }

    /// The file the browser or bundler loads first.
    pub const fn entry_point(&self) -> &'static str {
        match self {
            Self::React => "src/index.js",
            Self::Vue | Self::Svelte => "src/main.js",
            Self::Vanilla => "index.html",
        }
    }
}

// ============================================================================
// UI designer
// ============================================================================

choice_enum! {
    /// Designer category. Unknown tags map to [`InterfaceType::Other`].
    InterfaceType: "interface type" {
        Web => ("Web Application", "Web Application"),
        Mobile => ("Mobile Application", "Mobile Application"),
        Desktop => ("Desktop Software", "Desktop Software"),
        CommandLine => ("Command Line Tool", "Command Line Tool"),
        Smartwatch => ("Smartwatch App", "Smartwatch App"),
        Other => ("Other", "Other"),
    }
}

choice_enum! {
    VisualStyle: "visual style" {
        Minimal => ("Minimal & Clean", "Minimal & Clean"),
        Vibrant => ("Modern & Vibrant", "Modern & Vibrant"),
        Playful => ("Playful & Fun", "Playful & Fun"),
        Corporate => ("Professional & Corporate", "Professional & Corporate"),
        Dark => ("Dark & Sleek", "Dark & Sleek"),
        Nature => ("Nature & Organic", "Nature & Organic"),
        Futuristic => ("Futuristic & Tech", "Futuristic & Tech"),
        Classic => ("Classic & Traditional", "Classic & Traditional"),
    }
}

choice_enum! {
    /// Website workflow color schemes.
    ColorScheme: "color scheme" {
        CorporateBlue => ("Corporate Blue & White", "Corporate Blue & White"),
        NatureGreen => ("Nature Green & Earth Tones", "Nature Green & Earth Tones"),
        BoldRed => ("Bold Red & Black", "Bold Red & Black"),
        ModernPurple => ("Modern Purple & Gray", "Modern Purple & Gray"),
        WarmOrange => ("Warm Orange & Yellow", "Warm Orange & Yellow"),
        Monochrome => ("Monochrome Black & White", "Monochrome Black & White"),
        Custom => ("Custom Color Palette", "Custom Color Palette"),
    }
}

impl InterfaceType {
    /// Parse a free tag, mapping anything unrecognised to `Other`.
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or(Self::Other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_from_str() {
        for ecosystem in Ecosystem::ALL {
            assert_eq!(ecosystem.as_str().parse::<Ecosystem>().unwrap(), *ecosystem);
        }
        for manager in StateManager::ALL {
            assert_eq!(manager.as_str().parse::<StateManager>().unwrap(), *manager);
        }
    }

    #[test]
    fn unknown_tag_is_rejected_for_closed_sets() {
        let err = "angular".parse::<Ecosystem>().unwrap_err();
        assert_eq!(
            err,
            DomainError::UnknownChoice {
                kind: "ecosystem",
                value: "angular".into()
            }
        );
    }

    #[test]
    fn choices_follow_declaration_order() {
        let choices = CssFramework::choices();
        assert_eq!(choices.len(), 5);
        assert_eq!(choices[0], Choice::new("tailwind", "Tailwind CSS"));
        assert_eq!(choices[4].value, "plain");
    }

    #[test]
    fn unknown_interface_type_falls_back_to_other() {
        assert_eq!(InterfaceType::from_tag("Mobile Application"), InterfaceType::Mobile);
        assert_eq!(InterfaceType::from_tag("Fridge Display"), InterfaceType::Other);
    }

    #[test]
    fn vanilla_has_no_package_manager() {
        assert!(!Ecosystem::Vanilla.uses_package_manager());
        assert_eq!(Ecosystem::Vanilla.entry_point(), "index.html");
        assert!(Ecosystem::Svelte.uses_package_manager());
        assert!(!Ecosystem::Svelte.supports_state_management());
    }
}
