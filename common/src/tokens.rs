use std::fmt;

use serde::{Deserialize, Serialize};

// design tokens
//
// the single source of truth for colors, type sizes, spacing and breakpoints.  every
// consumer reads the same instance; nothing mutates it after startup.  each table is
// #[serde(default)] so a config file only needs to name the values it overrides
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DesignTokens {
    pub palette: Palette,
    pub typography: Typography,
    pub spacing: Spacing,
    pub breakpoints: Breakpoints,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Palette {
    pub primary: String,
    pub primary_light: String,
    pub primary_dark: String,
    pub accent: String,
    pub background: String,
    pub surface: String,
    pub surface_raised: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub text_muted: String,
    pub border: String,
    pub chip_background: String,
    pub chip_text: String,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            primary: String::from("#06B6D4"),
            primary_light: String::from("#22D3EE"),
            primary_dark: String::from("#0891B2"),
            accent: String::from("#67E8F9"),
            background: String::from("#111827"),
            surface: String::from("#1F2937"),
            surface_raised: String::from("#374151"),
            text_primary: String::from("#F9FAFB"),
            text_secondary: String::from("#D1D5DB"),
            text_muted: String::from("#9CA3AF"),
            border: String::from("#4B5563"),
            chip_background: String::from("#06B6D4"),
            chip_text: String::from("#111827"),
        }
    }
}

impl Palette {
    // (css variable name, value) pairs, in a stable order
    pub fn roles(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("primary", self.primary.as_str()),
            ("primary-light", self.primary_light.as_str()),
            ("primary-dark", self.primary_dark.as_str()),
            ("accent", self.accent.as_str()),
            ("background", self.background.as_str()),
            ("surface", self.surface.as_str()),
            ("surface-raised", self.surface_raised.as_str()),
            ("text-primary", self.text_primary.as_str()),
            ("text-secondary", self.text_secondary.as_str()),
            ("text-muted", self.text_muted.as_str()),
            ("border", self.border.as_str()),
            ("chip-background", self.chip_background.as_str()),
            ("chip-text", self.chip_text.as_str()),
        ]
    }
}

// a value that differs between the mobile and desktop layouts
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Responsive<T> {
    pub mobile: T,
    pub desktop: T,
}

impl<T: Clone> Responsive<T> {
    pub fn new(mobile: T, desktop: T) -> Self {
        Responsive { mobile, desktop }
    }

    pub fn pick(&self, desktop: bool) -> T {
        if desktop {
            self.desktop.clone()
        } else {
            self.mobile.clone()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Typography {
    pub font_family: String,
    pub hero_title: Responsive<String>,
    pub hero_subtitle: Responsive<String>,
    pub section_title: String,
    pub body: String,
    pub small: String,
    pub chip: String,
}

impl Default for Typography {
    fn default() -> Self {
        Typography {
            font_family: String::from(
                r#"Inter, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif"#,
            ),
            hero_title: Responsive::new(String::from("3rem"), String::from("4.5rem")),
            hero_subtitle: Responsive::new(String::from("1.5rem"), String::from("1.875rem")),
            section_title: String::from("2.25rem"),
            body: String::from("1.125rem"),
            small: String::from("0.875rem"),
            chip: String::from("0.75rem"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Spacing {
    pub header_height: u32,
    pub section_padding: Responsive<String>,
    pub container_width: u32,
    pub overlay_width: u32,
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing {
            header_height: 64,
            section_padding: Responsive::new(String::from("5rem"), String::from("8rem")),
            container_width: 1200,
            overlay_width: 240,
        }
    }
}

// viewport classes, smallest first
//
// the derived Ord follows declaration order, so `bp >= Breakpoint::Md` reads as
// "at least medium"
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    pub fn all() -> Vec<Self> {
        vec![Self::Xs, Self::Sm, Self::Md, Self::Lg, Self::Xl]
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        };
        write!(f, "{}", name)
    }
}

// lower bounds, in css pixels, of each breakpoint above Xs (which always starts at 0)
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Breakpoints {
    pub sm: u32,
    pub md: u32,
    pub lg: u32,
    pub xl: u32,
    pub desktop: Breakpoint,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Breakpoints {
            sm: 600,
            md: 900,
            lg: 1200,
            xl: 1536,
            desktop: Breakpoint::Md,
        }
    }
}

impl Breakpoints {
    pub fn min_width(&self, bp: Breakpoint) -> u32 {
        match bp {
            Breakpoint::Xs => 0,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }

    // the largest breakpoint whose lower bound is at or below the width
    pub fn classify(&self, width: f64) -> Breakpoint {
        Breakpoint::all()
            .into_iter()
            .rev()
            .find(|bp| width >= f64::from(self.min_width(*bp)))
            .unwrap_or(Breakpoint::Xs)
    }

    // the new breakpoint when a viewport width lands outside the current one.  callers
    // pass the same window.innerWidth measure used for the first classification, which
    // is also what the exported --bp-* thresholds are compared against
    pub fn crossed(&self, current: Breakpoint, width: f64) -> Option<Breakpoint> {
        let bp = self.classify(width);

        (bp != current).then_some(bp)
    }

    pub fn is_desktop(&self, bp: Breakpoint) -> bool {
        bp >= self.desktop
    }

    pub fn desktop_min_width(&self) -> u32 {
        self.min_width(self.desktop)
    }

    pub fn is_ascending(&self) -> bool {
        0 < self.sm && self.sm < self.md && self.md < self.lg && self.lg < self.xl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_uses_lower_bounds() {
        let bps = Breakpoints::default();

        assert_eq!(bps.classify(0.0), Breakpoint::Xs);
        assert_eq!(bps.classify(375.0), Breakpoint::Xs);
        assert_eq!(bps.classify(599.9), Breakpoint::Xs);
        assert_eq!(bps.classify(600.0), Breakpoint::Sm);
        assert_eq!(bps.classify(899.0), Breakpoint::Sm);
        assert_eq!(bps.classify(900.0), Breakpoint::Md);
        assert_eq!(bps.classify(1280.0), Breakpoint::Lg);
        assert_eq!(bps.classify(4000.0), Breakpoint::Xl);
    }

    #[test]
    fn crossing_is_reported_only_on_change() {
        let bps = Breakpoints::default();
        let start = bps.classify(910.0);

        assert_eq!(start, Breakpoint::Md);
        assert_eq!(bps.crossed(start, 910.0), None);
        assert_eq!(bps.crossed(start, 900.0), None);
        assert_eq!(bps.crossed(start, 899.5), Some(Breakpoint::Sm));
        assert_eq!(bps.crossed(start, 1200.0), Some(Breakpoint::Lg));
    }

    #[test]
    fn desktop_is_md_and_above_by_default() {
        let bps = Breakpoints::default();

        let desktop: Vec<Breakpoint> = Breakpoint::all()
            .into_iter()
            .filter(|bp| bps.is_desktop(*bp))
            .collect();

        assert_eq!(desktop, vec![Breakpoint::Md, Breakpoint::Lg, Breakpoint::Xl]);
        assert_eq!(bps.desktop_min_width(), 900);
    }

    #[test]
    fn moving_the_desktop_threshold() {
        let bps = Breakpoints {
            desktop: Breakpoint::Lg,
            ..Breakpoints::default()
        };

        assert!(!bps.is_desktop(Breakpoint::Md));
        assert!(bps.is_desktop(Breakpoint::Lg));
    }

    #[test]
    fn ascending_check() {
        assert!(Breakpoints::default().is_ascending());

        let bps = Breakpoints {
            md: 500,
            ..Breakpoints::default()
        };
        assert!(!bps.is_ascending());
    }

    #[test]
    fn partial_token_tables_fill_from_defaults() {
        let tokens: DesignTokens = toml::from_str(
            r##"
            [palette]
            primary = "#FF0000"

            [breakpoints]
            desktop = "Lg"
            "##,
        )
        .unwrap();

        assert_eq!(tokens.palette.primary, "#FF0000");
        assert_eq!(tokens.palette.surface, Palette::default().surface);
        assert_eq!(tokens.breakpoints.desktop, Breakpoint::Lg);
        assert_eq!(tokens.breakpoints.md, 900);
        assert_eq!(tokens.typography, Typography::default());
    }
}
