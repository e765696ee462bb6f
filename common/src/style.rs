use constcat::concat;

use crate::tokens::{Breakpoint, DesignTokens};

// token-driven stylesheet
//
// every color, size and threshold below is a var() reference; the values themselves
// come from css_variables(), so swapping the token set restyles the whole page.
// responsive decisions are made by the composer, not by media queries

const BASE_RESET: &str = r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: var(--font-family);
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
}

a {
  color: var(--primary-light);
  text-decoration: none;
}

a:hover {
  color: var(--accent);
}

.site {
  min-height: 100vh;
}

.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}
"#;

const HEADER_STYLES: &str = r#"
/* Header and overlay */
.app-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 10;
  background-color: var(--surface);
  backdrop-filter: blur(4px);
  box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.3);
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
}

.brand {
  font-weight: 700;
  font-size: 1.25rem;
  color: var(--primary-light);
}

.nav-links {
  display: flex;
  gap: var(--space-2);
}

.nav-link {
  color: var(--text-secondary);
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
}

.nav-link:hover {
  color: var(--text-primary);
  background-color: var(--surface-raised);
}

.menu-button {
  background: none;
  border: none;
  color: var(--text-primary);
  cursor: pointer;
  padding: var(--space-2);
}

.overlay-backdrop {
  position: fixed;
  inset: 0;
  z-index: 20;
  background-color: rgba(0, 0, 0, 0.5);
}

.overlay {
  position: fixed;
  top: 0;
  bottom: 0;
  z-index: 21;
  width: var(--overlay-width);
  background-color: var(--background);
  color: var(--text-primary);
  text-align: center;
}

.overlay:focus {
  outline: none;
}

.overlay.edge-right {
  right: 0;
}

.overlay.edge-left {
  left: 0;
}

.overlay-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: var(--space-4);
  font-weight: 700;
}

.overlay-link {
  display: block;
  padding: var(--space-3) var(--space-4);
  color: var(--text-primary);
}

.overlay-link:hover {
  background-color: var(--surface-raised);
}
"#;

const SECTION_STYLES: &str = r#"
/* Sections */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  padding-top: var(--header-height);
  text-align: center;
}

.hero-title {
  font-weight: 800;
  line-height: 1.1;
  color: var(--text-primary);
}

.hero-title .highlight {
  color: var(--primary-light);
}

.hero-subtitle {
  margin-top: var(--space-4);
  font-weight: 600;
  color: var(--text-secondary);
}

.hero-intro {
  margin: var(--space-6) auto 0;
  max-width: 42rem;
  font-size: var(--font-body);
  color: var(--text-secondary);
}

.hero-profiles {
  margin-top: var(--space-10);
  display: flex;
  justify-content: center;
  gap: var(--space-6);
}

.profile-link {
  color: var(--text-muted);
  font-weight: 600;
}

.section-alt {
  background-color: var(--surface);
}

.section-title {
  font-size: var(--font-section-title);
  font-weight: 700;
  margin-bottom: var(--space-6);
  color: var(--primary-light);
}

.section-title.centered {
  text-align: center;
  margin-bottom: var(--space-12);
}

.about-paragraph {
  font-size: var(--font-body);
  color: var(--text-secondary);
  margin-bottom: var(--space-4);
}

.skills-label {
  font-weight: 600;
  margin: var(--space-6) 0 var(--space-3);
}

.chip-row {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
}

.skill-chip {
  background-color: var(--chip-background);
  color: var(--chip-text);
  font-size: var(--font-small);
  font-weight: 500;
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
}

.stack-chip {
  background-color: var(--surface-raised);
  color: var(--primary-light);
  font-size: var(--font-chip);
  font-weight: 500;
  padding: 2px var(--space-2);
  border-radius: var(--radius-full);
}
"#;

const PROJECT_STYLES: &str = r#"
/* Project gallery */
.project-grid {
  display: grid;
  gap: var(--space-8);
}

.project-grid.equal-height {
  align-items: stretch;
}

.project-card {
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
  display: flex;
  flex-direction: column;
  transition: transform 300ms cubic-bezier(0.4, 0.0, 0.2, 1);
}

.project-grid.equal-height .project-card {
  height: 100%;
}

.project-card:hover {
  transform: scale(1.05);
}

.project-card-body {
  flex-grow: 1;
  padding: var(--space-4);
}

.project-card-title {
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: var(--space-2);
}

.project-card-description {
  font-size: var(--font-small);
  color: var(--text-secondary);
  margin-bottom: var(--space-4);
}

.project-card-actions {
  display: flex;
  gap: var(--space-2);
  padding: var(--space-4);
}

.project-action {
  font-size: var(--font-small);
  font-weight: 600;
  color: var(--primary-light);
}
"#;

const CONTACT_STYLES: &str = r#"
/* Contact form and footer */
.contact-blurb {
  font-size: var(--font-body);
  text-align: center;
  color: var(--text-secondary);
  max-width: 32rem;
  margin: 0 auto var(--space-8);
}

.contact-form {
  max-width: 36rem;
  margin: 0 auto;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: var(--space-1);
  margin-bottom: var(--space-6);
}

.form-label {
  color: var(--text-secondary);
}

.form-input {
  background: transparent;
  color: var(--text-primary);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  padding: var(--space-3);
  font: inherit;
}

.form-input:hover,
.form-input:focus {
  border-color: var(--primary);
  outline: none;
}

.form-actions {
  text-align: center;
}

.btn-primary {
  background-color: var(--primary);
  color: var(--chip-text);
  font-weight: 700;
  padding: var(--space-3) var(--space-8);
  border: none;
  border-radius: var(--radius-md);
  cursor: pointer;
}

.btn-primary:hover {
  background-color: var(--primary-dark);
}

.app-footer {
  background-color: var(--background);
  padding: var(--space-8) 0;
  text-align: center;
  font-size: var(--font-small);
  color: var(--text-muted);
}
"#;

// token-independent scale, shared by every section
const FIXED_SCALE: &str = r#"
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-10: 40px;
  --space-12: 48px;
  --radius-md: 6px;
  --radius-lg: 8px;
  --radius-full: 9999px;
"#;

pub const BASE_STYLES: &str = concat!(
    BASE_RESET,
    HEADER_STYLES,
    SECTION_STYLES,
    PROJECT_STYLES,
    CONTACT_STYLES
);

pub fn css_variables(tokens: &DesignTokens) -> String {
    let palette: String = tokens
        .palette
        .roles()
        .into_iter()
        .map(|(role, value)| format!("  --{role}: {value};\n"))
        .collect();

    let breakpoints: String = Breakpoint::all()
        .into_iter()
        .map(|bp| format!("  --bp-{bp}: {}px;\n", tokens.breakpoints.min_width(bp)))
        .collect();

    let typography = &tokens.typography;
    let spacing = &tokens.spacing;

    format!(
        ":root {{
  /* Color System */
{palette}
  /* Typography */
  --font-family: {};
  --font-section-title: {};
  --font-body: {};
  --font-small: {};
  --font-chip: {};

  /* Layout */
  --header-height: {}px;
  --container-width: {}px;
  --overlay-width: {}px;

  /* Breakpoints */
{breakpoints}{FIXED_SCALE}}}
",
        typography.font_family,
        typography.section_title,
        typography.body,
        typography.small,
        typography.chip,
        spacing.header_height,
        spacing.container_width,
        spacing.overlay_width,
    )
}

pub fn stylesheet(tokens: &DesignTokens) -> String {
    let mut css = css_variables(tokens);
    css.push_str(BASE_STYLES);
    css
}
