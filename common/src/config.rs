use std::{collections::HashSet, fmt, path::PathBuf, sync::LazyLock};

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use toml;
use tracing::{Level, debug, instrument, warn};

use crate::{content::Content, content::Region, tokens::DesignTokens};

// the default site, compiled into every binary
pub const BUNDLED_CONFIG: &str = include_str!("../site.toml");

// anchors are a '#' followed by an html id
pub const ANCHOR_REGEX: &str = r"^#[A-Za-z][A-Za-z0-9_-]*$";

static ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ANCHOR_REGEX).expect("ANCHOR_REGEX is a valid pattern"));

// site configuration
//
// the design tokens and every content table.  this is the only externally adjustable
// surface of the page; names, bios and profile links never appear in rendering code
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub tokens: DesignTokens,
    pub content: Content,
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: SiteConfig,
}

pub fn parse_config(doc: &str) -> Result<SiteConfig> {
    let data: TomlConfigFile = toml::from_str(doc)?;

    Ok(data.config)
}

#[instrument(level=Level::DEBUG)]
pub fn read_config(filename: PathBuf) -> Result<SiteConfig> {
    debug!("reading config file");

    let doc = std::fs::read_to_string(&filename)
        .map_err(|err| anyhow::Error::msg(format!("failed to read {}: {err}", filename.display())))?;

    let config = parse_config(&doc)?;

    debug!("successfully parsed config file");
    Ok(config)
}

// configuration defects
//
// these are mistakes in the content tables or tokens that would produce a broken page.
// they are caught once, when the site is built, and never handled at render time
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Defect {
    MalformedAnchor { label: String, target: String },
    UnknownAnchor { label: String, target: String },
    DuplicateAnchor { target: String },
    UnlinkedRegion { region: Region },
    UntitledProject { index: usize },
    EmptyStack { title: String },
    UnorderedBreakpoints,
    MissingEndpoint,
    MissingFormName,
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Defect::MalformedAnchor { label, target } => {
                write!(f, "nav entry '{label}' has malformed target '{target}'")
            }
            Defect::UnknownAnchor { label, target } => {
                write!(f, "nav entry '{label}' targets '{target}', which is not a page region")
            }
            Defect::DuplicateAnchor { target } => {
                write!(f, "more than one nav entry targets '{target}'")
            }
            Defect::UnlinkedRegion { region } => {
                write!(f, "no nav entry targets '{}'", region.anchor())
            }
            Defect::UntitledProject { index } => write!(f, "project {index} has no title"),
            Defect::EmptyStack { title } => {
                write!(f, "project '{title}' lists no technologies")
            }
            Defect::UnorderedBreakpoints => {
                write!(f, "breakpoint thresholds must be positive and strictly ascending")
            }
            Defect::MissingEndpoint => write!(f, "contact form has no endpoint"),
            Defect::MissingFormName => write!(f, "contact form has no name"),
        }
    }
}

impl SiteConfig {
    pub fn bundled() -> Result<Self> {
        parse_config(BUNDLED_CONFIG)
    }

    // every defect in the config, in table order
    pub fn validate(&self) -> Vec<Defect> {
        let mut defects = Vec::new();

        let mut seen = HashSet::new();
        let mut linked = HashSet::new();

        for entry in &self.content.nav {
            if !ANCHOR.is_match(&entry.target) {
                defects.push(Defect::MalformedAnchor {
                    label: entry.label.clone(),
                    target: entry.target.clone(),
                });
            } else {
                match Region::from_anchor(&entry.target) {
                    Some(region) => {
                        linked.insert(region);
                    }
                    None => defects.push(Defect::UnknownAnchor {
                        label: entry.label.clone(),
                        target: entry.target.clone(),
                    }),
                }
            }

            if !seen.insert(entry.target.as_str()) {
                defects.push(Defect::DuplicateAnchor {
                    target: entry.target.clone(),
                });
            }
        }

        // one entry per region, so the table is always exactly four long
        for region in Region::all() {
            if !linked.contains(&region) {
                defects.push(Defect::UnlinkedRegion { region });
            }
        }

        let mut skills = HashSet::new();
        for skill in &self.content.skills {
            if !skills.insert(skill.as_str()) {
                warn!(skill = %skill, "duplicate skill label");
            }
        }

        for (index, project) in self.content.projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                defects.push(Defect::UntitledProject { index });
            }

            if project.stack.is_empty() {
                defects.push(Defect::EmptyStack {
                    title: project.title.clone(),
                });
            }
        }

        if !self.tokens.breakpoints.is_ascending() {
            defects.push(Defect::UnorderedBreakpoints);
        }

        if self.content.contact.endpoint.trim().is_empty() {
            defects.push(Defect::MissingEndpoint);
        }

        if self.content.contact.form_name.trim().is_empty() {
            defects.push(Defect::MissingFormName);
        }

        defects
    }
}
