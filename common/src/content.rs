use serde::{Deserialize, Serialize};

// content tables
//
// everything the page says about its owner lives here, loaded from the site config.
// the tables are ordered and the order is display order
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Content {
    pub identity: Identity,
    pub nav: Vec<NavEntry>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub contact: ContactSettings,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Identity {
    pub name: String,
    pub role: String,
    pub intro: String,
    #[serde(default)]
    pub about: Vec<String>,
    // outbound profile links are opaque strings, opened in a new browsing context
    pub source_profile: String,
    pub network_profile: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct NavEntry {
    pub label: String,
    pub target: String,
}

impl NavEntry {
    pub fn new(label: &str, target: &str) -> Self {
        NavEntry {
            label: label.to_owned(),
            target: target.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub live_demo: Option<String>,
}

impl Project {
    // an empty string in the config is the same as leaving the key out
    pub fn live_demo(&self) -> Option<&str> {
        self.live_demo.as_deref().filter(|url| !url.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ContactSettings {
    pub heading: String,
    pub blurb: String,
    // where the form posts to; the form service behind it is not our concern
    pub endpoint: String,
    #[serde(default = "default_form_name")]
    pub form_name: String,
}

fn default_form_name() -> String {
    String::from("contact")
}

// the four anchored regions of the page, in document order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Region {
    Home,
    About,
    Projects,
    Contact,
}

impl Region {
    pub fn all() -> Vec<Self> {
        vec![Self::Home, Self::About, Self::Projects, Self::Contact]
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let id = anchor.strip_prefix('#')?;

        Self::all().into_iter().find(|region| region.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(live_demo: Option<&str>) -> Project {
        Project {
            title: String::from("t"),
            description: String::from("d"),
            stack: vec![String::from("Rust")],
            repository: None,
            live_demo: live_demo.map(String::from),
        }
    }

    #[test]
    fn empty_live_demo_is_absent() {
        assert_eq!(project(None).live_demo(), None);
        assert_eq!(project(Some("")).live_demo(), None);
        assert_eq!(
            project(Some("https://example.com")).live_demo(),
            Some("https://example.com")
        );
    }

    #[test]
    fn region_anchors() {
        for region in Region::all() {
            assert_eq!(Region::from_anchor(&region.anchor()), Some(region));
        }

        assert_eq!(Region::from_anchor("home"), None);
        assert_eq!(Region::from_anchor("#blog"), None);
    }
}
