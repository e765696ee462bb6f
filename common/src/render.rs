use serde::Serialize;

use crate::content::{NavEntry, Project};

// section renderers
//
// each content table becomes a list of render-ready records through the same
// order-preserving map.  none of these can fail: a record with missing optional data
// renders without the corresponding piece

pub fn render_table<T, O, F>(items: &[T], formatter: F) -> Vec<O>
where
    F: Fn(&T) -> O,
{
    items.iter().map(formatter).collect()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Chip {
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Action {
    Code { href: String },
    LiveDemo { href: String },
}

impl Action {
    pub fn href(&self) -> &str {
        match self {
            Action::Code { href } | Action::LiveDemo { href } => href,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Action::Code { .. } => "Code",
            Action::LiveDemo { .. } => "Live Demo",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub stack: Vec<Chip>,
    pub actions: Vec<Action>,
}

// used by both the inline header row and the mobile overlay
pub fn nav_links(entries: &[NavEntry]) -> Vec<NavLink> {
    render_table(entries, |entry| NavLink {
        label: entry.label.clone(),
        href: entry.target.clone(),
    })
}

pub fn skill_chips(skills: &[String]) -> Vec<Chip> {
    render_table(skills, |skill| Chip {
        label: skill.clone(),
    })
}

pub fn project_cards(projects: &[Project]) -> Vec<ProjectCard> {
    render_table(projects, project_card)
}

fn project_card(project: &Project) -> ProjectCard {
    // the code action is always shown; an unset repository falls back to a dead link
    let mut actions = vec![Action::Code {
        href: project
            .repository
            .clone()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| String::from("#")),
    }];

    if let Some(href) = project.live_demo() {
        actions.push(Action::LiveDemo {
            href: href.to_owned(),
        });
    }

    ProjectCard {
        title: project.title.clone(),
        description: project.description.clone(),
        stack: skill_chips(&project.stack),
        actions,
    }
}
