use chrono::{Datelike, Local};
use serde::Serialize;

use crate::{
    Site,
    contact::ContactForm,
    content::Region,
    nav::NavController,
    render::{Chip, NavLink, ProjectCard, nav_links, project_cards, skill_chips},
    tokens::Breakpoint,
};

// the footer year is read on every compose so a long-lived page rolls over on its own
pub trait Clock {
    fn current_year(&self) -> i32;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

// the composed page
//
// a plain tree that the front end maps onto markup one node at a time.  everything the
// markup needs to decide (what is visible, which sizes apply, which actions exist) has
// already been decided here
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Page {
    pub breakpoint: Breakpoint,
    pub header: Header,
    pub overlay: Option<Overlay>,
    pub main: Main,
    pub footer: Footer,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Header {
    pub brand: String,
    pub brand_target: String,
    pub controls: HeaderControls,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum HeaderControls {
    MenuIcon,
    Inline(Vec<NavLink>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Edge {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Overlay {
    pub title: String,
    pub edge: Edge,
    pub width: u32,
    pub links: Vec<NavLink>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Main {
    pub hero: Hero,
    pub about: About,
    pub projects: Projects,
    pub contact: Contact,
}

impl Main {
    // region ids in document order
    pub fn region_ids(&self) -> Vec<&str> {
        vec![
            self.hero.id.as_str(),
            self.about.id.as_str(),
            self.projects.id.as_str(),
            self.contact.id.as_str(),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ProfileKind {
    SourceControl,
    ProfessionalNetwork,
}

impl ProfileKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::SourceControl => "GitHub",
            Self::ProfessionalNetwork => "LinkedIn",
        }
    }
}

// outbound identity links, always opened in a new browsing context
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProfileLink {
    pub kind: ProfileKind,
    pub label: String,
    pub href: String,
}

impl ProfileLink {
    fn new(kind: ProfileKind, href: &str) -> Self {
        ProfileLink {
            kind,
            label: kind.label().to_owned(),
            href: href.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Hero {
    pub id: String,
    pub name: String,
    pub role: String,
    pub intro: String,
    pub title_size: String,
    pub subtitle_size: String,
    pub profiles: Vec<ProfileLink>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct About {
    pub id: String,
    pub title: String,
    pub padding: String,
    pub paragraphs: Vec<String>,
    pub skills_label: String,
    pub skills: Vec<Chip>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Projects {
    pub id: String,
    pub title: String,
    pub padding: String,
    pub columns: u8,
    // cards in one row share a height however long their descriptions are
    pub equal_height: bool,
    pub cards: Vec<ProjectCard>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Contact {
    pub id: String,
    pub heading: String,
    pub blurb: String,
    pub padding: String,
    pub form: ContactForm,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Footer {
    pub copyright: String,
}

pub fn project_columns(bp: Breakpoint) -> u8 {
    match bp {
        Breakpoint::Xs => 1,
        Breakpoint::Sm => 2,
        Breakpoint::Md | Breakpoint::Lg | Breakpoint::Xl => 3,
    }
}

// compose
//
// builds the page for one render pass.  header controls depend only on the breakpoint;
// the overlay exists only when the controller says open *and* the layout is below
// desktop.  the controller flag itself is left alone
pub fn compose(site: &Site, nav: &NavController, bp: Breakpoint, clock: &dyn Clock) -> Page {
    let tokens = site.tokens();
    let content = site.content();
    let desktop = tokens.breakpoints.is_desktop(bp);

    let links = nav_links(&content.nav);

    let controls = if desktop {
        HeaderControls::Inline(links.clone())
    } else {
        HeaderControls::MenuIcon
    };

    let overlay = (nav.is_open() && !desktop).then(|| Overlay {
        title: String::from("Menu"),
        edge: Edge::Right,
        width: tokens.spacing.overlay_width,
        links,
    });

    let padding = tokens.spacing.section_padding.pick(desktop);
    let identity = &content.identity;

    let hero = Hero {
        id: Region::Home.id().to_owned(),
        name: identity.name.clone(),
        role: identity.role.clone(),
        intro: identity.intro.clone(),
        title_size: tokens.typography.hero_title.pick(desktop),
        subtitle_size: tokens.typography.hero_subtitle.pick(desktop),
        profiles: vec![
            ProfileLink::new(ProfileKind::SourceControl, &identity.source_profile),
            ProfileLink::new(ProfileKind::ProfessionalNetwork, &identity.network_profile),
        ],
    };

    let about = About {
        id: Region::About.id().to_owned(),
        title: String::from("About Me"),
        padding: padding.clone(),
        paragraphs: identity.about.clone(),
        skills_label: String::from("My Skills:"),
        skills: skill_chips(&content.skills),
    };

    let projects = Projects {
        id: Region::Projects.id().to_owned(),
        title: String::from("My Projects"),
        padding: padding.clone(),
        columns: project_columns(bp),
        equal_height: true,
        cards: project_cards(&content.projects),
    };

    let contact = Contact {
        id: Region::Contact.id().to_owned(),
        heading: content.contact.heading.clone(),
        blurb: content.contact.blurb.clone(),
        padding,
        form: ContactForm::new(&content.contact),
    };

    let footer = Footer {
        copyright: format!(
            "© {} {}. All rights reserved.",
            clock.current_year(),
            identity.name
        ),
    };

    Page {
        breakpoint: bp,
        header: Header {
            brand: identity.name.clone(),
            brand_target: Region::Home.anchor(),
            controls,
        },
        overlay,
        main: Main {
            hero,
            about,
            projects,
            contact,
        },
        footer,
    }
}
