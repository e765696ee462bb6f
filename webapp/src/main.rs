#![allow(non_snake_case)]
use dioxus::prelude::*;

use tracing::{Level, debug};

use common::{
    Site,
    layout::{Main, Page, SystemClock, compose},
    nav::NavController,
    style::stylesheet,
};

mod viewport;
use viewport::viewport_width;

mod components;
use components::{
    footer::SiteFooter,
    navigation::{MobileOverlay, NavBar},
};

mod about;
use about::AboutSection;

mod contact;
use contact::ContactSection;

mod home;
use home::HeroSection;

mod projects;
use projects::ProjectsSection;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// the site config is compiled in and validated once, on first render.  a defect here
// is a broken build, so we show it instead of a half-rendered page
#[component]
pub fn App() -> Element {
    let site = use_hook(|| Site::bundled().map_err(|err| err.to_string()));

    match site {
        Ok(site) => rsx! {
            Portfolio { site }
        },
        Err(message) => rsx! {
            div { class: "config-error",
                style: "padding: 24px; color: #EF4444; font-family: monospace;",
                "Site configuration is invalid: {message}"
            }
        },
    }
}

#[derive(Clone, PartialEq, Props)]
struct PortfolioProps {
    site: Site,
}

// Portfolio
//
// owns the two pieces of per-page state: the navigation controller and the current
// breakpoint.  everything else is recomposed from the site on each render
#[component]
fn Portfolio(props: PortfolioProps) -> Element {
    let site = props.site;

    let nav_state = use_signal(NavController::new);

    let breakpoints = site.tokens().breakpoints.clone();
    let mut breakpoint = use_signal(|| {
        let width = viewport_width();
        let bp = breakpoints.classify(width);
        debug!(width, %bp, "initial viewport");
        bp
    });

    let css = use_hook(|| stylesheet(site.tokens()));

    let Page {
        header,
        overlay,
        main,
        footer,
        ..
    } = compose(&site, &nav_state.read(), breakpoint(), &SystemClock);

    let Main {
        hero,
        about,
        projects,
        contact,
    } = main;

    rsx! {
        style { "{css}" }
        div {
            class: "site",
            // the root box only signals that the window changed; the width itself is
            // re-read from the window so every classification uses one measure
            onresize: move |_: Event<ResizeData>| {
                let width = viewport_width();
                if let Some(bp) = breakpoints.crossed(breakpoint(), width) {
                    debug!(width, %bp, "breakpoint crossed");
                    breakpoint.set(bp);
                }
            },
            NavBar { header, nav_state }
            if let Some(overlay) = overlay {
                MobileOverlay { overlay, nav_state }
            }
            main {
                HeroSection { hero }
                AboutSection { about }
                ProjectsSection { projects }
                ContactSection { contact }
            }
            SiteFooter { footer }
        }
    }
}
