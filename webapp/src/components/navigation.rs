use dioxus::prelude::*;
use tracing::{debug, warn};

use common::{
    layout::{Edge, Header, HeaderControls, Overlay},
    nav::{NavController, dismisses_overlay},
    render::NavLink,
};

use crate::components::icons::{CloseIcon, MenuIcon};

// every call site -- menu icon, backdrop, anything inside the overlay -- goes through
// the controller's single toggle
fn toggle_overlay(mut nav_state: Signal<NavController>, source: &str) {
    nav_state.write().toggle();
    debug!(source, open = nav_state.read().is_open(), "overlay toggled");
}

#[derive(Clone, PartialEq, Props)]
struct NavLinkListProps {
    links: Vec<NavLink>,
    link_class: String,
}

// shared by the inline header row and the overlay so the two can't drift apart
#[component]
fn NavLinkList(props: NavLinkListProps) -> Element {
    let link_class = props.link_class;

    rsx! {
        for link in props.links {
            a {
                key: "{link.href}",
                class: "{link_class}",
                href: "{link.href}",
                "{link.label}"
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct NavBarProps {
    header: Header,
    nav_state: Signal<NavController>,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let Header {
        brand,
        brand_target,
        controls,
    } = props.header;
    let nav_state = props.nav_state;

    rsx! {
        header { class: "app-header",
            div { class: "container nav-container",
                a { class: "brand", href: "{brand_target}", "{brand}" }

                match controls {
                    HeaderControls::MenuIcon => rsx! {
                        button {
                            class: "menu-button",
                            aria_label: "open drawer",
                            onclick: move |_| toggle_overlay(nav_state, "menu icon"),
                            MenuIcon {}
                        }
                    },
                    HeaderControls::Inline(links) => rsx! {
                        nav { class: "nav-links",
                            NavLinkList { links, link_class: "nav-link".to_owned() }
                        }
                    },
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct MobileOverlayProps {
    overlay: Overlay,
    nav_state: Signal<NavController>,
}

// MobileOverlay
//
// the slide-in panel.  a click anywhere on the panel (close icon or any link) toggles
// it shut, and the link's own navigation still happens.  a click on the backdrop or
// Escape dismisses it the same way; the panel takes focus when it opens so the key
// reaches it
#[component]
pub fn MobileOverlay(props: MobileOverlayProps) -> Element {
    let Overlay {
        title,
        edge,
        width,
        links,
    } = props.overlay;
    let nav_state = props.nav_state;

    let edge = match edge {
        Edge::Left => "overlay edge-left",
        Edge::Right => "overlay edge-right",
    };

    rsx! {
        div {
            class: "overlay-backdrop",
            onclick: move |_| toggle_overlay(nav_state, "backdrop"),
        }
        nav {
            class: "{edge}",
            style: "width: {width}px;",
            tabindex: "-1",
            onmounted: move |evt: MountedEvent| async move {
                if let Err(err) = evt.set_focus(true).await {
                    warn!(?err, "could not focus overlay");
                }
            },
            onkeydown: move |evt: KeyboardEvent| {
                if dismisses_overlay(&evt.key().to_string()) {
                    toggle_overlay(nav_state, "escape");
                }
            },
            onclick: move |_| toggle_overlay(nav_state, "overlay"),
            div { class: "overlay-header",
                span { "{title}" }
                button { class: "menu-button", aria_label: "close drawer", CloseIcon {} }
            }
            div { class: "overlay-links",
                NavLinkList { links, link_class: "overlay-link".to_owned() }
            }
        }
    }
}
