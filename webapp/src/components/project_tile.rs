use dioxus::prelude::*;

use common::render::ProjectCard;

#[derive(Clone, PartialEq, Props)]
pub struct ProjectTileProps {
    card: ProjectCard,
}

#[component]
pub fn ProjectTile(props: ProjectTileProps) -> Element {
    let card = props.card;

    let actions: Vec<(String, &'static str)> = card
        .actions
        .iter()
        .map(|action| (action.href().to_owned(), action.label()))
        .collect();

    rsx! {
        div { class: "project-card",
            div { class: "project-card-body",
                h3 { class: "project-card-title", "{card.title}" }
                p { class: "project-card-description", "{card.description}" }
                div { class: "chip-row",
                    for chip in card.stack {
                        span { key: "{chip.label}", class: "stack-chip", "{chip.label}" }
                    }
                }
            }
            div { class: "project-card-actions",
                for (href, label) in actions {
                    a {
                        key: "{label}",
                        class: "project-action",
                        href: "{href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{label}"
                    }
                }
            }
        }
    }
}
