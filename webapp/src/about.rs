use dioxus::prelude::*;

use common::layout::About;

#[derive(Clone, PartialEq, Props)]
pub struct AboutSectionProps {
    about: About,
}

#[component]
pub fn AboutSection(props: AboutSectionProps) -> Element {
    let About {
        id,
        title,
        padding,
        paragraphs,
        skills_label,
        skills,
    } = props.about;

    rsx! {
        section { id: "{id}", class: "section-alt", style: "padding: {padding} 0;",
            div { class: "container",
                h2 { class: "section-title", "{title}" }
                for (index, paragraph) in paragraphs.into_iter().enumerate() {
                    p { key: "{index}", class: "about-paragraph", "{paragraph}" }
                }
                h3 { class: "skills-label", "{skills_label}" }
                div { class: "chip-row",
                    for (index, chip) in skills.into_iter().enumerate() {
                        span { key: "{index}", class: "skill-chip", "{chip.label}" }
                    }
                }
            }
        }
    }
}
