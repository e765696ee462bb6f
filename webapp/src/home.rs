use dioxus::prelude::*;

use common::layout::Hero;

#[derive(Clone, PartialEq, Props)]
pub struct HeroSectionProps {
    hero: Hero,
}

#[component]
pub fn HeroSection(props: HeroSectionProps) -> Element {
    let Hero {
        id,
        name,
        role,
        intro,
        title_size,
        subtitle_size,
        profiles,
    } = props.hero;

    rsx! {
        section { id: "{id}", class: "hero",
            div { class: "container",
                h1 { class: "hero-title", style: "font-size: {title_size};",
                    "Hi, I'm "
                    span { class: "highlight", "{name}" }
                }
                p { class: "hero-subtitle", style: "font-size: {subtitle_size};", "{role}" }
                p { class: "hero-intro", "{intro}" }
                div { class: "hero-profiles",
                    for profile in profiles {
                        a {
                            key: "{profile.label}",
                            class: "profile-link",
                            href: "{profile.href}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{profile.label}"
                        }
                    }
                }
            }
        }
    }
}
