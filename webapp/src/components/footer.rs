use dioxus::prelude::*;

use common::layout::Footer;

#[derive(Clone, PartialEq, Props)]
pub struct SiteFooterProps {
    footer: Footer,
}

#[component]
pub fn SiteFooter(props: SiteFooterProps) -> Element {
    let footer = props.footer;

    rsx! {
        footer { class: "app-footer",
            div { class: "container",
                p { "{footer.copyright}" }
            }
        }
    }
}
