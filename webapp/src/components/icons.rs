use dioxus::prelude::*;

// material-style glyphs, drawn with currentColor so they pick up the surrounding text color

#[component]
pub fn MenuIcon() -> Element {
    rsx! {
        svg {
            view_box: "0 0 24 24",
            width: "24",
            height: "24",
            fill: "currentColor",
            path { d: "M3 18h18v-2H3zm0-5h18v-2H3zm0-7v2h18V6z" }
        }
    }
}

#[component]
pub fn CloseIcon() -> Element {
    rsx! {
        svg {
            view_box: "0 0 24 24",
            width: "24",
            height: "24",
            fill: "currentColor",
            path { d: "M19 6.41 17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z" }
        }
    }
}
