use dioxus::prelude::*;

use common::layout::Projects;

use crate::components::project_tile::ProjectTile;

#[derive(Clone, PartialEq, Props)]
pub struct ProjectsSectionProps {
    projects: Projects,
}

#[component]
pub fn ProjectsSection(props: ProjectsSectionProps) -> Element {
    let Projects {
        id,
        title,
        padding,
        columns,
        equal_height,
        cards,
    } = props.projects;

    let grid_class = if equal_height {
        "project-grid equal-height"
    } else {
        "project-grid"
    };

    rsx! {
        section { id: "{id}", style: "padding: {padding} 0;",
            div { class: "container",
                h2 { class: "section-title centered", "{title}" }
                div {
                    class: "{grid_class}",
                    style: "grid-template-columns: repeat({columns}, minmax(0, 1fr));",
                    for (index, card) in cards.into_iter().enumerate() {
                        ProjectTile { key: "{index}", card }
                    }
                }
            }
        }
    }
}
