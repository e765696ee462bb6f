use dioxus::prelude::*;

use common::{
    contact::{FieldKind, FormField},
    layout::Contact,
};

#[derive(Clone, PartialEq, Props)]
pub struct ContactSectionProps {
    contact: Contact,
}

// ContactSection
//
// a plain html form.  there is deliberately no onsubmit handler: the browser enforces
// the required attributes and then posts straight to the configured endpoint
#[component]
pub fn ContactSection(props: ContactSectionProps) -> Element {
    let Contact {
        id,
        heading,
        blurb,
        padding,
        form,
    } = props.contact;

    let (hidden_name, hidden_value) = form.hidden;

    rsx! {
        section { id: "{id}", class: "section-alt", style: "padding: {padding} 0;",
            div { class: "container",
                h2 { class: "section-title centered", "{heading}" }
                p { class: "contact-blurb", "{blurb}" }
                form {
                    class: "contact-form",
                    name: "{form.name}",
                    method: "{form.method}",
                    action: "{form.action}",
                    "data-netlify": "true",
                    input { r#type: "hidden", name: "{hidden_name}", value: "{hidden_value}" }
                    for field in form.fields {
                        FormFieldInput { key: "{field.name}", field }
                    }
                    div { class: "form-actions",
                        button { r#type: "submit", class: "btn-primary", "Send Message" }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct FormFieldInputProps {
    field: FormField,
}

#[component]
fn FormFieldInput(props: FormFieldInputProps) -> Element {
    let field = props.field;

    let control = match field.kind {
        FieldKind::Multiline { rows } => rsx! {
            textarea {
                class: "form-input",
                name: "{field.name}",
                rows: "{rows}",
                required: field.required,
            }
        },
        FieldKind::Text | FieldKind::Email => {
            let input_type = if field.kind == FieldKind::Email { "email" } else { "text" };

            rsx! {
                input {
                    class: "form-input",
                    r#type: "{input_type}",
                    name: "{field.name}",
                    required: field.required,
                }
            }
        }
    };

    rsx! {
        label { class: "form-field",
            span { class: "form-label", "{field.label}" }
            {control}
        }
    }
}
