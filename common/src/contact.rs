use std::{collections::HashMap, fmt};

use serde::Serialize;

use crate::content::ContactSettings;

pub const FORM_NAME_FIELD: &str = "form-name";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum FieldKind {
    Text,
    Email,
    Multiline { rows: u32 },
}

impl FieldKind {
    // the value the browser actually checks and posts.  single-line inputs drop line
    // breaks and email inputs also lose surrounding whitespace; textareas are untouched
    pub fn sanitize(self, value: &str) -> String {
        match self {
            FieldKind::Text => strip_line_breaks(value),
            FieldKind::Email => strip_line_breaks(value)
                .trim_matches(|c: char| c.is_ascii_whitespace())
                .to_owned(),
            FieldKind::Multiline { .. } => value.to_owned(),
        }
    }
}

fn strip_line_breaks(value: &str) -> String {
    value.chars().filter(|c| !matches!(c, '\r' | '\n')).collect()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

// contact form adapter
//
// a plain form posted by the browser to an external form service.  the only client-side
// behavior is required-field gating; whatever happens after the POST belongs to the
// service
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub action: String,
    pub method: &'static str,
    pub hidden: (&'static str, String),
    pub fields: Vec<FormField>,
}

impl ContactForm {
    pub fn new(settings: &ContactSettings) -> Self {
        ContactForm {
            name: settings.form_name.clone(),
            action: settings.endpoint.clone(),
            method: "POST",
            hidden: (FORM_NAME_FIELD, settings.form_name.clone()),
            fields: vec![
                FormField {
                    name: "name",
                    label: "Your Name",
                    kind: FieldKind::Text,
                    required: true,
                },
                FormField {
                    name: "email",
                    label: "Your Email",
                    kind: FieldKind::Email,
                    required: true,
                },
                FormField {
                    name: "message",
                    label: "Message",
                    kind: FieldKind::Multiline { rows: 6 },
                    required: true,
                },
            ],
        }
    }

    // mirrors the browser's required check: each value is sanitized for its input type,
    // then an empty result blocks submission.  no pattern checks are made here
    pub fn submit(&self, values: &FormValues) -> Result<FormPost, Blocked> {
        let sanitized: Vec<(&'static str, String)> = self
            .fields
            .iter()
            .map(|field| (field.name, field.kind.sanitize(values.get(field.name))))
            .collect();

        let missing: Vec<&'static str> = self
            .fields
            .iter()
            .zip(&sanitized)
            .filter(|(field, (_, value))| field.required && value.is_empty())
            .map(|(field, _)| field.name)
            .collect();

        if !missing.is_empty() {
            return Err(Blocked { missing });
        }

        let mut fields = vec![(self.hidden.0.to_owned(), self.hidden.1.clone())];
        fields.extend(
            sanitized
                .into_iter()
                .map(|(name, value)| (name.to_owned(), value)),
        );

        Ok(FormPost {
            action: self.action.clone(),
            method: self.method,
            fields,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    values: HashMap<String, String>,
}

impl FormValues {
    pub fn new() -> Self {
        FormValues::default()
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_owned(), value.to_owned());
    }

    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }
}

// what the browser sends once gating passes
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormPost {
    pub action: String,
    pub method: &'static str,
    pub fields: Vec<(String, String)>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Blocked {
    pub missing: Vec<&'static str>,
}

impl fmt::Display for Blocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "required fields are empty: {}", self.missing.join(", "))
    }
}

impl std::error::Error for Blocked {}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm::new(&ContactSettings {
            heading: String::from("Get In Touch"),
            blurb: String::new(),
            endpoint: String::from("/"),
            form_name: String::from("contact"),
        })
    }

    #[test]
    fn every_field_is_required() {
        let form = form();

        let names: Vec<&str> = form.fields.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["name", "email", "message"]);
        assert!(form.fields.iter().all(|f| f.required));
        assert_eq!(form.hidden, ("form-name", String::from("contact")));
        assert_eq!(form.method, "POST");
    }

    #[test]
    fn empty_message_blocks_submission() {
        let values = FormValues::new()
            .with("name", "Ada")
            .with("email", "ada@example.com")
            .with("message", "");

        let blocked = form().submit(&values).unwrap_err();

        assert_eq!(blocked.missing, vec!["message"]);
    }

    #[test]
    fn empty_message_blocks_even_with_bad_email() {
        let values = FormValues::new().with("name", "Ada").with("email", "not-an-email");

        let blocked = form().submit(&values).unwrap_err();

        assert_eq!(blocked.missing, vec!["message"]);
    }

    #[test]
    fn all_missing_fields_reported_in_form_order() {
        let blocked = form().submit(&FormValues::new()).unwrap_err();

        assert_eq!(blocked.missing, vec!["name", "email", "message"]);
        assert_eq!(
            blocked.to_string(),
            "required fields are empty: name, email, message"
        );
    }

    #[test]
    fn complete_submission_leads_with_form_name() {
        let values = FormValues::new()
            .with("name", "Ada")
            .with("email", "ada@example.com")
            .with("message", "hello");

        let post = form().submit(&values).unwrap();

        assert_eq!(post.action, "/");
        assert_eq!(post.method, "POST");
        assert_eq!(
            post.fields,
            vec![
                (String::from("form-name"), String::from("contact")),
                (String::from("name"), String::from("Ada")),
                (String::from("email"), String::from("ada@example.com")),
                (String::from("message"), String::from("hello")),
            ]
        );
    }

    #[test]
    fn whitespace_counts_as_present() {
        let values = FormValues::new()
            .with("name", " ")
            .with("email", "x")
            .with("message", "\n");

        assert!(form().submit(&values).is_ok());
    }

    #[test]
    fn blank_email_blocks_submission() {
        let values = FormValues::new()
            .with("name", "Ada")
            .with("email", "   ")
            .with("message", "hi");

        let blocked = form().submit(&values).unwrap_err();

        assert_eq!(blocked.missing, vec!["email"]);
    }

    #[test]
    fn line_breaks_alone_do_not_fill_a_text_input() {
        let values = FormValues::new()
            .with("name", "\r\n")
            .with("email", "ada@example.com")
            .with("message", "hi");

        let blocked = form().submit(&values).unwrap_err();

        assert_eq!(blocked.missing, vec!["name"]);
    }

    #[test]
    fn posted_values_are_sanitized_per_input_type() {
        let values = FormValues::new()
            .with("name", " Ada\nLovelace ")
            .with("email", "  ada@example.com\n")
            .with("message", "  line one\nline two ");

        let post = form().submit(&values).unwrap();

        assert_eq!(post.fields[1].1, " AdaLovelace ");
        assert_eq!(post.fields[2].1, "ada@example.com");
        assert_eq!(post.fields[3].1, "  line one\nline two ");
    }
}
