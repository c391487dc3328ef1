use contacts_core::Contact;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use thiserror::Error;

pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";

pub const ADD_LABEL: &str = "Add Contact";
pub const UPDATE_LABEL: &str = "Update Contact";

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_LOCAL_PART_LENGTH: usize = 64;

lazy_static! {
    static ref EMAIL_PATTERN: Regex = Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    )
    .expect("email pattern is valid");
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Validator {
    Required,
    Email,
}

impl Validator {
    fn is_satisfied_by(&self, value: &str) -> bool {
        match self {
            Validator::Required => !value.trim().is_empty(),
            // empty values are Required's concern
            Validator::Email => value.is_empty() || is_email(value),
        }
    }
}

fn is_email(value: &str) -> bool {
    if value.len() > MAX_EMAIL_LENGTH {
        return false;
    }

    match value.split_once('@') {
        Some((local_part, _)) if local_part.len() <= MAX_LOCAL_PART_LENGTH => {
            EMAIL_PATTERN.is_match(value)
        }
        _ => false,
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub validator: Validator,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.validator {
            Validator::Required => write!(f, "{} is required", self.field),
            Validator::Email => write!(f, "{} must be a valid email address", self.field),
        }
    }
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum FormError {
    #[error("unknown form field '{0}'")]
    UnknownField(String),
}

#[derive(Clone, Debug)]
struct FormField {
    name: &'static str,
    value: String,
    validators: Vec<Validator>,
}

impl FormField {
    fn new(name: &'static str, validators: &[Validator]) -> Self {
        Self {
            name,
            value: String::new(),
            validators: validators.to_vec(),
        }
    }

    fn errors(&self) -> impl Iterator<Item = FieldError> + '_ {
        self.validators
            .iter()
            .filter(|validator| !validator.is_satisfied_by(&self.value))
            .map(|validator| FieldError {
                field: self.name,
                validator: *validator,
            })
    }
}

/// Form state for adding or editing one contact.
#[derive(Clone, Debug)]
pub struct ContactForm {
    fields: Vec<FormField>,
    id: Option<i64>,
    submit_label: &'static str,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            fields: vec![
                FormField::new(FIRST_NAME, &[Validator::Required]),
                FormField::new(LAST_NAME, &[Validator::Required]),
                FormField::new(EMAIL, &[Validator::Required, Validator::Email]),
                FormField::new(PHONE, &[Validator::Required]),
            ],
            id: None,
            submit_label: ADD_LABEL,
        }
    }
}

impl ContactForm {
    pub fn new(contact: Option<&Contact>) -> Self {
        let mut form = Self::default();
        form.set_contact(contact);
        form
    }

    /// Re-initialises the form for the contact being edited, or for a new
    /// contact when `None`.
    pub fn set_contact(&mut self, contact: Option<&Contact>) {
        match contact {
            Some(contact) => {
                self.set_field(FIRST_NAME, &contact.first_name);
                self.set_field(LAST_NAME, &contact.last_name);
                self.set_field(EMAIL, &contact.email);
                self.set_field(PHONE, &contact.phone);
                self.id = contact.id;
                self.submit_label = UPDATE_LABEL;
            }
            None => {
                self.reset();
                self.submit_label = ADD_LABEL;
            }
        }
    }

    pub fn set_value(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        match self.fields.iter_mut().find(|field| field.name == name) {
            Some(field) => {
                field.value = value.to_owned();
                Ok(())
            }
            None => Err(FormError::UnknownField(name.to_owned())),
        }
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn submit_label(&self) -> &'static str {
        self.submit_label
    }

    pub fn reset(&mut self) {
        for field in self.fields.iter_mut() {
            field.value.clear();
        }
        self.id = None;
    }

    pub fn errors(&self) -> Vec<FieldError> {
        self.fields.iter().flat_map(|field| field.errors()).collect()
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// Returns the entered contact and clears the form, or `None` while any
    /// field is invalid.
    pub fn submit(&mut self) -> Option<Contact> {
        if !self.is_valid() {
            return None;
        }

        let contact = Contact {
            id: self.id,
            first_name: self.field_value(FIRST_NAME),
            last_name: self.field_value(LAST_NAME),
            email: self.field_value(EMAIL),
            phone: self.field_value(PHONE),
        };

        self.reset();

        Some(contact)
    }

    fn set_field(&mut self, name: &'static str, value: &str) {
        if let Some(field) = self.fields.iter_mut().find(|field| field.name == name) {
            field.value = value.to_owned();
        }
    }

    fn field_value(&self, name: &str) -> String {
        self.value(name).unwrap_or_default().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use contacts_core::test::get_contact_fixture;

    use super::*;

    fn fill(form: &mut ContactForm, first_name: &str, last_name: &str, email: &str, phone: &str) {
        form.set_value(FIRST_NAME, first_name).unwrap();
        form.set_value(LAST_NAME, last_name).unwrap();
        form.set_value(EMAIL, email).unwrap();
        form.set_value(PHONE, phone).unwrap();
    }

    #[test]
    fn test_new_contact_form_is_empty() {
        let form = ContactForm::new(None);

        assert_eq!(form.submit_label(), "Add Contact");
        assert_eq!(form.value(FIRST_NAME), Some(""));
        assert_eq!(form.value(LAST_NAME), Some(""));
        assert_eq!(form.value(EMAIL), Some(""));
        assert_eq!(form.value(PHONE), Some(""));
        assert_eq!(form.id(), None);
        assert!(!form.is_valid());
    }

    #[test]
    fn test_editing_populates_fields() {
        let contact = get_contact_fixture(Some(1));
        let mut form = ContactForm::new(Some(&contact));

        assert_eq!(form.submit_label(), "Update Contact");
        assert_eq!(form.value(FIRST_NAME), Some("John"));
        assert_eq!(form.value(LAST_NAME), Some("Doe"));
        assert_eq!(form.value(EMAIL), Some("john.doe@example.com"));
        assert_eq!(form.value(PHONE), Some("1234567890"));
        assert_eq!(form.id(), Some(1));

        form.set_contact(None);
        assert_eq!(form.submit_label(), "Add Contact");
        assert_eq!(form.value(FIRST_NAME), Some(""));
        assert_eq!(form.id(), None);
    }

    #[test]
    fn test_submit_emits_contact_and_resets() {
        let mut form = ContactForm::new(Some(&get_contact_fixture(Some(1))));
        form.set_value(PHONE, "5551234").unwrap();

        let contact = form.submit().unwrap();

        assert_eq!(contact.id, Some(1));
        assert_eq!(contact.phone, "5551234");
        assert_eq!(contact.email, "john.doe@example.com");
        assert_eq!(form.value(FIRST_NAME), Some(""));
        assert_eq!(form.id(), None);
    }

    #[test]
    fn test_submit_new_contact_has_no_id() {
        let mut form = ContactForm::default();
        fill(&mut form, "Jane", "Doe", "jane.doe@example.com", "0987654321");

        let contact = form.submit().unwrap();

        assert_eq!(contact.id, None);
        assert_eq!(contact.full_name(), "Jane Doe");
    }

    #[test]
    fn test_invalid_form_emits_nothing() {
        let mut form = ContactForm::default();
        fill(&mut form, "Jane", "", "not-an-email", "0987654321");

        assert_eq!(form.submit(), None);
        assert_eq!(
            form.errors(),
            vec![
                FieldError {
                    field: LAST_NAME,
                    validator: Validator::Required
                },
                FieldError {
                    field: EMAIL,
                    validator: Validator::Email
                },
            ]
        );
        // fields survive a rejected submit
        assert_eq!(form.value(FIRST_NAME), Some("Jane"));
    }

    #[test]
    fn test_empty_email_is_only_required() {
        let mut form = ContactForm::default();
        fill(&mut form, "Jane", "Doe", "", "0987654321");

        let errors = form.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "email is required");
    }

    #[test]
    fn test_email_validator() {
        for valid in ["john.doe@example.com", "a@b", "first+tag@sub.example.org"] {
            assert!(is_email(valid), "{valid} should be valid");
        }

        for invalid in [
            "plainaddress",
            "@example.com",
            "john@",
            "john..doe@example.com",
            "john doe@example.com",
            "john@-example.com",
        ] {
            assert!(!is_email(invalid), "{invalid} should be invalid");
        }

        let long_local_part = format!("{}@example.com", "a".repeat(65));
        assert!(!is_email(&long_local_part));
    }

    #[test]
    fn test_unknown_field() {
        let mut form = ContactForm::default();

        assert_eq!(
            form.set_value("nickname", "JD"),
            Err(FormError::UnknownField("nickname".to_owned()))
        );
        assert_eq!(form.value("nickname"), None);
    }
}
