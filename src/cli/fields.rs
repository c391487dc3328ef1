use clap::{Arg, Command};
use contacts_client::{form, ContactForm};

const FIELDS: [(&str, &str, &str); 4] = [
    ("first-name", form::FIRST_NAME, "first name"),
    ("last-name", form::LAST_NAME, "last name"),
    ("email", form::EMAIL, "email address"),
    ("phone", form::PHONE, "phone number"),
];

pub fn with_field_args(command: Command) -> Command {
    FIELDS
        .iter()
        .fold(command, |command, (flag, _, help)| {
            command.arg(Arg::new(*flag).long(*flag).help(*help).num_args(1))
        })
}

/// Copies every field flag that was given into the form.
pub fn apply(form: &mut ContactForm, matches: &clap::ArgMatches) -> anyhow::Result<()> {
    for (flag, field, _) in FIELDS.iter() {
        if let Some(value) = matches.get_one::<String>(flag) {
            form.set_value(field, value)?;
        }
    }

    Ok(())
}

/// Submits the form, turning validation failures into one error listing them.
pub fn submit(form: &mut ContactForm) -> anyhow::Result<contacts_core::Contact> {
    let errors = form.errors();

    match form.submit() {
        Some(contact) => Ok(contact),
        None => {
            let errors: Vec<String> = errors.iter().map(|err| err.to_string()).collect();
            Err(anyhow::anyhow!("invalid contact: {}", errors.join(", ")))
        }
    }
}
