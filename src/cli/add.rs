use clap::Command;
use contacts_client::ContactForm;

use crate::context::{report, Context};
use crate::fields;

pub fn args() -> Command {
    fields::with_field_args(Command::new("add").about("add a contact"))
        .arg_required_else_help(true)
}

pub async fn handlers(add_match: &clap::ArgMatches, context: &Context) -> anyhow::Result<()> {
    let mut list_view = context.list_view();
    list_view.add_new_contact();

    let mut form = ContactForm::new(list_view.selected_contact());
    fields::apply(&mut form, add_match)?;

    let contact = fields::submit(&mut form)?;

    tracing::info!("adding contact '{}'", contact.full_name());

    let succeeded = list_view.submit_contact(contact).await;

    report(&list_view, succeeded)
}
