use clap::{arg, Command};
use contacts_client::ContactForm;

use crate::context::{report, Context};
use crate::fields;

pub fn args() -> Command {
    fields::with_field_args(
        Command::new("edit")
            .about("edit a contact; fields not given keep their current value")
            .arg(arg!(<ID> "contact id").value_parser(clap::value_parser!(i64))),
    )
    .arg_required_else_help(true)
}

pub async fn handlers(edit_match: &clap::ArgMatches, context: &Context) -> anyhow::Result<()> {
    let id = *edit_match
        .get_one::<i64>("ID")
        .ok_or_else(|| anyhow::anyhow!("contact id expected"))?;

    let contact = context.data_service.get(id).await?;

    let mut list_view = context.list_view();
    list_view.edit_contact(contact);

    let mut form = ContactForm::new(list_view.selected_contact());
    fields::apply(&mut form, edit_match)?;

    let contact = fields::submit(&mut form)?;

    tracing::info!("updating contact {id}");

    let succeeded = list_view.submit_contact(contact).await;

    report(&list_view, succeeded)
}
