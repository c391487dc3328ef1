use ascii_table::{Align, AsciiTable};
use clap::Command;

use crate::context::Context;

pub fn args() -> Command {
    Command::new("list").about("list contacts")
}

pub async fn handlers(_list_match: &clap::ArgMatches, context: &Context) -> anyhow::Result<()> {
    let list_view = context.list_view();
    if !list_view.init().await {
        return Err(anyhow::anyhow!(
            "failed to list contacts from {}",
            context.endpoint
        ));
    }

    let table_data: Vec<Vec<String>> = list_view
        .contacts()
        .into_iter()
        .map(|contact| {
            vec![
                contact.id.map(|id| id.to_string()).unwrap_or_default(),
                contact.first_name,
                contact.last_name,
                contact.email,
                contact.phone,
            ]
        })
        .collect();

    if table_data.is_empty() {
        tracing::info!("no contacts found at {}", context.endpoint);

        return Ok(());
    }

    let mut ascii_table = AsciiTable::default();

    for (column, header) in ["ID", "FIRST NAME", "LAST NAME", "EMAIL", "PHONE"]
        .iter()
        .enumerate()
    {
        ascii_table
            .column(column)
            .set_header(*header)
            .set_align(Align::Left);
    }

    ascii_table.print(table_data);

    Ok(())
}
