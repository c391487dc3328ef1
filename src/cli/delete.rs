use clap::{arg, Arg, ArgAction, Command};
use contacts_client::Confirmation;
use std::io::{self, BufRead, Write};

use crate::context::{report, Context};

pub fn args() -> Command {
    Command::new("delete")
        .about("delete a contact")
        .arg(arg!(<ID> "contact id").value_parser(clap::value_parser!(i64)))
        .arg(
            Arg::new("yes")
                .short('y')
                .long("yes")
                .help("delete without asking for confirmation")
                .action(ArgAction::SetTrue),
        )
        .arg_required_else_help(true)
}

struct TerminalConfirmation {
    assume_yes: bool,
}

impl Confirmation for TerminalConfirmation {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        print!("{prompt} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    }
}

pub async fn handlers(delete_match: &clap::ArgMatches, context: &Context) -> anyhow::Result<()> {
    let id = *delete_match
        .get_one::<i64>("ID")
        .ok_or_else(|| anyhow::anyhow!("contact id expected"))?;

    let confirmation = TerminalConfirmation {
        assume_yes: delete_match.get_flag("yes"),
    };

    let mut list_view = context.list_view();
    let deleted = list_view.delete_contact(id, &confirmation).await;

    if !deleted && list_view.feedback_message().is_none() {
        tracing::info!("delete of contact {id} cancelled");
        return Ok(());
    }

    report(&list_view, deleted)
}
