use clap::Command;

mod add;
mod context;
mod delete;
mod edit;
mod fields;
mod list;

use context::Context;

fn cli() -> Command {
    Command::new("contacts-cli")
        .about("manage contacts")
        .version("0.1.0")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(add::args())
        .subcommand(delete::args())
        .subcommand(edit::args())
        .subcommand(list::args())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let matches = cli().get_matches();

    let context = Context::from_env()?;

    match matches.subcommand() {
        Some(("add", submatches)) => Ok(add::handlers(submatches, &context).await?),
        Some(("delete", submatches)) => Ok(delete::handlers(submatches, &context).await?),
        Some(("edit", submatches)) => Ok(edit::handlers(submatches, &context).await?),
        Some(("list", submatches)) => Ok(list::handlers(submatches, &context).await?),
        _ => unreachable!(), // If all subcommands are defined above, anything else is unreachable
    }
}
