use crate::render::{run_list, ListArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use hiring_views::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Hiring list views",
    about = "Serve and render the recruiting candidate, job, and job-fit report lists",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Render one page of a list to stdout
    List(ListArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::List(args) => run_list(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use hiring_views::EntityKind;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn list_arguments_parse() {
        let cli = Cli::try_parse_from([
            "hiring-views-api",
            "list",
            "candidates",
            "--filter",
            "location=local",
            "--filter",
            "experience=senior",
            "--direction",
            "desc",
            "--page",
            "2",
        ])
        .expect("arguments parse");

        let Some(Command::List(args)) = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(args.kind, EntityKind::Candidates);
        assert_eq!(args.filters.len(), 2);
        assert_eq!(args.filters[1], ("experience".to_string(), "senior".to_string()));
        assert_eq!(args.page, Some(2));
    }

    #[test]
    fn rejects_unknown_list() {
        assert!(Cli::try_parse_from(["hiring-views-api", "list", "invoices"]).is_err());
    }
}
