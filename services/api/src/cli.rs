use crate::offline::{run_audit_file, AuditFileArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use site_audit::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Site Audit",
    about = "Score restaurant and bar websites for AI readiness from the command line",
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
    /// Audit a local HTML file and print the report as JSON
    Audit(AuditFileArgs),
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
        Command::Audit(args) => run_audit_file(args),
    }
}
