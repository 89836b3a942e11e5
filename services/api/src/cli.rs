use crate::demo::{run_assign_preview, run_demo, AssignPreviewArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use workmatch::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Work-Match Assignment Service",
    about = "Match remote workers to short-term paid tasks from the command line or over HTTP",
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
    /// Inspect the auto-assignment screening without persisting anything
    Assign {
        #[command(subcommand)]
        command: AssignCommand,
    },
    /// Run an end-to-end CLI demo covering preview, assignment, and broadcast
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum AssignCommand {
    /// Evaluate a task draft against the roster and print the diagnostics
    Preview(AssignPreviewArgs),
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
        Command::Assign {
            command: AssignCommand::Preview(args),
        } => run_assign_preview(args),
        Command::Demo(args) => run_demo(args),
    }
}
