use clap::Subcommand;

use crate::Result;

pub(crate) mod info;
pub(crate) mod parse;
pub(crate) mod validate;

#[derive(Subcommand, Debug, Default)]
pub(crate) enum Command {
    /// Run the HTTP server
    #[default]
    Serve,
    /// Print the normalized form of a handwritten recipe name
    Parse { input: String },
    /// Load a seed file into an empty cookbook and summarize every recipe in it
    Validate { path: std::path::PathBuf },
    /// Print version information
    Print,
}

impl Command {
    pub(crate) async fn run(&self) -> Result<()> {
        match &self {
            Command::Serve => crate::http_server::cmd::serve().await,
            Command::Parse { input } => parse::print_parsed(input),
            Command::Validate { path } => validate::validate(path),
            Command::Print => {
                info::print_info();
                Ok(())
            }
        }
    }
}
