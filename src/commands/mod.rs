pub mod bind;
pub mod init;
pub mod leaderboard;
pub mod stats;
pub mod track;
pub mod unbind;

use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Track active time in the foreground")]
    Track,
    #[command(about = "Show the leaderboard")]
    Leaderboard(leaderboard::LeaderboardArgs),
    #[command(about = "Show your accumulated time and rank")]
    Stats,
    #[command(about = "Bind this installation to a remote account")]
    Bind,
    #[command(about = "Unbind the remote account and switch to offline tracking")]
    Unbind,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> anyhow::Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Track => track::cmd().await,
            Commands::Leaderboard(args) => leaderboard::cmd(args).await,
            Commands::Stats => stats::cmd().await,
            Commands::Bind => bind::cmd().await,
            Commands::Unbind => unbind::cmd().await,
        }
    }
}
