use clap::{Args, Subcommand};

mod movement;

#[derive(Debug, Args)]
pub(crate) struct StockCommand {
    #[command(subcommand)]
    command: StockSubcommand,
}

#[derive(Debug, Subcommand)]
enum StockSubcommand {
    /// Receive or issue units of a product
    Move(movement::MoveArgs),
}

pub(crate) async fn run(command: StockCommand) -> Result<(), String> {
    match command.command {
        StockSubcommand::Move(args) => movement::run(args).await,
    }
}
