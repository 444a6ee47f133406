use anyhow::Result;
use clap::Parser;
use grid_snake::game::GridConfig;
use grid_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Grid-based snake in the terminal")]
struct Cli {
    /// Board width in pixels
    #[arg(long, default_value = "600")]
    board_width: u32,

    /// Board height in pixels
    #[arg(long, default_value = "600")]
    board_height: u32,

    /// Cell size in pixels; must divide both board dimensions
    #[arg(long, default_value = "25")]
    cell_size: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Invalid geometry is a caller error and fails before anything runs
    let config = GridConfig::new(cli.board_width, cli.board_height, cli.cell_size)?;

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    Ok(())
}
