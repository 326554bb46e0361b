//! Overlay CLI
//!
//! Drives one character's overlay collection from the command line

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "overlays")]
#[command(about = "Manage the decorative overlays applied to a character", long_about = None)]
struct Cli {
    #[command(flatten)]
    session: commands::SessionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Add an overlay, or stack it once more
    Add(commands::overlay::IdArgs),
    /// Remove one overlay
    Remove(commands::overlay::IdArgs),
    /// Remove every overlay in a category (tattoo, badge, hairstyle)
    Clear(commands::overlay::ClearArgs),
    /// Remove tattoos painted on one body zone
    ClearZone(commands::overlay::ClearZoneArgs),
    /// Re-render the saved collection
    Refresh,
    /// List the saved collection
    Show,
    /// Print the collection menus
    Menus(commands::menus::MenusArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add(args) => commands::overlay::execute_add(&cli.session, args),
        Commands::Remove(args) => commands::overlay::execute_remove(&cli.session, args),
        Commands::Clear(args) => commands::overlay::execute_clear(&cli.session, args),
        Commands::ClearZone(args) => commands::overlay::execute_clear_zone(&cli.session, args),
        Commands::Refresh => commands::overlay::execute_refresh(&cli.session),
        Commands::Show => commands::overlay::execute_show(&cli.session),
        Commands::Menus(args) => commands::menus::execute(&cli.session, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
