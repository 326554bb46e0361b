//! Menus command
//!
//! Usage: overlays [--catalog <YAML>] menus [--json]

use clap::Args;
use overlay_core::menus::{collection_submenus, populated_submenus};

use super::{CliResult, SessionArgs};

#[derive(Debug, Args)]
pub struct MenusArgs {
    /// Print the submenu models as JSON
    #[arg(long)]
    pub json: bool,
}

/// Print one line per collection, filled from `--catalog` when given
pub fn execute(session: &SessionArgs, args: MenusArgs) -> CliResult<()> {
    session.load_config()?;
    let menus = match &session.catalog {
        Some(path) => populated_submenus(&overlay_store::load_catalog_file(path)?),
        None => collection_submenus(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&menus)?);
        return Ok(());
    }
    for menu in &menus {
        println!(
            "{}\t{}\t{}",
            menu.key,
            menu.title,
            menu.sub_menu.menu_items.len()
        );
    }
    Ok(())
}
