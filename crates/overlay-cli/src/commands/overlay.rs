//! Collection commands
//!
//! Usage: overlays --catalog <YAML> --record <JSON> <add|remove|clear|clear-zone|refresh|show>

use clap::Args;
use overlay_core::catalog::OverlayCatalog;
use overlay_core::commands::{Command, CommandOutcome};
use overlay_core::model::{OverlayCategory, OverlayId, OverlayZone};

use super::{print_render, CliResult, SessionArgs};

#[derive(Debug, Args)]
pub struct IdArgs {
    /// Overlay id
    pub id: u16,
}

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// tattoo, badge or hairstyle
    pub category: OverlayCategory,
}

#[derive(Debug, Args)]
pub struct ClearZoneArgs {
    /// Body zone, e.g. torso, head, left_arm
    pub zone: OverlayZone,
}

pub fn execute_add(session: &SessionArgs, args: IdArgs) -> CliResult<()> {
    let mut manager = session.open()?;
    let id = OverlayId::new(args.id);

    manager.apply(Command::Add { overlay_id: id })?;

    let count = manager.apply_count(id).map_or(0, |c| c.get());
    println!("added overlay {} (count {})", id, count);
    print_render(&manager);
    Ok(())
}

pub fn execute_remove(session: &SessionArgs, args: IdArgs) -> CliResult<()> {
    let mut manager = session.open()?;
    let id = OverlayId::new(args.id);

    if !manager.contains(id) {
        println!("overlay {} is not active", id);
        return Ok(());
    }
    manager.apply(Command::Remove { overlay_id: id })?;

    println!("removed overlay {}", id);
    print_render(&manager);
    Ok(())
}

pub fn execute_clear(session: &SessionArgs, args: ClearArgs) -> CliResult<()> {
    let mut manager = session.open()?;

    let outcome = manager.apply(Command::RemoveCategory {
        category: args.category,
    })?;

    if let CommandOutcome::Removed { count } = outcome {
        println!("removed {} {} overlay(s)", count, args.category.as_str());
    }
    print_render(&manager);
    Ok(())
}

pub fn execute_clear_zone(session: &SessionArgs, args: ClearZoneArgs) -> CliResult<()> {
    let mut manager = session.open()?;

    let outcome = manager.apply(Command::RemoveTattoosInZone { zone: args.zone })?;

    if let CommandOutcome::Removed { count } = outcome {
        println!("removed {} tattoo(s) on {}", count, args.zone.as_str());
    }
    print_render(&manager);
    Ok(())
}

pub fn execute_refresh(session: &SessionArgs) -> CliResult<()> {
    let mut manager = session.open()?;

    manager.apply(Command::Refresh)?;

    print_render(&manager);
    Ok(())
}

pub fn execute_show(session: &SessionArgs) -> CliResult<()> {
    let manager = session.open()?;

    if manager.is_empty() {
        println!("no active overlays");
        return Ok(());
    }
    for entry in manager.entries() {
        match manager.catalog().lookup(entry.id) {
            Some(info) => println!(
                "{}\t{}\t{}\t{}",
                entry.id, entry.apply_count, info.display_name, info.collection
            ),
            None => println!("{}\t{}\t<not in catalog>", entry.id, entry.apply_count),
        }
    }
    Ok(())
}
