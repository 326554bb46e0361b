//! Menu-description export
//!
//! The UI groups overlays by catalog collection. This module exports the fixed
//! collection list and empty submenu containers for the UI layer to fill.

use serde::{Deserialize, Serialize};

use crate::catalog::InMemoryCatalog;
use crate::model::OverlayId;

/// Rows shown per submenu page
pub const NUM_VISIBLE_ITEMS: usize = 10;

/// Catalog collection keys and their menu titles, in display order
pub const CATEGORY_MENUS: [(&str, &str); 20] = [
    ("mpbeach", "Beach"),
    ("mpbiker", "Biker"),
    ("mpbusiness", "Business"),
    ("mpchristmas2", "Christmas"),
    ("mpexecutive", "Executive"),
    ("mpgunrunning", "Gun Running"),
    ("mphalloween", "Halloween"),
    ("mpheist", "Heist"),
    ("mphipster", "Hipster"),
    ("mpimportexport", "Import & Export"),
    ("mpindependence", "Independence"),
    ("mplowrider", "Lowrider"),
    ("mplowrider2", "Lowrider II"),
    ("mpluxe", "Deluxe"),
    ("mpluxe2", "Deluxe II"),
    ("multiplayer", "Multi"),
    ("singleplayer", "Single"),
    ("mpstunt", "Stunt"),
    ("mpvalentines", "Valentines"),
    ("blazingtattoo", "Blazing Tattoo"),
];

pub fn category_menus() -> &'static [(&'static str, &'static str)] {
    &CATEGORY_MENUS
}

/// One selectable overlay row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub title: String,
    pub overlay_id: OverlayId,
}

/// Menu container in the shape the UI layer consumes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuModel {
    pub header_title: String,
    pub status_title: String,
    pub num_visible_items: usize,
    pub menu_items: Vec<MenuItem>,
}

/// Submenu entry for one collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubMenu {
    pub key: String,
    pub title: String,
    pub sub_menu: MenuModel,
}

/// Empty submenu titled `title`
pub fn sub_menu(key: &str, title: &str) -> SubMenu {
    SubMenu {
        key: key.to_string(),
        title: title.to_string(),
        sub_menu: MenuModel {
            header_title: title.to_string(),
            status_title: String::new(),
            num_visible_items: NUM_VISIBLE_ITEMS,
            menu_items: Vec::new(),
        },
    }
}

/// One empty submenu per collection, in display order
pub fn collection_submenus() -> Vec<SubMenu> {
    CATEGORY_MENUS
        .iter()
        .map(|(key, title)| sub_menu(key, title))
        .collect()
}

/// Submenus filled with the catalog's entries for each collection
///
/// Catalog entries in collections outside the fixed list are not shown.
pub fn populated_submenus(catalog: &InMemoryCatalog) -> Vec<SubMenu> {
    let mut menus = collection_submenus();
    for menu in &mut menus {
        menu.sub_menu.menu_items = catalog
            .entries_in_collection(&menu.key)
            .map(|entry| MenuItem {
                title: entry.display_name.clone(),
                overlay_id: entry.id,
            })
            .collect();
    }
    menus
}
