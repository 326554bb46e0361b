use overlay_core::catalog::InMemoryCatalog;
use overlay_core::errors::{OverlayError, Result};
use overlay_core::manager::CollectionManager;
use overlay_core::model::{CatalogEntry, CharacterHandle, OverlayCategory, OverlayId, OverlayZone};
use overlay_core::persistence::{RecordingSink, SnapshotSink};
use overlay_core::render::{DecorationKey, DecorationRenderer, RecordingRenderer};
use overlay_core::snapshot::OverlaySnapshot;

pub type TestManager = CollectionManager<InMemoryCatalog, RecordingRenderer, RecordingSink>;

/// Character handle used by every fixture manager
#[allow(dead_code)]
pub const CHARACTER: CharacterHandle = CharacterHandle(1001);

/// Shorthand for `OverlayId::new`
#[allow(dead_code)]
pub fn id(n: u16) -> OverlayId {
    OverlayId::new(n)
}

/// Catalog fixture
///
/// | id | collection | category  | zone      |
/// |----|------------|-----------|-----------|
/// | 1  | mpbeach    | tattoo    | torso     |
/// | 2  | mpbeach    | tattoo    | head      |
/// | 3  | mpbiker    | tattoo    | left_arm  |
/// | 4  | mpbusiness | badge     |           |
/// | 5  | mpbusiness | badge     |           |
/// | 6  | mphipster  | hairstyle |           |
/// | 7  | mpheist    | tattoo    | torso     |
/// | 12 | mpstunt    | hairstyle |           |
///
/// Id 9 is deliberately absent.
#[allow(dead_code)]
pub fn catalog() -> InMemoryCatalog {
    InMemoryCatalog::new(vec![
        CatalogEntry::new(id(1), "mpbeach", "MP_Bea_M_Chest_000", "Anchor", OverlayCategory::Tattoo)
            .with_zone(OverlayZone::Torso),
        CatalogEntry::new(id(2), "mpbeach", "MP_Bea_M_Head_000", "Star", OverlayCategory::Tattoo)
            .with_zone(OverlayZone::Head),
        CatalogEntry::new(id(3), "mpbiker", "MP_MP_Biker_Tat_000_M", "Demon", OverlayCategory::Tattoo)
            .with_zone(OverlayZone::LeftArm),
        CatalogEntry::new(id(4), "mpbusiness", "MP_Buis_M_Badge_000", "Crest", OverlayCategory::Badge),
        CatalogEntry::new(id(5), "mpbusiness", "MP_Buis_M_Badge_001", "Shield", OverlayCategory::Badge),
        CatalogEntry::new(id(6), "mphipster", "FM_Hip_M_Hair_000", "Fade", OverlayCategory::Hairstyle),
        CatalogEntry::new(id(7), "mpheist", "MP_Heist_Tat_007", "Rose", OverlayCategory::Tattoo)
            .with_zone(OverlayZone::Torso),
        CatalogEntry::new(id(12), "mpstunt", "MP_Stunt_Hair_012", "Spikes", OverlayCategory::Hairstyle),
    ])
    .expect("fixture catalog has unique ids")
}

/// Manager over the fixture catalog with recording collaborators
#[allow(dead_code)]
pub fn new_manager() -> TestManager {
    CollectionManager::new(CHARACTER, catalog(), RecordingRenderer::new(), RecordingSink::new())
}

/// Manager pre-loaded with `(id, count)` pairs; the load's render pass is
/// cleared from the renderer so tests start from a clean call log
#[allow(dead_code)]
pub fn manager_with(pairs: &[(u16, u8)]) -> TestManager {
    let mut manager = new_manager();
    manager
        .load(Some(&snapshot_of(pairs)))
        .expect("fixture load renders");
    manager.renderer_mut().reset();
    manager
}

/// Build a snapshot from `(id, count)` pairs
#[allow(dead_code)]
pub fn snapshot_of(pairs: &[(u16, u8)]) -> OverlaySnapshot {
    pairs.iter().map(|&(n, count)| (id(n), count)).collect()
}

/// `(id, count)` pairs of the active collection in order
#[allow(dead_code)]
pub fn pairs(manager: &TestManager) -> Vec<(u16, u8)> {
    manager
        .entries()
        .iter()
        .map(|entry| (entry.id.get(), entry.apply_count.get()))
        .collect()
}

/// Decoration key the fixture catalog produces for `n`
#[allow(dead_code)]
pub fn key_for(n: u16) -> DecorationKey {
    let catalog = catalog();
    let entry = overlay_core::catalog::OverlayCatalog::lookup(&catalog, id(n))
        .expect("id present in fixture catalog");
    DecorationKey::for_entry(entry)
}

/// Sink that rejects every snapshot
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct FailingSink {
    pub attempts: usize,
}

impl SnapshotSink for FailingSink {
    fn save(&mut self, _snapshot: &OverlaySnapshot) -> Result<()> {
        self.attempts += 1;
        Err(OverlayError::Persistence {
            message: "server unreachable".to_string(),
        })
    }
}

/// Renderer whose apply calls always fail
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct FailingRenderer {
    pub clears: usize,
}

impl DecorationRenderer for FailingRenderer {
    fn clear_decorations(&mut self, _character: CharacterHandle) -> Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn apply_decoration(&mut self, _character: CharacterHandle, _key: DecorationKey) -> Result<()> {
        Err(OverlayError::Render {
            message: "native call rejected".to_string(),
        })
    }
}
