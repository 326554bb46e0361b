//! Overlay collection manager
//!
//! One `CollectionManager` owns the active overlays of one character session.
//! Every mutation goes through it and ends the same way: the new state is
//! persisted through the `SnapshotSink` and the character is re-rendered from
//! scratch through the `DecorationRenderer`.
//!
//! ## Logging
//!
//! Each public operation emits exactly one `start` event and one `end` or
//! `end_error` event, tagged with the manager's session id. Persist and render
//! steps run inside those operations log at debug level only.

use std::time::Instant;

use overlay_core_types::SessionId;

use crate::catalog::OverlayCatalog;
use crate::config::ManagerConfig;
use crate::errors::Result;
use crate::model::{
    ApplyCount, CharacterHandle, OverlayCategory, OverlayEntry, OverlayId, OverlayZone,
};
use crate::ops::ActiveCollection;
use crate::persistence::SnapshotSink;
use crate::render::{render_overlays, DecorationRenderer, RenderPolicy, RenderReport};
use crate::snapshot::OverlaySnapshot;
use crate::{log_op_end, log_op_error, log_op_start};

/// Manages the active overlay collection of one character
///
/// Collaborators are injected: `C` answers metadata lookups, `R` paints
/// decorations, `P` receives persisted snapshots.
///
/// # Example
/// ```
/// use overlay_core::catalog::InMemoryCatalog;
/// use overlay_core::manager::CollectionManager;
/// use overlay_core::model::{CatalogEntry, CharacterHandle, OverlayCategory, OverlayId};
/// use overlay_core::persistence::RecordingSink;
/// use overlay_core::render::RecordingRenderer;
///
/// let catalog = InMemoryCatalog::new(vec![CatalogEntry::new(
///     OverlayId::new(7),
///     "mpbeach",
///     "MP_Bea_M_Back_000",
///     "Ship Arms",
///     OverlayCategory::Tattoo,
/// )])
/// .unwrap();
///
/// let mut manager = CollectionManager::new(
///     CharacterHandle(1),
///     catalog,
///     RecordingRenderer::new(),
///     RecordingSink::new(),
/// );
/// manager.add(OverlayId::new(7)).unwrap();
/// manager.add(OverlayId::new(7)).unwrap();
///
/// assert_eq!(manager.apply_count(OverlayId::new(7)).map(|c| c.get()), Some(2));
/// assert_eq!(manager.sink().save_count(), 2);
/// ```
#[derive(Debug)]
pub struct CollectionManager<C, R, P> {
    session_id: SessionId,
    character: CharacterHandle,
    config: ManagerConfig,
    collection: ActiveCollection,
    catalog: C,
    renderer: R,
    sink: P,
    last_render: Option<RenderReport>,
}

impl<C, R, P> CollectionManager<C, R, P>
where
    C: OverlayCatalog,
    R: DecorationRenderer,
    P: SnapshotSink,
{
    /// Create a manager with an empty collection and default configuration
    pub fn new(character: CharacterHandle, catalog: C, renderer: R, sink: P) -> Self {
        Self {
            session_id: SessionId::new(),
            character,
            config: ManagerConfig::default(),
            collection: ActiveCollection::new(),
            catalog,
            renderer,
            sink,
            last_render: None,
        }
    }

    pub fn with_config(mut self, config: ManagerConfig) -> Self {
        self.config = config;
        self
    }

    /// Tag log events with a caller-chosen session id
    pub fn with_session_id(mut self, session_id: SessionId) -> Self {
        self.session_id = session_id;
        self
    }

    // ===== Accessors =====

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn character(&self) -> CharacterHandle {
        self.character
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    pub fn render_policy(&self) -> RenderPolicy {
        self.config.render_policy
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn sink(&self) -> &P {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut P {
        &mut self.sink
    }

    /// Report of the most recent render pass, if any ran
    pub fn last_render(&self) -> Option<&RenderReport> {
        self.last_render.as_ref()
    }

    pub fn into_parts(self) -> (C, R, P) {
        (self.catalog, self.renderer, self.sink)
    }

    // ===== Queries =====

    pub fn contains(&self, id: OverlayId) -> bool {
        self.collection.contains(id)
    }

    pub fn apply_count(&self, id: OverlayId) -> Option<ApplyCount> {
        self.collection.apply_count(id)
    }

    /// Active entries in render order
    pub fn entries(&self) -> &[OverlayEntry] {
        self.collection.entries()
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// Current state as a snapshot, without persisting it
    pub fn snapshot(&self) -> OverlaySnapshot {
        self.collection.to_snapshot()
    }

    // ===== Operations =====

    /// Add an overlay, or stack it once more if already active
    ///
    /// Either way the collection is persisted and re-rendered. The catalog is
    /// not consulted: an unknown id is accepted and surfaces at render time.
    ///
    /// # Errors
    ///
    /// Returns the sink's or renderer's error. The in-memory change is kept
    /// and the render still runs after a sink failure.
    pub fn add(&mut self, id: OverlayId) -> Result<()> {
        log_op_start!(
            "add_overlay",
            session_id = self.session_id.as_str(),
            overlay_id = id.get()
        );
        let start = Instant::now();
        let result = self.add_impl(id);
        self.finish_op("add_overlay", start, result)
    }

    fn add_impl(&mut self, id: OverlayId) -> Result<()> {
        if !self.collection.insert_new(id) {
            self.collection.bump(id);
        }
        self.persist_then_render()
    }

    /// Increment an active overlay's count, capped at 9
    ///
    /// No-op for an inactive id. Does not persist or render; returns the new
    /// count when the id was active.
    pub fn bump_count(&mut self, id: OverlayId) -> Option<ApplyCount> {
        let count = self.collection.bump(id);
        tracing::debug!(
            session_id = self.session_id.as_str(),
            overlay_id = id.get(),
            apply_count = count.map(ApplyCount::get),
            "bump count"
        );
        count
    }

    /// Remove an overlay, then persist and re-render
    ///
    /// Removing an inactive id does nothing and is not an error.
    ///
    /// # Errors
    ///
    /// Returns the sink's or renderer's error. The entry stays removed.
    pub fn remove(&mut self, id: OverlayId) -> Result<()> {
        log_op_start!(
            "remove_overlay",
            session_id = self.session_id.as_str(),
            overlay_id = id.get()
        );
        let start = Instant::now();
        let result = self.remove_impl(id);
        self.finish_op("remove_overlay", start, result)
    }

    fn remove_impl(&mut self, id: OverlayId) -> Result<()> {
        if self.collection.remove(id).is_none() {
            tracing::debug!(overlay_id = id.get(), "overlay not active, nothing to remove");
            return Ok(());
        }
        self.persist_then_render()
    }

    /// Remove an overlay without persisting or rendering
    ///
    /// For callers batching several removals before one `save` and `render`.
    /// Returns whether the id was active.
    pub fn remove_deferred(&mut self, id: OverlayId) -> bool {
        let removed = self.collection.remove(id).is_some();
        tracing::debug!(
            session_id = self.session_id.as_str(),
            overlay_id = id.get(),
            removed,
            "deferred remove"
        );
        removed
    }

    /// Remove every active overlay from one catalog category
    ///
    /// Active ids unknown to the catalog are kept. Persists and re-renders
    /// once, even when nothing matched. Returns how many entries were removed.
    ///
    /// # Errors
    ///
    /// Returns the sink's or renderer's error. The removals are kept.
    pub fn remove_by_category(&mut self, category: OverlayCategory) -> Result<usize> {
        log_op_start!(
            "remove_by_category",
            session_id = self.session_id.as_str(),
            category = category.as_str()
        );
        let start = Instant::now();
        let result = self.remove_by_category_impl(category);
        self.finish_op("remove_by_category", start, result)
    }

    fn remove_by_category_impl(&mut self, category: OverlayCategory) -> Result<usize> {
        let members = self.catalog.entries_by_category(category);
        let removed = self
            .collection
            .retain(|entry| !members.contains(&entry.id));
        tracing::debug!(category = category.as_str(), removed, "category filtered");
        self.persist_then_render()?;
        Ok(removed)
    }

    /// Remove active tattoos painted on one body zone
    ///
    /// Same batching as `remove_by_category`: one filtering pass, then one
    /// persist and one render.
    ///
    /// # Errors
    ///
    /// Returns the sink's or renderer's error. The removals are kept.
    pub fn remove_tattoos_in_zone(&mut self, zone: OverlayZone) -> Result<usize> {
        log_op_start!(
            "remove_tattoos_in_zone",
            session_id = self.session_id.as_str(),
            zone = zone.as_str()
        );
        let start = Instant::now();
        let result = self.remove_tattoos_in_zone_impl(zone);
        self.finish_op("remove_tattoos_in_zone", start, result)
    }

    fn remove_tattoos_in_zone_impl(&mut self, zone: OverlayZone) -> Result<usize> {
        let tattoos = self.catalog.entries_by_category(OverlayCategory::Tattoo);
        let catalog = &self.catalog;
        let removed = self.collection.retain(|entry| {
            let in_zone = tattoos.contains(&entry.id)
                && catalog
                    .lookup(entry.id)
                    .is_some_and(|info| info.is_tattoo_in_zone(zone));
            !in_zone
        });
        tracing::debug!(zone = zone.as_str(), removed, "zone filtered");
        self.persist_then_render()?;
        Ok(removed)
    }

    /// Restore a persisted snapshot and render it once
    ///
    /// `None` is a no-op. Pairs are inserted without merging: an id that is
    /// already active takes the snapshot's count in place. Counts outside
    /// `1..=9` are pulled to the nearest bound. Nothing is persisted.
    ///
    /// Returns the render report, or `None` when there was nothing to load.
    ///
    /// # Errors
    ///
    /// Returns the renderer's error.
    pub fn load(&mut self, snapshot: Option<&OverlaySnapshot>) -> Result<Option<RenderReport>> {
        let Some(snapshot) = snapshot else {
            tracing::debug!(
                session_id = self.session_id.as_str(),
                "no snapshot to load"
            );
            return Ok(None);
        };

        log_op_start!(
            "load_overlays",
            session_id = self.session_id.as_str(),
            snapshot_len = snapshot.len()
        );
        let start = Instant::now();
        let result = self.load_impl(snapshot).map(Some);
        self.finish_op("load_overlays", start, result)
    }

    fn load_impl(&mut self, snapshot: &OverlaySnapshot) -> Result<RenderReport> {
        for (id, raw) in snapshot.iter() {
            let count = ApplyCount::new(raw).unwrap_or_else(|_| {
                let clamped = ApplyCount::clamped(raw);
                tracing::warn!(
                    session_id = self.session_id.as_str(),
                    overlay_id = id.get(),
                    stored = raw,
                    applied = clamped.get(),
                    "stored apply count out of range, clamping"
                );
                clamped
            });
            self.collection.insert(OverlayEntry::with_count(id, count));
        }
        self.rerender()
    }

    /// Hand the current state to the persistence collaborator
    ///
    /// Returns the snapshot that was sent.
    ///
    /// # Errors
    ///
    /// Returns the sink's error.
    pub fn save(&mut self) -> Result<OverlaySnapshot> {
        log_op_start!("save_overlays", session_id = self.session_id.as_str());
        let start = Instant::now();
        let result = self.persist();
        self.finish_op("save_overlays", start, result)
    }

    /// Clear the character and re-apply every active overlay
    ///
    /// A catalog miss is reported, not returned: see `RenderReport`.
    ///
    /// # Errors
    ///
    /// Returns the renderer's error.
    pub fn render(&mut self) -> Result<RenderReport> {
        log_op_start!("render_overlays", session_id = self.session_id.as_str());
        let start = Instant::now();
        let result = self.rerender();
        self.finish_op("render_overlays", start, result)
    }

    /// Bind the manager to a new character handle and render onto it
    ///
    /// # Errors
    ///
    /// Returns the renderer's error.
    pub fn set_character(&mut self, character: CharacterHandle) -> Result<RenderReport> {
        log_op_start!(
            "set_character",
            session_id = self.session_id.as_str(),
            character = character.0
        );
        let start = Instant::now();
        self.character = character;
        let result = self.rerender();
        self.finish_op("set_character", start, result)
    }

    // ===== Internal steps =====

    fn persist(&mut self) -> Result<OverlaySnapshot> {
        let snapshot = self.collection.to_snapshot();
        self.sink.save(&snapshot)?;
        tracing::debug!(overlays = snapshot.len(), "snapshot persisted");
        Ok(snapshot)
    }

    /// Terminal step of every mutation
    ///
    /// The render runs whether or not the sink accepted the snapshot. When
    /// both fail the persist error is returned.
    fn persist_then_render(&mut self) -> Result<()> {
        let persisted = self.persist();
        if let Err(e) = &persisted {
            tracing::debug!(error = %e, "persist failed, rendering anyway");
        }
        let rendered = self.rerender();
        persisted?;
        rendered?;
        Ok(())
    }

    fn rerender(&mut self) -> Result<RenderReport> {
        let report = render_overlays(
            self.collection.entries(),
            &self.catalog,
            &mut self.renderer,
            self.character,
            self.config.render_policy,
        )?;
        self.last_render = Some(report.clone());
        Ok(report)
    }

    fn finish_op<T>(&self, op: &'static str, start: Instant, result: Result<T>) -> Result<T> {
        let duration_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => {
                log_op_end!(
                    op,
                    duration_ms = duration_ms,
                    session_id = self.session_id.as_str(),
                    active_len = self.collection.len()
                );
            }
            Err(e) => {
                log_op_error!(
                    op,
                    e.clone(),
                    duration_ms = duration_ms,
                    session_id = self.session_id.as_str()
                );
            }
        }
        result
    }
}
