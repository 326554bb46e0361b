//! Single entry point for driving a manager with `Command`s
//!
//! ## Example
//!
//! ```
//! use overlay_core::catalog::InMemoryCatalog;
//! use overlay_core::commands::{Command, CommandOutcome};
//! use overlay_core::manager::CollectionManager;
//! use overlay_core::model::{CharacterHandle, OverlayId};
//! use overlay_core::persistence::NullSink;
//! use overlay_core::render::RecordingRenderer;
//!
//! let mut manager = CollectionManager::new(
//!     CharacterHandle(1),
//!     InMemoryCatalog::default(),
//!     RecordingRenderer::new(),
//!     NullSink,
//! );
//!
//! let outcome = manager
//!     .apply(Command::Add { overlay_id: OverlayId::new(4) })
//!     .unwrap();
//! assert_eq!(outcome, CommandOutcome::Applied);
//! assert!(manager.contains(OverlayId::new(4)));
//! ```

use crate::catalog::OverlayCatalog;
use crate::commands::{Command, CommandOutcome};
use crate::errors::Result;
use crate::manager::CollectionManager;
use crate::persistence::SnapshotSink;
use crate::render::DecorationRenderer;

impl<C, R, P> CollectionManager<C, R, P>
where
    C: OverlayCatalog,
    R: DecorationRenderer,
    P: SnapshotSink,
{
    /// Run one command
    ///
    /// Dispatches to the matching operation; logging happens there.
    ///
    /// # Errors
    ///
    /// Returns whatever the dispatched operation returns.
    pub fn apply(&mut self, cmd: Command) -> Result<CommandOutcome> {
        tracing::debug!(session_id = self.session_id().as_str(), ?cmd, "apply command");

        match cmd {
            Command::Add { overlay_id } => {
                self.add(overlay_id)?;
                Ok(CommandOutcome::Applied)
            }
            Command::Remove { overlay_id } => {
                self.remove(overlay_id)?;
                Ok(CommandOutcome::Applied)
            }
            Command::RemoveCategory { category } => {
                let count = self.remove_by_category(category)?;
                Ok(CommandOutcome::Removed { count })
            }
            Command::RemoveTattoosInZone { zone } => {
                let count = self.remove_tattoos_in_zone(zone)?;
                Ok(CommandOutcome::Removed { count })
            }
            Command::Refresh => Ok(CommandOutcome::Rendered(self.render()?)),
            Command::Save => Ok(CommandOutcome::Saved(self.save()?)),
        }
    }
}
