//! Persistence collaborator for overlay snapshots
//!
//! The manager hands every snapshot to a `SnapshotSink` and does not wait for
//! or interpret an acknowledgment. The sink that ships with the crate,
//! `ServerEventSink`, embeds the snapshot in the character's `PedData` record
//! and sends the whole record as one outbound event.

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::snapshot::OverlaySnapshot;

/// Outbound event carrying the serialized character record
pub const SAVE_PED_DATA_EVENT: &str = "Session.SavePedData";

/// Receiver of persisted snapshots
pub trait SnapshotSink {
    /// Persist one snapshot
    ///
    /// # Errors
    ///
    /// Returns `Serialization` or `Persistence` errors; the manager does not
    /// roll back in-memory state when this fails.
    fn save(&mut self, snapshot: &OverlaySnapshot) -> Result<()>;
}

/// Fire-and-forget message channel to the server
pub trait EventTransport {
    /// Send `payload` under the event name `event`
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the message could not be queued.
    fn trigger_server_event(&mut self, event: &str, payload: String) -> Result<()>;
}

/// Character appearance record that carries the overlay snapshot
///
/// Only the overlays field is owned here. Everything else in the record is
/// kept as raw JSON and written back untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PedData {
    #[serde(rename = "Overlays", default, skip_serializing_if = "Option::is_none")]
    pub overlays: Option<OverlaySnapshot>,

    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl PedData {
    /// Parse a record from its JSON form
    ///
    /// # Errors
    ///
    /// Returns `Serialization` for malformed JSON or out-of-range snapshot values.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the record
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the record cannot be encoded.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Sink that ships the character record as a server event
#[derive(Debug, Clone)]
pub struct ServerEventSink<T> {
    record: PedData,
    transport: T,
}

impl<T: EventTransport> ServerEventSink<T> {
    pub fn new(record: PedData, transport: T) -> Self {
        Self { record, transport }
    }

    /// The record as last sent (or as loaded, before the first save)
    pub fn record(&self) -> &PedData {
        &self.record
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_parts(self) -> (PedData, T) {
        (self.record, self.transport)
    }
}

impl<T: EventTransport> SnapshotSink for ServerEventSink<T> {
    fn save(&mut self, snapshot: &OverlaySnapshot) -> Result<()> {
        self.record.overlays = Some(snapshot.clone());
        let payload = self.record.to_json()?;
        tracing::debug!(
            event = SAVE_PED_DATA_EVENT,
            overlays = snapshot.len(),
            "sending character record"
        );
        self.transport
            .trigger_server_event(SAVE_PED_DATA_EVENT, payload)
    }
}

/// Sink that keeps every snapshot it receives
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    saves: Vec<OverlaySnapshot>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saves(&self) -> &[OverlaySnapshot] {
        &self.saves
    }

    pub fn save_count(&self) -> usize {
        self.saves.len()
    }

    pub fn last(&self) -> Option<&OverlaySnapshot> {
        self.saves.last()
    }
}

impl SnapshotSink for RecordingSink {
    fn save(&mut self, snapshot: &OverlaySnapshot) -> Result<()> {
        self.saves.push(snapshot.clone());
        Ok(())
    }
}

/// Sink that discards snapshots
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl SnapshotSink for NullSink {
    fn save(&mut self, _snapshot: &OverlaySnapshot) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OverlayId;

    #[derive(Default)]
    struct VecTransport {
        sent: Vec<(String, String)>,
    }

    impl EventTransport for VecTransport {
        fn trigger_server_event(&mut self, event: &str, payload: String) -> Result<()> {
            self.sent.push((event.to_string(), payload));
            Ok(())
        }
    }

    #[test]
    fn test_ped_data_preserves_unknown_fields() {
        let json = r#"{"Model":"mp_m_freemode_01","Overlays":{"5":3},"Hair":{"Style":2}}"#;
        let record = PedData::from_json(json).unwrap();

        assert_eq!(record.overlays.as_ref().and_then(|o| o.get(OverlayId::new(5))), Some(3));
        assert_eq!(record.other["Model"], "mp_m_freemode_01");

        let round: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
        assert_eq!(round["Hair"]["Style"], 2);
    }

    #[test]
    fn test_missing_overlays_is_none() {
        let record = PedData::from_json(r#"{"Model":"x"}"#).unwrap();
        assert!(record.overlays.is_none());
    }

    #[test]
    fn test_server_event_sink_sends_full_record() {
        let record = PedData::from_json(r#"{"Model":"x"}"#).unwrap();
        let mut sink = ServerEventSink::new(record, VecTransport::default());

        let snapshot: OverlaySnapshot = [(OverlayId::new(7), 2)].into_iter().collect();
        sink.save(&snapshot).unwrap();

        let (record, transport) = sink.into_parts();
        assert_eq!(record.overlays, Some(snapshot));
        assert_eq!(transport.sent.len(), 1);
        let (event, payload) = &transport.sent[0];
        assert_eq!(event, SAVE_PED_DATA_EVENT);
        let sent: serde_json::Value = serde_json::from_str(payload).unwrap();
        assert_eq!(sent["Model"], "x");
        assert_eq!(sent["Overlays"]["7"], 2);
    }
}
