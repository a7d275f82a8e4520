//! Incident Lifecycle Engine
//!
//! The orchestrator: decides when a detection event becomes an incident
//! (at most once per rising edge of the live signal), applies operator
//! status transitions, and runs the notification-escalation rule.
//!
//! All mutable state sits behind one mutex; every poll tick and operator
//! command is a single atomic read-decide-write unit. The engine is an
//! explicit object owned by application state - no ambient globals.

use chrono::Local;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::logic::detection::rules::LIVE_INCIDENT_SCORE;
use crate::logic::detection::{
    oneshot, Annotation, AssetAnalysis, DetectionEvent, DetectionThresholds, StreamDetector,
};
use crate::logic::notify::{DispatchStats, Dispatcher, IncidentSummary};
use crate::logic::EngineError;

use super::factory;
use super::store::IncidentStore;
use super::types::{Incident, IncidentStatus, NotificationEntry, Recipient};

pub const LIVE_INCIDENT_TYPE: &str = "Confirmed Live Violence";
pub const LIVE_CAMERA_LABEL: &str = "Live Camera Feed";

/// Session-scoped latch for the live trigger edge.
/// `Idle --[score crosses threshold]--> Armed` (create + notify),
/// `Armed --[any further poll]--> Armed` (no side effect).
/// Resets only when a new detection session begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LiveLatch {
    Idle,
    Armed,
}

/// What one live tick produced
pub struct LivePollOutcome {
    pub event: DetectionEvent,
    pub annotation: Option<Annotation>,
    /// Present only on the tick that crossed the edge
    pub incident: Option<Incident>,
}

struct EngineState {
    store: IncidentStore,
    stream: StreamDetector,
    latch: LiveLatch,
    active_incident: Option<Uuid>,
}

pub struct IncidentEngine {
    dispatcher: Dispatcher,
    thresholds: DetectionThresholds,
    inner: Mutex<EngineState>,
}

impl IncidentEngine {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self::with_thresholds(dispatcher, DetectionThresholds::default())
    }

    pub fn with_thresholds(dispatcher: Dispatcher, thresholds: DetectionThresholds) -> Self {
        Self {
            dispatcher,
            thresholds: thresholds.clone(),
            inner: Mutex::new(EngineState {
                store: IncidentStore::new(),
                stream: StreamDetector::with_thresholds(LIVE_CAMERA_LABEL, thresholds),
                latch: LiveLatch::Idle,
                active_incident: None,
            }),
        }
    }

    // ========================================================================
    // LIVE PATH
    // ========================================================================

    /// One tick of the live detection loop. On the rising edge (signal
    /// triggered while the latch is idle) this creates the incident,
    /// selects it, sends the first alert, and arms the latch so later
    /// polls of the still-triggered signal do nothing.
    pub fn poll_live(&self) -> LivePollOutcome {
        let mut state = self.inner.lock();
        let event = state.stream.poll();
        let annotation = state.stream.annotation();

        let mut created = None;
        if event.triggered && state.latch == LiveLatch::Idle {
            let incident =
                factory::create(LIVE_INCIDENT_TYPE, LIVE_CAMERA_LABEL, LIVE_INCIDENT_SCORE);
            let id = incident.id;
            log::warn!("Live violence alert - incident {} logged", id);

            state.store.push(incident);
            state.active_incident = Some(id);

            // Creation-time alert goes through the same escalation path
            // as manual sends so the counters stay consistent
            let _ = Self::notify_locked(&mut state, &self.dispatcher, id);
            created = state.store.get(id).cloned();

            state.latch = LiveLatch::Armed;
        }

        LivePollOutcome {
            event,
            annotation,
            incident: created,
        }
    }

    /// Start a new camera session: detector back to zero, latch disarmed
    pub fn reset_live_session(&self) {
        let mut state = self.inner.lock();
        state.stream.reset();
        state.latch = LiveLatch::Idle;
        log::info!("Live detection session reset");
    }

    // ========================================================================
    // ONE-SHOT PATH
    // ========================================================================

    /// Score an uploaded asset. Does not touch the store; incident
    /// creation for uploads is gated behind operator confirmation.
    pub fn analyze_asset(&self, file_name: &str) -> Result<AssetAnalysis, EngineError> {
        oneshot::analyze_asset(file_name, &self.thresholds)
    }

    /// Operator confirmed an over-threshold upload: log the incident,
    /// select it, and send the first alert.
    pub fn log_asset_incident(&self, incident_type: &str, location: &str, score: u8) -> Incident {
        let mut state = self.inner.lock();
        let incident = factory::create(incident_type, location, score);
        let id = incident.id;
        let snapshot = incident.clone();
        log::info!("Incident {} logged from upload ({})", id, location);

        state.store.push(incident);
        state.active_incident = Some(id);

        Self::notify_locked(&mut state, &self.dispatcher, id).unwrap_or(snapshot)
    }

    // ========================================================================
    // OPERATOR COMMANDS
    // ========================================================================

    /// Overwrite the status unconditionally (any-to-any; no transition
    /// table) and select the incident. Unknown ids mutate nothing.
    pub fn set_status(&self, id: Uuid, status: IncidentStatus) -> Result<Incident, EngineError> {
        let mut state = self.inner.lock();
        let incident = state
            .store
            .get_mut(id)
            .ok_or(EngineError::IncidentNotFound(id))?;
        incident.status = status;
        let snapshot = incident.clone();
        state.active_incident = Some(id);
        log::info!("Incident {} status set to {}", id, status.as_str());
        Ok(snapshot)
    }

    /// Manual "send tactical alert". Recipient escalates after the first
    /// send; the attempt is logged whether or not the sink succeeded.
    pub fn notify(&self, id: Uuid) -> Result<Incident, EngineError> {
        let mut state = self.inner.lock();
        Self::notify_locked(&mut state, &self.dispatcher, id)
    }

    fn notify_locked(
        state: &mut EngineState,
        dispatcher: &Dispatcher,
        id: Uuid,
    ) -> Result<Incident, EngineError> {
        let incident = state
            .store
            .get_mut(id)
            .ok_or(EngineError::IncidentNotFound(id))?;

        // First send goes to security staff, every later one widens out
        let recipient = if incident.notifications_sent == 0 {
            Recipient::AdminSecurity
        } else {
            Recipient::ParentsCounselors
        };

        let summary = IncidentSummary::from_incident(incident, recipient);
        let result = dispatcher.dispatch(&summary);
        if !result.ok {
            log::warn!(
                "Dispatch for incident {} failed ({}); logging the attempt anyway",
                id,
                result.error.as_deref().unwrap_or("unknown error")
            );
        }

        // The log records attempts, not confirmed deliveries
        incident.notifications_sent += 1;
        incident.notification_log.push(NotificationEntry {
            time: Local::now().format("%H:%M:%S").to_string(),
            recipient,
        });

        Ok(incident.clone())
    }

    // ========================================================================
    // READS
    // ========================================================================

    /// Incident list in display order (New first, most recent first)
    pub fn incidents(&self) -> Vec<Incident> {
        self.inner.lock().store.sorted_for_display()
    }

    pub fn incident(&self, id: Uuid) -> Option<Incident> {
        self.inner.lock().store.get(id).cloned()
    }

    /// The incident currently selected for the detail view
    pub fn active_incident(&self) -> Option<Incident> {
        let state = self.inner.lock();
        state
            .active_incident
            .and_then(|id| state.store.get(id).cloned())
    }

    pub fn incident_count(&self) -> usize {
        self.inner.lock().store.len()
    }

    pub fn dispatch_stats(&self) -> DispatchStats {
        self.dispatcher.stats()
    }

    /// Name of the sink alerts currently go to
    pub fn alert_channel(&self) -> &'static str {
        self.dispatcher.sink_name()
    }
}
