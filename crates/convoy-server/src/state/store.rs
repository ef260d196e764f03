//! In-memory state store for threats, convoys and chat.

use chrono::Utc;
use convoy_core::models::{
    ChatMessage, Convoy, ConvoyStatus, ConvoyWaypoint, DashboardEvent, Incident, NewIncident,
    NewThreatZone, Route, ThreatZone,
};
use convoy_core::ThreatModel;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError, RwLock};
use tokio::sync::broadcast;

use crate::config::Config;

/// Zones and incidents share one lock so a planning snapshot never mixes
/// rows from before and after a scenario reset.
#[derive(Debug, Default)]
struct ThreatLedger {
    zones: Vec<ThreatZone>,
    incidents: Vec<Incident>,
}

/// Application state - thread-safe store shared by all handlers.
pub struct AppState {
    threats: RwLock<ThreatLedger>,
    convoys: DashMap<u64, Convoy>,
    messages: Mutex<Vec<ChatMessage>>,
    zone_counter: AtomicU64,
    incident_counter: AtomicU64,
    convoy_counter: AtomicU64,
    message_counter: AtomicU64,
    tx: broadcast::Sender<DashboardEvent>,
    config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let (tx, _rx) = broadcast::channel(config.event_channel_capacity);
        Self {
            threats: RwLock::new(ThreatLedger::default()),
            convoys: DashMap::new(),
            messages: Mutex::new(Vec::new()),
            zone_counter: AtomicU64::new(1),
            incident_counter: AtomicU64::new(1),
            convoy_counter: AtomicU64::new(1),
            message_counter: AtomicU64::new(1),
            tx,
            config,
        }
    }

    // ========== EVENTS ==========

    /// Listen for dashboard events published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<DashboardEvent> {
        self.tx.subscribe()
    }

    /// Fan an event out to every listener. Having no listeners is fine.
    pub fn publish(&self, event: DashboardEvent) {
        if let Err(err) = self.tx.send(event) {
            tracing::debug!("No dashboard listeners for event: {:?}", err.0);
        }
    }

    // ========== THREATS ==========

    pub fn threat_zones(&self) -> Vec<ThreatZone> {
        let ledger = self.threats.read().unwrap_or_else(PoisonError::into_inner);
        ledger.zones.clone()
    }

    /// All incidents, newest first.
    pub fn incidents(&self) -> Vec<Incident> {
        let ledger = self.threats.read().unwrap_or_else(PoisonError::into_inner);
        let mut incidents = ledger.incidents.clone();
        incidents.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        incidents
    }

    /// Consistent view of every region the planner should avoid right now.
    pub fn threat_snapshot(&self) -> ThreatModel {
        let ledger = self.threats.read().unwrap_or_else(PoisonError::into_inner);
        ThreatModel::from_sources(&ledger.zones, &ledger.incidents)
    }

    /// Clear every zone and incident, then install `zones`.
    pub fn reset_scenario(&self, zones: Vec<NewThreatZone>) -> Vec<ThreatZone> {
        let mut ledger = self.threats.write().unwrap_or_else(PoisonError::into_inner);
        ledger.incidents.clear();
        ledger.zones = zones
            .into_iter()
            .map(|zone| self.assign_zone_id(zone))
            .collect();
        ledger.zones.clone()
    }

    pub fn add_incident(&self, incident: NewIncident) -> Incident {
        let incident = Incident {
            id: self.incident_counter.fetch_add(1, Ordering::SeqCst),
            lat: incident.lat,
            lng: incident.lng,
            severity: incident.severity,
            intensity: incident.intensity,
            timestamp: Utc::now(),
        };
        let mut ledger = self.threats.write().unwrap_or_else(PoisonError::into_inner);
        ledger.incidents.push(incident.clone());
        incident
    }

    fn assign_zone_id(&self, zone: NewThreatZone) -> ThreatZone {
        ThreatZone {
            id: self.zone_counter.fetch_add(1, Ordering::SeqCst),
            lat: zone.lat,
            lng: zone.lng,
            radius: zone.radius,
            threat_score: zone.threat_score,
        }
    }

    // ========== CONVOYS ==========

    /// Store a convoy that is already underway along `route`.
    pub fn add_convoy(&self, name: &str, route: &Route) -> Convoy {
        let convoy = Convoy {
            id: self.convoy_counter.fetch_add(1, Ordering::SeqCst),
            name: name.to_string(),
            status: ConvoyStatus::InProgress,
            waypoints: ConvoyWaypoint::sequence(route),
            created_at: Utc::now(),
        };
        self.convoys.insert(convoy.id, convoy.clone());
        convoy
    }

    pub fn get_convoy(&self, id: u64) -> Option<Convoy> {
        self.convoys.get(&id).map(|r| r.value().clone())
    }

    /// All convoys ordered by id.
    pub fn get_convoys(&self) -> Vec<Convoy> {
        let mut convoys: Vec<Convoy> = self.convoys.iter().map(|r| r.value().clone()).collect();
        convoys.sort_by_key(|convoy| convoy.id);
        convoys
    }

    // ========== MESSAGES ==========

    pub fn add_message(&self, sid: &str, text: &str) -> ChatMessage {
        let message = ChatMessage {
            id: self.message_counter.fetch_add(1, Ordering::SeqCst),
            sid: sid.to_string(),
            text: text.to_string(),
            timestamp: Utc::now(),
        };
        let mut messages = self.messages.lock().unwrap_or_else(PoisonError::into_inner);
        messages.push(message.clone());
        message
    }

    /// Oldest messages first, capped at the configured history limit.
    pub fn message_history(&self) -> Vec<ChatMessage> {
        let messages = self.messages.lock().unwrap_or_else(PoisonError::into_inner);
        messages
            .iter()
            .take(self.config.message_history_limit)
            .cloned()
            .collect()
    }
}
