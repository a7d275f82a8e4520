//! Incident Store
//!
//! Insertion-ordered, append-only collection of incident records.
//! The lifecycle controller is the only writer.

use uuid::Uuid;

use super::types::{Incident, IncidentStatus};

#[derive(Default)]
pub struct IncidentStore {
    incidents: Vec<Incident>,
}

impl IncidentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, incident: Incident) {
        self.incidents.push(incident);
    }

    pub fn get(&self, id: Uuid) -> Option<&Incident> {
        self.incidents.iter().find(|i| i.id == id)
    }

    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut Incident> {
        self.incidents.iter_mut().find(|i| i.id == id)
    }

    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    /// Display order: incidents still marked `New` first, most recent
    /// first within each group.
    pub fn sorted_for_display(&self) -> Vec<Incident> {
        let mut list = self.incidents.clone();
        list.sort_by(|a, b| {
            let a_new = a.status == IncidentStatus::New;
            let b_new = b.status == IncidentStatus::New;
            b_new
                .cmp(&a_new)
                .then_with(|| b.timestamp.cmp(&a.timestamp))
        });
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::incident::factory;
    use chrono::{TimeZone, Utc};

    fn incident_at(hour: u32, status: IncidentStatus) -> Incident {
        let ts = Utc.with_ymd_and_hms(2025, 3, 10, hour, 0, 0).unwrap();
        let mut inc = factory::create_at("Test", "Test Hall", 90, ts, Uuid::new_v4());
        inc.status = status;
        inc
    }

    #[test]
    fn test_display_order_new_first_then_most_recent() {
        let mut store = IncidentStore::new();
        let a = incident_at(10, IncidentStatus::New);
        let b = incident_at(11, IncidentStatus::Resolved);
        let c = incident_at(9, IncidentStatus::New);
        let (a_id, b_id, c_id) = (a.id, b.id, c.id);
        store.push(a);
        store.push(b);
        store.push(c);

        let order: Vec<Uuid> = store.sorted_for_display().iter().map(|i| i.id).collect();
        assert_eq!(order, vec![a_id, c_id, b_id]);
    }

    #[test]
    fn test_lookup_by_id() {
        let mut store = IncidentStore::new();
        let inc = incident_at(12, IncidentStatus::New);
        let id = inc.id;
        store.push(inc);

        assert!(store.get(id).is_some());
        assert!(store.get(Uuid::new_v4()).is_none());
    }
}
