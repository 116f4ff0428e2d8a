//! In-memory appointment store
//!
//! Mirrors the backend collection in the order the client learned about it:
//! append on create, replace in place on update, remove on delete. Records
//! are looked up by id, never by list position.

use std::collections::HashMap;

use super::{Appointment, AppointmentError, AppointmentId, AppointmentResult};

/// Ordered, id-keyed collection of appointments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentStore {
    order: Vec<AppointmentId>,
    records: HashMap<AppointmentId, Appointment>,
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a backend listing
    pub fn from_records(records: impl IntoIterator<Item = Appointment>) -> Self {
        let mut store = Self::new();
        store.replace_all(records);
        store
    }

    /// Replace the whole sequence.
    ///
    /// Duplicate ids keep the position of their first occurrence and the value
    /// of their last.
    pub fn replace_all(&mut self, records: impl IntoIterator<Item = Appointment>) {
        self.order.clear();
        self.records.clear();
        for record in records {
            self.append(record);
        }
    }

    /// Add a record at the end, or replace it in place if the id is known
    pub fn append(&mut self, record: Appointment) {
        let id = record.id;
        if self.records.insert(id, record).is_none() {
            self.order.push(id);
        }
    }

    /// Replace the record stored under `id`
    pub fn replace(&mut self, id: AppointmentId, record: Appointment) -> AppointmentResult<()> {
        if record.id != id {
            return Err(AppointmentError::IdMismatch {
                expected: id,
                actual: record.id,
            });
        }
        match self.records.get_mut(&id) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(AppointmentError::NotFound(id)),
        }
    }

    /// Remove the record stored under `id`, if any
    pub fn remove(&mut self, id: AppointmentId) -> Option<Appointment> {
        let removed = self.records.remove(&id)?;
        self.order.retain(|existing| *existing != id);
        Some(removed)
    }

    pub fn get(&self, id: AppointmentId) -> Option<&Appointment> {
        self.records.get(&id)
    }

    pub fn contains(&self, id: AppointmentId) -> bool {
        self.records.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Ids in sequence order
    pub fn ids(&self) -> &[AppointmentId] {
        &self.order
    }

    /// Records in sequence order
    pub fn iter(&self) -> impl Iterator<Item = &Appointment> + '_ {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    pub fn to_vec(&self) -> Vec<Appointment> {
        self.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appointments::AppointmentStatus;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    fn appointment(id: i64, reason: &str) -> Appointment {
        Appointment::new(
            id,
            Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
            reason,
            AppointmentStatus::Scheduled,
        )
    }

    fn reasons(store: &AppointmentStore) -> Vec<&str> {
        store.iter().map(|a| a.reason.as_str()).collect()
    }

    #[test]
    fn test_append_preserves_order() {
        let mut store = AppointmentStore::new();
        store.append(appointment(3, "c"));
        store.append(appointment(1, "a"));
        store.append(appointment(2, "b"));

        assert_eq!(store.len(), 3);
        assert_eq!(reasons(&store), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_append_known_id_replaces_in_place() {
        let mut store = AppointmentStore::from_records(vec![appointment(1, "a"), appointment(2, "b")]);
        store.append(appointment(1, "a2"));

        assert_eq!(store.len(), 2);
        assert_eq!(reasons(&store), vec!["a2", "b"]);
    }

    #[test]
    fn test_replace_in_place() {
        let mut store = AppointmentStore::from_records(vec![
            appointment(1, "a"),
            appointment(2, "b"),
            appointment(3, "c"),
        ]);

        store.replace(AppointmentId(2), appointment(2, "B")).unwrap();
        assert_eq!(reasons(&store), vec!["a", "B", "c"]);
    }

    #[test]
    fn test_replace_missing_is_surfaced() {
        let mut store = AppointmentStore::from_records(vec![appointment(1, "a")]);
        let before = store.clone();

        let err = store.replace(AppointmentId(5), appointment(5, "x")).unwrap_err();
        assert_eq!(err, AppointmentError::NotFound(AppointmentId(5)));

        let err = store.replace(AppointmentId(1), appointment(2, "x")).unwrap_err();
        assert!(matches!(err, AppointmentError::IdMismatch { .. }));

        assert_eq!(store, before);
    }

    #[test]
    fn test_remove() {
        let mut store = AppointmentStore::from_records(vec![appointment(1, "a"), appointment(2, "b")]);

        let removed = store.remove(AppointmentId(1)).unwrap();
        assert_eq!(removed.reason, "a");
        assert_eq!(store.ids(), &[AppointmentId(2)]);

        assert!(store.remove(AppointmentId(1)).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_replace_all_collapses_duplicates() {
        let store = AppointmentStore::from_records(vec![
            appointment(1, "first"),
            appointment(2, "b"),
            appointment(1, "last"),
        ]);

        assert_eq!(store.ids(), &[AppointmentId(1), AppointmentId(2)]);
        assert_eq!(store.get(AppointmentId(1)).unwrap().reason, "last");
    }

    #[derive(Debug, Clone)]
    enum Op {
        Create(i64),
        Update(i64),
        Delete(i64),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0i64..20).prop_map(Op::Create),
            (0i64..20).prop_map(Op::Update),
            (0i64..20).prop_map(Op::Delete),
        ]
    }

    proptest! {
        #[test]
        fn prop_store_mirrors_confirmed_records(ops in proptest::collection::vec(op_strategy(), 0..64)) {
            let mut store = AppointmentStore::new();
            let mut server: BTreeMap<i64, String> = BTreeMap::new();

            for (step, op) in ops.into_iter().enumerate() {
                match op {
                    Op::Create(id) => {
                        if server.contains_key(&id) {
                            continue;
                        }
                        let reason = format!("create-{step}");
                        server.insert(id, reason.clone());
                        store.append(appointment(id, &reason));
                    }
                    Op::Update(id) => {
                        if !server.contains_key(&id) {
                            continue;
                        }
                        let reason = format!("update-{step}");
                        server.insert(id, reason.clone());
                        store.replace(AppointmentId(id), appointment(id, &reason)).unwrap();
                    }
                    Op::Delete(id) => {
                        if server.remove(&id).is_some() {
                            prop_assert!(store.remove(AppointmentId(id)).is_some());
                        }
                    }
                }

                let mut ids: Vec<i64> = store.ids().iter().map(|id| id.0).collect();
                let len = ids.len();
                ids.sort_unstable();
                ids.dedup();
                prop_assert_eq!(ids.len(), len);

                let mirrored: BTreeMap<i64, String> = store
                    .iter()
                    .map(|a| (a.id.0, a.reason.clone()))
                    .collect();
                prop_assert_eq!(&mirrored, &server);
            }
        }
    }
}
