//! Nullable store — thread-safe in-memory storage for testing.
//!
//! Honors the same contract the registry requires of a relational backend:
//! unique record hashes, referential integrity from ledger to antiques, and
//! per-call atomicity for counter updates.

use patina_store::{AccessCodeStore, AntiqueStore, LedgerStore, StoreError};
use patina_types::{AccessCode, AntiqueRecord, Identifier, LedgerRecord, RecordHash, Timestamp};
use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory antique + ledger + access-code store.
/// Thread-safe so append serialization can be exercised across threads.
pub struct MemoryStore {
    antiques: Mutex<HashMap<Identifier, AntiqueRecord>>,
    ledger: Mutex<Vec<LedgerRecord>>,
    codes: Mutex<HashMap<String, AccessCode>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            antiques: Mutex::new(HashMap::new()),
            ledger: Mutex::new(Vec::new()),
            codes: Mutex::new(HashMap::new()),
        }
    }

    /// Overwrite the back-link at a chain position, for corruption tests.
    pub fn corrupt_previous_hash(&self, position: usize, hex: &str) {
        let mut ledger = self.ledger.lock().unwrap();
        ledger[position].previous_hash = Some(RecordHash::from_hex(hex));
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AntiqueStore for MemoryStore {
    fn upsert(&self, record: &AntiqueRecord) -> Result<(), StoreError> {
        self.antiques
            .lock()
            .unwrap()
            .insert(record.identifier.clone(), record.clone());
        Ok(())
    }

    fn get(&self, identifier: &Identifier) -> Result<Option<AntiqueRecord>, StoreError> {
        Ok(self.antiques.lock().unwrap().get(identifier).cloned())
    }

    fn identifiers(&self) -> Result<Vec<Identifier>, StoreError> {
        let mut ids: Vec<Identifier> = self.antiques.lock().unwrap().keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}

impl LedgerStore for MemoryStore {
    fn load_tail(&self) -> Result<Option<LedgerRecord>, StoreError> {
        Ok(self.ledger.lock().unwrap().last().cloned())
    }

    fn insert(&self, record: &LedgerRecord) -> Result<(), StoreError> {
        if !self
            .antiques
            .lock()
            .unwrap()
            .contains_key(&record.subject)
        {
            return Err(StoreError::ForeignKey(format!(
                "no antique record for subject {}",
                record.subject
            )));
        }
        let mut ledger = self.ledger.lock().unwrap();
        if ledger.iter().any(|r| r.record_hash == record.record_hash) {
            return Err(StoreError::Duplicate(record.record_hash.to_string()));
        }
        ledger.push(record.clone());
        Ok(())
    }

    fn find_by_subject(
        &self,
        identifier: &Identifier,
    ) -> Result<Option<LedgerRecord>, StoreError> {
        Ok(self
            .ledger
            .lock()
            .unwrap()
            .iter()
            .find(|r| &r.subject == identifier)
            .cloned())
    }

    fn load_all(&self) -> Result<Vec<LedgerRecord>, StoreError> {
        let mut records = self.ledger.lock().unwrap().clone();
        records.sort_by_key(|r| r.sequence_index);
        Ok(records)
    }
}

impl AccessCodeStore for MemoryStore {
    fn insert(&self, code: &AccessCode) -> Result<(), StoreError> {
        let mut codes = self.codes.lock().unwrap();
        if codes.contains_key(&code.code) {
            return Err(StoreError::Duplicate(code.code.clone()));
        }
        codes.insert(code.code.clone(), code.clone());
        Ok(())
    }

    fn get_active(&self, code: &str) -> Result<Option<AccessCode>, StoreError> {
        Ok(self
            .codes
            .lock()
            .unwrap()
            .get(code)
            .filter(|c| !c.deleted)
            .cloned())
    }

    fn record_usage(&self, code: &str, now: Timestamp) -> Result<AccessCode, StoreError> {
        let mut codes = self.codes.lock().unwrap();
        match codes.get_mut(code).filter(|c| !c.deleted) {
            Some(entry) => {
                entry.usage_count += 1;
                entry.last_used = Some(now);
                Ok(entry.clone())
            }
            None => Err(StoreError::NotFound(code.to_string())),
        }
    }

    fn mark_deleted(&self, code: &str) -> Result<bool, StoreError> {
        let mut codes = self.codes.lock().unwrap();
        match codes.get_mut(code).filter(|c| !c.deleted) {
            Some(entry) => {
                entry.deleted = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn sweep_expired(&self, now: Timestamp) -> Result<u64, StoreError> {
        let mut codes = self.codes.lock().unwrap();
        let mut removed = 0;
        for entry in codes.values_mut() {
            if !entry.deleted && entry.expires_at < now {
                entry.deleted = true;
                removed += 1;
            }
        }
        Ok(removed)
    }

    fn list_active(&self) -> Result<Vec<AccessCode>, StoreError> {
        let mut active: Vec<AccessCode> = self
            .codes
            .lock()
            .unwrap()
            .values()
            .filter(|c| !c.deleted)
            .cloned()
            .collect();
        active.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patina_types::{FingerprintComponents, ImageSet};

    fn antique(id: &str) -> AntiqueRecord {
        AntiqueRecord {
            identifier: Identifier::new(id),
            name: id.to_string(),
            description: String::new(),
            images: ImageSet::default(),
            created_at: Timestamp::new(0),
            components: FingerprintComponents {
                image_signature: "is".into(),
                text_signature: "ts".into(),
                provenance_digest: "pd".into(),
            },
            provenance: None,
        }
    }

    fn record(index: u64, subject: &str, hash: &str) -> LedgerRecord {
        LedgerRecord {
            sequence_index: index,
            timestamp: Timestamp::new(index),
            subject: Identifier::new(subject),
            owner: "estate".into(),
            previous_hash: None,
            record_hash: RecordHash::from_hex(hash),
        }
    }

    #[test]
    fn upsert_then_get_round_trips() {
        let store = MemoryStore::new();
        store.upsert(&antique("a")).unwrap();
        assert!(store.get(&Identifier::new("a")).unwrap().is_some());
        assert!(store.get(&Identifier::new("b")).unwrap().is_none());
    }

    #[test]
    fn upsert_is_idempotent_on_the_key() {
        let store = MemoryStore::new();
        store.upsert(&antique("a")).unwrap();
        store.upsert(&antique("a")).unwrap();
        assert_eq!(store.identifiers().unwrap().len(), 1);
    }

    #[test]
    fn ledger_insert_enforces_foreign_key() {
        let store = MemoryStore::new();
        let err = LedgerStore::insert(&store, &record(0, "ghost", "aa")).unwrap_err();
        assert!(matches!(err, StoreError::ForeignKey(_)));
    }

    #[test]
    fn ledger_insert_rejects_duplicate_hash() {
        let store = MemoryStore::new();
        store.upsert(&antique("a")).unwrap();
        store.upsert(&antique("b")).unwrap();
        LedgerStore::insert(&store, &record(0, "a", "aa")).unwrap();
        let err = LedgerStore::insert(&store, &record(1, "b", "aa")).unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(_)));
    }

    #[test]
    fn tail_tracks_inserts() {
        let store = MemoryStore::new();
        store.upsert(&antique("a")).unwrap();
        assert!(store.load_tail().unwrap().is_none());
        LedgerStore::insert(&store, &record(0, "a", "aa")).unwrap();
        assert_eq!(store.load_tail().unwrap().unwrap().sequence_index, 0);
    }

    fn code(token: &str, created: u64, expires: u64) -> AccessCode {
        AccessCode {
            code: token.to_string(),
            created_at: Timestamp::new(created),
            expires_at: Timestamp::new(expires),
            created_by: "staff".into(),
            usage_count: 0,
            last_used: None,
            deleted: false,
        }
    }

    #[test]
    fn duplicate_code_insert_is_rejected() {
        let store = MemoryStore::new();
        AccessCodeStore::insert(&store, &code("AAAA-2222", 0, 10)).unwrap();
        let err = AccessCodeStore::insert(&store, &code("AAAA-2222", 1, 20)).unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(_)));
    }

    #[test]
    fn record_usage_updates_in_place() {
        let store = MemoryStore::new();
        AccessCodeStore::insert(&store, &code("AAAA-2222", 0, 10)).unwrap();
        let updated = store.record_usage("AAAA-2222", Timestamp::new(5)).unwrap();
        assert_eq!(updated.usage_count, 1);
        assert_eq!(updated.last_used, Some(Timestamp::new(5)));
        let again = store.record_usage("AAAA-2222", Timestamp::new(6)).unwrap();
        assert_eq!(again.usage_count, 2);
    }

    #[test]
    fn sweep_marks_only_expired_codes() {
        let store = MemoryStore::new();
        AccessCodeStore::insert(&store, &code("AAAA-2222", 0, 10)).unwrap();
        AccessCodeStore::insert(&store, &code("BBBB-3333", 0, 100)).unwrap();
        assert_eq!(store.sweep_expired(Timestamp::new(50)).unwrap(), 1);
        assert_eq!(store.sweep_expired(Timestamp::new(50)).unwrap(), 0);
        assert_eq!(store.list_active().unwrap().len(), 1);
    }

    #[test]
    fn mark_deleted_reports_whether_anything_matched() {
        let store = MemoryStore::new();
        AccessCodeStore::insert(&store, &code("AAAA-2222", 0, 10)).unwrap();
        assert!(store.mark_deleted("AAAA-2222").unwrap());
        assert!(!store.mark_deleted("AAAA-2222").unwrap());
        assert!(!store.mark_deleted("ZZZZ-9999").unwrap());
    }

    #[test]
    fn list_active_is_newest_first() {
        let store = MemoryStore::new();
        AccessCodeStore::insert(&store, &code("AAAA-2222", 1, 10)).unwrap();
        AccessCodeStore::insert(&store, &code("BBBB-3333", 5, 10)).unwrap();
        let listed = store.list_active().unwrap();
        assert_eq!(listed[0].code, "BBBB-3333");
        assert_eq!(listed[1].code, "AAAA-2222");
    }
}
