//! Client-side query cache.
//!
//! Results of GET requests are kept as JSON values under a [`QueryKey`].
//! Every successful mutation invalidates the keys it affects, or replaces them
//! with the server's answer; the next read of an invalidated key goes back to
//! the server. Entries are never patched in
//! place with unconfirmed local edits.

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::model::reference::ReferenceKind;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Client(String),
    FileDefinitions(String),
    ClientRecordMatchCriteria(String),
    DefinitionRecordMatchCriteria(String),
    Reference(ReferenceKind),
}

#[derive(Debug, Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, serde_json::Value>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached value for `key`, if present and still of the expected shape.
    pub fn get<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        self.entries
            .get(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    pub fn put<T: Serialize>(&mut self, key: QueryKey, value: &T) {
        if let Ok(json) = serde_json::to_value(value) {
            self.entries.insert(key, json);
        }
    }

    /// Drops `key`; returns whether anything was cached under it.
    pub fn invalidate(&mut self, key: &QueryKey) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Drops every entry whose key matches `pred`.
    pub fn invalidate_where(&mut self, pred: impl Fn(&QueryKey) -> bool) {
        self.entries.retain(|key, _| !pred(key));
    }

    /// Drops everything derived from a client's file definitions.
    pub fn invalidate_file_definitions(&mut self, client_id: &str) {
        self.invalidate_where(|key| match key {
            QueryKey::FileDefinitions(id) | QueryKey::ClientRecordMatchCriteria(id) => {
                id == client_id
            }
            QueryKey::DefinitionRecordMatchCriteria(_) => true,
            _ => false,
        });
    }

    /// Drops the file definitions of every client, for mutations on a nested
    /// entity whose client is not known at the call site.
    pub fn invalidate_all_file_definitions(&mut self) {
        self.invalidate_where(|key| {
            matches!(
                key,
                QueryKey::FileDefinitions(_)
                    | QueryKey::ClientRecordMatchCriteria(_)
                    | QueryKey::DefinitionRecordMatchCriteria(_)
            )
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::client::Client;

    impl QueryCache {
        fn contains(&self, key: &QueryKey) -> bool {
            self.entries.contains_key(key)
        }

        fn len(&self) -> usize {
            self.entries.len()
        }
    }

    #[test]
    fn stores_and_reads_typed_values() {
        let mut cache = QueryCache::new();
        let client = Client {
            id: "c1".to_string(),
            name: "Acme".to_string(),
            ..Default::default()
        };
        cache.put(QueryKey::Client("c1".to_string()), &client);
        let cached: Option<Client> = cache.get(&QueryKey::Client("c1".to_string()));
        assert_eq!(cached, Some(client));
    }

    #[test]
    fn wrong_shape_reads_as_miss() {
        let mut cache = QueryCache::new();
        cache.put(QueryKey::Reference(ReferenceKind::FileTypes), &vec!["YML"]);
        let cached: Option<Client> = cache.get(&QueryKey::Reference(ReferenceKind::FileTypes));
        assert!(cached.is_none());
    }

    #[test]
    fn invalidating_file_definitions_keeps_other_clients_and_references() {
        let mut cache = QueryCache::new();
        cache.put(QueryKey::FileDefinitions("c1".to_string()), &Vec::<u8>::new());
        cache.put(QueryKey::FileDefinitions("c2".to_string()), &Vec::<u8>::new());
        cache.put(QueryKey::ClientRecordMatchCriteria("c1".to_string()), &Vec::<u8>::new());
        cache.put(QueryKey::DefinitionRecordMatchCriteria("d1".to_string()), &Vec::<u8>::new());
        cache.put(QueryKey::Reference(ReferenceKind::FieldTypes), &vec!["STRING"]);

        cache.invalidate_file_definitions("c1");

        assert!(!cache.contains(&QueryKey::FileDefinitions("c1".to_string())));
        assert!(!cache.contains(&QueryKey::ClientRecordMatchCriteria("c1".to_string())));
        assert!(!cache.contains(&QueryKey::DefinitionRecordMatchCriteria("d1".to_string())));
        assert!(cache.contains(&QueryKey::FileDefinitions("c2".to_string())));
        assert!(cache.contains(&QueryKey::Reference(ReferenceKind::FieldTypes)));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn nested_mutations_drop_every_client_listing() {
        let mut cache = QueryCache::new();
        cache.put(QueryKey::FileDefinitions("c1".to_string()), &Vec::<u8>::new());
        cache.put(QueryKey::FileDefinitions("c2".to_string()), &Vec::<u8>::new());
        cache.put(QueryKey::Client("c1".to_string()), &1u8);
        cache.invalidate_all_file_definitions();
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(&QueryKey::Client("c1".to_string())));
    }

    #[test]
    fn invalidate_reports_whether_entry_existed() {
        let mut cache = QueryCache::new();
        let key = QueryKey::Client("c1".to_string());
        assert!(!cache.invalidate(&key));
        cache.put(key.clone(), &1u8);
        assert!(cache.invalidate(&key));
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn confirmed_answer_replaces_cached_client() {
        let mut cache = QueryCache::new();
        let key = QueryKey::Client("c1".to_string());
        let before = Client {
            id: "c1".to_string(),
            name: "Acme".to_string(),
            ..Default::default()
        };
        cache.put(key.clone(), &before);
        assert_eq!(cache.get::<Client>(&key), Some(before.clone()));

        let after = Client {
            name: "Acme Insurance".to_string(),
            ..before
        };
        cache.put(key.clone(), &after);
        assert_eq!(cache.get::<Client>(&key), Some(after));
        assert_eq!(cache.len(), 1);
    }
}
