use ahash::{HashMap, HashMapExt};
use serde_json::Value;
use tokio::sync::Mutex;

use crate::query::Operation;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    operation: &'static str,
    variables: String,
}

impl CacheKey {
    pub fn new(operation: &Operation, variables: &Value) -> Self {
        Self {
            operation: operation.name(),
            variables: canonical(variables),
        }
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

/// Response `data` per (operation, variables). Entries only change through
/// explicit writes or evictions.
pub struct QueryCache {
    entries: Mutex<HashMap<CacheKey, Value>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub async fn get(&self, key: &CacheKey) -> Option<Value> {
        self.entries.lock().await.get(key).cloned()
    }

    pub async fn insert(&self, key: CacheKey, data: Value) {
        self.entries.lock().await.insert(key, data);
    }

    pub async fn remove(&self, key: &CacheKey) -> bool {
        self.entries.lock().await.remove(key).is_some()
    }

    /// Drops every entry of `operation`, whatever its variables.
    pub async fn remove_operation(&self, operation: &Operation) -> usize {
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|key, _| key.operation() != operation.name());
        before - entries.len()
    }

    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }
}

/// Serializes `value` with object keys sorted at every level.
fn canonical(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let entries: Vec<String> = entries
                .into_iter()
                .map(|(key, value)| format!("{}:{}", Value::from(key.as_str()), canonical(value)))
                .collect();
            format!("{{{}}}", entries.join(","))
        }
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(canonical).collect();
            format!("[{}]", items.join(","))
        }
        value => value.to_string(),
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}
