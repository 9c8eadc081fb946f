//! Todo Persistence
//!
//! The store port used by the list state manager and its localStorage
//! implementation. The whole collection lives in one slot as a JSON array.

use std::collections::HashSet;

use wasm_bindgen::JsValue;

use crate::error::{StoreError, StoreResult};
use crate::models::{Todo, MAX_TODO_ID};

/// Load/save capability for the todo collection
pub trait TodoStore {
    /// Read the persisted collection. An absent slot is an empty list.
    fn load(&self) -> StoreResult<Vec<Todo>>;

    /// Overwrite the slot with the full collection
    fn save(&self, todos: &[Todo]) -> StoreResult<()>;
}

/// Parse a raw slot value, rejecting duplicate or out-of-range ids
pub fn decode(raw: Option<&str>) -> StoreResult<Vec<Todo>> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    let todos: Vec<Todo> = serde_json::from_str(raw).map_err(StoreError::Corrupt)?;

    if let Some(todo) = todos.iter().find(|todo| todo.id.0 > MAX_TODO_ID) {
        return Err(StoreError::IdOutOfRange(todo.id));
    }

    let mut seen = HashSet::with_capacity(todos.len());
    if let Some(dup) = todos.iter().find(|todo| !seen.insert(todo.id)) {
        return Err(StoreError::DuplicateId(dup.id));
    }
    Ok(todos)
}

pub fn encode(todos: &[Todo]) -> StoreResult<String> {
    serde_json::to_string(todos).map_err(StoreError::Encode)
}

// ========================
// localStorage
// ========================

/// Browser localStorage slot
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> StoreResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }
}

impl TodoStore for LocalStorageStore {
    fn load(&self) -> StoreResult<Vec<Todo>> {
        let raw = Self::storage()?.get_item(&self.key).map_err(js_error)?;
        decode(raw.as_deref())
    }

    fn save(&self, todos: &[Todo]) -> StoreResult<()> {
        let raw = encode(todos)?;
        Self::storage()?.set_item(&self.key, &raw).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> StoreError {
    StoreError::Unavailable(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

// ========================
// In-memory
// ========================

/// In-memory slot holding the same serialized text as localStorage.
/// Clones share the slot.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: std::sync::Arc<std::sync::Mutex<Option<String>>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with_raw(raw: &str) -> Self {
        let store = Self::default();
        *store.slot.lock().unwrap() = Some(raw.to_string());
        store
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl TodoStore for MemoryStore {
    fn load(&self) -> StoreResult<Vec<Todo>> {
        decode(self.slot.lock().unwrap().as_deref())
    }

    fn save(&self, todos: &[Todo]) -> StoreResult<()> {
        *self.slot.lock().unwrap() = Some(encode(todos)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TodoId;

    fn make_todo(id: u64, text: &str, completed: bool) -> Todo {
        Todo { id: TodoId(id), text: text.to_string(), completed }
    }

    #[test]
    fn test_absent_slot_is_empty() {
        let store = MemoryStore::default();
        assert!(store.load().unwrap().is_empty());
        assert!(decode(None).unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::default();
        let todos = vec![
            make_todo(3, "Walk dog", true),
            make_todo(1, "Buy milk", false),
            make_todo(2, "Call mom", false),
        ];
        store.save(&todos).unwrap();
        assert_eq!(store.load().unwrap(), todos);
    }

    #[test]
    fn test_save_empty_writes_empty_array() {
        let store = MemoryStore::default();
        store.save(&[]).unwrap();
        assert_eq!(store.raw().as_deref(), Some("[]"));
    }

    #[test]
    fn test_loads_existing_slot_format() {
        let raw = r#"[{"id":1712345678901,"text":"Buy milk","completed":true}]"#;
        let todos = decode(Some(raw)).unwrap();
        assert_eq!(todos, vec![make_todo(1712345678901, "Buy milk", true)]);
    }

    #[test]
    fn test_corrupt_slot() {
        let store = MemoryStore::with_raw("{not json");
        assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));

        let wrong_shape = MemoryStore::with_raw(r#"{"id":1}"#);
        assert!(matches!(wrong_shape.load(), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let raw = r#"[{"id":1,"text":"a","completed":false},{"id":1,"text":"b","completed":true}]"#;
        match decode(Some(raw)) {
            Err(StoreError::DuplicateId(id)) => assert_eq!(id, TodoId(1)),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_unsafe_id_rejected() {
        let raw = r#"[{"id":18446744073709551615,"text":"x","completed":false}]"#;
        assert!(matches!(decode(Some(raw)), Err(StoreError::IdOutOfRange(TodoId(u64::MAX)))));

        let max_safe = r#"[{"id":9007199254740991,"text":"x","completed":false}]"#;
        assert_eq!(decode(Some(max_safe)).unwrap()[0].id, TodoId(MAX_TODO_ID));
    }
}
