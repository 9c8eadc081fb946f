//! Todo List State
//!
//! Ordered todo collection with its display sort direction and drag source.
//! Every mutation that changes the collection is written through the store
//! before returning.

use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::error::ValidationError;
use crate::models::{Clock, IdGenerator, SortOrder, SystemClock, Todo, TodoId};
use crate::store::TodoStore;

pub struct TodoList<S, C = SystemClock> {
    /// Persisted order (manual placement)
    todos: Vec<Todo>,
    sort_order: SortOrder,
    /// Row currently being dragged
    dragged_id: Option<TodoId>,
    ids: IdGenerator,
    max_text_len: usize,
    store: S,
    clock: C,
}

impl<S: TodoStore> TodoList<S> {
    /// Load the persisted collection using the system clock for ids
    pub fn open(store: S, config: &AppConfig) -> Self {
        Self::open_with_clock(store, SystemClock, config)
    }
}

impl<S: TodoStore, C: Clock> TodoList<S, C> {
    /// Load the persisted collection.
    ///
    /// An unreadable or corrupt slot is logged and replaced by an empty list;
    /// the next save overwrites it.
    pub fn open_with_clock(store: S, clock: C, config: &AppConfig) -> Self {
        let todos = match store.load() {
            Ok(todos) => {
                info!(count = todos.len(), "loaded todos");
                todos
            }
            Err(err) => {
                warn!(error = %err, "discarding stored todos");
                Vec::new()
            }
        };

        Self {
            ids: IdGenerator::seeded(todos.iter().map(|todo| &todo.id)),
            todos,
            sort_order: SortOrder::default(),
            dragged_id: None,
            max_text_len: config.max_text_len,
            store,
            clock,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.completed).count()
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn dragged_id(&self) -> Option<TodoId> {
        self.dragged_id
    }

    pub fn validate(&self, text: &str) -> Result<(), ValidationError> {
        if text.trim().is_empty() {
            return Err(ValidationError::Empty);
        }
        // UTF-16 code units, as a browser counts string length
        let len = text.encode_utf16().count();
        if len > self.max_text_len {
            return Err(ValidationError::TooLong { len, max: self.max_text_len });
        }
        Ok(())
    }

    /// Append a new open todo. Text is stored as typed, untrimmed.
    pub fn add(&mut self, text: &str) -> Result<TodoId, ValidationError> {
        if let Err(err) = self.validate(text) {
            debug!(error = %err, "rejected new todo");
            return Err(err);
        }

        let id = self.ids.next(self.clock.now_millis());
        self.todos.push(Todo::new(id, text.to_string()));
        debug!(%id, "added todo");
        self.persist();
        Ok(id)
    }

    /// Flip `completed`, returning the new value
    pub fn toggle_complete(&mut self, id: TodoId) -> Option<bool> {
        let todo = self.todos.iter_mut().find(|todo| todo.id == id)?;
        todo.completed = !todo.completed;
        let completed = todo.completed;
        debug!(%id, completed, "toggled todo");
        self.persist();
        Some(completed)
    }

    pub fn delete(&mut self, id: TodoId) -> Option<Todo> {
        let index = self.todos.iter().position(|todo| todo.id == id)?;
        let removed = self.todos.remove(index);
        debug!(%id, "deleted todo");
        self.persist();
        Some(removed)
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
    }

    pub fn toggle_sort_order(&mut self) -> SortOrder {
        self.sort_order = self.sort_order.toggled();
        self.sort_order
    }

    pub fn begin_drag(&mut self, id: TodoId) {
        self.dragged_id = Some(id);
    }

    /// Move the dragged todo into the slot `target_id` occupies.
    ///
    /// Always clears the drag source. Returns `false` without reordering when
    /// nothing is being dragged, the target is the dragged todo itself, or
    /// either id is no longer in the list.
    pub fn drop_on(&mut self, target_id: TodoId) -> bool {
        let Some(dragged_id) = self.dragged_id.take() else {
            return false;
        };
        if dragged_id == target_id {
            return false;
        }

        let from = self.todos.iter().position(|todo| todo.id == dragged_id);
        let to = self.todos.iter().position(|todo| todo.id == target_id);
        let (Some(from), Some(to)) = (from, to) else {
            return false;
        };

        let dragged = self.todos.remove(from);
        self.todos.insert(to, dragged);
        debug!(dragged = %dragged_id, target = %target_id, from, to, "moved todo");
        self.persist();
        true
    }

    pub fn end_drag(&mut self) {
        self.dragged_id = None;
    }

    /// Display order: stable sort on completion, storage order untouched
    pub fn sorted(&self) -> Vec<&Todo> {
        let mut view: Vec<&Todo> = self.todos.iter().collect();
        match self.sort_order {
            SortOrder::Ascending => view.sort_by_key(|todo| todo.completed),
            SortOrder::Descending => view.sort_by_key(|todo| !todo.completed),
        }
        view
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.todos) {
            warn!(error = %err, "failed to save todos");
        }
    }
}
