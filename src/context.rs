//! Application Context
//!
//! Shared todo list state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::models::{SortOrder, Todo, TodoId};
use crate::store::LocalStorageStore;
use crate::todo_list::TodoList;

/// App-wide handle to the todo list
#[derive(Clone, Copy)]
pub struct AppContext {
    list: RwSignal<TodoList<LocalStorageStore>>,
}

impl AppContext {
    /// Load the list from localStorage
    pub fn open(config: &AppConfig) -> Self {
        let store = LocalStorageStore::new(config.storage_key.clone());
        Self {
            list: RwSignal::new(TodoList::open(store, config)),
        }
    }

    /// Add a todo, alerting the user when the text is rejected.
    /// Returns whether the todo was added.
    pub fn add(&self, text: &str) -> bool {
        match self.list.try_update(|list| list.add(text)) {
            Some(Ok(_)) => true,
            Some(Err(err)) => {
                let _ = window().alert_with_message(&err.to_string());
                false
            }
            None => false,
        }
    }

    pub fn toggle(&self, id: TodoId) {
        self.list.update(|list| {
            list.toggle_complete(id);
        });
    }

    pub fn delete(&self, id: TodoId) {
        self.list.update(|list| {
            list.delete(id);
        });
    }

    pub fn toggle_sort(&self) {
        self.list.update(|list| {
            list.toggle_sort_order();
        });
    }

    pub fn begin_drag(&self, id: TodoId) {
        self.list.update(|list| list.begin_drag(id));
    }

    pub fn drop_on(&self, target_id: TodoId) {
        self.list.update(|list| {
            list.drop_on(target_id);
        });
    }

    pub fn end_drag(&self) {
        // Skip the notify when a drop already cleared the source
        if self.list.with_untracked(|list| list.dragged_id().is_some()) {
            self.list.update(|list| list.end_drag());
        }
    }

    /// Todos in display order
    pub fn sorted(&self) -> Vec<Todo> {
        self.list.with(|list| list.sorted().into_iter().cloned().collect())
    }

    pub fn sort_order(&self) -> SortOrder {
        self.list.with(|list| list.sort_order())
    }

    pub fn dragged_id(&self) -> Option<TodoId> {
        self.list.with(|list| list.dragged_id())
    }

    /// (total, completed)
    pub fn counts(&self) -> (usize, usize) {
        self.list.with(|list| (list.len(), list.completed_count()))
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
