//! Todo List App
//!
//! Root component: toolbar above the list.

use leptos::prelude::*;

use crate::components::{NewTodoForm, SortButton, TodoListView};
use crate::config::AppConfig;
use crate::context::AppContext;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide context to all children
    provide_context(AppContext::open(&config));

    view! {
        <h1 class="title">"Todo List"</h1>
        <div class="toolbar">
            <SortButton />
            <NewTodoForm />
        </div>
        <TodoListView />
    }
}
