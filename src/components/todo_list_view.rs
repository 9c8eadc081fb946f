//! Todo List View Component
//!
//! Renders todos in display order with drag-and-drop reordering.

use leptos::prelude::*;
use leptos_dragdrop::DragCallbacks;

use crate::components::TodoRow;
use crate::context::use_app_context;
use crate::models::TodoId;

#[component]
pub fn TodoListView() -> impl IntoView {
    let ctx = use_app_context();

    let dnd = DragCallbacks::<TodoId> {
        on_start: Callback::new(move |id| ctx.begin_drag(id)),
        on_drop: Callback::new(move |target_id| ctx.drop_on(target_id)),
        on_end: Callback::new(move |_| ctx.end_drag()),
    };

    view! {
        <ul class="todo-list">
            <For
                each=move || ctx.sorted()
                // completed is part of the key so toggled rows re-render
                key=|todo| (todo.id, todo.completed)
                children=move |todo| view! { <TodoRow todo=todo dnd=dnd /> }
            />
        </ul>
        <p class="todo-count">
            {move || {
                let (total, done) = ctx.counts();
                format!("{} todos, {} completed", total, done)
            }}
        </p>
    }
}
