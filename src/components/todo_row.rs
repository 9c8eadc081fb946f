//! Todo Row Component
//!
//! Individual todo in the list. Each row is a drag source and a drop target.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_dragend, make_on_dragstart, make_on_drop, on_dragover, DragCallbacks};

use crate::context::use_app_context;
use crate::models::{Todo, TodoId};

/// A single todo row
#[component]
pub fn TodoRow(
    todo: Todo,
    dnd: DragCallbacks<TodoId>,
) -> impl IntoView {
    let ctx = use_app_context();

    let id = todo.id;
    let completed = todo.completed;

    let is_dragging = move || ctx.dragged_id() == Some(id);
    let row_class = move || {
        let mut c = String::from("todo-row");
        if completed { c.push_str(" completed"); }
        if is_dragging() { c.push_str(" dragging"); }
        c
    };

    view! {
        <li
            class=row_class
            draggable="true"
            on:dragstart=make_on_dragstart(dnd, id)
            on:dragover=on_dragover
            on:drop=make_on_drop(dnd, id)
            on:dragend=make_on_dragend(dnd)
        >
            <span
                class="todo-text"
                style=if completed { "text-decoration: line-through" } else { "text-decoration: none" }
                on:click=move |_| ctx.toggle(id)
            >
                {todo.text}
            </span>

            <div class="todo-controls">
                <input
                    type="checkbox"
                    prop:checked=completed
                    on:change=move |_| ctx.toggle(id)
                />
                <button class="delete-btn" on:click=move |_| ctx.delete(id)>"Delete"</button>
            </div>
        </li>
    }
}
