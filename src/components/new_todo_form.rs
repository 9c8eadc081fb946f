//! New Todo Form Component
//!
//! Text input plus submit button for appending todos.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Form for creating new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();

    let (draft, set_draft) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.add(&draft.get_untracked()) {
            set_draft.set(String::new());
        }
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <input
                type="text"
                placeholder="Add a new todo"
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
