//! Sort Button Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Flips the completion sort; labelled with the current direction
#[component]
pub fn SortButton() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <button type="button" class="sort-btn" on:click=move |_| ctx.toggle_sort()>
            {move || format!("Sort {}", ctx.sort_order().label())}
        </button>
    }
}
