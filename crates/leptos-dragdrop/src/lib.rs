//! Leptos DragDrop Utilities
//!
//! Handler builders for native HTML5 drag-and-drop on list rows.
//! Every row is both a drag source and a drop target. The drag source is
//! owned by the caller; these handlers only report gestures through callbacks.

use std::fmt::Display;

use leptos::prelude::*;
use web_sys::DragEvent;

/// MIME type of the payload written on dragstart
pub const DRAG_FORMAT: &str = "text/plain";

/// Gesture callbacks shared by all rows of a list
pub struct DragCallbacks<T: 'static> {
    /// Row `T` started dragging
    pub on_start: Callback<T>,
    /// Something was dropped on row `T`
    pub on_drop: Callback<T>,
    /// Drag gesture finished, dropped or cancelled
    pub on_end: Callback<()>,
}

impl<T: 'static> Clone for DragCallbacks<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for DragCallbacks<T> {}

/// Create dragstart handler for a row.
/// Firefox refuses to start a drag unless some data is set.
pub fn make_on_dragstart<T>(callbacks: DragCallbacks<T>, item_id: T) -> impl Fn(DragEvent) + Copy + 'static
where
    T: Copy + Display + 'static,
{
    move |ev: DragEvent| {
        if let Some(transfer) = ev.data_transfer() {
            let _ = transfer.set_data(DRAG_FORMAT, &item_id.to_string());
            transfer.set_effect_allowed("move");
        }
        callbacks.on_start.run(item_id);
    }
}

/// Dragover handler: the default action rejects the drop
pub fn on_dragover(ev: DragEvent) {
    ev.prevent_default();
    if let Some(transfer) = ev.data_transfer() {
        transfer.set_drop_effect("move");
    }
}

/// Create drop handler for a row
pub fn make_on_drop<T>(callbacks: DragCallbacks<T>, item_id: T) -> impl Fn(DragEvent) + Copy + 'static
where
    T: Copy + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        callbacks.on_drop.run(item_id);
    }
}

/// Create dragend handler, fired on the source whether or not a drop landed
pub fn make_on_dragend<T: 'static>(callbacks: DragCallbacks<T>) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        callbacks.on_end.run(());
    }
}
