use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;

use super::context::{DndContext, SortableItems};
use super::payload::{SortableItem, SortablePayload};
use crate::core::models::Id;

/// Handle returned by `use_sortable`.
///
/// The item root gets `node_ref`, `draggable`, `on_drag_start` and `on_drag_over`.
/// The drag handle (the root itself or a region inside it) gets
/// `on_handle_mouse_down`: a drag only starts when it was grabbed by the handle.
#[derive(Clone)]
pub struct Sortable {
    ctx: DndContext,
    id: Id,
    payload: Signal<SortablePayload>,
    pub node_ref: NodeRef<Div>,
    pub disabled: Signal<bool>,
    pub is_dragging: Signal<bool>,
    pub index: Signal<Option<usize>>,
}

pub fn use_sortable<T>(item: Signal<T>, disabled: Signal<bool>) -> Sortable
where
    T: SortableItem + Clone + Send + Sync + 'static,
{
    let ctx = expect_context::<DndContext>();
    let id = item.with_untracked(|item| item.sortable_id());
    let payload = Signal::derive(move || item.with(|item| item.to_payload()));
    let is_dragging = ctx.is_dragging(id.clone());

    let index: Signal<Option<usize>> = match use_context::<SortableItems>() {
        Some(SortableItems(items)) => {
            let id = id.clone();
            Signal::derive(move || items.with(|ids| ids.iter().position(|other| *other == id)))
        }
        None => Signal::derive(|| None),
    };

    Sortable {
        ctx,
        id,
        payload,
        node_ref: NodeRef::new(),
        disabled,
        is_dragging: is_dragging.into(),
        index,
    }
}

impl Sortable {
    pub fn draggable(&self) -> impl Fn() -> &'static str + Send + Sync + 'static {
        let disabled = self.disabled;
        move || if disabled.get() { "false" } else { "true" }
    }

    pub fn style(&self) -> String {
        format!("transition: {};", self.ctx.transition())
    }

    pub fn on_handle_mouse_down(&self) -> impl Fn(ev::MouseEvent) + 'static {
        let ctx = self.ctx;
        let id = self.id.clone();
        let disabled = self.disabled;
        move |_| {
            if disabled.get_untracked() {
                ctx.disarm();
            } else {
                ctx.arm(id.clone());
            }
        }
    }

    pub fn on_drag_start(&self) -> impl Fn(ev::DragEvent) + 'static {
        let ctx = self.ctx;
        let id = self.id.clone();
        let payload = self.payload;
        let disabled = self.disabled;
        let node_ref = self.node_ref;
        move |ev: ev::DragEvent| {
            // Nested sortables must not start their parent's drag too
            ev.stop_propagation();
            // Only a press on this item's own handle may start its drag
            if !ctx.take_armed(&id) || disabled.get_untracked() {
                ev.prevent_default();
                return;
            }

            if let Some(transfer) = ev.data_transfer() {
                transfer.set_effect_allowed("move");
                // Firefox refuses to start a drag without data
                if let Err(e) = transfer.set_data("text/plain", &id) {
                    web_sys::console::error_1(&format!("Failed to set drag data for {}: {:?}", id, e).into());
                }
                if let Some(root) = node_ref.get_untracked() {
                    transfer.set_drag_image(&root, ev.offset_x(), ev.offset_y());
                }
            }

            // The browser snapshots the drag image after this handler returns; the
            // placeholder swap has to wait until then.
            let payload = payload.get_untracked();
            Timeout::new(0, move || ctx.begin(payload)).forget();
        }
    }

    pub fn on_drag_over(&self) -> impl Fn(ev::DragEvent) + 'static {
        let ctx = self.ctx;
        let payload = self.payload;
        move |ev: ev::DragEvent| {
            if !ctx.is_active() {
                return;
            }
            ev.prevent_default();
            ev.stop_propagation();
            if let Some(transfer) = ev.data_transfer() {
                transfer.set_drop_effect("move");
            }
            ctx.hover(payload.get_untracked());
        }
    }
}
