use leptos::context::Provider;
use leptos::ev;
use leptos::prelude::*;

use super::payload::SortablePayload;
use super::session::{DragEnd, DragOver, DragSession};
use crate::core::models::Id;

/// Shared drag state for every sortable item below a `DndProvider`.
#[derive(Clone, Copy)]
pub struct DndContext {
    session: StoredValue<DragSession>,
    active_id: RwSignal<Option<Id>>,
    transition: StoredValue<String>,
    on_drag_start: Callback<SortablePayload>,
    on_drag_over: Callback<DragOver>,
    on_drag_end: Callback<DragEnd>,
}

impl DndContext {
    pub fn new(
        transition: String,
        on_drag_start: Callback<SortablePayload>,
        on_drag_over: Callback<DragOver>,
        on_drag_end: Callback<DragEnd>,
    ) -> Self {
        Self {
            session: StoredValue::new(DragSession::default()),
            active_id: RwSignal::new(None),
            transition: StoredValue::new(transition),
            on_drag_start,
            on_drag_over,
            on_drag_end,
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.with_value(|session| session.is_active())
    }

    pub fn arm(&self, id: Id) {
        self.session.update_value(|session| session.arm(id));
    }

    pub fn disarm(&self) {
        self.session.update_value(|session| session.disarm());
    }

    pub fn take_armed(&self, id: &str) -> bool {
        let mut armed = false;
        self.session.update_value(|session| armed = session.take_armed(id));
        armed
    }

    pub fn transition(&self) -> String {
        self.transition.get_value()
    }

    // Memoized so hover updates never wake the item views
    pub fn is_dragging(&self, id: Id) -> Memo<bool> {
        let active_id = self.active_id;
        Memo::new(move |_| active_id.with(|active| active.as_deref() == Some(id.as_str())))
    }

    pub fn begin(&self, payload: SortablePayload) {
        let mut started = false;
        self.session.update_value(|session| started = session.begin(payload.clone()));
        if !started {
            web_sys::console::log_1(&format!("Ignoring drag of {}: another drag is active", payload.id()).into());
            return;
        }
        web_sys::console::log_1(&format!("Drag started: {} {}", payload.kind().as_str(), payload.id()).into());
        self.active_id.set(Some(payload.id().clone()));
        self.on_drag_start.run(payload);
    }

    pub fn hover(&self, over: SortablePayload) {
        let mut event = None;
        self.session.update_value(|session| event = session.hover(over));
        if let Some(event) = event {
            self.on_drag_over.run(event);
        }
    }

    pub fn finish(&self) {
        let mut event = None;
        self.session.update_value(|session| event = session.finish());
        if let Some(event) = event {
            web_sys::console::log_1(&format!("Drag ended: {} {}", event.active.kind().as_str(), event.active.id()).into());
            self.active_id.set(None);
            self.on_drag_end.run(event);
        }
    }
}

#[component]
pub fn DndProvider(
    #[prop(into)] transition: String,
    on_drag_start: Callback<SortablePayload>,
    on_drag_over: Callback<DragOver>,
    on_drag_end: Callback<DragEnd>,
    children: Children,
) -> impl IntoView {
    let ctx = DndContext::new(transition, on_drag_start, on_drag_over, on_drag_end);

    let listeners = vec![
        // The whole page accepts drops while a gesture is running
        window_event_listener(ev::dragover, move |ev| {
            if ctx.is_active() {
                ev.prevent_default();
            }
        }),
        window_event_listener(ev::drop, move |ev| {
            if ctx.is_active() {
                ev.prevent_default();
                ctx.finish();
            }
        }),
        // Reaches the window only while the source node is still attached
        window_event_listener(ev::dragend, move |_| ctx.finish()),
        // Native drags suppress pointer events, so one arriving means the gesture ended
        // somewhere we were not told about (detached source dropped off-page).
        window_event_listener(ev::pointermove, move |_| {
            if ctx.is_active() {
                ctx.finish();
            }
        }),
        // A handle released anywhere, even outside its item, is no longer pressed
        window_event_listener(ev::mouseup, move |_| ctx.disarm()),
    ];
    on_cleanup(move || {
        for listener in listeners {
            listener.remove();
        }
    });

    view! { <Provider value=ctx>{children()}</Provider> }
}

/// Ordered ids of the items in one sortable list.
#[derive(Clone, Copy)]
pub struct SortableItems(pub Signal<Vec<Id>>);

#[component]
pub fn SortableContext(#[prop(into)] items: Signal<Vec<Id>>, children: Children) -> impl IntoView {
    // Scoped so sibling lists never see each other's ids
    view! { <Provider value=SortableItems(items)>{children()}</Provider> }
}
