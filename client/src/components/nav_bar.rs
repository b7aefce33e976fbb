//! Header bar with the chat/dashboard switcher.

use leptos::prelude::*;

use crate::state::ui::ActiveView;

/// Shell header. Clicking a tab makes that view the only one shown.
#[component]
pub fn NavBar(active: RwSignal<ActiveView>) -> impl IntoView {
    view! {
        <header class="nav-bar toolbar">
            <span class="toolbar__title">"Hugo"</span>
            <span class="toolbar__subtitle">"Procurement Assistant"</span>
            <span class="toolbar__divider" aria-hidden="true"></span>
            {ActiveView::ALL
                .into_iter()
                .map(|view_kind| {
                    view! {
                        <button
                            class="btn nav-bar__tab"
                            class:nav-bar__tab--active=move || active.get() == view_kind
                            on:click=move |_| active.set(view_kind)
                        >
                            {view_kind.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </header>
    }
}
