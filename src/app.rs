//! Shopping List Frontend App
//!
//! Main application component: header, list sidebar and the active list.

use leptos::prelude::*;
use reactive_stores::Store;
use shopping_core::{Config, Session};

use crate::components::{
    AppHeader, EmptyState, ItemTable, ListSidebar, ListSummary, NewListModal, Notice,
};
use crate::context::AppContext;
use crate::storage::BrowserStorage;
use crate::store::ViewState;

#[component]
pub fn App() -> impl IntoView {
    let config = Config::default();
    let session = Session::open(BrowserStorage, &config);

    // Provide context to all children
    let ctx = AppContext::new(session);
    provide_context(ctx);
    provide_context(Store::new(ViewState::default()));

    let has_active_list = move || ctx.with_state(|s| s.active_list_id().is_some());

    view! {
        <div class="app-layout">
            <AppHeader />
            <div class="app-body">
                <ListSidebar />
                <main class="main-content">
                    <Show when=has_active_list fallback=|| view! { <EmptyState /> }>
                        <ListSummary />
                        <ItemTable />
                    </Show>
                </main>
            </div>
            <NewListModal />
            <Notice />
        </div>
    }
}
