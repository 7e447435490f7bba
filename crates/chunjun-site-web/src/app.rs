//! Main Leptos App component with SPA router

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::AppHeader;
use crate::pages::{Home, NotFound, RoutePage};

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app">
                <AppHeader />
                <main class="content">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=Home />
                        <Route path=path!("/*any") view=RoutePage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
