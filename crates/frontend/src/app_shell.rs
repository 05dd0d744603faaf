//! Application shell - auth gate
//!
//! - loading screen while a stored session is being checked
//! - `LoginPage` when nobody is signed in
//! - `MainLayout` otherwise

use crate::dashboards::d400_pl_report::{PlReportPage, ReportProvider};
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use thaw::*;

/// Signed-in layout. Report state lives here so it is dropped on logout.
#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <ReportProvider>
            <Shell>
                <PlReportPage />
            </Shell>
        </ReportProvider>
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    let auth_state = use_auth();
    let checked = Memo::new(move |_| auth_state.with(|s| s.checked));
    let signed_in = Memo::new(move |_| auth_state.with(|s| s.is_authenticated()));

    view! {
        <Show
            when=move || checked.get()
            fallback=|| view! {
                <div class="app-loading">
                    <Spinner />
                    <span>"Loading..."</span>
                </div>
            }
        >
            <Show
                when=move || signed_in.get()
                fallback=|| view! { <LoginPage /> }
            >
                <MainLayout />
            </Show>
        </Show>
    }
}
