pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Signed-in application frame: top bar above the page content.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
