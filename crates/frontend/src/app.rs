use crate::app_shell::AppShell;
use crate::shared::config::AppConfig;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    log::info!("Report service at {}", config.api_base_url);
    provide_context(config);

    view! {
        <AuthProvider>
            <AppShell />
        </AuthProvider>
    }
}
