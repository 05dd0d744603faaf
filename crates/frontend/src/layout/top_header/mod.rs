//! TopHeader component - application top bar.
//!
//! Contains:
//! - Application title
//! - Backend health badge
//! - Signed-in user and logout

use crate::shared::http::use_api;
use crate::shared::icons::icon;
use crate::system::auth::context::{logout_action, use_auth};
use crate::system::health::{health_check, health_label};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let auth_state = use_auth();
    let client = StoredValue::new(use_api());
    let logout = logout_action();

    // (label, healthy); None until the first check returns
    let health = RwSignal::new(None::<(&'static str, bool)>);

    Effect::new(move |_| {
        let client = client.get_value();
        spawn_local(async move {
            let result = health_check(&client).await;
            if let Err(e) = &result {
                log::warn!("Health check failed: {}", e);
            }
            health.set(Some(health_label(&result)));
        });
    });

    let user_email = move || auth_state.with(|s| s.user.as_ref().map(|u| u.email.clone()));
    let user_domain = move || auth_state.with(|s| s.user.as_ref().map(|u| u.domain.clone()));

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                {icon("report")}
                <span class="top-header__title">"P&L Report"</span>
            </div>

            <div class="top-header__actions">
                {move || health.get().map(|(label, healthy)| {
                    let color = if healthy { BadgeColor::Success } else { BadgeColor::Danger };
                    view! {
                        <Badge appearance=BadgeAppearance::Tint color=color>{label}</Badge>
                    }
                })}

                <div class="top-header__user">
                    {icon("user")}
                    <span>{move || user_email().unwrap_or_default()}</span>
                    {move || user_domain().map(|domain| view! {
                        <span class="top-header__domain">{domain}</span>
                    })}
                </div>

                <button
                    class="top-header__icon-btn"
                    on:click=move |_| logout()
                    title="Sign out"
                    disabled=move || auth_state.with(|s| s.is_loading)
                >
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
