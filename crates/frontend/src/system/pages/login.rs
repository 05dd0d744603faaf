use contracts::system::auth::{validate_email, validate_otp_code};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::config::AppConfig;
use crate::shared::http::use_api;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_request_otp, do_verify_otp, use_auth};
use crate::system::auth::otp_flow::{format_countdown, format_ttl, LoginStep};

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let otp_length = config.otp_length;
    let default_ttl = config.otp_default_ttl_secs;

    let auth_state = use_auth();
    let client = StoredValue::new(use_api());

    let step = RwSignal::new(LoginStep::default());
    let on_code_step = Memo::new(move |_| step.with(|s| s.email().is_some()));
    let (email, set_email) = signal(String::new());
    let (otp_code, set_otp_code) = signal(String::new());
    let (form_error, set_form_error) = signal(Option::<String>::None);

    // Each countdown run gets an id; a loop stops when its id is stale or the page is gone
    let countdown_run = StoredValue::new(0u64);
    let stop_countdown = move || {
        countdown_run.try_update_value(|run| *run += 1);
    };
    let start_countdown = move || {
        stop_countdown();
        let Some(run) = countdown_run.try_get_value() else {
            return;
        };
        spawn_local(async move {
            loop {
                TimeoutFuture::new(1_000).await;
                if countdown_run.try_get_value() != Some(run) {
                    break;
                }
                let running = step.try_update(|s| s.tick()).unwrap_or(false);
                if !running {
                    break;
                }
            }
        });
    };

    let is_loading = move || auth_state.with(|s| s.is_loading);
    let error_message = move || form_error.get().or_else(|| auth_state.with(|s| s.error.clone()));
    let clear_errors = move || {
        set_form_error.set(None);
        auth_state.update(|s| s.clear_error());
    };

    let on_request_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        clear_errors();

        let email_val = match validate_email(&email.get_untracked()) {
            Ok(value) => value,
            Err(e) => {
                set_form_error.set(Some(e.to_string()));
                return;
            }
        };

        let client = client.get_value();
        spawn_local(async move {
            if let Ok(response) = do_request_otp(&client, auth_state, email_val.clone()).await {
                let ttl = if response.expires_in > 0 {
                    response.expires_in
                } else {
                    default_ttl
                };
                set_otp_code.set(String::new());
                step.set(LoginStep::code_sent(email_val, ttl));
                start_countdown();
            }
        });
    };

    let on_verify_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        clear_errors();

        let Some(email_val) = step.with_untracked(|s| s.email().map(str::to_string)) else {
            return;
        };
        if !step.with_untracked(|s| s.can_submit_code()) {
            set_form_error.set(Some("The code has expired. Request a new one.".to_string()));
            return;
        }
        let code = match validate_otp_code(&otp_code.get_untracked(), otp_length) {
            Ok(value) => value,
            Err(e) => {
                set_form_error.set(Some(e.to_string()));
                return;
            }
        };

        // On success the shell swaps to the report view and unmounts this page
        let client = client.get_value();
        spawn_local(async move {
            let _ = do_verify_otp(&client, auth_state, email_val, code).await;
        });
    };

    let on_back = move |_| {
        stop_countdown();
        step.set(LoginStep::Email);
        set_otp_code.set(String::new());
        clear_errors();
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"P&L Report"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message().is_some()>
                    <div class="error-message">
                        <span>{move || error_message().unwrap_or_default()}</span>
                        <button type="button" class="error-message__close" aria-label="Close" on:click=move |_| clear_errors()>
                            "×"
                        </button>
                    </div>
                </Show>

                <Show
                    when=move || on_code_step.get()
                    fallback=move || view! {
                        <form on:submit=on_request_code>
                            <div class="form-group">
                                <label for="email">"Email address"</label>
                                <input
                                    type="email"
                                    id="email"
                                    placeholder="your.email@company.com"
                                    autofocus
                                    prop:value=move || email.get()
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    required
                                    disabled=is_loading
                                />
                            </div>

                            <button type="submit" class="btn-primary" disabled=is_loading>
                                {move || if is_loading() { "Sending..." } else { "Request code" }}
                            </button>

                            <div class="login-info">
                                <p>"We will email you a one-time code."</p>
                                <p>{format!("The code expires in {}.", format_ttl(default_ttl))}</p>
                            </div>
                        </form>
                    }
                >
                    <form on:submit=on_verify_code>
                        <div class="login-info">
                            <p class="login-info__sent">{icon("mail")}"Code sent to:"</p>
                            <p><strong>{move || step.with(|s| s.email().unwrap_or_default().to_string())}</strong></p>
                            <p class=move || if step.with(|s| s.is_expired()) { "countdown countdown--expired" } else { "countdown" }>
                                {move || match step.with(|s| s.remaining_secs()) {
                                    Some(secs) if secs > 0 => format!("Expires in {}", format_countdown(secs)),
                                    _ => "The code has expired".to_string(),
                                }}
                            </p>
                        </div>

                        <div class="form-group">
                            <label for="otp_code">{format!("One-time code ({} digits)", otp_length)}</label>
                            <input
                                type="text"
                                id="otp_code"
                                class="otp-input"
                                inputmode="numeric"
                                autocomplete="one-time-code"
                                placeholder="123456"
                                maxlength=otp_length.to_string()
                                autofocus
                                prop:value=move || otp_code.get()
                                on:input=move |ev| set_otp_code.set(event_target_value(&ev))
                                required
                                disabled=is_loading
                            />
                        </div>

                        <button
                            type="submit"
                            class="btn-primary"
                            disabled=move || is_loading() || !step.with(|s| s.can_submit_code())
                        >
                            {move || if is_loading() { "Signing in..." } else { "Sign in" }}
                        </button>

                        <button type="button" class="btn-secondary" on:click=on_back>
                            "Back / request a new code"
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}
