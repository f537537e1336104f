use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api::ApiClient;
use crate::system::auth::{api, session};

/// Combined sign-in / sign-up form. On success the token is persisted and
/// the browser is sent back to the home page, which rebuilds the client
/// with the new session.
#[component]
#[allow(non_snake_case)]
pub fn LoginPage() -> impl IntoView {
    let client = use_context::<ApiClient>().expect("ApiClient not found in context");

    let registering = RwSignal::new(false);
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let client = client.clone();
        let name_val = name.get();
        let email_val = email.get();
        let password_val = password.get();
        let register = registering.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            let result = if register {
                api::register(&client, email_val, password_val, name_val).await
            } else {
                api::login(&client, email_val, password_val).await
            };
            match result {
                Ok(response) => {
                    session::store_token(&response.token);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Err(e) => {
                    set_error_message.set(Some(format!("Sign in failed: {}", e)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="page login-page">
            <div class="login-box">
                <h1>{move || if registering.get() { "Create an account" } else { "Sign in" }}</h1>

                <Show when=move || error_message.get().is_some()>
                    <div class="page__error">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <Show when=move || registering.get()>
                        <div class="form-group">
                            <label for="name">"Name"</label>
                            <input
                                type="text"
                                id="name"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>
                    </Show>

                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button type="submit" class="btn btn--primary" disabled=move || is_loading.get()>
                        {move || {
                            if is_loading.get() {
                                "Please wait..."
                            } else if registering.get() {
                                "Register"
                            } else {
                                "Sign in"
                            }
                        }}
                    </button>
                </form>

                <button
                    class="login-box__switch"
                    on:click=move |_| registering.update(|r| *r = !*r)
                >
                    {move || {
                        if registering.get() {
                            "Already have an account? Sign in"
                        } else {
                            "New here? Create an account"
                        }
                    }}
                </button>
            </div>
        </div>
    }
}
