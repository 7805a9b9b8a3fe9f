use crate::client::api;
use crate::client::auth::use_auth;
use crate::models::user::{normalize_identifier, LoginRequest};
use leptos::ev::SubmitEvent;
use leptos::logging::log;
use leptos::*;
use leptos_router::{use_navigate, A};
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn Login() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let (identifier, set_identifier) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (remember_me, set_remember_me) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);
    let (pending, set_pending) = create_signal(false);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = LoginRequest {
            identifier: normalize_identifier(&identifier.get()),
            password: password.get(),
            remember_me: remember_me.get(),
        };
        if request.identifier.is_empty() || request.password.is_empty() {
            set_error.set(Some("Please enter your email or mobile number and password.".into()));
            return;
        }

        set_pending.set(true);
        set_error.set(None);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&request).await {
                Ok(response) => {
                    log!("[CLIENT] Login succeeded");
                    auth.login(response, request.remember_me);
                    navigate("/dashboard", Default::default());
                }
                Err(failure) => set_error.set(Some(failure.message)),
            }
            set_pending.set(false);
        });
    };

    view! {
        <section class="auth-page">
            <h2>{ "Login" }</h2>
            <form on:submit=handle_submit>
                <input
                    type="text"
                    placeholder="Email or mobile number"
                    prop:value=move || identifier.get()
                    on:input=move |e| set_identifier.set(event_target_value(&e))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |e| set_password.set(event_target_value(&e))
                />
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || remember_me.get()
                        on:change=move |e| set_remember_me.set(event_target_checked(&e))
                    />
                    { "Remember me" }
                </label>
                {move || error.get().map(|message| view! { <p class="error">{ message }</p> })}
                <button type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Login" }}
                </button>
            </form>
            <p>
                <A href="/forgot-password">{ "Forgot password?" }</A>
            </p>
            <p>
                { "New here? " }
                <A href="/">{ "Create an account" }</A>
            </p>
        </section>
    }
}
