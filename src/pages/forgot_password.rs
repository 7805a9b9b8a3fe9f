use crate::client::api;
use crate::models::user::{is_valid_email, validate_password, ResetPasswordRequest};
use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::{use_navigate, A};
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, PartialEq)]
enum Step {
    RequestCode,
    Reset,
}

#[component]
pub fn ForgotPassword() -> impl IntoView {
    let navigate = use_navigate();

    let (step, set_step) = create_signal(Step::RequestCode);
    let (email, set_email) = create_signal(String::new());
    let (otp, set_otp) = create_signal(String::new());
    let (new_password, set_new_password) = create_signal(String::new());
    let (confirm, set_confirm) = create_signal(String::new());
    let (message, set_message) = create_signal(None::<String>);
    let (error, set_error) = create_signal(None::<String>);

    let request_code = move |ev: SubmitEvent| {
        ev.prevent_default();
        let address = email.get().trim().to_string();
        if !is_valid_email(&address) {
            set_error.set(Some("Please enter a valid email address.".into()));
            return;
        }
        set_error.set(None);
        spawn_local(async move {
            match api::forgot_password(&address).await {
                Ok(response) => {
                    set_message.set(Some(response.msg));
                    set_step.set(Step::Reset);
                }
                Err(failure) => set_error.set(Some(failure.message)),
            }
        });
    };

    let reset = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Err(message) = validate_password(&new_password.get()) {
            set_error.set(Some(message));
            return;
        }
        if new_password.get() != confirm.get() {
            set_error.set(Some("Passwords do not match.".into()));
            return;
        }
        let request = ResetPasswordRequest {
            email: email.get().trim().to_string(),
            otp: otp.get().trim().to_string(),
            new_password: new_password.get(),
        };
        set_error.set(None);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::reset_password(&request).await {
                Ok(_) => navigate("/login", Default::default()),
                Err(failure) => set_error.set(Some(failure.message)),
            }
        });
    };

    view! {
        <section class="auth-page">
            <h2>{ "Reset Password" }</h2>
            {move || message.get().map(|text| view! { <p class="notice">{ text }</p> })}
            {move || error.get().map(|text| view! { <p class="error">{ text }</p> })}
            <Show
                when=move || step.get() == Step::Reset
                fallback=move || view! {
                    <form on:submit=request_code>
                        <input
                            type="email"
                            placeholder="Registered email"
                            prop:value=move || email.get()
                            on:input=move |e| set_email.set(event_target_value(&e))
                        />
                        <button type="submit">{ "Send OTP" }</button>
                    </form>
                }
            >
                <form on:submit=reset.clone()>
                    <input
                        type="text"
                        inputmode="numeric"
                        maxlength="6"
                        placeholder="OTP"
                        prop:value=move || otp.get()
                        on:input=move |e| set_otp.set(event_target_value(&e))
                    />
                    <input
                        type="password"
                        placeholder="New password"
                        prop:value=move || new_password.get()
                        on:input=move |e| set_new_password.set(event_target_value(&e))
                    />
                    <input
                        type="password"
                        placeholder="Confirm new password"
                        prop:value=move || confirm.get()
                        on:input=move |e| set_confirm.set(event_target_value(&e))
                    />
                    <button type="submit">{ "Reset Password" }</button>
                </form>
            </Show>
            <p>
                <A href="/login">{ "Back to login" }</A>
            </p>
        </section>
    }
}
