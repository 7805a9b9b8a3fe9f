use crate::client::api;
use crate::client::forms::{blood_group_options, gender_options, normalize_mobile};
use crate::components::select_field::{LocationFields, SelectField};
use crate::models::user::{is_valid_email, RegisterRequest};
use leptos::ev::{self, SubmitEvent};
use leptos::logging::log;
use leptos::*;
use leptos_router::{use_navigate, A};
use wasm_bindgen_futures::spawn_local;

/// Modal asking for the code mailed to the address being registered.
#[component]
fn OtpModal(
    email: Signal<String>,
    on_verified: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let (code, set_code) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (pending, set_pending) = create_signal(false);

    let verify = move |ev: SubmitEvent| {
        ev.prevent_default();
        let otp = code.get().trim().to_string();
        if otp.len() != 6 {
            set_error.set(Some("Enter the 6-digit code from your email.".into()));
            return;
        }
        set_pending.set(true);
        let address = email.get_untracked();
        spawn_local(async move {
            match api::verify_otp(&address, &otp).await {
                Ok(_) => on_verified.call(()),
                Err(failure) => set_error.set(Some(failure.message)),
            }
            set_pending.set(false);
        });
    };

    view! {
        <div class="modal-backdrop">
            <form class="modal" on:submit=verify>
                <h3>{ "Verify your email" }</h3>
                <p>{move || format!("We sent a code to {}", email.get())}</p>
                <input
                    type="text"
                    inputmode="numeric"
                    maxlength="6"
                    placeholder="OTP"
                    prop:value=move || code.get()
                    on:input=move |e| set_code.set(event_target_value(&e))
                />
                {move || error.get().map(|message| view! { <p class="error">{ message }</p> })}
                <button type="submit" disabled=move || pending.get()>{ "Verify" }</button>
                <button type="button" on:click=move |_| on_close.call(())>{ "Close" }</button>
            </form>
        </div>
    }
}

#[component]
pub fn Register() -> impl IntoView {
    let navigate = use_navigate();

    let first_name = create_rw_signal(String::new());
    let last_name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let mobile = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let confirm = create_rw_signal(String::new());
    let blood_group = create_rw_signal(String::new());
    let gender = create_rw_signal(String::new());
    let availability = create_rw_signal(true);
    let country = create_rw_signal(String::new());
    let state = create_rw_signal(String::new());
    let district = create_rw_signal(String::new());
    let city = create_rw_signal(String::new());
    let terms_accepted = create_rw_signal(false);

    let email_verified = create_rw_signal(false);
    let show_otp = create_rw_signal(false);
    let error = create_rw_signal(None::<String>);
    let notice = create_rw_signal(None::<String>);

    let send_code = move |_: ev::MouseEvent| {
        let address = email.get().trim().to_string();
        if !is_valid_email(&address) {
            error.set(Some("Please enter a valid email address.".into()));
            return;
        }
        error.set(None);
        spawn_local(async move {
            match api::send_verification_otp(&address).await {
                Ok(response) => {
                    notice.set(Some(response.msg));
                    show_otp.set(true);
                }
                Err(failure) => error.set(Some(failure.message)),
            }
        });
    };

    let on_verified = Callback::new(move |_: ()| {
        log!("[CLIENT] Email verified");
        email_verified.set(true);
        show_otp.set(false);
        notice.set(Some("Email verified.".into()));
    });
    let on_close = Callback::new(move |_: ()| show_otp.set(false));

    let can_submit = move || email_verified.get() && terms_accepted.get();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !can_submit() {
            error.set(Some("Verify your email and accept the terms to continue.".into()));
            return;
        }
        if password.get() != confirm.get() {
            error.set(Some("Passwords do not match.".into()));
            return;
        }
        let mobile_number = match normalize_mobile(&mobile.get()) {
            Ok(number) => number,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        let request = RegisterRequest {
            first_name: first_name.get().trim().to_string(),
            last_name: last_name.get().trim().to_string(),
            email: email.get().trim().to_string(),
            password: password.get(),
            mobile_number,
            blood_group: blood_group.get().parse().ok(),
            gender: gender.get().parse().ok(),
            availability: availability.get(),
            country: country.get(),
            state: state.get(),
            district: district.get(),
            city: city.get(),
            terms_accepted: terms_accepted.get(),
        };
        if let Err(message) = request.validate() {
            error.set(Some(message));
            return;
        }

        error.set(None);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::register(&request).await {
                Ok(_) => navigate("/login", Default::default()),
                Err(failure) => error.set(Some(failure.message)),
            }
        });
    };

    let text_input = move |placeholder: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <input
                type=kind
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |e| value.set(event_target_value(&e))
            />
        }
    };

    view! {
        <section class="auth-page register">
            <h2>{ "Become a Donor" }</h2>
            <form on:submit=handle_submit>
                {text_input("First name", "text", first_name)}
                {text_input("Last name", "text", last_name)}
                <div class="email-row">
                    <input
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |e| {
                            email.set(event_target_value(&e));
                            email_verified.set(false);
                        }
                    />
                    <Show
                        when=move || email_verified.get()
                        fallback=move || view! {
                            <button type="button" on:click=send_code>{ "Verify" }</button>
                        }
                    >
                        <span class="verified">{ "Verified" }</span>
                    </Show>
                </div>
                <div class="mobile-row">
                    <span>{ "+91" }</span>
                    {text_input("Mobile number", "tel", mobile)}
                </div>
                {text_input("Password", "password", password)}
                {text_input("Confirm password", "password", confirm)}
                <SelectField label="Blood Group" value=blood_group options=Signal::derive(blood_group_options)/>
                <SelectField label="Gender" value=gender options=Signal::derive(gender_options)/>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || availability.get()
                        on:change=move |e| availability.set(event_target_checked(&e))
                    />
                    { "Available to donate" }
                </label>
                <LocationFields country=country state=state district=district city=city/>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || terms_accepted.get()
                        on:change=move |e| terms_accepted.set(event_target_checked(&e))
                    />
                    { "I accept the terms and conditions" }
                </label>
                {move || notice.get().map(|text| view! { <p class="notice">{ text }</p> })}
                {move || error.get().map(|text| view! { <p class="error">{ text }</p> })}
                <button type="submit" disabled=move || !can_submit()>{ "Register" }</button>
            </form>
            <p>
                { "Already registered? " }
                <A href="/login">{ "Login" }</A>
            </p>
            <Show when=move || show_otp.get()>
                <OtpModal email=Signal::derive(move || email.get()) on_verified=on_verified on_close=on_close/>
            </Show>
        </section>
    }
}
