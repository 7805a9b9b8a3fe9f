use crate::client::api;
use crate::client::auth::use_auth;
use crate::client::forms::{blood_group_options, non_empty};
use crate::components::select_field::{LocationFields, SelectField};
use crate::models::user::{mask_mobile, DonorFilter, User};
use leptos::ev::SubmitEvent;
use leptos::logging::warn;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

#[component]
fn DonorRow(user: User, revealed: ReadSignal<bool>) -> impl IntoView {
    let location = [&user.city, &user.district, &user.state]
        .iter()
        .filter(|part| !part.is_empty())
        .map(|part| part.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let mobile = user.mobile_number.clone();
    let masked = mask_mobile(&mobile);

    view! {
        <tr>
            <td>{ user.full_name() }</td>
            <td>{ user.blood_group.map(|g| g.to_string()).unwrap_or_default() }</td>
            <td>{ user.gender.map(|g| g.as_str()).unwrap_or_default() }</td>
            <td>{ if user.availability { "Available" } else { "Unavailable" } }</td>
            <td>{ location }</td>
            <td>{move || if revealed.get() { mobile.clone() } else { masked.clone() }}</td>
        </tr>
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let auth = use_auth();

    let blood_group = create_rw_signal(String::new());
    let country = create_rw_signal(String::new());
    let state = create_rw_signal(String::new());
    let district = create_rw_signal(String::new());
    let city = create_rw_signal(String::new());

    let (donors, set_donors) = create_signal(Vec::<User>::new());
    let (searched, set_searched) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let (revealed, set_revealed) = create_signal(false);
    let (password, set_password) = create_signal(String::new());
    let (reveal_error, set_reveal_error) = create_signal(None::<String>);

    let search = move |ev: SubmitEvent| {
        ev.prevent_default();
        let filter = DonorFilter {
            blood_group: non_empty(blood_group.get()),
            country: non_empty(country.get()),
            state: non_empty(state.get()),
            district: non_empty(district.get()),
            city: non_empty(city.get()),
        };
        set_error.set(None);
        spawn_local(async move {
            let result = auth
                .authorized(|token| async move { api::find_donors(&token, &filter).await })
                .await;
            match result {
                Ok(users) => set_donors.set(users),
                Err(message) => {
                    warn!("[CLIENT] Donor search failed: {}", message);
                    set_donors.set(Vec::new());
                    set_error.set(Some(message));
                }
            }
            set_searched.set(true);
        });
    };

    let reveal = move |ev: SubmitEvent| {
        ev.prevent_default();
        let candidate = password.get();
        spawn_local(async move {
            let result = auth
                .authorized(|token| async move { api::verify_password(&token, &candidate).await })
                .await;
            match result {
                Ok(response) if response.is_valid => {
                    set_revealed.set(true);
                    set_reveal_error.set(None);
                }
                Ok(_) => set_reveal_error.set(Some("Incorrect password.".into())),
                Err(message) => set_reveal_error.set(Some(message)),
            }
            set_password.set(String::new());
        });
    };

    let greeting = move || {
        auth.user()
            .map(|user| format!("Welcome, {}", user.first_name))
            .unwrap_or_default()
    };

    view! {
        <section class="dashboard">
            <h2>{greeting}</h2>
            <form class="donor-search" on:submit=search>
                <SelectField label="Blood Group" value=blood_group options=Signal::derive(blood_group_options)/>
                <LocationFields country=country state=state district=district city=city/>
                <button type="submit">{ "Search" }</button>
            </form>
            {move || error.get().map(|message| view! { <p class="error">{ message }</p> })}
            <Show when=move || searched.get() && !donors.with(Vec::is_empty)>
                <Show
                    when=move || revealed.get()
                    fallback=move || view! {
                        <form class="reveal" on:submit=reveal>
                            <input
                                type="password"
                                placeholder="Re-enter your password to see contact numbers"
                                prop:value=move || password.get()
                                on:input=move |e| set_password.set(event_target_value(&e))
                            />
                            <button type="submit">{ "Show numbers" }</button>
                            {move || reveal_error.get().map(|message| view! { <p class="error">{ message }</p> })}
                        </form>
                    }
                >
                    <button type="button" on:click=move |_| set_revealed.set(false)>{ "Hide numbers" }</button>
                </Show>
                <table class="donors">
                    <thead>
                        <tr>
                            <th>{ "Name" }</th>
                            <th>{ "Blood Group" }</th>
                            <th>{ "Gender" }</th>
                            <th>{ "Availability" }</th>
                            <th>{ "Location" }</th>
                            <th>{ "Mobile" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || donors.get()
                            key=|user| user.id.clone()
                            children=move |user: User| view! { <DonorRow user=user revealed=revealed/> }
                        />
                    </tbody>
                </table>
            </Show>
            <Show when=move || searched.get() && donors.with(Vec::is_empty) && error.with(Option::is_none)>
                <p>{ "No donors match those details." }</p>
            </Show>
        </section>
    }
}
