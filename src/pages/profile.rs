use crate::client::api;
use crate::client::auth::use_auth;
use crate::client::forms::{blood_group_options, gender_options, local_mobile, non_empty, normalize_mobile};
use crate::components::select_field::{LocationFields, SelectField};
use crate::models::user::{UpdateUserRequest, User};
use leptos::ev::SubmitEvent;
use leptos::logging::log;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

/// Only the fields that differ from the stored profile are sent.
fn changes(current: &User, edited: UpdateUserRequest) -> UpdateUserRequest {
    fn changed(new: Option<String>, old: &str) -> Option<String> {
        new.filter(|value| value != old)
    }
    UpdateUserRequest {
        first_name: changed(edited.first_name, &current.first_name),
        last_name: changed(edited.last_name, &current.last_name),
        email: changed(edited.email, &current.email),
        mobile_number: changed(edited.mobile_number, &current.mobile_number),
        blood_group: edited.blood_group.filter(|g| Some(*g) != current.blood_group),
        gender: edited.gender.filter(|g| Some(*g) != current.gender),
        availability: edited.availability.filter(|a| *a != current.availability),
        country: changed(edited.country, &current.country),
        state: changed(edited.state, &current.state),
        district: changed(edited.district, &current.district),
        city: changed(edited.city, &current.city),
    }
}

#[component]
pub fn Profile() -> impl IntoView {
    let auth = use_auth();
    let user = auth.user();

    let field = |f: fn(&User) -> String| create_rw_signal(user.as_ref().map(f).unwrap_or_default());
    let first_name = field(|u| u.first_name.clone());
    let last_name = field(|u| u.last_name.clone());
    let email = field(|u| u.email.clone());
    let mobile = field(|u| local_mobile(&u.mobile_number));
    let blood_group = field(|u| u.blood_group.map(|g| g.to_string()).unwrap_or_default());
    let gender = field(|u| u.gender.map(|g| g.as_str().to_string()).unwrap_or_default());
    let country = field(|u| u.country.clone());
    let state = field(|u| u.state.clone());
    let district = field(|u| u.district.clone());
    let city = field(|u| u.city.clone());
    let availability = create_rw_signal(user.as_ref().map(|u| u.availability).unwrap_or(false));

    let (message, set_message) = create_signal(None::<String>);
    let (error, set_error) = create_signal(None::<String>);

    let save = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(current) = auth.user() else {
            return;
        };
        let mobile_number = match normalize_mobile(&mobile.get()) {
            Ok(number) => number,
            Err(message) => {
                set_error.set(Some(message));
                return;
            }
        };
        let edited = UpdateUserRequest {
            first_name: non_empty(first_name.get()),
            last_name: non_empty(last_name.get()),
            email: non_empty(email.get()),
            mobile_number: Some(mobile_number),
            blood_group: blood_group.get().parse().ok(),
            gender: gender.get().parse().ok(),
            availability: Some(availability.get()),
            country: non_empty(country.get()),
            state: non_empty(state.get()),
            district: non_empty(district.get()),
            city: non_empty(city.get()),
        };
        let update = changes(&current, edited);
        if update.is_empty() {
            set_message.set(Some("Nothing to update.".into()));
            return;
        }

        set_error.set(None);
        spawn_local(async move {
            let result = auth
                .authorized(|token| async move {
                    api::update_user(&token, &current.id, &update).await
                })
                .await;
            match result {
                Ok(response) => {
                    log!("[CLIENT] Profile updated");
                    auth.set_user(response.user);
                    set_message.set(Some(response.msg));
                }
                Err(message) => set_error.set(Some(message)),
            }
        });
    };

    let text_input = move |placeholder: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <label class="field">
                <span>{ placeholder }</span>
                <input
                    type=kind
                    prop:value=move || value.get()
                    on:input=move |e| value.set(event_target_value(&e))
                />
            </label>
        }
    };

    view! {
        <section class="profile">
            <h2>{ "My Profile" }</h2>
            <form on:submit=save>
                {text_input("First name", "text", first_name)}
                {text_input("Last name", "text", last_name)}
                {text_input("Email", "email", email)}
                {text_input("Mobile number", "tel", mobile)}
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
                {move || message.get().map(|text| view! { <p class="notice">{ text }</p> })}
                {move || error.get().map(|text| view! { <p class="error">{ text }</p> })}
                <button type="submit">{ "Save changes" }</button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::BloodGroup;
    use chrono::Utc;

    fn user() -> User {
        User {
            id: "u1".into(),
            first_name: "Asha".into(),
            last_name: "Verma".into(),
            email: "asha@example.com".into(),
            mobile_number: "+919876543210".into(),
            blood_group: Some(BloodGroup::OPositive),
            gender: None,
            availability: true,
            country: "India".into(),
            state: "Haryana".into(),
            district: "Karnal".into(),
            city: "Karnal".into(),
            terms_accepted: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn unchanged_fields_are_not_sent() {
        let current = user();
        let edited = UpdateUserRequest {
            first_name: Some("Asha".into()),
            city: Some("Gharaunda".into()),
            availability: Some(true),
            blood_group: Some(BloodGroup::OPositive),
            ..Default::default()
        };
        let update = changes(&current, edited);
        assert_eq!(update.city.as_deref(), Some("Gharaunda"));
        assert!(update.first_name.is_none());
        assert!(update.availability.is_none());
        assert!(update.blood_group.is_none());
    }

    #[test]
    fn identical_profile_yields_empty_update() {
        let current = user();
        let edited = UpdateUserRequest {
            email: Some(current.email.clone()),
            availability: Some(current.availability),
            ..Default::default()
        };
        assert!(changes(&current, edited).is_empty());
    }
}
