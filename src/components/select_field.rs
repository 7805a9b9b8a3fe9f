use crate::models::location;
use leptos::*;

#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(into)] options: Signal<Vec<String>>,
    #[prop(optional)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    let placeholder = format!("Select {}", label);

    view! {
        <label class="field">
            <span>{ label }</span>
            <select
                prop:value=move || value.get()
                on:change=move |ev| {
                    let selected = event_target_value(&ev);
                    value.set(selected.clone());
                    if let Some(on_change) = on_change {
                        on_change.call(selected);
                    }
                }
            >
                <option value="">{ placeholder }</option>
                {move || {
                    let current = value.get_untracked();
                    options
                        .get()
                        .into_iter()
                        .map(|option| {
                            let selected = option == current;
                            view! { <option value=option.clone() selected=selected>{ option }</option> }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}

fn owned(values: Vec<&'static str>) -> Vec<String> {
    values.into_iter().map(String::from).collect()
}

/// Cascading country → state → district → city selects. Changing a level
/// clears everything below it.
#[component]
pub fn LocationFields(
    country: RwSignal<String>,
    state: RwSignal<String>,
    district: RwSignal<String>,
    city: RwSignal<String>,
) -> impl IntoView {
    let countries = Signal::derive(|| owned(location::countries()));
    let states = Signal::derive(move || owned(location::states(&country.get())));
    let districts =
        Signal::derive(move || owned(location::districts(&country.get(), &state.get())));
    let cities = Signal::derive(move || {
        owned(location::cities(&country.get(), &state.get(), &district.get()))
    });

    let reset_below_country = Callback::new(move |_: String| {
        state.set(String::new());
        district.set(String::new());
        city.set(String::new());
    });
    let reset_below_state = Callback::new(move |_: String| {
        district.set(String::new());
        city.set(String::new());
    });
    let reset_below_district = Callback::new(move |_: String| city.set(String::new()));

    view! {
        <div class="location-fields">
            <SelectField label="Country" value=country options=countries on_change=reset_below_country/>
            <SelectField label="State" value=state options=states on_change=reset_below_state/>
            <SelectField label="District" value=district options=districts on_change=reset_below_district/>
            <SelectField label="City" value=city options=cities/>
        </div>
    }
}
