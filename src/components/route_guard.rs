use crate::client::auth::use_auth;
use leptos::*;
use leptos_router::Redirect;

/// Renders its children only for signed-in users, redirecting to `/login`
/// otherwise.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let children = store_value(children);

    view! {
        <Show when=move || auth.is_ready() fallback=|| view! { <p class="loading">{ "Loading..." }</p> }>
            <Show
                when=move || auth.is_authenticated()
                fallback=|| view! { <Redirect path="/login"/> }
            >
                {move || children.with_value(|children| children())}
            </Show>
        </Show>
    }
}

/// Pages such as Register and Login that make no sense once signed in.
#[component]
pub fn PublicOnly(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let children = store_value(children);

    view! {
        <Show
            when=move || !(auth.is_ready() && auth.is_authenticated())
            fallback=|| view! { <Redirect path="/dashboard"/> }
        >
            {move || children.with_value(|children| children())}
        </Show>
    }
}
