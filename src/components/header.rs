use crate::client::auth::use_auth;
use leptos::*;
use leptos_router::{use_navigate, A};

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let logout = move |_: ev::MouseEvent| {
        auth.logout();
        navigate("/login", Default::default());
    };

    view! {
        <header class="site-header">
            <A href="/" class="brand">{ "Life Savers" }</A>
            <nav>
                <A href="/reviews">{ "Reviews" }</A>
                <Show
                    when=move || auth.is_authenticated()
                    fallback=|| view! {
                        <A href="/login">{ "Login" }</A>
                        <A href="/">{ "Register" }</A>
                    }
                >
                    <A href="/dashboard">{ "Find Donor" }</A>
                    <A href="/profile">
                        {move || auth.user().map(|u| u.first_name).unwrap_or_default()}
                    </A>
                    <button class="link" on:click=logout.clone()>{ "Logout" }</button>
                </Show>
            </nav>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>{ "Every donor counts. Keep your availability up to date." }</p>
        </footer>
    }
}
