use leptos::*;
use leptos_router::A;

#[component]
pub fn ErrorPage() -> impl IntoView {
    view! {
        <section class="error-page">
            <h1>{ "404" }</h1>
            <p>{ "The page you are looking for does not exist." }</p>
            <A href="/">{ "Back to home" }</A>
        </section>
    }
}
