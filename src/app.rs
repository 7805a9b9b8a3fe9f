/// Application shell: meta tags, the auth context, and the page routes.
use crate::client::auth::provide_auth;
use crate::components::header::{Footer, Header};
use crate::components::route_guard::{Protected, PublicOnly};
use crate::pages::{
    dashboard::Dashboard, error_page::ErrorPage, forgot_password::ForgotPassword, login::Login,
    profile::Profile, register::Register, reviews::Reviews,
};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_auth();

    view! {
        <Stylesheet id="leptos" href="/pkg/lifesavers.css"/>
        <Title text="Life Savers"/>
        <Router>
            <Header/>
            <main>
                <Routes>
                    <Route path="/" view=|| view! { <PublicOnly><Register/></PublicOnly> }/>
                    <Route path="/login" view=|| view! { <PublicOnly><Login/></PublicOnly> }/>
                    <Route path="/forgot-password" view=ForgotPassword/>
                    <Route path="/dashboard" view=|| view! { <Protected><Dashboard/></Protected> }/>
                    <Route path="/profile" view=|| view! { <Protected><Profile/></Protected> }/>
                    <Route path="/reviews" view=Reviews/>
                    <Route path="/*any" view=ErrorPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
