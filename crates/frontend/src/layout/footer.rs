use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;

#[component]
#[allow(non_snake_case)]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__brand">
                {icon("heart")}
                <span>"NGO Connect"</span>
            </div>
            <p class="footer__tagline">
                "Discover, verify and support NGOs across India."
            </p>
            <div class="footer__links">
                <A href="/ngos">"Browse NGOs"</A>
                <A href="/volunteer">"Volunteer"</A>
                <A href="/events">"Events"</A>
                <A href="/blacklisted">"Blacklist Register"</A>
            </div>
        </footer>
    }
}
