use leptos::prelude::*;
use leptos_router::components::A;

#[component]
#[allow(non_snake_case)]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page not-found">
            <h1>"404"</h1>
            <p>"This page does not exist."</p>
            <A href="/" attr:class="btn">"Back to home"</A>
        </div>
    }
}
