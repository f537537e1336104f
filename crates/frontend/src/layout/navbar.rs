use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::shared::icons::icon;
use crate::system::auth::session::Session;

const LINKS: [(&str, &str); 6] = [
    ("/", "Home"),
    ("/ngos", "NGOs"),
    ("/volunteer", "Volunteer"),
    ("/events", "Events"),
    ("/impact", "Impact"),
    ("/blacklisted", "Blacklisted"),
];

fn is_active(path: &str, href: &str) -> bool {
    if href == "/" {
        path == "/"
    } else {
        path.starts_with(href)
    }
}

#[component]
#[allow(non_snake_case)]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let menu_open = RwSignal::new(false);
    let signed_in = use_context::<Session>()
        .map(|s| s.is_authenticated())
        .unwrap_or(false);

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">
                {icon("heart")}
                <span>"NGO Connect"</span>
            </A>

            <button
                class="navbar__toggle"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { icon("x") } else { icon("menu") }}
            </button>

            <div class="navbar__links" class:navbar__links--open=move || menu_open.get()>
                {LINKS
                    .iter()
                    .map(|(href, label)| {
                        let href = *href;
                        view! {
                            <A
                                href=href
                                attr:class="navbar__link"
                                class:navbar__link--active=move || {
                                    location.pathname.with(|p| is_active(p, href))
                                }
                                on:click=move |_| menu_open.set(false)
                            >
                                {*label}
                            </A>
                        }
                    })
                    .collect_view()}
                <Show when=move || !signed_in>
                    <A href="/login" attr:class="navbar__link navbar__link--login">
                        "Sign in"
                    </A>
                </Show>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_link_matches_exactly() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/ngos", "/"));
    }

    #[test]
    fn section_links_match_by_prefix() {
        assert!(is_active("/ngos", "/ngos"));
        assert!(is_active("/ngos/42", "/ngos"));
        assert!(!is_active("/events", "/ngos"));
    }
}
