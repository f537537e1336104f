use contracts::domain::event::Event;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::domain::event::api;
use crate::shared::api::ApiClient;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;

/// Upcoming events and campaigns across all organizations.
#[component]
#[allow(non_snake_case)]
pub fn EventList() -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient not found in context");
    let (events, set_events) = signal::<Vec<Event>>(Vec::new());
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        match api::list_upcoming(&api).await {
            Ok(list) => set_events.set(list),
            Err(e) => log::error!("events fetch failed: {}", e),
        }
        set_loading.set(false);
    });

    view! {
        <div class="page event-list">
            <header class="page__header">
                <h1>"Upcoming Events"</h1>
                <p class="page__subtitle">"Camps, drives and campaigns you can join"</p>
            </header>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="page__loading">"Loading events..."</div> }
            >
                <Show
                    when=move || !events.get().is_empty()
                    fallback=|| view! {
                        <EmptyState
                            icon_name="calendar"
                            message="No upcoming events scheduled"
                        />
                    }
                >
                    <div class="card-grid">
                        <For each=move || events.get() key=|event| event.id let:event>
                            <EventCard event=event />
                        </For>
                    </div>
                </Show>
            </Show>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn EventCard(event: Event) -> impl IntoView {
    view! {
        <article class="event-card">
            <div class="event-card__date">
                {icon("calendar")}
                {format_datetime(event.event_date)}
            </div>
            <h3>{event.title.clone()}</h3>
            <A href=format!("/ngos/{}", event.ngo_id) attr:class="event-card__ngo">
                {event.ngo_name.clone()}
            </A>
            {event.description.clone().map(|d| view! { <p>{d}</p> })}
            {event.location.clone().map(|loc| view! {
                <p class="event-card__location">{icon("map-pin")} {loc}</p>
            })}
            {match event.registration_link.clone() {
                Some(link) => view! {
                    <a class="btn btn--primary" href=link target="_blank" rel="noopener">
                        "Register" {icon("external-link")}
                    </a>
                }
                .into_any(),
                None => view! {
                    <button class="btn" disabled>"Registration Closed"</button>
                }
                .into_any(),
            }}
        </article>
    }
}
