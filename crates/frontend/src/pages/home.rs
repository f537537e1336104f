use contracts::dashboards::stats::Stats;
use contracts::domain::category::Category;
use contracts::domain::map::MapNgo;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::dashboards::impact;
use crate::domain::{category, ngo};
use crate::map::NgoMap;
use crate::shared::api::ApiClient;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;

/// Landing page: hero search, headline counters, category grid and the
/// nationwide map.
#[component]
#[allow(non_snake_case)]
pub fn Home() -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient not found in context");

    let (stats, set_stats) = signal::<Option<Stats>>(None);
    let (categories, set_categories) = signal::<Vec<Category>>(Vec::new());
    let (map_data, set_map_data) = signal::<Vec<MapNgo>>(Vec::new());
    let query = RwSignal::new(String::new());

    // Three independent fetches, fired concurrently on mount.
    {
        let api = api.clone();
        spawn_local(async move {
            match impact::api::stats(&api).await {
                Ok(payload) => set_stats.set(Some(payload)),
                Err(e) => log::error!("stats fetch failed: {}", e),
            }
        });
    }
    {
        let api = api.clone();
        spawn_local(async move {
            match category::api::list(&api).await {
                Ok(list) => set_categories.set(list),
                Err(e) => log::error!("categories fetch failed: {}", e),
            }
        });
    }
    {
        let api = api.clone();
        spawn_local(async move {
            match ngo::api::map_data(&api).await {
                Ok(records) => set_map_data.set(records),
                Err(e) => log::error!("map data fetch failed: {}", e),
            }
        });
    }

    let submit_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let q = query.get();
        let trimmed = q.trim();
        if trimmed.is_empty() {
            return;
        }
        if let Some(window) = web_sys::window() {
            let target = format!("/ngos?search={}", urlencoding::encode(trimmed));
            let _ = window.location().set_href(&target);
        }
    };

    let metric = move |pick: fn(&Stats) -> i64| {
        Signal::derive(move || stats.with(|s| s.as_ref().map(pick)))
    };

    view! {
        <div class="page home">
            <section class="hero">
                <h1>"Find NGOs you can trust"</h1>
                <p>"Search verified organizations, volunteer openings and events across India"</p>
                <form class="hero__search" on:submit=submit_search>
                    {icon("search")}
                    <input
                        type="text"
                        placeholder="Search NGOs by name, cause or DARPAN ID..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn--primary">"Search"</button>
                </form>
            </section>

            <section class="stat-grid">
                <StatCard label="Total NGOs" icon_name="heart" value=metric(|s| s.total_ngos) />
                <StatCard
                    label="Verified"
                    icon_name="check-circle"
                    value=metric(|s| s.verified_ngos)
                />
                <StatCard
                    label="Volunteer Openings"
                    icon_name="users"
                    value=metric(|s| s.total_volunteers)
                />
                <StatCard
                    label="Upcoming Events"
                    icon_name="calendar"
                    value=metric(|s| s.upcoming_events)
                />
                <StatCard
                    label="Blacklisted"
                    icon_name="alert-triangle"
                    value=metric(|s| s.blacklisted_ngos)
                    accent="stat-card__icon--danger"
                />
            </section>

            <section class="home__categories">
                <h2>"Browse by Cause"</h2>
                <div class="category-grid">
                    <For each=move || categories.get() key=|c| c.id let:cat>
                        <a
                            class="category-grid__item"
                            href=format!("/ngos?category={}", cat.slug)
                        >
                            <span class="category-grid__icon">
                                {cat.icon.clone().unwrap_or_default()}
                            </span>
                            <span>{cat.name.clone()}</span>
                        </a>
                    </For>
                </div>
            </section>

            <section class="home__map">
                <h2>"NGOs Near You"</h2>
                <NgoMap data=map_data />
            </section>

            <section class="home__blacklist-cta">
                {icon("shield")}
                <div>
                    <h3>"Check before you donate"</h3>
                    <p>"Consult the public register of blacklisted organizations."</p>
                </div>
                <A href="/blacklisted" attr:class="btn">"View Blacklist"</A>
            </section>
        </div>
    }
}
