use contracts::dashboards::stats::Stats;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::impact::api;
use crate::shared::api::ApiClient;
use crate::shared::components::charts::{BarChart, PieChart};
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;

/// Sector-wide numbers: headline counters plus category and state
/// breakdowns rendered as SVG charts.
#[component]
#[allow(non_snake_case)]
pub fn ImpactDashboard() -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient not found in context");
    let (stats, set_stats) = signal::<Option<Stats>>(None);
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        match api::stats(&api).await {
            Ok(payload) => set_stats.set(Some(payload)),
            Err(e) => log::error!("stats fetch failed: {}", e),
        }
        set_loading.set(false);
    });

    let metric = move |pick: fn(&Stats) -> i64| {
        Signal::derive(move || stats.with(|s| s.as_ref().map(pick)))
    };

    view! {
        <div class="page impact-dashboard">
            <header class="page__header">
                <h1>"Impact Dashboard"</h1>
                <p class="page__subtitle">"A snapshot of the NGO sector on this platform"</p>
            </header>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="page__loading">"Loading statistics..."</div> }
            >
                <Show
                    when=move || stats.with(|s| s.is_some())
                    fallback=|| view! {
                        <EmptyState
                            icon_name="trending-up"
                            message="No statistics available yet"
                        />
                    }
                >
                    <div class="stat-grid">
                        <StatCard
                            label="Total NGOs"
                            icon_name="heart"
                            value=metric(|s| s.total_ngos)
                        />
                        <StatCard
                            label="Verified NGOs"
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
                    </div>

                    <section class="panel">
                        <h2>{icon("trending-up")} "NGOs by Category"</h2>
                        <BarChart data=Signal::derive(move || {
                            stats.with(|s| {
                                s.as_ref().map(|s| s.categories.clone()).unwrap_or_default()
                            })
                        }) />
                    </section>

                    <div class="impact-dashboard__split">
                        <section class="panel">
                            <h2>{icon("award")} "Category Share"</h2>
                            <PieChart data=Signal::derive(move || {
                                stats.with(|s| {
                                    s.as_ref().map(|s| s.categories.clone()).unwrap_or_default()
                                })
                            }) />
                        </section>
                        <section class="panel">
                            <h2>{icon("map-pin")} "Top States"</h2>
                            <BarChart
                                data=Signal::derive(move || {
                                    stats.with(|s| {
                                        s.as_ref()
                                            .map(|s| s.top_states(10).to_vec())
                                            .unwrap_or_default()
                                    })
                                })
                                fill="#10b981"
                            />
                        </section>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
