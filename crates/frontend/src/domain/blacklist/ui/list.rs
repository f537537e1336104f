use contracts::domain::ngo::Ngo;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::domain::blacklist::api::{self, BlacklistFilter};
use crate::shared::api::ApiClient;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::pagination::Pagination;
use crate::shared::date_utils::format_date;
use crate::shared::fetch_seq::FetchSeq;
use crate::shared::icons::icon;

/// Public register of blacklisted organizations with the regulatory
/// details behind each entry.
#[component]
#[allow(non_snake_case)]
pub fn BlacklistedList() -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient not found in context");

    let filter = RwSignal::new(BlacklistFilter::default());
    let (ngos, set_ngos) = signal::<Vec<Ngo>>(Vec::new());
    let (total, set_total) = signal::<i64>(0);
    let (pages, set_pages) = signal::<u32>(0);
    let (loading, set_loading) = signal(true);

    let seq = FetchSeq::new();
    Effect::new({
        let api = api.clone();
        move |_| {
            let current = filter.get();
            let api = api.clone();
            let ticket = seq.next();
            set_loading.set(true);
            spawn_local(async move {
                let result = api::list(&api, &current).await;
                if !ticket.is_current() {
                    return;
                }
                match result {
                    Ok(page) => {
                        set_ngos.set(page.ngos);
                        set_total.set(page.total);
                        set_pages.set(page.pages.max(0) as u32);
                    }
                    Err(e) => {
                        log::error!("blacklist fetch failed: {}", e);
                        set_ngos.set(Vec::new());
                        set_total.set(0);
                        set_pages.set(0);
                    }
                }
                set_loading.set(false);
            });
        }
    });

    view! {
        <div class="page blacklist-page">
            <header class="page__header page__header--warning">
                {icon("alert-triangle")}
                <h1>"Blacklisted NGOs"</h1>
                <p class="page__subtitle">
                    "Organizations flagged by government authorities. Exercise caution before engaging."
                </p>
            </header>

            <div class="filter-bar">
                <div class="filter-bar__search">
                    {icon("search")}
                    <input
                        type="text"
                        placeholder="Search blacklisted NGOs..."
                        prop:value=move || filter.with(|f| f.search.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            filter.update(|f| {
                                f.search = value;
                                f.page = 1;
                            });
                        }
                    />
                </div>
                <input
                    class="filter-bar__state"
                    type="text"
                    placeholder="State"
                    prop:value=move || filter.with(|f| f.state.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        filter.update(|f| {
                            f.state = value;
                            f.page = 1;
                        });
                    }
                />
                <input
                    class="filter-bar__authority"
                    type="text"
                    placeholder="Blacklisted by (authority)"
                    prop:value=move || filter.with(|f| f.blacklisted_by.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        filter.update(|f| {
                            f.blacklisted_by = value;
                            f.page = 1;
                        });
                    }
                />
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="page__loading">"Loading..."</div> }
            >
                <p class="blacklist-page__count">
                    {move || format!("{} blacklisted NGOs on record", total.get())}
                </p>

                <Show
                    when=move || !ngos.get().is_empty()
                    fallback=|| view! {
                        <EmptyState
                            icon_name="shield"
                            message="No blacklisted NGOs match your filters"
                        />
                    }
                >
                    <div class="blacklist-page__cards">
                        <For each=move || ngos.get() key=|ngo| ngo.id let:ngo>
                            <BlacklistedCard ngo=ngo />
                        </For>
                    </div>
                </Show>

                <Pagination
                    current=Signal::derive(move || filter.with(|f| f.page))
                    total=pages
                    on_select=Callback::new(move |page| filter.update(|f| f.page = page))
                />
            </Show>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn BlacklistedCard(ngo: Ngo) -> impl IntoView {
    let percent = ngo.transparency_percent();

    view! {
        <article class="blacklist-card">
            <div class="blacklist-card__head">
                <h3>{ngo.name.clone()}</h3>
                <span class="badge badge--blacklisted">{icon("alert-triangle")} "Blacklisted"</span>
            </div>
            <dl class="detail-list">
                {ngo.darpan_id.clone().map(|id| view! {
                    <div class="detail-list__row">
                        <dt>"DARPAN ID"</dt>
                        <dd>{id}</dd>
                    </div>
                })}
                {ngo.registration_no.clone().map(|no| view! {
                    <div class="detail-list__row">
                        <dt>"Registration No."</dt>
                        <dd>{no}</dd>
                    </div>
                })}
                {ngo.location_line().map(|loc| view! {
                    <div class="detail-list__row">
                        <dt>"Location"</dt>
                        <dd>{loc}</dd>
                    </div>
                })}
            </dl>
            {ngo.blacklist_info.clone().map(|info| view! {
                <div class="blacklist-card__details">
                    {info.blacklisted_by.clone().map(|by| view! {
                        <p><strong>"Blacklisted by: "</strong>{by}</p>
                    })}
                    {info.wef_date.map(|date| view! {
                        <p><strong>"With effect from: "</strong>{format_date(date)}</p>
                    })}
                    {info.last_updated.map(|date| view! {
                        <p><strong>"Last updated: "</strong>{format_date(date)}</p>
                    })}
                    {info.reason.clone().map(|reason| view! {
                        <p><strong>"Reason: "</strong>{reason}</p>
                    })}
                </div>
            })}
            <p class="blacklist-card__score">
                "Transparency score: " {percent.to_string()} "/100"
            </p>
            <A href=format!("/ngos/{}", ngo.id) attr:class="blacklist-card__more">
                "View full record"
            </A>
        </article>
    }
}
