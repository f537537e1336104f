use contracts::domain::category::Category;
use contracts::domain::ngo::Ngo;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::domain::category;
use crate::domain::ngo::api::{self, NgoFilter};
use crate::shared::api::ApiClient;
use crate::shared::components::category_tag::CategoryTag;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::pagination::Pagination;
use crate::shared::fetch_seq::FetchSeq;
use crate::shared::icons::icon;

/// Browse page over the whole directory: free-text search, category /
/// state / verified filters and a paged card grid.
#[component]
#[allow(non_snake_case)]
pub fn NgoList() -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient not found in context");
    let query = use_query_map();

    // Landing with ?search= or ?category= (from the home hero and the
    // category grid) seeds the matching filter before the first fetch.
    let initial = query.with_untracked(|q| NgoFilter {
        search: q.get("search").unwrap_or_default(),
        category: q.get("category").unwrap_or_default(),
        ..NgoFilter::default()
    });

    let filter = RwSignal::new(initial);
    let (categories, set_categories) = signal::<Vec<Category>>(Vec::new());
    let (ngos, set_ngos) = signal::<Vec<Ngo>>(Vec::new());
    let (total, set_total) = signal::<i64>(0);
    let (pages, set_pages) = signal::<u32>(0);
    let (loading, set_loading) = signal(true);

    {
        let api = api.clone();
        spawn_local(async move {
            match category::api::list(&api).await {
                Ok(list) => set_categories.set(list),
                Err(e) => log::error!("categories fetch failed: {}", e),
            }
        });
    }

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
                        log::error!("ngo list fetch failed: {}", e);
                        set_ngos.set(Vec::new());
                        set_total.set(0);
                        set_pages.set(0);
                    }
                }
                set_loading.set(false);
            });
        }
    });

    let set_page = move |page: u32| {
        filter.update(|f| f.page = page);
    };

    view! {
        <div class="page ngo-list">
            <header class="page__header">
                <h1>"Explore NGOs"</h1>
                <p class="page__subtitle">"Discover verified organizations working across India"</p>
            </header>

            <div class="filter-bar">
                <div class="filter-bar__search">
                    {icon("search")}
                    <input
                        type="text"
                        placeholder="Search by name, mission or DARPAN ID..."
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
                <select
                    class="filter-bar__select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filter.update(|f| {
                            f.category = value;
                            f.page = 1;
                        });
                    }
                >
                    <option value="" selected=move || filter.with(|f| f.category.is_empty())>
                        "All Categories"
                    </option>
                    {move || {
                        let active = filter.with(|f| f.category.clone());
                        categories
                            .get()
                            .into_iter()
                            .map(|c| {
                                let slug = c.slug.clone();
                                view! {
                                    <option value=c.slug.clone() selected=slug == active>
                                        {c.name.clone()}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
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
                <label class="filter-bar__verified">
                    <input
                        type="checkbox"
                        prop:checked=move || filter.with(|f| f.verified)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            filter.update(|f| {
                                f.verified = checked;
                                f.page = 1;
                            });
                        }
                    />
                    "Verified only"
                </label>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="page__loading">"Loading NGOs..."</div> }
            >
                <p class="ngo-list__count">{move || format!("Found {} NGOs", total.get())}</p>

                <Show
                    when=move || !ngos.get().is_empty()
                    fallback=|| view! {
                        <EmptyState
                            icon_name="search"
                            message="No NGOs match your filters"
                        />
                    }
                >
                    <div class="card-grid">
                        <For each=move || ngos.get() key=|ngo| ngo.id let:ngo>
                            <NgoCard ngo=ngo />
                        </For>
                    </div>
                </Show>

                <Pagination
                    current=Signal::derive(move || filter.with(|f| f.page))
                    total=pages
                    on_select=Callback::new(set_page)
                />
            </Show>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn NgoCard(ngo: Ngo) -> impl IntoView {
    let href = format!("/ngos/{}", ngo.id);
    let categories = ngo.categories.clone();

    view! {
        <article class="ngo-card">
            <div class="ngo-card__head">
                <h3>{ngo.name.clone()}</h3>
                <Show when=move || ngo.verified>
                    <span class="badge badge--verified" title="Verified">
                        {icon("check-circle")}
                    </span>
                </Show>
            </div>
            {ngo.mission.clone().map(|m| view! { <p class="ngo-card__mission">{m}</p> })}
            <div class="ngo-card__tags">
                <For each=move || categories.clone() key=|c| c.id let:cat>
                    <CategoryTag category=cat />
                </For>
            </div>
            {ngo.location_line().map(|loc| view! {
                <p class="ngo-card__location">{icon("map-pin")} {loc}</p>
            })}
            <div class="ngo-card__links">
                {ngo.email.clone().map(|email| view! {
                    <a href=format!("mailto:{}", email) title="Email">{icon("mail")}</a>
                })}
                {ngo.phone.clone().map(|phone| view! {
                    <a href=format!("tel:{}", phone) title="Phone">{icon("phone")}</a>
                })}
                {ngo.website.clone().map(|url| view! {
                    <a href=url target="_blank" rel="noopener" title="Website">
                        {icon("external-link")}
                    </a>
                })}
            </div>
            <A href=href attr:class="ngo-card__more">
                "View Details"
            </A>
        </article>
    }
}
