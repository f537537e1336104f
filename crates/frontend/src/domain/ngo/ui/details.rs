use contracts::domain::ngo::Ngo;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::domain::ngo::api;
use crate::shared::api::ApiClient;
use crate::shared::components::category_tag::CategoryTag;
use crate::shared::components::score_bar::ScoreBar;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;

/// Full profile for one organization: identity, registration metadata,
/// office bearers, contact block and - when applicable - the blacklist
/// warning in place of the action panel.
#[component]
#[allow(non_snake_case)]
pub fn NgoDetails() -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient not found in context");
    let params = use_params_map();
    let id = Memo::new(move |_| {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()))
    });

    let (ngo, set_ngo) = signal::<Option<Ngo>>(None);
    let (loading, set_loading) = signal(true);

    Effect::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            let Some(id) = id.get() else {
                set_ngo.set(None);
                set_loading.set(false);
                return;
            };
            set_loading.set(true);
            spawn_local(async move {
                match api::get(&api, id).await {
                    Ok(record) => set_ngo.set(Some(record)),
                    Err(e) => {
                        log::error!("ngo {} fetch failed: {}", id, e);
                        set_ngo.set(None);
                    }
                }
                set_loading.set(false);
            });
        }
    });

    view! {
        <div class="page ngo-details">
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="page__loading">"Loading..."</div> }
            >
                {move || match ngo.get() {
                    Some(record) => view! { <NgoProfile ngo=record /> }.into_any(),
                    None => view! {
                        <div class="ngo-details__missing">
                            <h2>"NGO not found"</h2>
                            <A href="/ngos" attr:class="btn">"Back to all NGOs"</A>
                        </div>
                    }
                    .into_any(),
                }}
            </Show>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn NgoProfile(ngo: Ngo) -> impl IntoView {
    let blacklisted = ngo.blacklisted;
    let percent = ngo.transparency_percent();
    let (blacklisted_by, blacklist_reason) = blacklist_banner_lines(&ngo);

    view! {
        <Show when=move || blacklisted>
            <div class="blacklist-banner">
                {icon("alert-triangle")}
                <div>
                    <strong>"This NGO has been blacklisted"</strong>
                    {blacklisted_by.clone().map(|by| view! {
                        <p>"Blacklisted by: " {by}</p>
                    })}
                    {blacklist_reason.clone().map(|reason| view! {
                        <p>"Reason: " {reason}</p>
                    })}
                </div>
            </div>
        </Show>

        <header class="ngo-details__head">
            <h1>
                {ngo.name.clone()}
                <Show when={
                    let verified = ngo.verified;
                    move || verified
                }>
                    <span class="badge badge--verified" title="Verified">
                        {icon("check-circle")}
                    </span>
                </Show>
            </h1>
            {ngo.location_line().map(|loc| view! {
                <p class="ngo-details__location">{icon("map-pin")} {loc}</p>
            })}
            <div class="ngo-details__tags">
                <For each={
                    let categories = ngo.categories.clone();
                    move || categories.clone()
                } key=|c| c.id let:cat>
                    <CategoryTag category=cat />
                </For>
            </div>
        </header>

        <div class="ngo-details__grid">
            <div class="ngo-details__main">
                {ngo.mission.clone().map(|mission| view! {
                    <section class="panel">
                        <h2>{icon("target")} "Mission"</h2>
                        <p>{mission}</p>
                    </section>
                })}
                {ngo.description.clone().map(|description| view! {
                    <section class="panel">
                        <h2>{icon("file-text")} "About"</h2>
                        <p>{description}</p>
                    </section>
                })}

                <section class="panel">
                    <h2>{icon("trending-up")} "Transparency Score"</h2>
                    <ScoreBar percent=percent />
                </section>

                <Show when={
                    let has = ngo.has_registration_details();
                    move || has
                }>
                    <section class="panel">
                        <h2>{icon("shield")} "Registration Details"</h2>
                        <dl class="detail-list">
                            {detail_row("DARPAN ID", ngo.darpan_id.clone())}
                            {detail_row("Registration No.", ngo.registration_no.clone())}
                            {detail_row("Registered With", ngo.registered_with.clone())}
                            {detail_row(
                                "Registration Date",
                                ngo.registration_date.map(format_date),
                            )}
                            {detail_row("Act", ngo.act_name.clone())}
                            {detail_row("Type", ngo.type_of_ngo.clone())}
                        </dl>
                    </section>
                </Show>

                <Show when={
                    let has = !ngo.office_bearers.is_empty();
                    move || has
                }>
                    <section class="panel">
                        <h2>{icon("users")} "Office Bearers"</h2>
                        <ul class="bearer-list">
                            <For each={
                                let bearers = ngo.office_bearers.clone();
                                move || bearers.clone()
                            } key=|b| b.id let:bearer>
                                <li>
                                    <span class="bearer-list__name">{bearer.name.clone()}</span>
                                    {bearer.designation.clone().map(|d| view! {
                                        <span class="bearer-list__role">{d}</span>
                                    })}
                                </li>
                            </For>
                        </ul>
                    </section>
                </Show>
            </div>

            <aside class="ngo-details__side">
                <section class="panel">
                    <h2>"Contact"</h2>
                    <ul class="contact-list">
                        {ngo.email.clone().map(|email| view! {
                            <li>
                                {icon("mail")}
                                <a href=format!("mailto:{}", email)>{email.clone()}</a>
                            </li>
                        })}
                        {ngo.phone.clone().map(|phone| view! {
                            <li>
                                {icon("phone")}
                                <a href=format!("tel:{}", phone)>{phone.clone()}</a>
                            </li>
                        })}
                        {ngo.website.clone().map(|url| view! {
                            <li>
                                {icon("external-link")}
                                <a href=url.clone() target="_blank" rel="noopener">{url.clone()}</a>
                            </li>
                        })}
                        {ngo.address.clone().map(|address| view! {
                            <li>{icon("map-pin")} <span>{address}</span></li>
                        })}
                    </ul>
                </section>

                // Support actions are withheld for blacklisted organizations.
                <Show when=move || !blacklisted>
                    <section class="panel action-panel">
                        <h2>"Support this NGO"</h2>
                        <button class="btn btn--primary">{icon("heart")} "Donate"</button>
                        <button class="btn">{icon("users")} "Volunteer"</button>
                        <button class="btn">{icon("mail")} "Contact"</button>
                    </section>
                </Show>
            </aside>
        </div>
    }
}

/// Optional banner lines. The banner itself keys on the `blacklisted` flag
/// alone; a missing info record just leaves both lines out.
fn blacklist_banner_lines(ngo: &Ngo) -> (Option<String>, Option<String>) {
    match &ngo.blacklist_info {
        Some(info) => (info.blacklisted_by.clone(), info.reason.clone()),
        None => (None, None),
    }
}

fn detail_row(label: &'static str, value: Option<String>) -> impl IntoView {
    value.map(|v| {
        view! {
            <div class="detail-list__row">
                <dt>{label}</dt>
                <dd>{v}</dd>
            </div>
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flagged(info: Option<contracts::domain::blacklist::BlacklistInfo>) -> Ngo {
        let json = r#"{
            "id": 9,
            "name": "Shady Org",
            "verified": false,
            "blacklisted": true,
            "transparency_score": 10
        }"#;
        let mut ngo: Ngo = serde_json::from_str(json).unwrap();
        ngo.blacklist_info = info;
        ngo
    }

    #[test]
    fn banner_lines_survive_a_missing_info_record() {
        // flag alone drives the banner; no info record means no lines
        let ngo = flagged(None);
        assert!(ngo.blacklisted);
        assert_eq!(blacklist_banner_lines(&ngo), (None, None));
    }

    #[test]
    fn banner_lines_come_from_the_info_record() {
        let ngo = flagged(Some(contracts::domain::blacklist::BlacklistInfo {
            id: 3,
            ngo_id: 9,
            blacklisted_by: Some("Ministry of Home Affairs".into()),
            blacklist_date: None,
            reason: Some("FCRA violations".into()),
            wef_date: None,
            last_updated: None,
        }));
        assert_eq!(
            blacklist_banner_lines(&ngo),
            (
                Some("Ministry of Home Affairs".into()),
                Some("FCRA violations".into())
            )
        );
    }
}
