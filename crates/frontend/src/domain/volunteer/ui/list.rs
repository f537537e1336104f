use contracts::domain::volunteer::VolunteerPost;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::domain::volunteer::api;
use crate::shared::api::ApiClient;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;

/// All open volunteer positions, newest first (server ordering).
#[component]
#[allow(non_snake_case)]
pub fn VolunteerList() -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient not found in context");
    let (posts, set_posts) = signal::<Vec<VolunteerPost>>(Vec::new());
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        match api::list_active(&api).await {
            Ok(list) => set_posts.set(list),
            Err(e) => log::error!("volunteer posts fetch failed: {}", e),
        }
        set_loading.set(false);
    });

    view! {
        <div class="page volunteer-list">
            <header class="page__header">
                <h1>"Volunteer Opportunities"</h1>
                <p class="page__subtitle">"Lend your time and skills to causes that need them"</p>
            </header>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="page__loading">"Loading opportunities..."</div> }
            >
                <Show
                    when=move || !posts.get().is_empty()
                    fallback=|| view! {
                        <EmptyState
                            icon_name="users"
                            message="No volunteer opportunities available yet"
                        />
                    }
                >
                    <div class="card-grid">
                        <For each=move || posts.get() key=|post| post.id let:post>
                            <VolunteerCard post=post />
                        </For>
                    </div>
                </Show>
            </Show>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn VolunteerCard(post: VolunteerPost) -> impl IntoView {
    view! {
        <article class="volunteer-card">
            <h3>{post.title.clone()}</h3>
            <A href=format!("/ngos/{}", post.ngo_id) attr:class="volunteer-card__ngo">
                {post.ngo_name.clone()}
            </A>
            {post.description.clone().map(|d| view! { <p>{d}</p> })}
            {post.requirements.clone().map(|req| view! {
                <div class="volunteer-card__requirements">
                    <h4>"Requirements"</h4>
                    <p>{req}</p>
                </div>
            })}
            <div class="volunteer-card__meta">
                {post.location.clone().map(|loc| view! {
                    <span>{icon("map-pin")} {loc}</span>
                })}
                {post.deadline.map(|deadline| view! {
                    <span>{icon("calendar")} "Apply by: " {format_date(deadline)}</span>
                })}
            </div>
            <button class="btn btn--primary">"Apply Now"</button>
        </article>
    }
}
