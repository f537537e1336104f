use crate::shared::icons::icon;
use leptos::prelude::*;

/// Centered icon + message placeholder for lists with no rows.
#[component]
pub fn EmptyState(icon_name: &'static str, message: &'static str) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__icon">{icon(icon_name)}</div>
            <p class="empty-state__message">{message}</p>
        </div>
    }
}
