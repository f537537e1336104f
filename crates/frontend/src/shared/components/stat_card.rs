use crate::shared::icons::icon;
use leptos::prelude::*;

/// Metric card for the home page and the impact dashboard. `None` renders
/// a dash while the payload is still loading.
#[component]
pub fn StatCard(
    /// Label displayed below the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Metric value (None = not loaded yet)
    #[prop(into)]
    value: Signal<Option<i64>>,
    /// Extra class for the icon badge, e.g. "stat-card__icon--danger"
    #[prop(optional)]
    accent: Option<&'static str>,
) -> impl IntoView {
    let icon_class = match accent {
        Some(extra) => format!("stat-card__icon {}", extra),
        None => "stat-card__icon".to_string(),
    };

    let formatted = move || match value.get() {
        Some(v) => v.to_string(),
        None => "\u{2014}".to_string(),
    };

    view! {
        <div class="stat-card">
            <div class=icon_class>{icon(icon_name)}</div>
            <div class="stat-card__value">{formatted}</div>
            <div class="stat-card__label">{label}</div>
        </div>
    }
}
