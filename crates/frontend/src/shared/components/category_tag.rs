use contracts::domain::category::Category;
use leptos::prelude::*;

/// Category chip used on cards and the detail header.
#[component]
pub fn CategoryTag(category: Category) -> impl IntoView {
    let label = match &category.icon {
        Some(glyph) => format!("{} {}", glyph, category.name),
        None => category.name.clone(),
    };
    view! { <span class="category-tag">{label}</span> }
}
