use leptos::prelude::*;

/// One slot in the rendered page strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Gap,
}

/// Bounded sliding window over 1..=total: first and last page plus the
/// immediate neighbors of `current`, with gaps collapsed to an ellipsis.
/// Small page counts render in full, so the strip never exceeds nine slots.
pub fn page_window(current: u32, total: u32) -> Vec<PageItem> {
    if total <= 7 {
        return (1..=total).map(PageItem::Page).collect();
    }

    let current = current.clamp(1, total);
    let mut items = vec![PageItem::Page(1)];

    let low = current.saturating_sub(1).max(2);
    let high = (current + 1).min(total - 1);

    if low > 2 {
        items.push(PageItem::Gap);
    }
    for page in low..=high {
        items.push(PageItem::Page(page));
    }
    if high < total - 1 {
        items.push(PageItem::Gap);
    }

    items.push(PageItem::Page(total));
    items
}

/// Numbered page strip. Hidden entirely when there is a single page.
#[component]
pub fn Pagination(
    /// Current page (1-indexed)
    #[prop(into)]
    current: Signal<u32>,
    /// Total number of pages
    #[prop(into)]
    total: Signal<u32>,
    /// Callback when a page button is clicked
    on_select: Callback<u32>,
) -> impl IntoView {
    view! {
        <Show when=move || { total.get() > 1 }>
            <div class="pagination">
                {move || {
                    let active = current.get();
                    page_window(active, total.get())
                        .into_iter()
                        .map(|item| match item {
                            PageItem::Page(page) => view! {
                                <button
                                    class="pagination__btn"
                                    class:pagination__btn--active=move || page == active
                                    on:click=move |_| on_select.run(page)
                                >
                                    {page.to_string()}
                                </button>
                            }
                            .into_any(),
                            PageItem::Gap => view! {
                                <span class="pagination__gap">{"\u{2026}"}</span>
                            }
                            .into_any(),
                        })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(items: &[PageItem]) -> Vec<Option<u32>> {
        items
            .iter()
            .map(|i| match i {
                PageItem::Page(p) => Some(*p),
                PageItem::Gap => None,
            })
            .collect()
    }

    #[test]
    fn small_counts_render_every_page() {
        assert_eq!(
            pages(&page_window(2, 5)),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
        assert_eq!(pages(&page_window(1, 1)), vec![Some(1)]);
    }

    #[test]
    fn middle_page_gets_gaps_on_both_sides() {
        assert_eq!(
            pages(&page_window(10, 20)),
            vec![
                Some(1),
                None,
                Some(9),
                Some(10),
                Some(11),
                None,
                Some(20)
            ]
        );
    }

    #[test]
    fn edges_skip_redundant_gaps() {
        assert_eq!(
            pages(&page_window(1, 20)),
            vec![Some(1), Some(2), None, Some(20)]
        );
        assert_eq!(
            pages(&page_window(20, 20)),
            vec![Some(1), None, Some(19), Some(20)]
        );
        // page 3's neighbor window touches page 2, so no leading gap
        assert_eq!(
            pages(&page_window(3, 20)),
            vec![Some(1), Some(2), Some(3), Some(4), None, Some(20)]
        );
    }

    #[test]
    fn out_of_range_current_is_clamped() {
        assert_eq!(
            pages(&page_window(99, 20)),
            vec![Some(1), None, Some(19), Some(20)]
        );
        assert_eq!(
            pages(&page_window(0, 20)),
            vec![Some(1), Some(2), None, Some(20)]
        );
    }
}
