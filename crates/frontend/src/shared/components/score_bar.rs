use leptos::prelude::*;

/// Transparency score bar. The filled width equals the score clamped to
/// 0..=100, so a score of 72 renders a 72% bar.
#[component]
pub fn ScoreBar(
    /// Score already clamped by the contracts helper
    percent: u8,
) -> impl IntoView {
    view! {
        <div class="score-bar">
            <div class="score-bar__track">
                <div
                    class="score-bar__fill"
                    style=format!("width: {}%", percent)
                ></div>
            </div>
            <span class="score-bar__value">{format!("{}/100", percent)}</span>
        </div>
    }
}
