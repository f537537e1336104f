pub mod category_tag;
pub mod charts;
pub mod empty_state;
pub mod pagination;
pub mod score_bar;
pub mod stat_card;
