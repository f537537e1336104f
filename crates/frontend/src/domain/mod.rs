pub mod blacklist;
pub mod category;
pub mod event;
pub mod ngo;
pub mod volunteer;
