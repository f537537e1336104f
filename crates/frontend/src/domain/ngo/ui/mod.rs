pub mod details;
pub mod list;

pub use details::NgoDetails;
pub use list::NgoList;
