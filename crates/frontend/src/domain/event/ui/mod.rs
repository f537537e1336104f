pub mod list;

pub use list::EventList;
