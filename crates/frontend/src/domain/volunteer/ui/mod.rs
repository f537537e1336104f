pub mod list;

pub use list::VolunteerList;
