pub mod list;

pub use list::BlacklistedList;
