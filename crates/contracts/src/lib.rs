//! Wire types shared between the frontend and the directory REST API.
//!
//! Every struct here is a read-only projection of a server-side record; the
//! field sets mirror the JSON the backend emits, nothing more.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
