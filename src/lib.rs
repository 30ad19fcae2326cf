//! Activity signup site: an in-memory roster of school activities behind a
//! small JSON API.

pub mod models;
pub mod roster;
pub mod web;
