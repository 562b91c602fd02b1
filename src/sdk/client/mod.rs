//! DashScope client
//!
//! `client` holds the HTTP plumbing shared by the text (`generation`) and image
//! (`images`) endpoints.

mod client;
mod generation;
mod images;

pub use client::DashScopeClient;
