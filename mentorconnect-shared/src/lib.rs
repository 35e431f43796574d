#![cfg_attr(not(test), forbid(unsafe_code))]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

//! Models, fixtures, and view-state logic shared by the MentorConnect web client.
//!
//! Everything here is platform independent so it can be exercised with plain
//! `cargo test`; the web crate only renders these types and dispatches actions.

pub mod auth;
pub mod catalog;
pub mod inbox;
pub mod meeting;
pub mod models;
pub mod navigation;
pub mod notifications;
pub mod scheduling;
pub mod search;
pub mod session;

#[cfg(test)]
mod scenarios_test;
