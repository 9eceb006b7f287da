//! HTTP handlers: the JSON API and the HTML admin pages.

pub mod api;
pub mod pages;
