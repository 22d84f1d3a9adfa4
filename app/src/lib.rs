#![recursion_limit = "256"]

pub mod api;
pub mod api_impl;
pub mod areas;
pub mod cities;
pub mod components;
pub mod components_impl;
#[cfg(feature = "ssr")]
pub mod config;
pub mod error;
pub mod prefectures;
pub mod report;
pub mod statistics;
pub mod validation;
