//! Pet Heaven - Leptos Frontend Library

pub mod app;
pub mod components;
pub mod forms;
pub mod pages;
