pub mod app;
pub mod base;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod services;
pub mod storage;
pub mod styles;

pub use app::{switch, App, Route};
