//! Agency content and the UI state that sits on top of it.

pub mod config;
pub mod contact;
pub mod content;
pub mod navigation;
pub mod preferences;
pub mod sound;
