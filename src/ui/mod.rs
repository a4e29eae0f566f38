pub mod adapters;
pub mod components;
pub mod event;
pub mod theme;
pub mod tui;
