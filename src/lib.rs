//! Catalogue sections for the terminal: async loaders guarded by request
//! tokens, genre filtering, grid/carousel display and a ratatui front end.

pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod view;
