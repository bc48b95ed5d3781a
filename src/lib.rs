pub mod app;
pub mod clock;
pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod prefs;
pub mod renderer;
pub mod screen;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
