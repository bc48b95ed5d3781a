pub mod dialogs;
pub mod hud;
pub mod menu;
