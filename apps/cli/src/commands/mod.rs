pub mod clean;
pub mod expo;
pub mod ios;
pub mod macos;
pub mod metro;
pub mod prepare;
