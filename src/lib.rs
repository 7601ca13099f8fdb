pub mod ai;
pub mod core;
pub mod game;
pub mod rendering;
pub mod server;
