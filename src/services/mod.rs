pub mod controller;
pub mod game_service;
pub mod query;
pub mod render;
pub mod statistics;
