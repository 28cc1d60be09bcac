// src/lib.rs - Library root for weatherbot

pub mod bot;
pub mod cli;
pub mod infra;
pub mod integrations;
pub mod util;
pub mod weather;
