pub mod cli;
pub mod interactive;
pub mod navigator;
pub mod ports;
