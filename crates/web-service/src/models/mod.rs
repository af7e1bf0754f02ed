pub mod config;

pub mod err;

pub mod users;
