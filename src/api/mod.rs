// API routes and handlers

pub mod health;
pub mod routes;
pub mod users;
pub mod exercises;
