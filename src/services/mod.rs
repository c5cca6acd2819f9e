// Business logic services

pub mod user_service;
pub mod exercise_service;

pub use user_service::UserService;
pub use exercise_service::ExerciseService;
