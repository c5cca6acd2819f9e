// Records, request forms and response views

pub mod user;
pub mod exercise;
pub mod validation;

pub use user::*;
pub use exercise::*;
pub use validation::*;
