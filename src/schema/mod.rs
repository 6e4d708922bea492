pub mod genre;
pub mod story;
