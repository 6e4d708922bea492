pub mod clock;
pub mod create;
pub mod generator;
pub mod ids;
pub mod library;
pub mod seed;
