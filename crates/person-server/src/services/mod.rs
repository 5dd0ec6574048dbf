//! Business logic services

pub mod person_directory;

pub use person_directory::PersonDirectory;
