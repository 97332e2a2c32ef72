pub mod addresses;
pub mod catalog;
pub mod error;
pub mod generator;
pub mod person;
pub mod service;
pub mod tags;
