#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Public contract of the fake user-migration service.
//!
//! Consumers depend on this crate only; the module crate provides the
//! implementation and the REST surface.

pub mod api;
pub mod errors;
pub mod models;

pub use api::FakeMigrationApi;
pub use errors::MigrationError;
pub use models::{Address, AddressType, Sex, UserProfile};
