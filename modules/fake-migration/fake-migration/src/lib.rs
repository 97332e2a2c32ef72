#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Fake user-migration module.
//!
//! Serves synthetic user profiles whose shape and failure modes are selected
//! through scenario tags in the email sub-address. The public API is defined
//! in `fake-migration-sdk` and re-exported here.

pub use fake_migration_sdk::{
    Address, AddressType, FakeMigrationApi, MigrationError, Sex, UserProfile,
};

pub mod module;
pub use module::FakeMigrationModule;

pub mod local_client;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
