//! Step definitions for device provisioning behaviour tests.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
