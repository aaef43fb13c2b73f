//! Unit tests for device registration and provisioning.
