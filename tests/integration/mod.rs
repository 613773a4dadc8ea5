//! Integration tests for tracker-gateway
//!
//! These tests drive the complete application through its HTTP surface.

pub mod access_control_tests;
pub mod batch_step_progress_tests;
pub mod config_tests;
pub mod health_tests;
