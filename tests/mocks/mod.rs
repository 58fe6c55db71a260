//! Test doubles shared by integration tests.

pub mod scripted_view;

pub use scripted_view::ScriptedView;
