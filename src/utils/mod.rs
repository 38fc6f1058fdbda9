//! Process setup for the calculator binary.
//!
//! Installs global state (the tracing subscriber) once at startup.

pub mod bootstrap;
