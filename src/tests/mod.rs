//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests drive the real `TuiApp` over a
//! `TestBackend`, one key at a time, and assert on state and rendered frames.
