//! End-to-end tests for the movement tool.
