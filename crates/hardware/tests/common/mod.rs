//! Shared test infrastructure: the simulator harness and mock backing stores.
