//! Tests for amounts.
