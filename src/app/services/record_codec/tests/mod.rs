//! Tests for the record codec service
