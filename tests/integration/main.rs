//! Integration test harness.

mod sink_test;
