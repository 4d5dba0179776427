//! Integration tests for transport and protocol failures

mod transport_test;
