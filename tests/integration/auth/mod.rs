//! Integration tests for client authentication

mod client_cert_test;
