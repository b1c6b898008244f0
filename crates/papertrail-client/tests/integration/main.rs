//! Integration tests for papertrail-client
//!
//! Uses wiremock to simulate the PaperTrail service and verifies end-to-end
//! behavior of the request engine and the resource clients over the real
//! reqwest transport.

mod common;

mod test_audit_log;
mod test_engine;
mod test_message_content;
