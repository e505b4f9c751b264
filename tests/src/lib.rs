//! Integration tests for the ltrc calculator live in this crate's
//! `tests/` directory; there is no library code here.
