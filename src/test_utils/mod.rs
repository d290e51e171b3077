#![allow(missing_docs)]

pub(crate) mod http;

pub(crate) use http::{assert_content_type, get_test_server, get_test_state};
