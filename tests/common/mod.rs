#![allow(dead_code)]

pub mod fake_kb;
pub mod harness;
pub mod http_client;
