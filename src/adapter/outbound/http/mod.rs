//! HTTP implementation of the record source.

pub mod client;
mod dto;
