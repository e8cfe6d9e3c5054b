//! Data Transfer Objects for the ONTAP REST API
//!
//! Envelopes wrapped around domain records, and request bodies sent by the
//! client.

pub mod job;
pub mod quota;
pub mod records;
