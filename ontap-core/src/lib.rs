//! ONTAP Core
//!
//! Typed representations of the ONTAP management REST API.
//!
//! This crate contains:
//! - Domain types: resource records returned by the API (SVMs, quotas, jobs, ...)
//! - DTOs: collection envelopes and request bodies exchanged with the API
//! - Units: byte and duration conversions used when reporting

pub mod domain;
pub mod dto;
pub mod units;
