//! Shared domain library for the SW package profile service.
//!
//! Holds the data model and fixed vocabulary of "software package" profiles,
//! the pure transformations applied to them (version filling, reference
//! renumbering, canonical display ordering, project-name normalization and
//! save-time normalization), and the request/response payloads of the REST
//! API. Everything here is free of I/O so it can be shared between the
//! backend service and any client of the API.

pub mod constants;
pub mod model;
pub mod requests;
pub mod transform;
pub mod version;
