//! # Generation Service Module
//!
//! Server-side expansion of a stored profile into the final deliverable
//! JSON. It provides the `POST /api/generate/swlm` endpoint.
//!
//! ## Workflow
//!
//! 1.  **HTTP Request**: `swlm::process` receives a `GenerateRequest` with
//!     the `sw_package_id` of a stored profile and the release `sw_version`.
//!
//! 2.  **Validation**: Both fields are required; a missing id or a blank
//!     version is a `400 Bad Request` and nothing is generated.
//!
//! 3.  **Profile Lookup**: The profile is loaded from the store by id;
//!     an unknown id is a `404 Not Found`. The stored document is treated
//!     as an immutable snapshot for the whole run.
//!
//! 4.  **Generation**: The orchestrator in `crate::generator` fills empty
//!     version fields, resolves reference and artifact locations against
//!     Gerrit and Artifactory concurrently, renumbers the references and
//!     orders the result canonically.
//!
//! 5.  **HTTP Response**: The generated document is returned as the JSON
//!     body. Per-item lookup failures never fail the request; they are
//!     logged as warnings and the affected fields carry their fallback
//!     values.

pub mod swlm;

use actix_web::Scope;
use actix_web::web::{post, scope};

const API_PATH: &str = "/api/generate";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/swlm", post().to(swlm::process))
}
