//! # Profile Service Module
//!
//! This module aggregates all API endpoints for the stored software-package
//! profiles. It acts as a router, directing incoming HTTP requests under the
//! `/api/profiles` path to the appropriate handler logic defined in its
//! sub-modules.
//!
//! ## Registered Routes:
//!
//! *   **`GET /api/profiles`**:
//!     - **Handler**: `list::process`
//!     - **Description**: Returns every stored profile as a JSON array, in
//!       stable `sw_package_id` order.
//!
//! *   **`POST /api/profiles`**:
//!     - **Handler**: `save::process`
//!     - **Description**: Accepts either a single profile object (upsert by
//!       `sw_package_id`) or an array of profiles (legacy replace-all mode).
//!       Every profile is normalized before it is persisted: references are
//!       renumbered, locations reduced to bare project names, derived fields
//!       recomputed and generation-only fields cleared.
//!
//! *   **`PUT /api/profiles/{sw_package_id}`**:
//!     - **Handler**: `update::process`
//!     - **Description**: Replace-or-create for a single profile. A body
//!       without `sw_package_id` inherits the id from the URL path.
//!
//! *   **`DELETE /api/profiles/{sw_package_id}`**:
//!     - **Handler**: `remove::process`
//!     - **Description**: Removes a stored profile; 404 when the id is
//!       unknown.

mod list;
mod remove;
mod save;
mod update;

use actix_web::Scope;
use actix_web::web::{delete, get, post, put, scope};

const API_PATH: &str = "/api/profiles";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(save::process))
        .route("/{sw_package_id}", put().to(update::process))
        .route("/{sw_package_id}", delete().to(remove::process))
}
