// III-IV
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! API to describe the available endpoints.

use axum::Json;
use axum::response::IntoResponse;
use nc_news_core::rest::{EmptyBody, RestError};
use serde::Serialize;

/// Catalog of endpoints, embedded at build time.
const ENDPOINTS: &str = include_str!("endpoints.json");

/// Message returned by this API.
#[derive(Serialize)]
struct ApiResponse {
    /// Description of every endpoint keyed by method and path.
    endpoints: serde_json::Value,
}

/// API handler.
pub(crate) async fn handler(_: EmptyBody) -> Result<impl IntoResponse, RestError> {
    let endpoints = serde_json::from_str(ENDPOINTS)
        .map_err(|e| RestError::InternalError(format!("Bad endpoints catalog: {}", e)))?;
    Ok(Json(ApiResponse { endpoints }))
}
