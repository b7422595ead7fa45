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

//! API to list all topics.

use crate::driver::NewsDriver;
use crate::model::Topic;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use nc_news_core::rest::{EmptyBody, RestError};
use serde::Serialize;

/// Message returned by this API.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, serde::Deserialize, PartialEq))]
pub(crate) struct TopicsResponse {
    /// All known topics.
    pub(crate) topics: Vec<Topic>,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<NewsDriver>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let topics = driver.get_topics().await?;
    Ok(Json(TopicsResponse { topics }))
}
