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

//! API to comment on an article.

use crate::driver::NewsDriver;
use crate::model::{ArticleId, Comment};
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use http::StatusCode;
use nc_news_core::model::Username;
use nc_news_core::rest::RestError;
use serde::{Deserialize, Serialize};

/// Message sent to this API.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Serialize))]
pub(crate) struct NewCommentRequest {
    /// Existing user posting the comment.
    username: Username,

    /// Contents of the comment.
    body: String,
}

/// Message returned by this API.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct CommentResponse {
    /// The newly-created comment.
    pub(crate) comment: Comment,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<NewsDriver>,
    article_id: Result<Path<ArticleId>, PathRejection>,
    request: Result<Json<NewCommentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, RestError> {
    let Path(article_id) = article_id?;
    let Json(request) = request?;

    let comment = driver.create_comment(article_id, request.username, request.body).await?;
    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}
