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

//! API to vote on an article.

use crate::driver::NewsDriver;
use crate::model::ArticleId;
use crate::rest::article_get::ArticleResponse;
use async_trait::async_trait;
use axum::Json;
use axum::body::HttpBody;
use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequest, Path, Request, State};
use axum::response::IntoResponse;
use nc_news_core::rest::RestError;
use serde::Deserialize;

/// Message sent to this API.
#[derive(Default, Deserialize)]
#[cfg_attr(test, derive(serde::Serialize))]
pub(crate) struct PatchArticleRequest {
    /// Signed number of votes to add to the article.  Missing means no change.
    #[serde(default)]
    inc_votes: Option<i32>,
}

/// Extractor for the payload of this API.  An empty body is the same as an empty JSON object.
pub(crate) struct PatchArticleBody(PatchArticleRequest);

#[async_trait]
impl<S> FromRequest<S> for PatchArticleBody
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.body().is_end_stream() {
            return Ok(PatchArticleBody(PatchArticleRequest::default()));
        }
        let Json(request) = Json::<PatchArticleRequest>::from_request(req, state).await?;
        Ok(PatchArticleBody(request))
    }
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<NewsDriver>,
    article_id: Result<Path<ArticleId>, PathRejection>,
    PatchArticleBody(request): PatchArticleBody,
) -> Result<impl IntoResponse, RestError> {
    let Path(article_id) = article_id?;

    let article = driver.update_article_votes(article_id, request.inc_votes.unwrap_or(0)).await?;
    Ok(Json(ArticleResponse { article }))
}
