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

//! API to list the comments of an article.

use crate::driver::NewsDriver;
use crate::model::{ArticleId, Comment};
use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use nc_news_core::rest::{EmptyBody, RestError};
use serde::Serialize;

/// Message returned by this API.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, serde::Deserialize, PartialEq))]
pub(crate) struct CommentsResponse {
    /// Comments on the article, newest first.
    pub(crate) comments: Vec<Comment>,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<NewsDriver>,
    article_id: Result<Path<ArticleId>, PathRejection>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let Path(article_id) = article_id?;
    let comments = driver.get_article_comments(article_id).await?;
    Ok(Json(CommentsResponse { comments }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testutils::fixture_comment;
    use crate::rest::testutils::*;
    use axum::http;
    use nc_news_core::rest::testutils::*;

    fn route(article_id: &str) -> (http::Method, String) {
        (http::Method::GET, format!("/api/articles/{}/comments", article_id))
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        let response = OneShotBuilder::new(context.into_app(), route("1"))
            .send_empty()
            .await
            .expect_json::<CommentsResponse>()
            .await;
        let exp_comments = [2, 1, 3].into_iter().map(fixture_comment).collect::<Vec<Comment>>();
        assert_eq!(CommentsResponse { comments: exp_comments }, response);
    }

    #[tokio::test]
    async fn test_no_comments() {
        let context = TestContext::setup().await;

        let response = OneShotBuilder::new(context.into_app(), route("2"))
            .send_empty()
            .await
            .expect_json::<CommentsResponse>()
            .await;
        assert_eq!(CommentsResponse { comments: vec![] }, response);
    }

    #[tokio::test]
    async fn test_article_not_found() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.into_app(), route("999"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_error("^Article not found$")
            .await;
    }

    #[tokio::test]
    async fn test_bad_id() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.into_app(), route("not-a-number"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("^Bad request$")
            .await;
    }

    test_payload_must_be_empty!(TestContext::setup().await.into_app(), route("1"));
}
