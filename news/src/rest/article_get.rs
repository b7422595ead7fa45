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

//! API to get a single article.

use crate::driver::NewsDriver;
use crate::model::{Article, ArticleId};
use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use nc_news_core::rest::{EmptyBody, RestError};
use serde::Serialize;

/// Message returned by this API.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, serde::Deserialize, PartialEq))]
pub(crate) struct ArticleResponse {
    /// The requested article.
    pub(crate) article: Article,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<NewsDriver>,
    article_id: Result<Path<ArticleId>, PathRejection>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let Path(article_id) = article_id?;
    let article = driver.get_article(article_id).await?;
    Ok(Json(ArticleResponse { article }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testutils::fixture_article;
    use crate::rest::testutils::*;
    use axum::http;
    use nc_news_core::rest::testutils::*;

    fn route(article_id: &str) -> (http::Method, String) {
        (http::Method::GET, format!("/api/articles/{}", article_id))
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        let response = OneShotBuilder::new(context.into_app(), route("1"))
            .send_empty()
            .await
            .expect_json::<ArticleResponse>()
            .await;
        assert_eq!(ArticleResponse { article: fixture_article(1) }, response);
    }

    #[tokio::test]
    async fn test_wire_format() {
        let context = TestContext::setup().await;

        let response = OneShotBuilder::new(context.into_app(), route("3"))
            .send_empty()
            .await
            .expect_json::<serde_json::Value>()
            .await;
        let article = &response["article"];
        assert_eq!(3, article["article_id"]);
        assert_eq!("icellusedkars", article["author"]);
        assert_eq!("2020-11-03T09:12:00Z", article["created_at"]);
        assert_eq!(2, article["comment_count"]);
    }

    #[tokio::test]
    async fn test_not_found() {
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
        for id in ["one", "1.5", "99999999999"] {
            let context = TestContext::setup().await;

            OneShotBuilder::new(context.into_app(), route(id))
                .send_empty()
                .await
                .expect_status(http::StatusCode::BAD_REQUEST)
                .expect_error("^Bad request$")
                .await;
        }
    }

    test_payload_must_be_empty!(TestContext::setup().await.into_app(), route("1"));
}
