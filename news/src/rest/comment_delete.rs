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

//! API to delete a comment.

use crate::driver::NewsDriver;
use crate::model::CommentId;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use http::StatusCode;
use nc_news_core::rest::{EmptyBody, RestError};

/// API handler.
pub(crate) async fn handler(
    State(driver): State<NewsDriver>,
    comment_id: Result<Path<CommentId>, PathRejection>,
    _: EmptyBody,
) -> Result<StatusCode, RestError> {
    let Path(comment_id) = comment_id?;
    driver.delete_comment(comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::rest::testutils::*;
    use axum::http;
    use nc_news_core::rest::testutils::*;

    fn route(comment_id: &str) -> (http::Method, String) {
        (http::Method::DELETE, format!("/api/comments/{}", comment_id))
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;
        assert!(context.get_comment(4).await.is_some());

        OneShotBuilder::new(context.app(), route("4"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::NO_CONTENT)
            .expect_empty()
            .await;

        assert_eq!(None, context.get_comment(4).await);
        assert!(context.get_comment(5).await.is_some());
        assert_eq!(1, context.get_article(3).await.comment_count);
    }

    #[tokio::test]
    async fn test_twice() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.app(), route("1"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::NO_CONTENT)
            .expect_empty()
            .await;

        OneShotBuilder::new(context.app(), route("1"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_error("^Comment not found$")
            .await;
    }

    #[tokio::test]
    async fn test_not_found() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.into_app(), route("999"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_error("^Comment not found$")
            .await;
    }

    #[tokio::test]
    async fn test_bad_id() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.into_app(), route("first"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("^Bad request$")
            .await;
    }

    test_payload_must_be_empty!(TestContext::setup().await.into_app(), route("1"));
}
