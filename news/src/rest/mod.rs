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

//! Entry point to the REST server.

use crate::driver::NewsDriver;
use axum::Router;
use nc_news_core::rest::RestError;

mod api_get;
mod article_comments_get;
mod article_comments_post;
mod article_get;
mod article_patch;
mod articles_get;
mod comment_delete;
#[cfg(test)]
mod testutils;
mod topics_get;
mod users_get;

/// Handler for any request that does not match a known route.
async fn page_not_found() -> RestError {
    RestError::NotFound("Page not found".to_owned())
}

/// Creates the router for the application.
///
/// Every route carries its own fallback so that a known path requested with an unsupported
/// method is reported the same way as an unknown path.
pub fn app(driver: NewsDriver) -> Router {
    use axum::routing::{delete, get};
    Router::new()
        .route("/api", get(api_get::handler).fallback(page_not_found))
        .route("/api/articles", get(articles_get::handler).fallback(page_not_found))
        .route(
            "/api/articles/:article_id",
            get(article_get::handler).patch(article_patch::handler).fallback(page_not_found),
        )
        .route(
            "/api/articles/:article_id/comments",
            get(article_comments_get::handler)
                .post(article_comments_post::handler)
                .fallback(page_not_found),
        )
        .route(
            "/api/comments/:comment_id",
            delete(comment_delete::handler).fallback(page_not_found),
        )
        .route("/api/topics", get(topics_get::handler).fallback(page_not_found))
        .route("/api/users", get(users_get::handler).fallback(page_not_found))
        .fallback(page_not_found)
        .with_state(driver)
}

#[cfg(test)]
mod tests {
    use super::testutils::*;
    use axum::http;
    use nc_news_core::rest::testutils::*;

    #[tokio::test]
    async fn test_unknown_path() {
        for path in ["/", "/api/", "/api/topicz", "/api/articles/1/votes", "/api/users/lurker"] {
            OneShotBuilder::new(TestContext::setup().await.into_app(), (http::Method::GET, path))
                .send_empty()
                .await
                .expect_status(http::StatusCode::NOT_FOUND)
                .expect_error("^Page not found$")
                .await;
        }
    }

    #[tokio::test]
    async fn test_unsupported_method() {
        for (method, path) in [
            (http::Method::DELETE, "/api/topics"),
            (http::Method::POST, "/api"),
            (http::Method::PUT, "/api/articles"),
            (http::Method::DELETE, "/api/articles/1"),
            (http::Method::PATCH, "/api/articles/1/comments"),
            (http::Method::GET, "/api/comments/1"),
            (http::Method::POST, "/api/users"),
        ] {
            OneShotBuilder::new(TestContext::setup().await.into_app(), (method, path))
                .send_empty()
                .await
                .expect_status(http::StatusCode::NOT_FOUND)
                .expect_error("^Page not found$")
                .await;
        }
    }

    #[tokio::test]
    async fn test_e2e_comment_lifecycle() {
        let context = TestContext::setup().await;

        let request = serde_json::json!({"username": "lurker", "body": "Finally, a comment"});
        let response = OneShotBuilder::new(
            context.app(),
            (http::Method::POST, "/api/articles/2/comments"),
        )
        .send_json(request)
        .await
        .expect_status(http::StatusCode::CREATED)
        .expect_json::<serde_json::Value>()
        .await;
        let comment_id = response["comment"]["comment_id"].as_i64().unwrap();

        let response =
            OneShotBuilder::new(context.app(), (http::Method::GET, "/api/articles/2"))
                .send_empty()
                .await
                .expect_json::<serde_json::Value>()
                .await;
        assert_eq!(1, response["article"]["comment_count"]);

        OneShotBuilder::new(
            context.app(),
            (http::Method::DELETE, format!("/api/comments/{}", comment_id)),
        )
        .send_empty()
        .await
        .expect_status(http::StatusCode::NO_CONTENT)
        .expect_empty()
        .await;

        let response =
            OneShotBuilder::new(context.app(), (http::Method::GET, "/api/articles/2/comments"))
                .send_empty()
                .await
                .expect_json::<serde_json::Value>()
                .await;
        assert_eq!(serde_json::json!({"comments": []}), response);
    }
}
