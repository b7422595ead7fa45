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

//! API to list all users.

use crate::driver::NewsDriver;
use crate::model::User;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use nc_news_core::rest::{EmptyBody, RestError};
use serde::Serialize;

/// Message returned by this API.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, serde::Deserialize, PartialEq))]
pub(crate) struct UsersResponse {
    /// All known users.
    pub(crate) users: Vec<User>,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<NewsDriver>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let users = driver.get_users().await?;
    Ok(Json(UsersResponse { users }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testutils::fixture_users;
    use crate::rest::testutils::*;
    use axum::http;
    use nc_news_core::rest::testutils::*;

    fn route() -> (http::Method, String) {
        (http::Method::GET, "/api/users".to_owned())
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        let response = OneShotBuilder::new(context.into_app(), route())
            .send_empty()
            .await
            .expect_json::<UsersResponse>()
            .await;
        assert_eq!(UsersResponse { users: fixture_users() }, response);
    }

    #[tokio::test]
    async fn test_wire_format() {
        let context = TestContext::setup().await;

        let response = OneShotBuilder::new(context.into_app(), route())
            .send_empty()
            .await
            .expect_json::<serde_json::Value>()
            .await;
        let first = &response["users"][0];
        assert_eq!("butter_bridge", first["username"]);
        assert_eq!("jonny", first["name"]);
        assert!(first["avatar_url"].as_str().unwrap().starts_with("https://"));
    }

    test_payload_must_be_empty!(TestContext::setup().await.into_app(), route());
}
