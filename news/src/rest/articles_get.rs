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

//! API to list articles.

use crate::driver::NewsDriver;
use crate::model::{Article, SortColumn, SortOrder};
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use nc_news_core::rest::{EmptyBody, RestError};
use serde::{Deserialize, Serialize};

/// Query parameters accepted by this API.
#[derive(Deserialize)]
pub(crate) struct ArticlesQuery {
    /// Slug of the topic to restrict the listing to.
    topic: Option<String>,

    /// Name of the column to sort by.
    sort_by: Option<String>,

    /// Direction of the sort, either `asc` or `desc`.
    order: Option<String>,
}

/// Message returned by this API.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct ArticlesResponse {
    /// Articles that matched the query.
    pub(crate) articles: Vec<Article>,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<NewsDriver>,
    query: Result<Query<ArticlesQuery>, QueryRejection>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let Query(query) = query?;

    let sort_by = match query.sort_by {
        Some(sort_by) => sort_by.parse::<SortColumn>()?,
        None => SortColumn::default(),
    };
    let order = match query.order {
        Some(order) => order.parse::<SortOrder>()?,
        None => SortOrder::default(),
    };

    let articles = driver.get_articles(query.topic, sort_by, order).await?;
    Ok(Json(ArticlesResponse { articles }))
}
