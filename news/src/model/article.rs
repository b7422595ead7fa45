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

//! The `Article` data type and its identifier.

use nc_news_core::model::Username;
use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;

/// Identifier of an article as assigned by the database.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ArticleId(i32);

impl ArticleId {
    /// Wraps a raw identifier.
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Returns the raw identifier for use in queries.
    pub fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A news article as returned to clients.
///
/// `comment_count` is not stored anywhere: it is computed at read time from the comments that
/// reference the article, so it is always consistent with them.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
pub struct Article {
    /// Identifier of the article.
    pub article_id: ArticleId,

    /// Headline of the article.
    pub title: String,

    /// Slug of the topic the article is filed under.
    pub topic: String,

    /// User that wrote the article.
    pub author: Username,

    /// Contents of the article.
    pub body: String,

    /// Publication time of the article.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,

    /// Net amount of votes received by the article.  Only ever changes by deltas.
    pub votes: i32,

    /// Location of the picture that illustrates the article.
    pub article_img_url: String,

    /// Number of comments that currently reference the article.
    pub comment_count: i64,
}
