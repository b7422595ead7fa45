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

//! The `Comment` data type and its identifier.

use crate::model::ArticleId;
use nc_news_core::model::Username;
use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;

/// Identifier of a comment as assigned by the database.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct CommentId(i32);

impl CommentId {
    /// Wraps a raw identifier.
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Returns the raw identifier for use in queries.
    pub fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A comment left by a user on an article.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
pub struct Comment {
    /// Identifier of the comment.
    pub comment_id: CommentId,

    /// Article the comment belongs to.
    pub article_id: ArticleId,

    /// User that wrote the comment.
    pub author: Username,

    /// Contents of the comment.
    pub body: String,

    /// Net amount of votes received by the comment.  Zero for new comments.
    pub votes: i32,

    /// Time at which the server accepted the comment.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
