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

//! High-level data types of the news service.

use nc_news_core::model::Username;
use serde::{Deserialize, Serialize};

mod article;
pub use article::{Article, ArticleId};
mod comment;
pub use comment::{Comment, CommentId};
mod sorting;
pub use sorting::{SortColumn, SortOrder};

/// A category that articles are filed under.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
pub struct Topic {
    /// Unique identifier of the topic, used by articles to reference it.
    pub slug: String,

    /// Human-readable description of the topic.
    pub description: String,
}

/// A registered user that can author articles and comments.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
pub struct User {
    /// Unique name of the user.
    pub username: Username,

    /// Display name of the user.
    pub name: String,

    /// Location of the user's avatar picture.
    pub avatar_url: String,
}
