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

//! Validated sorting criteria for article listings.
//!
//! These types are the only way for user input to influence the `ORDER BY` clause of a query:
//! the database layer maps each variant to a fixed SQL fragment.

use nc_news_core::model::{ModelError, ModelResult};
use std::str::FromStr;

/// Column by which to sort article listings.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SortColumn {
    /// Sort by article identifier.
    ArticleId,

    /// Sort by headline.
    Title,

    /// Sort by topic slug.
    Topic,

    /// Sort by author username.
    Author,

    /// Sort by article contents.
    Body,

    /// Sort by publication time.
    #[default]
    CreatedAt,

    /// Sort by net votes.
    Votes,

    /// Sort by picture location.
    ArticleImgUrl,

    /// Sort by the number of comments on the article.
    CommentCount,
}

impl FromStr for SortColumn {
    type Err = ModelError;

    fn from_str(s: &str) -> ModelResult<Self> {
        match s {
            "article_id" => Ok(SortColumn::ArticleId),
            "title" => Ok(SortColumn::Title),
            "topic" => Ok(SortColumn::Topic),
            "author" => Ok(SortColumn::Author),
            "body" => Ok(SortColumn::Body),
            "created_at" => Ok(SortColumn::CreatedAt),
            "votes" => Ok(SortColumn::Votes),
            "article_img_url" => Ok(SortColumn::ArticleImgUrl),
            "comment_count" => Ok(SortColumn::CommentCount),
            _ => Err(ModelError(format!("Cannot sort articles by '{}'", s))),
        }
    }
}

/// Direction in which to sort article listings.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SortOrder {
    /// Smallest values first.
    Ascending,

    /// Largest values first.
    #[default]
    Descending,
}

impl FromStr for SortOrder {
    type Err = ModelError;

    fn from_str(s: &str) -> ModelResult<Self> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortOrder::Ascending)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortOrder::Descending)
        } else {
            Err(ModelError(format!("Invalid sort order '{}'", s)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_column_defaults() {
        assert_eq!(SortColumn::CreatedAt, SortColumn::default());
        assert_eq!(SortOrder::Descending, SortOrder::default());
    }

    #[test]
    fn test_sort_column_allowed() {
        for (name, exp) in [
            ("article_id", SortColumn::ArticleId),
            ("title", SortColumn::Title),
            ("topic", SortColumn::Topic),
            ("author", SortColumn::Author),
            ("body", SortColumn::Body),
            ("created_at", SortColumn::CreatedAt),
            ("votes", SortColumn::Votes),
            ("article_img_url", SortColumn::ArticleImgUrl),
            ("comment_count", SortColumn::CommentCount),
        ] {
            assert_eq!(exp, name.parse::<SortColumn>().unwrap());
        }
    }

    #[test]
    fn test_sort_column_rejected() {
        assert!("".parse::<SortColumn>().is_err());
        assert!("Votes".parse::<SortColumn>().is_err());
        assert!("votes; DROP TABLE articles".parse::<SortColumn>().is_err());
        assert_eq!(
            ModelError("Cannot sort articles by 'popularity'".to_owned()),
            "popularity".parse::<SortColumn>().unwrap_err()
        );
    }

    #[test]
    fn test_sort_order_case_insensitive() {
        assert_eq!(SortOrder::Ascending, "asc".parse::<SortOrder>().unwrap());
        assert_eq!(SortOrder::Ascending, "ASC".parse::<SortOrder>().unwrap());
        assert_eq!(SortOrder::Descending, "desc".parse::<SortOrder>().unwrap());
        assert_eq!(SortOrder::Descending, "DeSc".parse::<SortOrder>().unwrap());
    }

    #[test]
    fn test_sort_order_rejected() {
        assert!("".parse::<SortOrder>().is_err());
        assert!("ascending".parse::<SortOrder>().is_err());
        assert!("up".parse::<SortOrder>().is_err());
    }
}
