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

//! Operations on articles.

use crate::db;
use crate::driver::{NewsDriver, not_found};
use crate::model::{Article, ArticleId, SortColumn, SortOrder};
use nc_news_core::driver::{DriverError, DriverResult};

/// Message returned when a single article cannot be found.
pub(super) const ARTICLE_NOT_FOUND: &str = "Article not found";

impl NewsDriver {
    /// Gets the article `article_id`.
    pub(crate) async fn get_article(self, article_id: ArticleId) -> DriverResult<Article> {
        db::get_article(&mut self.db.ex().await?, article_id)
            .await
            .map_err(|e| not_found(e, ARTICLE_NOT_FOUND))
    }

    /// Gets all articles, optionally filed under `topic`, sorted by `sort_by` in `order`.
    ///
    /// Finding no articles is an error, even if `topic` exists but has no articles yet.
    pub(crate) async fn get_articles(
        self,
        topic: Option<String>,
        sort_by: SortColumn,
        order: SortOrder,
    ) -> DriverResult<Vec<Article>> {
        let articles =
            db::get_articles(&mut self.db.ex().await?, topic.as_deref(), sort_by, order).await?;
        if articles.is_empty() {
            return Err(DriverError::NotFound("Articles not found".to_owned()));
        }
        Ok(articles)
    }

    /// Adds `inc_votes` to the votes of the article `article_id` and returns the updated article.
    pub(crate) async fn update_article_votes(
        self,
        article_id: ArticleId,
        inc_votes: i32,
    ) -> DriverResult<Article> {
        let mut tx = self.db.begin().await?;
        db::get_article(tx.ex(), article_id).await.map_err(|e| not_found(e, ARTICLE_NOT_FOUND))?;
        db::update_article_votes(tx.ex(), article_id, inc_votes).await?;
        let article = db::get_article(tx.ex(), article_id).await?;
        tx.commit().await?;
        Ok(article)
    }
}
