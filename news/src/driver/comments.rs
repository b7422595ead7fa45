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

//! Operations on comments.

use crate::db;
use crate::driver::articles::ARTICLE_NOT_FOUND;
use crate::driver::{NewsDriver, not_found};
use crate::model::{ArticleId, Comment, CommentId};
use nc_news_core::driver::DriverResult;
use nc_news_core::model::Username;

impl NewsDriver {
    /// Gets all comments on the article `article_id`, newest first.
    ///
    /// An existing article without comments yields an empty list.
    pub(crate) async fn get_article_comments(
        self,
        article_id: ArticleId,
    ) -> DriverResult<Vec<Comment>> {
        let mut tx = self.db.begin().await?;
        db::get_article(tx.ex(), article_id).await.map_err(|e| not_found(e, ARTICLE_NOT_FOUND))?;
        let comments = db::get_comments_by_article(tx.ex(), article_id).await?;
        tx.commit().await?;
        Ok(comments)
    }

    /// Creates a new comment by `username` on the article `article_id`.
    pub(crate) async fn create_comment(
        self,
        article_id: ArticleId,
        username: Username,
        body: String,
    ) -> DriverResult<Comment> {
        let mut tx = self.db.begin().await?;
        db::get_article(tx.ex(), article_id).await.map_err(|e| not_found(e, ARTICLE_NOT_FOUND))?;
        let now = self.clock.now_utc();
        let comment = db::put_comment(tx.ex(), article_id, &username, &body, now).await?;
        tx.commit().await?;
        Ok(comment)
    }

    /// Deletes the comment `comment_id`.
    pub(crate) async fn delete_comment(self, comment_id: CommentId) -> DriverResult<()> {
        let mut tx = self.db.begin().await?;
        db::get_comment(tx.ex(), comment_id)
            .await
            .map_err(|e| not_found(e, "Comment not found"))?;
        db::delete_comment(tx.ex(), comment_id).await?;
        tx.commit().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testutils::fixture_comment;
    use crate::driver::testutils::*;
    use nc_news_core::driver::DriverError;
    use time::macros::datetime;

    #[tokio::test]
    async fn test_get_article_comments_ok() {
        let context = TestContext::setup().await;
        let comments = context.driver().get_article_comments(ArticleId::new(3)).await.unwrap();
        assert_eq!(vec![fixture_comment(5), fixture_comment(4)], comments);
    }

    #[tokio::test]
    async fn test_get_article_comments_none() {
        let context = TestContext::setup().await;
        let comments = context.driver().get_article_comments(ArticleId::new(2)).await.unwrap();
        assert!(comments.is_empty());
    }

    #[tokio::test]
    async fn test_get_article_comments_article_not_found() {
        let context = TestContext::setup().await;
        assert_eq!(
            DriverError::NotFound("Article not found".to_owned()),
            context.driver().get_article_comments(ArticleId::new(999)).await.unwrap_err()
        );
    }

    #[tokio::test]
    async fn test_create_comment_ok() {
        let context = TestContext::setup().await;
        context.clock.set(datetime!(2023-09-30 18:45:12.345678 UTC));

        let comment = context
            .driver()
            .create_comment(ArticleId::new(2), Username::from("lurker"), "Nice laptop".to_owned())
            .await
            .unwrap();
        let exp_comment = Comment {
            comment_id: CommentId::new(7),
            article_id: ArticleId::new(2),
            author: Username::from("lurker"),
            body: "Nice laptop".to_owned(),
            votes: 0,
            created_at: datetime!(2023-09-30 18:45:12.345678 UTC),
        };
        assert_eq!(exp_comment, comment);
        assert_eq!(exp_comment, context.get_comment(7).await.unwrap());
        assert_eq!(1, context.get_article(2).await.comment_count);
    }

    #[tokio::test]
    async fn test_create_comment_article_not_found() {
        let context = TestContext::setup().await;
        assert_eq!(
            DriverError::NotFound("Article not found".to_owned()),
            context
                .driver()
                .create_comment(ArticleId::new(999), Username::from("lurker"), "Hi".to_owned())
                .await
                .unwrap_err()
        );
    }

    #[tokio::test]
    async fn test_create_comment_unknown_user() {
        let context = TestContext::setup().await;
        match context
            .driver()
            .create_comment(ArticleId::new(1), Username::from("nobody"), "Hi".to_owned())
            .await
        {
            Err(DriverError::InvalidInput(_)) => (),
            e => panic!("Unexpected result: {:?}", e),
        }
        assert_eq!(3, context.get_article(1).await.comment_count);
    }

    #[tokio::test]
    async fn test_delete_comment_ok() {
        let context = TestContext::setup().await;
        context.driver().delete_comment(CommentId::new(1)).await.unwrap();
        assert!(context.get_comment(1).await.is_none());
        assert!(context.get_comment(2).await.is_some());
    }

    #[tokio::test]
    async fn test_delete_comment_not_found() {
        let context = TestContext::setup().await;
        assert_eq!(
            DriverError::NotFound("Comment not found".to_owned()),
            context.driver().delete_comment(CommentId::new(999)).await.unwrap_err()
        );
    }
}
