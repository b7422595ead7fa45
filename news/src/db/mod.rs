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

//! Database abstraction in terms of the operations needed by the news service.

use crate::model::*;
#[cfg(feature = "postgres")]
use nc_news_core::db::postgres;
#[cfg(any(feature = "sqlite", test))]
use nc_news_core::db::sqlite::{self, build_timestamp, unpack_timestamp};
use nc_news_core::db::{DbError, DbResult, Executor};
use nc_news_core::model::Username;
use sqlx::Row;
#[cfg(feature = "postgres")]
use sqlx::postgres::PgRow;
#[cfg(any(feature = "sqlite", test))]
use sqlx::sqlite::SqliteRow;
use time::OffsetDateTime;

#[cfg(test)]
pub(crate) mod testutils;

/// Initializes the database schema.
pub async fn init_schema(ex: &mut Executor) -> DbResult<()> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => postgres::run_schema(ex, include_str!("postgres.sql")).await,

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => sqlite::run_schema(ex, include_str!("sqlite.sql")).await,

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Verifies that a write statement touched exactly one row.
fn ensure_one_row(rows_affected: u64) -> DbResult<()> {
    match rows_affected {
        0 => Err(DbError::NotFound),
        1 => Ok(()),
        n => Err(DbError::BackendError(format!("Expected to affect one row but affected {}", n))),
    }
}

/// Columns to select from `articles a` joined with `comments c` to build an `Article`, for
/// PostgreSQL.  Must be followed by a `GROUP BY a.article_id` clause.
#[cfg(feature = "postgres")]
const POSTGRES_ARTICLE_SELECT: &str = "
    SELECT
        a.article_id, a.title, a.topic, a.author, a.body, a.created_at, a.votes,
        a.article_img_url, COUNT(c.comment_id) AS comment_count
    FROM articles a LEFT JOIN comments c ON a.article_id = c.article_id";

/// Columns to select from `articles a` joined with `comments c` to build an `Article`, for
/// SQLite.  Must be followed by a `GROUP BY a.article_id` clause.
#[cfg(any(feature = "sqlite", test))]
const SQLITE_ARTICLE_SELECT: &str = "
    SELECT
        a.article_id, a.title, a.topic, a.author, a.body, a.created_at_secs, a.created_at_nsecs,
        a.votes, a.article_img_url, COUNT(c.comment_id) AS comment_count
    FROM articles a LEFT JOIN comments c ON a.article_id = c.article_id";

/// Returns the SQL expressions that implement sorting by `column` in PostgreSQL.
#[cfg(feature = "postgres")]
fn postgres_sort_exprs(column: SortColumn) -> &'static [&'static str] {
    match column {
        SortColumn::ArticleId => &["a.article_id"],
        SortColumn::Title => &["a.title"],
        SortColumn::Topic => &["a.topic"],
        SortColumn::Author => &["a.author"],
        SortColumn::Body => &["a.body"],
        SortColumn::CreatedAt => &["a.created_at"],
        SortColumn::Votes => &["a.votes"],
        SortColumn::ArticleImgUrl => &["a.article_img_url"],
        SortColumn::CommentCount => &["comment_count"],
    }
}

/// Returns the SQL expressions that implement sorting by `column` in SQLite.
#[cfg(any(feature = "sqlite", test))]
fn sqlite_sort_exprs(column: SortColumn) -> &'static [&'static str] {
    match column {
        SortColumn::ArticleId => &["a.article_id"],
        SortColumn::Title => &["a.title"],
        SortColumn::Topic => &["a.topic"],
        SortColumn::Author => &["a.author"],
        SortColumn::Body => &["a.body"],
        SortColumn::CreatedAt => &["a.created_at_secs", "a.created_at_nsecs"],
        SortColumn::Votes => &["a.votes"],
        SortColumn::ArticleImgUrl => &["a.article_img_url"],
        SortColumn::CommentCount => &["comment_count"],
    }
}

/// Builds the contents of an `ORDER BY` clause that sorts by `exprs` in the given `order` and
/// breaks ties by article identifier in the same direction.
fn order_by_clause(exprs: &[&str], order: SortOrder) -> String {
    let direction = match order {
        SortOrder::Ascending => "ASC",
        SortOrder::Descending => "DESC",
    };
    exprs
        .iter()
        .copied()
        .chain(std::iter::once("a.article_id"))
        .map(|expr| format!("{} {}", expr, direction))
        .collect::<Vec<String>>()
        .join(", ")
}

#[cfg(feature = "postgres")]
impl TryFrom<PgRow> for Topic {
    type Error = DbError;

    fn try_from(row: PgRow) -> DbResult<Self> {
        let slug: String = row.try_get("slug").map_err(postgres::map_sqlx_error)?;
        let description: String = row.try_get("description").map_err(postgres::map_sqlx_error)?;
        Ok(Topic { slug, description })
    }
}

#[cfg(feature = "postgres")]
impl TryFrom<PgRow> for User {
    type Error = DbError;

    fn try_from(row: PgRow) -> DbResult<Self> {
        let username: String = row.try_get("username").map_err(postgres::map_sqlx_error)?;
        let name: String = row.try_get("name").map_err(postgres::map_sqlx_error)?;
        let avatar_url: String = row.try_get("avatar_url").map_err(postgres::map_sqlx_error)?;
        Ok(User { username: Username::new(username)?, name, avatar_url })
    }
}

#[cfg(feature = "postgres")]
impl TryFrom<PgRow> for Article {
    type Error = DbError;

    fn try_from(row: PgRow) -> DbResult<Self> {
        let article_id: i32 = row.try_get("article_id").map_err(postgres::map_sqlx_error)?;
        let title: String = row.try_get("title").map_err(postgres::map_sqlx_error)?;
        let topic: String = row.try_get("topic").map_err(postgres::map_sqlx_error)?;
        let author: String = row.try_get("author").map_err(postgres::map_sqlx_error)?;
        let body: String = row.try_get("body").map_err(postgres::map_sqlx_error)?;
        let created_at: OffsetDateTime =
            row.try_get("created_at").map_err(postgres::map_sqlx_error)?;
        let votes: i32 = row.try_get("votes").map_err(postgres::map_sqlx_error)?;
        let article_img_url: String =
            row.try_get("article_img_url").map_err(postgres::map_sqlx_error)?;
        let comment_count: i64 = row.try_get("comment_count").map_err(postgres::map_sqlx_error)?;

        Ok(Article {
            article_id: ArticleId::new(article_id),
            title,
            topic,
            author: Username::new(author)?,
            body,
            created_at,
            votes,
            article_img_url,
            comment_count,
        })
    }
}

#[cfg(feature = "postgres")]
impl TryFrom<PgRow> for Comment {
    type Error = DbError;

    fn try_from(row: PgRow) -> DbResult<Self> {
        let comment_id: i32 = row.try_get("comment_id").map_err(postgres::map_sqlx_error)?;
        let article_id: i32 = row.try_get("article_id").map_err(postgres::map_sqlx_error)?;
        let author: String = row.try_get("author").map_err(postgres::map_sqlx_error)?;
        let body: String = row.try_get("body").map_err(postgres::map_sqlx_error)?;
        let votes: i32 = row.try_get("votes").map_err(postgres::map_sqlx_error)?;
        let created_at: OffsetDateTime =
            row.try_get("created_at").map_err(postgres::map_sqlx_error)?;

        Ok(Comment {
            comment_id: CommentId::new(comment_id),
            article_id: ArticleId::new(article_id),
            author: Username::new(author)?,
            body,
            votes,
            created_at,
        })
    }
}

#[cfg(any(feature = "sqlite", test))]
impl TryFrom<SqliteRow> for Topic {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let slug: String = row.try_get("slug").map_err(sqlite::map_sqlx_error)?;
        let description: String = row.try_get("description").map_err(sqlite::map_sqlx_error)?;
        Ok(Topic { slug, description })
    }
}

#[cfg(any(feature = "sqlite", test))]
impl TryFrom<SqliteRow> for User {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let username: String = row.try_get("username").map_err(sqlite::map_sqlx_error)?;
        let name: String = row.try_get("name").map_err(sqlite::map_sqlx_error)?;
        let avatar_url: String = row.try_get("avatar_url").map_err(sqlite::map_sqlx_error)?;
        Ok(User { username: Username::new(username)?, name, avatar_url })
    }
}

#[cfg(any(feature = "sqlite", test))]
impl TryFrom<SqliteRow> for Article {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let article_id: i32 = row.try_get("article_id").map_err(sqlite::map_sqlx_error)?;
        let title: String = row.try_get("title").map_err(sqlite::map_sqlx_error)?;
        let topic: String = row.try_get("topic").map_err(sqlite::map_sqlx_error)?;
        let author: String = row.try_get("author").map_err(sqlite::map_sqlx_error)?;
        let body: String = row.try_get("body").map_err(sqlite::map_sqlx_error)?;
        let created_at_secs: i64 =
            row.try_get("created_at_secs").map_err(sqlite::map_sqlx_error)?;
        let created_at_nsecs: i64 =
            row.try_get("created_at_nsecs").map_err(sqlite::map_sqlx_error)?;
        let votes: i32 = row.try_get("votes").map_err(sqlite::map_sqlx_error)?;
        let article_img_url: String =
            row.try_get("article_img_url").map_err(sqlite::map_sqlx_error)?;
        let comment_count: i64 = row.try_get("comment_count").map_err(sqlite::map_sqlx_error)?;

        Ok(Article {
            article_id: ArticleId::new(article_id),
            title,
            topic,
            author: Username::new(author)?,
            body,
            created_at: build_timestamp(created_at_secs, created_at_nsecs)?,
            votes,
            article_img_url,
            comment_count,
        })
    }
}

#[cfg(any(feature = "sqlite", test))]
impl TryFrom<SqliteRow> for Comment {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let comment_id: i32 = row.try_get("comment_id").map_err(sqlite::map_sqlx_error)?;
        let article_id: i32 = row.try_get("article_id").map_err(sqlite::map_sqlx_error)?;
        let author: String = row.try_get("author").map_err(sqlite::map_sqlx_error)?;
        let body: String = row.try_get("body").map_err(sqlite::map_sqlx_error)?;
        let votes: i32 = row.try_get("votes").map_err(sqlite::map_sqlx_error)?;
        let created_at_secs: i64 =
            row.try_get("created_at_secs").map_err(sqlite::map_sqlx_error)?;
        let created_at_nsecs: i64 =
            row.try_get("created_at_nsecs").map_err(sqlite::map_sqlx_error)?;

        Ok(Comment {
            comment_id: CommentId::new(comment_id),
            article_id: ArticleId::new(article_id),
            author: Username::new(author)?,
            body,
            votes,
            created_at: build_timestamp(created_at_secs, created_at_nsecs)?,
        })
    }
}

/// Gets all topics, sorted by slug.
pub(crate) async fn get_topics(ex: &mut Executor) -> DbResult<Vec<Topic>> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "SELECT slug, description FROM topics ORDER BY slug";
            let rows = sqlx::query(query_str)
                .fetch_all(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            rows.into_iter().map(Topic::try_from).collect()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "SELECT slug, description FROM topics ORDER BY slug";
            let rows =
                sqlx::query(query_str).fetch_all(ex).await.map_err(sqlite::map_sqlx_error)?;
            rows.into_iter().map(Topic::try_from).collect()
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Gets the article identified by `article_id`, including its comment count.
pub(crate) async fn get_article(ex: &mut Executor, article_id: ArticleId) -> DbResult<Article> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str =
                format!("{} WHERE a.article_id = $1 GROUP BY a.article_id", POSTGRES_ARTICLE_SELECT);
            let row = sqlx::query(&query_str)
                .bind(article_id.as_i32())
                .fetch_one(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            Article::try_from(row)
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str =
                format!("{} WHERE a.article_id = ? GROUP BY a.article_id", SQLITE_ARTICLE_SELECT);
            let row = sqlx::query(&query_str)
                .bind(article_id.as_i32())
                .fetch_one(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            Article::try_from(row)
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Gets all articles, optionally restricted to those filed under `topic`, sorted by `sort_by` in
/// the given `order`.
///
/// Returns an empty list when nothing matches, including when `topic` does not exist.
pub(crate) async fn get_articles(
    ex: &mut Executor,
    topic: Option<&str>,
    sort_by: SortColumn,
    order: SortOrder,
) -> DbResult<Vec<Article>> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = format!(
                "{} {} GROUP BY a.article_id ORDER BY {}",
                POSTGRES_ARTICLE_SELECT,
                if topic.is_some() { "WHERE a.topic = $1" } else { "" },
                order_by_clause(postgres_sort_exprs(sort_by), order),
            );
            let mut query = sqlx::query(&query_str);
            if let Some(topic) = topic {
                query = query.bind(topic);
            }
            let rows = query.fetch_all(ex).await.map_err(postgres::map_sqlx_error)?;
            rows.into_iter().map(Article::try_from).collect()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = format!(
                "{} {} GROUP BY a.article_id ORDER BY {}",
                SQLITE_ARTICLE_SELECT,
                if topic.is_some() { "WHERE a.topic = ?" } else { "" },
                order_by_clause(sqlite_sort_exprs(sort_by), order),
            );
            let mut query = sqlx::query(&query_str);
            if let Some(topic) = topic {
                query = query.bind(topic);
            }
            let rows = query.fetch_all(ex).await.map_err(sqlite::map_sqlx_error)?;
            rows.into_iter().map(Article::try_from).collect()
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Adds `inc_votes` (which may be negative) to the votes of the article `article_id`.
pub(crate) async fn update_article_votes(
    ex: &mut Executor,
    article_id: ArticleId,
    inc_votes: i32,
) -> DbResult<()> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "UPDATE articles SET votes = votes + $1 WHERE article_id = $2";
            let done = sqlx::query(query_str)
                .bind(inc_votes)
                .bind(article_id.as_i32())
                .execute(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            done.rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "UPDATE articles SET votes = votes + ? WHERE article_id = ?";
            let done = sqlx::query(query_str)
                .bind(inc_votes)
                .bind(article_id.as_i32())
                .execute(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            done.rows_affected()
        }

        #[allow(unused)]
        _ => unreachable!(),
    };
    ensure_one_row(rows_affected)
}

/// Gets all comments on the article `article_id`, newest first.
///
/// Does not check whether the article exists: a missing article yields an empty list.
pub(crate) async fn get_comments_by_article(
    ex: &mut Executor,
    article_id: ArticleId,
) -> DbResult<Vec<Comment>> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                SELECT comment_id, article_id, author, body, votes, created_at
                FROM comments
                WHERE article_id = $1
                ORDER BY created_at DESC, comment_id DESC";
            let rows = sqlx::query(query_str)
                .bind(article_id.as_i32())
                .fetch_all(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            rows.into_iter().map(Comment::try_from).collect()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT
                    comment_id, article_id, author, body, votes, created_at_secs,
                    created_at_nsecs
                FROM comments
                WHERE article_id = ?
                ORDER BY created_at_secs DESC, created_at_nsecs DESC, comment_id DESC";
            let rows = sqlx::query(query_str)
                .bind(article_id.as_i32())
                .fetch_all(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            rows.into_iter().map(Comment::try_from).collect()
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Creates a new comment by `author` on the article `article_id` and returns it as stored.
///
/// The database assigns the identifier of the comment and starts its votes at zero.  Referencing
/// an article or an author that do not exist is rejected as invalid input.
pub(crate) async fn put_comment(
    ex: &mut Executor,
    article_id: ArticleId,
    author: &Username,
    body: &str,
    created_at: OffsetDateTime,
) -> DbResult<Comment> {
    let comment_id = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                INSERT INTO comments (article_id, author, body, created_at)
                VALUES ($1, $2, $3, $4)
                RETURNING comment_id";
            let row = sqlx::query(query_str)
                .bind(article_id.as_i32())
                .bind(author.as_str())
                .bind(body)
                .bind(created_at)
                .fetch_one(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            row.try_get::<i32, _>("comment_id").map_err(postgres::map_sqlx_error)?
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let (created_at_secs, created_at_nsecs) = unpack_timestamp(created_at);

            let query_str = "
                INSERT INTO comments
                    (article_id, author, body, created_at_secs, created_at_nsecs)
                VALUES (?, ?, ?, ?, ?)";
            let done = sqlx::query(query_str)
                .bind(article_id.as_i32())
                .bind(author.as_str())
                .bind(body)
                .bind(created_at_secs)
                .bind(created_at_nsecs)
                .execute(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            i32::try_from(done.last_insert_rowid()).map_err(|e| {
                DbError::DataIntegrityError(format!("Comment identifier out of range: {}", e))
            })?
        }

        #[allow(unused)]
        _ => unreachable!(),
    };

    Ok(Comment {
        comment_id: CommentId::new(comment_id),
        article_id,
        author: author.clone(),
        body: body.to_owned(),
        votes: 0,
        created_at,
    })
}

/// Gets the comment identified by `comment_id`.
pub(crate) async fn get_comment(ex: &mut Executor, comment_id: CommentId) -> DbResult<Comment> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                SELECT comment_id, article_id, author, body, votes, created_at
                FROM comments
                WHERE comment_id = $1";
            let row = sqlx::query(query_str)
                .bind(comment_id.as_i32())
                .fetch_one(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            Comment::try_from(row)
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "
                SELECT
                    comment_id, article_id, author, body, votes, created_at_secs,
                    created_at_nsecs
                FROM comments
                WHERE comment_id = ?";
            let row = sqlx::query(query_str)
                .bind(comment_id.as_i32())
                .fetch_one(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            Comment::try_from(row)
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Deletes the comment identified by `comment_id`.
pub(crate) async fn delete_comment(ex: &mut Executor, comment_id: CommentId) -> DbResult<()> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "DELETE FROM comments WHERE comment_id = $1";
            let done = sqlx::query(query_str)
                .bind(comment_id.as_i32())
                .execute(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            done.rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "DELETE FROM comments WHERE comment_id = ?";
            let done = sqlx::query(query_str)
                .bind(comment_id.as_i32())
                .execute(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            done.rows_affected()
        }

        #[allow(unused)]
        _ => unreachable!(),
    };
    ensure_one_row(rows_affected)
}

/// Gets all users, sorted by username.
pub(crate) async fn get_users(ex: &mut Executor) -> DbResult<Vec<User>> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "SELECT username, name, avatar_url FROM users ORDER BY username";
            let rows = sqlx::query(query_str)
                .fetch_all(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            rows.into_iter().map(User::try_from).collect()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "SELECT username, name, avatar_url FROM users ORDER BY username";
            let rows =
                sqlx::query(query_str).fetch_all(ex).await.map_err(sqlite::map_sqlx_error)?;
            rows.into_iter().map(User::try_from).collect()
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Creates a new `topic`.  Topics are not writable through the API so this is for seeding only.
#[cfg(test)]
pub(crate) async fn put_topic(ex: &mut Executor, topic: &Topic) -> DbResult<()> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "INSERT INTO topics (slug, description) VALUES ($1, $2)";
            let done = sqlx::query(query_str)
                .bind(&topic.slug)
                .bind(&topic.description)
                .execute(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            done.rows_affected()
        }

        Executor::Sqlite(ex) => {
            let query_str = "INSERT INTO topics (slug, description) VALUES (?, ?)";
            let done = sqlx::query(query_str)
                .bind(&topic.slug)
                .bind(&topic.description)
                .execute(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            done.rows_affected()
        }
    };
    ensure_one_row(rows_affected)
}

/// Creates a new `user`.  Users are not writable through the API so this is for seeding only.
#[cfg(test)]
pub(crate) async fn put_user(ex: &mut Executor, user: &User) -> DbResult<()> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "INSERT INTO users (username, name, avatar_url) VALUES ($1, $2, $3)";
            let done = sqlx::query(query_str)
                .bind(user.username.as_str())
                .bind(&user.name)
                .bind(&user.avatar_url)
                .execute(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            done.rows_affected()
        }

        Executor::Sqlite(ex) => {
            let query_str = "INSERT INTO users (username, name, avatar_url) VALUES (?, ?, ?)";
            let done = sqlx::query(query_str)
                .bind(user.username.as_str())
                .bind(&user.name)
                .bind(&user.avatar_url)
                .execute(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            done.rows_affected()
        }
    };
    ensure_one_row(rows_affected)
}

/// Creates a new article with the contents of `article` and returns its assigned identifier.
///
/// The `article_id` and `comment_count` fields of the input are ignored.  Articles are not
/// writable through the API so this is for seeding only.
#[cfg(test)]
pub(crate) async fn put_article(ex: &mut Executor, article: &Article) -> DbResult<ArticleId> {
    let article_id = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                INSERT INTO articles
                    (title, topic, author, body, created_at, votes, article_img_url)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING article_id";
            let row = sqlx::query(query_str)
                .bind(&article.title)
                .bind(&article.topic)
                .bind(article.author.as_str())
                .bind(&article.body)
                .bind(article.created_at)
                .bind(article.votes)
                .bind(&article.article_img_url)
                .fetch_one(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            row.try_get::<i32, _>("article_id").map_err(postgres::map_sqlx_error)?
        }

        Executor::Sqlite(ex) => {
            let (created_at_secs, created_at_nsecs) = unpack_timestamp(article.created_at);

            let query_str = "
                INSERT INTO articles
                    (title, topic, author, body, created_at_secs, created_at_nsecs, votes,
                    article_img_url)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?)";
            let done = sqlx::query(query_str)
                .bind(&article.title)
                .bind(&article.topic)
                .bind(article.author.as_str())
                .bind(&article.body)
                .bind(created_at_secs)
                .bind(created_at_nsecs)
                .bind(article.votes)
                .bind(&article.article_img_url)
                .execute(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            i32::try_from(done.last_insert_rowid()).expect("Test identifiers must fit in an i32")
        }
    };
    Ok(ArticleId::new(article_id))
}
