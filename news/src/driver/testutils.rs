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

//! Test utilities for the business layer.

use crate::db;
use crate::db::testutils::insert_fixture;
use crate::driver::NewsDriver;
use crate::model::{Article, ArticleId, Comment, CommentId};
use nc_news_core::clocks::testutils::SettableClock;
use nc_news_core::db::{Db, DbError, Executor};
use std::sync::Arc;
use time::macros::datetime;

/// State of a running test.
pub(crate) struct TestContext {
    /// The database backing the driver.
    db: Arc<dyn Db + Send + Sync>,

    /// The clock used by the driver to timestamp new entries.
    pub(crate) clock: Arc<SettableClock>,

    /// The driver under test.
    driver: NewsDriver,
}

impl TestContext {
    /// Initializes the driver against an in-memory database with the schema but no data.
    pub(crate) async fn setup_empty() -> Self {
        let db: Arc<dyn Db + Send + Sync> =
            Arc::from(nc_news_core::db::sqlite::testutils::setup().await);
        db::init_schema(&mut db.ex().await.unwrap()).await.unwrap();
        let clock = Arc::from(SettableClock::new(datetime!(2023-01-01 00:00:00 UTC)));
        let driver = NewsDriver::new(db.clone(), clock.clone());
        Self { db, clock, driver }
    }

    /// Initializes the driver against an in-memory database loaded with the test fixture.
    pub(crate) async fn setup() -> Self {
        let context = Self::setup_empty().await;
        insert_fixture(&mut context.ex().await).await;
        context
    }

    /// Gets a direct executor against the database.
    pub(crate) async fn ex(&self) -> Executor {
        self.db.ex().await.unwrap()
    }

    /// Gets a copy of the driver in this test context.
    pub(crate) fn driver(&self) -> NewsDriver {
        self.driver.clone()
    }

    /// Gets the article `id` directly from the database.
    pub(crate) async fn get_article(&self, id: i32) -> Article {
        db::get_article(&mut self.ex().await, ArticleId::new(id)).await.unwrap()
    }

    /// Gets the comment `id` directly from the database, if it exists.
    pub(crate) async fn get_comment(&self, id: i32) -> Option<Comment> {
        match db::get_comment(&mut self.ex().await, CommentId::new(id)).await {
            Ok(comment) => Some(comment),
            Err(DbError::NotFound) => None,
            Err(e) => panic!("{:?}", e),
        }
    }
}
