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

//! Test utilities for the REST API.

use crate::driver::testutils::TestContext as DriverTestContext;
use crate::model::{Article, Comment};
use crate::rest::app;
use axum::Router;
use nc_news_core::clocks::testutils::SettableClock;

pub(crate) struct TestContext {
    driver: DriverTestContext,
    app: Router,
}

impl TestContext {
    pub(crate) async fn setup() -> Self {
        let driver = DriverTestContext::setup().await;
        let app = app(driver.driver());
        Self { driver, app }
    }

    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }

    pub(crate) fn into_app(self) -> Router {
        self.app
    }

    pub(crate) fn clock(&self) -> &SettableClock {
        &self.driver.clock
    }

    pub(crate) async fn get_article(&self, id: i32) -> Article {
        self.driver.get_article(id).await
    }

    pub(crate) async fn get_comment(&self, id: i32) -> Option<Comment> {
        self.driver.get_comment(id).await
    }
}
