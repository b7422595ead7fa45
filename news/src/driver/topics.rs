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

//! Operations on topics.

use crate::db;
use crate::driver::NewsDriver;
use crate::model::Topic;
use nc_news_core::driver::DriverResult;

impl NewsDriver {
    /// Gets all topics.
    pub(crate) async fn get_topics(self) -> DriverResult<Vec<Topic>> {
        let topics = db::get_topics(&mut self.db.ex().await?).await?;
        Ok(topics)
    }
}

#[cfg(test)]
mod tests {
    use crate::db::testutils::fixture_topics;
    use crate::driver::testutils::*;

    #[tokio::test]
    async fn test_get_topics() {
        let context = TestContext::setup().await;
        assert_eq!(fixture_topics(), context.driver().get_topics().await.unwrap());
    }

    #[tokio::test]
    async fn test_get_topics_empty() {
        let context = TestContext::setup_empty().await;
        assert!(context.driver().get_topics().await.unwrap().is_empty());
    }
}
