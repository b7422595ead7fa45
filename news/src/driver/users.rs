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

//! Operations on users.

use crate::db;
use crate::driver::NewsDriver;
use crate::model::User;
use nc_news_core::driver::DriverResult;

impl NewsDriver {
    /// Gets all users.
    pub(crate) async fn get_users(self) -> DriverResult<Vec<User>> {
        let users = db::get_users(&mut self.db.ex().await?).await?;
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use crate::db::testutils::fixture_users;
    use crate::driver::testutils::*;

    #[tokio::test]
    async fn test_get_users() {
        let context = TestContext::setup().await;
        assert_eq!(fixture_users(), context.driver().get_users().await.unwrap());
    }
}
