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

//! Business logic for the news service.

use nc_news_core::clocks::Clock;
use nc_news_core::db::{Db, DbError};
use nc_news_core::driver::DriverError;
use std::sync::Arc;

mod articles;
mod comments;
#[cfg(test)]
pub(crate) mod testutils;
mod topics;
mod users;

/// Business logic.
///
/// The public operations exposed by the driver are all "one shot": they start and commit a
/// transaction when they need more than one query, so it's incorrect for the caller to use two
/// separate calls.  For this reason, these operations consume the driver in an attempt to minimize
/// the possibility of executing two operations.
#[derive(Clone)]
pub struct NewsDriver {
    /// The database that the driver uses for persistence.
    db: Arc<dyn Db + Send + Sync>,

    /// Clock used to timestamp new comments.
    clock: Arc<dyn Clock + Send + Sync>,
}

impl NewsDriver {
    /// Creates a new driver backed by the given injected components.
    pub fn new(db: Arc<dyn Db + Send + Sync>, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self { db, clock }
    }
}

/// Converts a `DbError::NotFound` raised while looking up an entity into a user-facing `msg`.
fn not_found(e: DbError, msg: &str) -> DriverError {
    match e {
        DbError::NotFound => DriverError::NotFound(msg.to_owned()),
        e => e.into(),
    }
}
