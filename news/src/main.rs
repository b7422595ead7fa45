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

//! Launcher for the NC News service.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

use nc_news::db::init_schema;
use nc_news::serve;
use nc_news_core::clocks::SystemClock;
use nc_news_core::db::Db;
use nc_news_core::db::postgres::{PostgresDb, PostgresOptions};
use nc_news_core::env::get_optional_var;
use std::error::Error;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

/// Default port to listen on when `NEWS_PORT` is not set.
const DEFAULT_PORT: u16 = 9090;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let address: IpAddr =
        get_optional_var("NEWS", "ADDRESS")?.unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST));
    let port: u16 = get_optional_var("NEWS", "PORT")?.unwrap_or(DEFAULT_PORT);

    let db_opts = PostgresOptions::from_env("PGSQL_PROD")?;
    let db = Arc::from(PostgresDb::connect(db_opts)?);
    init_schema(&mut db.ex().await?).await?;

    serve((address, port), db, Arc::from(SystemClock::default())).await
}
