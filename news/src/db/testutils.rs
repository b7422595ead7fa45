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

//! Fixed dataset used by the tests of all layers.
//!
//! Identifiers are assigned by the database in insertion order, so the article with index `i` in
//! `ARTICLES` gets identifier `i + 1` and the same applies to `COMMENTS`.

use crate::db;
use crate::model::*;
use nc_news_core::db::Executor;
use nc_news_core::model::Username;
use time::OffsetDateTime;
use time::macros::datetime;

/// Topics in the fixture as `(slug, description)` pairs.  `paper` has no articles.
pub(crate) const TOPICS: &[(&str, &str)] = &[
    ("mitch", "The man, the Mitch, the legend"),
    ("cats", "Not dogs"),
    ("paper", "what books are made of"),
];

/// Users in the fixture as `(username, name)` pairs.  `lurker` has not written anything.
pub(crate) const USERS: &[(&str, &str)] = &[
    ("butter_bridge", "jonny"),
    ("icellusedkars", "sam"),
    ("rogersop", "paul"),
    ("lurker", "do_nothing"),
];

/// Articles in the fixture as `(title, topic, author, body, created_at, votes)` tuples.
pub(crate) const ARTICLES: &[(&str, &str, &str, &str, OffsetDateTime, i32)] = &[
    (
        "Living in the shadow of a great man",
        "mitch",
        "butter_bridge",
        "I find this existence challenging",
        datetime!(2020-07-09 20:11:00 UTC),
        100,
    ),
    (
        "Sony Vaio; or, The Laptop",
        "mitch",
        "icellusedkars",
        "Call me Mitchell.",
        datetime!(2020-10-16 05:03:00 UTC),
        0,
    ),
    (
        "Eight pug gifs that remind me of mitch",
        "mitch",
        "icellusedkars",
        "some gifs",
        datetime!(2020-11-03 09:12:00 UTC),
        0,
    ),
    (
        "Student SUES Mitch!",
        "mitch",
        "rogersop",
        "We all love Mitch and his wonderful, unique typing style.",
        datetime!(2020-05-06 01:14:00 UTC),
        0,
    ),
    (
        "UNCOVERED: catspiracy to bring down democracy",
        "cats",
        "rogersop",
        "Bastet walks amongst us, and the cats are taking arms!",
        datetime!(2020-08-03 13:14:00 UTC),
        0,
    ),
];

/// Comments in the fixture as `(article_id, author, body, created_at)` tuples.
pub(crate) const COMMENTS: &[(i32, &str, &str, OffsetDateTime)] = &[
    (1, "butter_bridge", "Oh, I've got compassion running out of my nose, pal!", datetime!(2020-04-06 12:17:00 UTC)),
    (1, "icellusedkars", "I hate streaming noses", datetime!(2020-10-31 03:03:00 UTC)),
    (1, "lurker", "Lobster pot", datetime!(2020-03-01 01:13:00 UTC)),
    (3, "butter_bridge", "git push origin master", datetime!(2020-03-14 17:02:00 UTC)),
    (3, "icellusedkars", "Ambidextrous marsupial", datetime!(2020-06-20 07:24:00 UTC)),
    (5, "rogersop", "This morning, I showered for nine minutes.", datetime!(2020-05-25 17:12:00 UTC)),
];

/// Returns the picture location of the article titled `title`.
fn image_url(title: &str) -> String {
    format!("https://images.example.com/{}.jpg", title.len())
}

/// Returns the article with identifier `id` as it exists right after inserting the fixture.
pub(crate) fn fixture_article(id: i32) -> Article {
    let index = usize::try_from(id - 1).unwrap();
    let (title, topic, author, body, created_at, votes) = ARTICLES[index];
    let comment_count = COMMENTS.iter().filter(|c| c.0 == id).count();
    Article {
        article_id: ArticleId::new(id),
        title: title.to_owned(),
        topic: topic.to_owned(),
        author: Username::new(author).unwrap(),
        body: body.to_owned(),
        created_at,
        votes,
        article_img_url: image_url(title),
        comment_count: i64::try_from(comment_count).unwrap(),
    }
}

/// Returns the comment with identifier `id` as it exists right after inserting the fixture.
pub(crate) fn fixture_comment(id: i32) -> Comment {
    let index = usize::try_from(id - 1).unwrap();
    let (article_id, author, body, created_at) = COMMENTS[index];
    Comment {
        comment_id: CommentId::new(id),
        article_id: ArticleId::new(article_id),
        author: Username::new(author).unwrap(),
        body: body.to_owned(),
        votes: 0,
        created_at,
    }
}

/// Returns all topics in the fixture sorted by slug.
pub(crate) fn fixture_topics() -> Vec<Topic> {
    let mut topics = TOPICS
        .iter()
        .map(|(slug, description)| Topic {
            slug: (*slug).to_owned(),
            description: (*description).to_owned(),
        })
        .collect::<Vec<Topic>>();
    topics.sort_by(|a, b| a.slug.cmp(&b.slug));
    topics
}

/// Returns all users in the fixture sorted by username.
pub(crate) fn fixture_users() -> Vec<User> {
    let mut users = USERS
        .iter()
        .map(|(username, name)| User {
            username: Username::new(*username).unwrap(),
            name: (*name).to_owned(),
            avatar_url: format!("https://avatars.example.com/{}.png", username),
        })
        .collect::<Vec<User>>();
    users.sort_by(|a, b| a.username.cmp(&b.username));
    users
}

/// Inserts the fixed test dataset into the database behind `ex`, which must have its schema
/// already initialized.
pub(crate) async fn insert_fixture(ex: &mut Executor) {
    for topic in fixture_topics() {
        db::put_topic(ex, &topic).await.unwrap();
    }
    for user in fixture_users() {
        db::put_user(ex, &user).await.unwrap();
    }
    for i in 0..ARTICLES.len() {
        let id = i32::try_from(i + 1).unwrap();
        let article = fixture_article(id);
        assert_eq!(ArticleId::new(id), db::put_article(ex, &article).await.unwrap());
    }
    for i in 0..COMMENTS.len() {
        let id = i32::try_from(i + 1).unwrap();
        let exp = fixture_comment(id);
        let comment =
            db::put_comment(ex, exp.article_id, &exp.author, &exp.body, exp.created_at)
                .await
                .unwrap();
        assert_eq!(exp, comment);
    }
}
