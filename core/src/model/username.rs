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

//! The `Username` data type.

use crate::model::{ModelError, ModelResult};
use serde::de::Visitor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length of a username, matching the width of the column in the schemas.
pub(crate) const MAX_USERNAME_LENGTH: usize = 32;

/// Represents a correctly-formatted (but maybe non-existent) username.
///
/// Usernames are case-sensitive: the value is kept exactly as given so that the database decides
/// whether it refers to an existing user.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Creates a new username from an untrusted string `s`, making sure it is valid.
    pub fn new<S: Into<String>>(s: S) -> ModelResult<Self> {
        let s = s.into();

        if s.is_empty() {
            return Err(ModelError("Username cannot be empty".to_owned()));
        }
        if s.len() > MAX_USERNAME_LENGTH {
            return Err(ModelError(format!(
                "Username cannot be longer than {} characters",
                MAX_USERNAME_LENGTH
            )));
        }

        if let Some(ch) = s.chars().find(|ch| !(ch.is_ascii_alphanumeric() || "._-".contains(*ch)))
        {
            return Err(ModelError(format!("Unsupported character '{}' in username '{}'", ch, s)));
        }

        Ok(Self(s))
    }

    /// Returns a string view of the username.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = ModelError;

    fn try_from(s: String) -> ModelResult<Self> {
        Username::new(s)
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(any(test, feature = "testutils"))]
impl From<&'static str> for Username {
    /// Creates a new username from a hardcoded string, which must be valid.
    fn from(name: &'static str) -> Self {
        Username::new(name).expect("Hardcoded usernames must be valid")
    }
}

/// A deserialization visitor for a `Username`.
struct UsernameVisitor;

impl Visitor<'_> for UsernameVisitor {
    type Value = Username;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a username")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Username::new(v).map_err(|e| E::custom(e.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Username::new(v).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for Username {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_string(UsernameVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{Token, assert_de_tokens_error, assert_tokens};

    #[test]
    fn test_username_ok() {
        assert_eq!(Username::from("butter_bridge"), Username::new("butter_bridge").unwrap());
        assert_eq!("Tickle.122-X", Username::new("Tickle.122-X").unwrap().as_str());
    }

    #[test]
    fn test_username_error() {
        assert!(Username::new("").is_err());
        assert!(Username::new("butter bridge").is_err());
        assert!(Username::new("butter@example.com").is_err());
        assert!(Username::new("caf\u{00e9}").is_err());
        assert!(Username::new("a,b").is_err());
        assert!(Username::new("a:b").is_err());
        assert!(Username::new("'; DROP TABLE users; --").is_err());
    }

    #[test]
    fn test_username_length_limit() {
        let mut name = "a".repeat(MAX_USERNAME_LENGTH);
        assert!(Username::new(&name).is_ok());
        name.push('b');
        assert_eq!(
            ModelError("Username cannot be longer than 32 characters".to_owned()),
            Username::new(name).unwrap_err()
        );
    }

    #[test]
    fn test_username_case_is_preserved() {
        assert_ne!(Username::from("lurker"), Username::new("LURKER").unwrap());
        assert_eq!("RogersOP", Username::new("RogersOP").unwrap().as_str());
        assert_eq!("RogersOP", Username::new("RogersOP").unwrap().to_string());
    }

    #[test]
    fn test_username_ser_de_ok() {
        let name = Username::new("IcellUsedKars").unwrap();
        assert_tokens(&name, &[Token::String("IcellUsedKars")]);
    }

    #[test]
    fn test_username_de_error() {
        assert_de_tokens_error::<Username>(
            &[Token::String("hello world")],
            "Unsupported character ' ' in username 'hello world'",
        );
        assert_de_tokens_error::<Username>(&[Token::String("")], "Username cannot be empty");
    }
}
