//! Title model definition.

use serde::{Deserialize, Serialize};

use super::Keyed;

/// A job title, referenced from employees by its number only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Title {
    pub title_no: i64,
}

impl Title {
    pub fn new(title_no: i64) -> Self {
        Self { title_no }
    }
}

impl Keyed for Title {
    fn key(&self) -> i64 {
        self.title_no
    }
}
