//! Single entry point over every mock accessor.

use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::{image, name, number, text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Id,
    Time,
    Boolean,
    Role,
    FirstName,
    LastName,
    FullName,
    Title,
    Sentence,
    Description,
    Percent,
    Rating,
    Age,
    Price,
    Cover,
    Feed,
    Product,
    Avatar,
}

impl Category {
    pub const ALL: [Category; 18] = [
        Category::Id,
        Category::Time,
        Category::Boolean,
        Category::Role,
        Category::FirstName,
        Category::LastName,
        Category::FullName,
        Category::Title,
        Category::Sentence,
        Category::Description,
        Category::Percent,
        Category::Rating,
        Category::Age,
        Category::Price,
        Category::Cover,
        Category::Feed,
        Category::Product,
        Category::Avatar,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Id => "id",
            Category::Time => "time",
            Category::Boolean => "boolean",
            Category::Role => "role",
            Category::FirstName => "first_name",
            Category::LastName => "last_name",
            Category::FullName => "full_name",
            Category::Title => "title",
            Category::Sentence => "sentence",
            Category::Description => "description",
            Category::Percent => "percent",
            Category::Rating => "rating",
            Category::Age => "age",
            Category::Price => "price",
            Category::Cover => "cover",
            Category::Feed => "feed",
            Category::Product => "product",
            Category::Avatar => "avatar",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown mock category '{0}'")]
pub struct ParseCategoryError(String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_").to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// A mock value of any category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum MockValue {
    Text(String),
    Number(f64),
    Integer(u32),
    Bool(bool),
    Time(DateTime<Utc>),
}

impl core::fmt::Display for MockValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MockValue::Text(s) => f.write_str(s),
            MockValue::Number(n) => write!(f, "{n}"),
            MockValue::Integer(n) => write!(f, "{n}"),
            MockValue::Bool(b) => write!(f, "{b}"),
            MockValue::Time(t) => write!(f, "{}", t.to_rfc3339()),
        }
    }
}

/// Look up `category` at `index`. `now` anchors [`Category::Time`] only.
pub fn value(category: Category, index: usize, now: DateTime<Utc>) -> Option<MockValue> {
    let owned = |s: Option<&'static str>| s.map(|s| MockValue::Text(s.to_string()));

    match category {
        Category::Id => Some(MockValue::Text(crate::id(index))),
        Category::Time => crate::time(index, now).map(MockValue::Time),
        Category::Boolean => crate::boolean(index).map(MockValue::Bool),
        Category::Role => owned(crate::role(index)),
        Category::FirstName => owned(name::first_name(index)),
        Category::LastName => owned(name::last_name(index)),
        Category::FullName => owned(name::full_name(index)),
        Category::Title => owned(text::title(index)),
        Category::Sentence => owned(text::sentence(index)),
        Category::Description => owned(text::description(index)),
        Category::Percent => number::percent(index).map(MockValue::Number),
        Category::Rating => number::rating(index).map(MockValue::Number),
        Category::Age => number::age(index).map(MockValue::Integer),
        Category::Price => number::price(index).map(MockValue::Number),
        Category::Cover => Some(MockValue::Text(image::cover(index))),
        Category::Feed => Some(MockValue::Text(image::feed(index))),
        Category::Product => Some(MockValue::Text(image::product(index))),
        Category::Avatar => Some(MockValue::Text(image::avatar(index))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TABLE_LEN;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn parses_category_names() {
        assert_eq!("first_name".parse::<Category>(), Ok(Category::FirstName));
        assert_eq!("Full-Name".parse::<Category>(), Ok(Category::FullName));
        assert!("nickname".parse::<Category>().is_err());
        for c in Category::ALL {
            assert_eq!(c.as_str().parse::<Category>(), Ok(c));
        }
    }

    #[test]
    fn every_category_is_defined_inside_the_tables() {
        for c in Category::ALL {
            for i in 0..TABLE_LEN {
                assert!(value(c, i, now()).is_some(), "{c} missing at {i}");
            }
        }
    }

    #[test]
    fn computed_categories_are_total() {
        assert!(value(Category::Avatar, 10_000, now()).is_some());
        assert!(value(Category::Id, 10_000, now()).is_some());
        assert_eq!(value(Category::Role, 10_000, now()), None);
    }

    #[test]
    fn serializes_tagged() {
        let json = serde_json::to_value(value(Category::Age, 0, now()).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "integer", "value": 30 }));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: same category and index always yield the same value.
            #[test]
            fn lookup_is_deterministic(cat in 0..Category::ALL.len(), index in 0usize..64) {
                let c = Category::ALL[cat];
                prop_assert_eq!(value(c, index, now()), value(c, index, now()));
            }
        }
    }
}
