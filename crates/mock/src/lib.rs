//! `dashkit-mock` — deterministic placeholder data for dashboard widgets.
//!
//! Every accessor is a pure function of its index. Table-backed accessors
//! return `None` past the end of their table; computed ones (ids, images,
//! times) are defined for every index.

use chrono::{DateTime, Duration, Utc};

mod tables;
pub mod value;

pub use value::{Category, MockValue, ParseCategoryError, value};

/// Asset host serving the placeholder images.
pub const ASSETS_BASE_URL: &str = "https://minimal-assets-api.vercel.app/assets/images";

/// Number of rows in each value table.
pub const TABLE_LEN: usize = tables::BOOLEAN.len();

/// Stable UUID-shaped identifier for row `index`.
pub fn id(index: usize) -> String {
    format!("e99f09a7-dd88-49d5-b1c8-1daf80c2d7b{}", index + 1)
}

/// `now` minus `index` days and `index` hours; `None` outside chrono's range.
pub fn time(index: usize, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let n = i64::try_from(index).ok()?;
    let back = Duration::try_days(n)?.checked_add(&Duration::try_hours(n)?)?;
    now.checked_sub_signed(back)
}

pub fn boolean(index: usize) -> Option<bool> {
    tables::BOOLEAN.get(index).copied()
}

pub fn role(index: usize) -> Option<&'static str> {
    tables::ROLE.get(index).copied()
}

pub mod name {
    use crate::tables;

    pub fn first_name(index: usize) -> Option<&'static str> {
        tables::FIRST_NAME.get(index).copied()
    }

    pub fn last_name(index: usize) -> Option<&'static str> {
        tables::LAST_NAME.get(index).copied()
    }

    pub fn full_name(index: usize) -> Option<&'static str> {
        tables::FULL_NAME.get(index).copied()
    }
}

pub mod text {
    use crate::tables;

    pub fn title(index: usize) -> Option<&'static str> {
        tables::TITLE.get(index).copied()
    }

    pub fn sentence(index: usize) -> Option<&'static str> {
        tables::SENTENCE.get(index).copied()
    }

    pub fn description(index: usize) -> Option<&'static str> {
        tables::DESCRIPTION.get(index).copied()
    }
}

pub mod number {
    use crate::tables;

    pub fn percent(index: usize) -> Option<f64> {
        tables::PERCENT.get(index).copied()
    }

    pub fn rating(index: usize) -> Option<f64> {
        tables::RATING.get(index).copied()
    }

    pub fn age(index: usize) -> Option<u32> {
        tables::AGE.get(index).copied()
    }

    pub fn price(index: usize) -> Option<f64> {
        tables::PRICE.get(index).copied()
    }
}

/// Placeholder image URLs, 1-based on the asset host.
pub mod image {
    use crate::ASSETS_BASE_URL;

    fn asset(kind: &str, index: usize) -> String {
        format!("{ASSETS_BASE_URL}/{kind}s/{kind}_{}.jpg", index + 1)
    }

    pub fn cover(index: usize) -> String {
        asset("cover", index)
    }

    pub fn feed(index: usize) -> String {
        asset("feed", index)
    }

    pub fn product(index: usize) -> String {
        asset("product", index)
    }

    pub fn avatar(index: usize) -> String {
        asset("avatar", index)
    }
}
