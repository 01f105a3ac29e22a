//! Listing filters: category, tag, and recency window, ANDed together.

use crate::content::record::Article;
use serde::Serialize;

/// Recency windows for the date filter, measured in days before "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DateWindow {
    Week,
    Month,
    Quarter,
    Year,
}

impl DateWindow {
    pub fn days(self) -> i64 {
        match self {
            DateWindow::Week => 7,
            DateWindow::Month => 30,
            DateWindow::Quarter => 90,
            DateWindow::Year => 365,
        }
    }

    /// Parse the query-string form. Unknown values are no filter at all.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "week" => Some(DateWindow::Week),
            "month" => Some(DateWindow::Month),
            "quarter" => Some(DateWindow::Quarter),
            "year" => Some(DateWindow::Year),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DateWindow::Week => "week",
            DateWindow::Month => "month",
            DateWindow::Quarter => "quarter",
            DateWindow::Year => "year",
        }
    }
}

/// Listing filter criteria. Absent criteria match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Exact category match.
    pub category: Option<String>,
    /// Tag membership.
    pub tag: Option<String>,
    /// Recency window relative to `today`.
    pub date: Option<DateWindow>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.tag.is_none() && self.date.is_none()
    }

    /// All present criteria must hold. `today` is a day number as produced
    /// by [`crate::utils::date::DateTimeUtc::day_number`].
    pub fn matches(&self, article: &Article, today: i64) -> bool {
        if let Some(category) = &self.category
            && &article.category != category
        {
            return false;
        }

        if let Some(tag) = &self.tag
            && !article.tags.contains(tag)
        {
            return false;
        }

        if let Some(window) = self.date {
            // Undated articles never match a recency window
            let Some(date) = article.date else {
                return false;
            };
            let age = today - date.day_number();
            if age < 0 || age > window.days() {
                return false;
            }
        }

        true
    }
}

/// Filter a sorted article list, preserving order.
pub fn apply_filters<'a>(
    articles: &'a [Article],
    criteria: &FilterCriteria,
    today: i64,
) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|article| criteria.matches(article, today))
        .collect()
}

/// Today as a day number, from the system clock.
pub fn today() -> i64 {
    chrono::Utc::now().timestamp().div_euclid(86_400)
}
