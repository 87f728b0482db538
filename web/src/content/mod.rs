//! Picks what a visitor gets to see. Every route with bot-dependent output has
//! exactly two variants, chosen only by the [`Traffic`] classification of the
//! current request.

pub mod flights;

use crate::{i18n::Locale, trust::Traffic};

pub fn landing_message(traffic: Traffic, locale: Locale) -> &'static str {
    match (traffic, locale) {
        (Traffic::Trusted, Locale::En) => "Hello",
        (Traffic::Automated, Locale::En) => "Suspicious bot traffic detected",
        (Traffic::Trusted, Locale::Ko) => "안녕하세요",
        (Traffic::Automated, Locale::Ko) => "봇으로 의심되는 트래픽입니다",
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommentVisibility {
    /// Only comments that were not silently discarded
    Public,
    /// Everything ever posted, including silently discarded comments
    All,
}

impl CommentVisibility {
    pub fn include_hidden(self) -> bool {
        self == CommentVisibility::All
    }
}

// Bots see every comment, their own discarded ones included and marked as such.
pub fn comment_visibility(traffic: Traffic) -> CommentVisibility {
    match traffic {
        Traffic::Trusted => CommentVisibility::Public,
        Traffic::Automated => CommentVisibility::All,
    }
}

/// Comments posted by bots are stored, but hidden from everybody else.
pub fn silent_discard(traffic: Traffic) -> bool {
    traffic.is_automated()
}
