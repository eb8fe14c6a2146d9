//! Fuzzy user lookup by partial name.
//!
//! Both the query and candidate names are folded to lowercase with
//! diacritics stripped. A candidate matches when the folded query is a
//! substring of its display name or account name. Matches rank by, in order:
//!
//! 1. display-name match over account-name-only match,
//! 2. prefix match over mid-string match,
//! 3. tighter match (higher `query length / name length`).
//!
//! A match covering a whole name ends the search immediately. Bot accounts
//! never match.

use std::cmp::Ordering;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use super::ChatUser;

/// Folds a name for comparison: lowercase, diacritics removed.
#[must_use]
pub fn fold_name(value: &str) -> String {
    value
        .to_lowercase()
        .nfd()
        .filter(|character| !is_combining_mark(*character))
        .collect()
}

#[derive(Debug, Clone, Copy)]
struct NameMatch {
    name_length: usize,
    starts_with: bool,
    is_account_name: bool,
}

impl NameMatch {
    fn against(folded_query: &str, name: &str, is_account_name: bool) -> Option<Self> {
        let folded_name = fold_name(name);
        folded_name.contains(folded_query).then(|| Self {
            name_length: folded_name.chars().count(),
            starts_with: folded_name.starts_with(folded_query),
            is_account_name,
        })
    }

    /// `Ordering::Greater` means `self` is the more relevant match.
    fn relevance(&self, other: &Self) -> Ordering {
        other
            .is_account_name
            .cmp(&self.is_account_name)
            .then(self.starts_with.cmp(&other.starts_with))
            // The query length is shared by every candidate, so a shorter
            // name is a tighter match.
            .then(other.name_length.cmp(&self.name_length))
    }

    const fn is_exact(&self, query_length: usize) -> bool {
        self.name_length == query_length
    }
}

/// Finds the member that best matches a partial name.
///
/// Candidates are consumed lazily: an exact match stops the scan. On equal
/// relevance the earlier candidate wins.
#[must_use]
pub fn find_user<'a, I>(candidates: I, query: &str) -> Option<&'a ChatUser>
where
    I: IntoIterator<Item = &'a ChatUser>,
{
    let folded_query = fold_name(query);
    let query_length = folded_query.chars().count();
    let mut best: Option<(&'a ChatUser, NameMatch)> = None;

    for user in candidates {
        if user.is_bot {
            continue;
        }

        let display = NameMatch::against(&folded_query, &user.display_name, false);
        let account = NameMatch::against(&folded_query, &user.account_name, true);
        let candidate = match (display, account) {
            (Some(left), Some(right)) => {
                if right.relevance(&left).is_gt() {
                    right
                } else {
                    left
                }
            }
            (Some(found), None) | (None, Some(found)) => found,
            (None, None) => continue,
        };

        if candidate.is_exact(query_length) {
            return Some(user);
        }

        let improves = best
            .as_ref()
            .is_none_or(|(_, current)| candidate.relevance(current).is_gt());
        if improves {
            best = Some((user, candidate));
        }
    }

    best.map(|(user, _)| user)
}
