//! Filter/pagination over the fully materialized word list. The view is a
//! pure function of its inputs so a page reached through back/forward
//! navigation always reproduces the same result.

use crate::services::word::Word;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordView {
    pub items: Vec<Word>,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DayFilter {
    Unset,
    Day(u32),
    Invalid,
}

/// The raw value comes straight from a URL query parameter. Unset, empty
/// and `"0"` mean "all days"; anything non-numeric matches nothing rather
/// than everything.
fn parse_day_filter(raw: Option<&str>) -> DayFilter {
    let Some(raw) = raw else {
        return DayFilter::Unset;
    };

    let raw = raw.trim();
    if raw.is_empty() {
        return DayFilter::Unset;
    }

    match raw.parse::<u32>() {
        Ok(0) => DayFilter::Unset,
        Ok(day) => DayFilter::Day(day),
        Err(_) => DayFilter::Invalid,
    }
}

pub fn compute_view(
    words: &[Word],
    keyword: &str,
    day: Option<&str>,
    page: usize,
    page_size: usize,
) -> WordView {
    let keyword = keyword.trim();
    let day_filter = parse_day_filter(day);

    let filtered: Vec<&Word> = words
        .iter()
        .filter(|word| {
            keyword.is_empty()
                || word.eng_word.contains(keyword)
                || word.tw_word.contains(keyword)
        })
        .filter(|word| match day_filter {
            DayFilter::Unset => true,
            DayFilter::Day(day) => word.day == day,
            DayFilter::Invalid => false,
        })
        .collect();

    let total = filtered.len();
    let start = page.max(1).saturating_sub(1).saturating_mul(page_size);
    let items = filtered
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    WordView { items, total }
}
