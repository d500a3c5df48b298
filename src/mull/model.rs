use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One answer to a reflection question. Answers are append-only: the
/// application never edits or removes them, and several answers to the same
/// question on the same day are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflectionAnswer {
    pub question_id: u32,
    pub date: NaiveDate,
    pub text: String,
}

/// One diary entry. The date is the unique key: at most one entry per
/// calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub date: NaiveDate,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reflections {
    pub answers: Vec<ReflectionAnswer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diary {
    pub entries: Vec<DiaryEntry>,
}

/// What a diary upsert actually did, so callers can report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Added,
    Updated,
    Removed,
    Noop,
}

impl Reflections {
    pub fn append(&mut self, answer: ReflectionAnswer) {
        self.answers.push(answer);
    }

    /// All answers for a question, newest date first. The sort is stable, so
    /// answers from the same day keep their insertion order.
    pub fn by_question(&self, question_id: u32) -> Vec<&ReflectionAnswer> {
        let mut matches: Vec<&ReflectionAnswer> = self
            .answers
            .iter()
            .filter(|a| a.question_id == question_id)
            .collect();
        matches.sort_by(|a, b| b.date.cmp(&a.date));
        matches
    }
}

impl Diary {
    pub fn entry_for(&self, date: NaiveDate) -> Option<&DiaryEntry> {
        self.entries.iter().find(|e| e.date == date)
    }

    /// Insert, replace, or remove the entry for a date. Empty text removes
    /// an existing entry and is a no-op when none exists.
    pub fn upsert(&mut self, date: NaiveDate, text: &str) -> UpsertOutcome {
        match self.entries.iter().position(|e| e.date == date) {
            Some(idx) if text.is_empty() => {
                self.entries.remove(idx);
                UpsertOutcome::Removed
            }
            Some(idx) => {
                self.entries[idx].text = text.to_string();
                UpsertOutcome::Updated
            }
            None if text.is_empty() => UpsertOutcome::Noop,
            None => {
                self.entries.push(DiaryEntry {
                    date,
                    text: text.to_string(),
                });
                UpsertOutcome::Added
            }
        }
    }

    /// Entries from other years that fall on the same month and day, newest
    /// first. Feb 29 is folded onto Feb 28 so leap-day entries still show up
    /// when viewing Feb 28 of a non-leap year, and vice versa.
    pub fn on_this_day(&self, date: NaiveDate) -> Vec<&DiaryEntry> {
        let key = month_day_key(date);
        let mut matches: Vec<&DiaryEntry> = self
            .entries
            .iter()
            .filter(|e| e.date.year() != date.year() && month_day_key(e.date) == key)
            .collect();
        matches.sort_by(|a, b| b.date.cmp(&a.date));
        matches
    }
}

/// (month, day) with Feb 29 normalized to Feb 28.
fn month_day_key(date: NaiveDate) -> (u32, u32) {
    let month = date.month();
    let mut day = date.day();
    if month == 2 && day == 29 {
        day = 28;
    }
    (month, day)
}

/// The combined export format: both documents in one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    pub reflections: Reflections,
    pub diary: Diary,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn answer(question_id: u32, d: &str, text: &str) -> ReflectionAnswer {
        ReflectionAnswer {
            question_id,
            date: date(d),
            text: text.to_string(),
        }
    }

    #[test]
    fn upsert_add_then_remove_then_add() {
        let mut diary = Diary::default();
        let d = date("2024-03-01");

        assert_eq!(diary.upsert(d, "A"), UpsertOutcome::Added);
        assert_eq!(diary.upsert(d, ""), UpsertOutcome::Removed);
        assert!(diary.entry_for(d).is_none());
        assert_eq!(diary.entries.len(), 0);

        assert_eq!(diary.upsert(d, "B"), UpsertOutcome::Added);
        assert_eq!(diary.entries.len(), 1);
        assert_eq!(diary.entry_for(d).unwrap().text, "B");
    }

    #[test]
    fn upsert_keeps_one_entry_per_date() {
        let mut diary = Diary::default();
        let d = date("2024-05-10");

        diary.upsert(d, "first");
        assert_eq!(diary.upsert(d, "second"), UpsertOutcome::Updated);

        assert_eq!(diary.entries.len(), 1);
        assert_eq!(diary.entry_for(d).unwrap().text, "second");
    }

    #[test]
    fn upsert_empty_on_missing_date_is_noop() {
        let mut diary = Diary::default();
        assert_eq!(diary.upsert(date("2024-03-01"), ""), UpsertOutcome::Noop);
        assert!(diary.entries.is_empty());
    }

    #[test]
    fn by_question_sorts_newest_first() {
        let mut reflections = Reflections::default();
        reflections.append(answer(5, "2023-01-01", "older"));
        reflections.append(answer(5, "2024-01-01", "newer"));
        reflections.append(answer(7, "2025-01-01", "other question"));

        let answers = reflections.by_question(5);
        assert_eq!(answers.len(), 2);
        assert_eq!(answers[0].date, date("2024-01-01"));
        assert_eq!(answers[1].date, date("2023-01-01"));
    }

    #[test]
    fn by_question_same_day_keeps_insertion_order() {
        let mut reflections = Reflections::default();
        reflections.append(answer(1, "2024-01-01", "first"));
        reflections.append(answer(1, "2024-01-01", "second"));

        let answers = reflections.by_question(1);
        assert_eq!(answers[0].text, "first");
        assert_eq!(answers[1].text, "second");
    }

    #[test]
    fn on_this_day_excludes_current_year() {
        let mut diary = Diary::default();
        diary.upsert(date("2022-07-04"), "two years ago");
        diary.upsert(date("2023-07-04"), "last year");
        diary.upsert(date("2024-07-04"), "today");
        diary.upsert(date("2023-07-05"), "different day");

        let past = diary.on_this_day(date("2024-07-04"));
        assert_eq!(past.len(), 2);
        assert_eq!(past[0].date, date("2023-07-04"));
        assert_eq!(past[1].date, date("2022-07-04"));
    }

    #[test]
    fn on_this_day_folds_leap_day_onto_feb_28() {
        let mut diary = Diary::default();
        diary.upsert(date("2024-02-29"), "leap day");
        diary.upsert(date("2022-02-28"), "plain feb 28");

        // Viewing Feb 28 of a non-leap year finds the leap-day entry.
        let past = diary.on_this_day(date("2023-02-28"));
        assert_eq!(past.len(), 2);
        assert_eq!(past[0].date, date("2024-02-29"));
        assert_eq!(past[1].date, date("2022-02-28"));

        // And viewing the leap day finds the Feb 28 entry.
        let past = diary.on_this_day(date("2024-02-29"));
        assert_eq!(past.len(), 1);
        assert_eq!(past[0].date, date("2022-02-28"));
    }

    #[test]
    fn wire_format_uses_camel_case_question_id() {
        let mut reflections = Reflections::default();
        reflections.append(answer(3, "2024-06-01", "hi"));

        let json = serde_json::to_string(&reflections).unwrap();
        assert!(json.contains("\"questionId\":3"));
        assert!(json.contains("\"date\":\"2024-06-01\""));

        let parsed: Reflections = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, reflections);
    }

    #[test]
    fn bundle_round_trip() {
        let mut bundle = Bundle::default();
        bundle.reflections.append(answer(1, "2024-01-01", "a"));
        bundle.diary.upsert(date("2024-01-02"), "b");

        let json = serde_json::to_string_pretty(&bundle).unwrap();
        let parsed: Bundle = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, bundle);
    }
}
