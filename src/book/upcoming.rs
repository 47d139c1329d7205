//! Upcoming-birthday calculation.
//
// Pure function of (book, today, window): no clock access, no side
// effects. The caller supplies `today`, which keeps this testable with
// fixed dates.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use super::AddressBook;

/// One row of the `birthdays` report. Derived and ephemeral, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub congratulation_date: NaiveDate,
}

/// Substitute `year` into a birthday's month/day. February 29 falls
/// back to February 28 when `year` is not a leap year; any other
/// combination that does not exist in `year` yields `None`.
fn occurrence_in_year(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
        if month == 2 && day == 29 {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}

/// Shift weekend dates to the following Monday.
fn congratulation_date(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

/// Contacts whose next birthday occurrence falls within
/// `[today, today + window_days]`, sorted ascending by congratulation
/// date. Contacts without a birthday are skipped.
pub fn upcoming_birthdays(
    book: &AddressBook,
    today: NaiveDate,
    window_days: u32,
) -> Vec<UpcomingBirthday> {
    let end = today + Duration::days(i64::from(window_days));
    let mut entries = Vec::new();

    for record in book.records() {
        let Some(birthday) = record.birthday() else {
            continue;
        };
        let bday = birthday.date();

        let Some(this_year) = occurrence_in_year(today.year(), bday.month(), bday.day())
        else {
            continue;
        };
        let next = if this_year < today {
            match occurrence_in_year(today.year() + 1, bday.month(), bday.day()) {
                Some(date) => date,
                None => continue,
            }
        } else {
            this_year
        };

        if (today..=end).contains(&next) {
            entries.push(UpcomingBirthday {
                name: record.name().to_string(),
                congratulation_date: congratulation_date(next),
            });
        }
    }

    // Stable: ties keep the book's name order.
    entries.sort_by_key(|entry| entry.congratulation_date);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::{Birthday, Name, Record};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn book(contacts: &[(&str, Option<&str>)]) -> AddressBook {
        let mut book = AddressBook::new();
        for (name, birthday) in contacts {
            let mut record = Record::new(Name::new(name).unwrap());
            if let Some(text) = birthday {
                record.set_birthday(Birthday::parse(text).unwrap());
            }
            book.add_record(record);
        }
        book
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn contacts_without_birthdays_are_skipped() {
        let book = book(&[("Anna", None), ("Leo", None)]);
        assert_eq!(upcoming_birthdays(&book, date(2024, 3, 1), 7), vec![]);
    }

    #[test]
    fn weekday_birthday_in_window_is_reported_unshifted() {
        // 2024-03-01 is a Friday, 2024-03-05 a Tuesday.
        let book = book(&[("Anna", Some("05.03.1990"))]);
        let entries = upcoming_birthdays(&book, date(2024, 3, 1), 7);
        assert_eq!(
            entries,
            vec![UpcomingBirthday {
                name: "Anna".to_string(),
                congratulation_date: date(2024, 3, 5),
            }]
        );
    }

    #[test]
    fn feb_29_falls_back_to_feb_28_in_non_leap_years() {
        let book = book(&[("Leo", Some("29.02.2000"))]);
        let entries = upcoming_birthdays(&book, date(2025, 2, 25), 7);
        assert_eq!(
            entries,
            vec![UpcomingBirthday {
                name: "Leo".to_string(),
                congratulation_date: date(2025, 2, 28),
            }]
        );
    }

    #[test]
    fn feb_29_is_kept_in_leap_years() {
        let book = book(&[("Leo", Some("29.02.2000"))]);
        let entries = upcoming_birthdays(&book, date(2024, 2, 25), 7);
        // 2024-02-29 is a Thursday.
        assert_eq!(entries[0].congratulation_date, date(2024, 2, 29));
    }

    // 2024-03-09 is a Saturday, 2024-03-10 a Sunday; both shift to
    // Monday the 11th.
    #[test_case("09.03.1990", date(2024, 3, 11); "saturday shifts two days")]
    #[test_case("10.03.1990", date(2024, 3, 11); "sunday shifts one day")]
    #[test_case("08.03.1990", date(2024, 3, 8); "friday stays")]
    fn weekend_occurrences_shift_to_monday(birthday: &str, expected: NaiveDate) {
        let book = book(&[("Sam", Some(birthday))]);
        let entries = upcoming_birthdays(&book, date(2024, 3, 4), 7);
        assert_eq!(entries[0].congratulation_date, expected);
    }

    #[test]
    fn birthday_on_today_qualifies_and_shifts_off_sunday() {
        // 2024-03-03 is a Sunday.
        let book = book(&[("Sam", Some("03.03.1990"))]);
        let entries = upcoming_birthdays(&book, date(2024, 3, 3), 7);
        assert_eq!(
            entries,
            vec![UpcomingBirthday {
                name: "Sam".to_string(),
                congratulation_date: date(2024, 3, 4),
            }]
        );
    }

    #[test]
    fn passed_birthday_rolls_over_to_next_year() {
        // Birthday already passed this year; next occurrence is
        // 2025-01-01, far outside a 7-day window from March.
        let book = book(&[("Anna", Some("01.01.1990"))]);
        assert_eq!(upcoming_birthdays(&book, date(2024, 3, 1), 7), vec![]);
    }

    #[test]
    fn passed_birthday_within_window_across_year_boundary() {
        let book = book(&[("Anna", Some("02.01.1990"))]);
        let entries = upcoming_birthdays(&book, date(2024, 12, 30), 7);
        // 2025-01-02 is a Thursday.
        assert_eq!(entries[0].congratulation_date, date(2025, 1, 2));
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let book = book(&[("Anna", Some("08.03.1990")), ("Leo", Some("01.03.1990"))]);
        // today = 2024-03-01, window = 7: both the first and last day
        // of [today, today + 7] qualify.
        let entries = upcoming_birthdays(&book, date(2024, 3, 1), 7);
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Leo", "Anna"]);
    }

    #[test]
    fn day_after_window_is_excluded() {
        let book = book(&[("Anna", Some("09.03.1990"))]);
        assert_eq!(upcoming_birthdays(&book, date(2024, 3, 1), 7), vec![]);
    }

    #[test]
    fn congratulation_may_land_past_the_window_end() {
        // 2024-03-09 (Saturday) is the last day of the window; its
        // congratulation date is Monday the 11th, two days past it.
        let book = book(&[("Anna", Some("09.03.1990"))]);
        let entries = upcoming_birthdays(&book, date(2024, 3, 2), 7);
        assert_eq!(entries[0].congratulation_date, date(2024, 3, 11));
    }

    #[test]
    fn entries_are_sorted_by_congratulation_date() {
        let book = book(&[
            ("Anna", Some("07.03.1990")),
            ("Leo", Some("05.03.1985")),
            ("Sam", Some("06.03.2001")),
        ]);
        let entries = upcoming_birthdays(&book, date(2024, 3, 1), 7);
        let dates: Vec<_> =
            entries.iter().map(|e| e.congratulation_date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn reported_dates_never_fall_on_a_weekend() {
        let book = book(&[
            ("Anna", Some("04.03.1990")),
            ("Leo", Some("05.03.1990")),
            ("Mia", Some("06.03.1990")),
            ("Noah", Some("07.03.1990")),
            ("Olga", Some("08.03.1990")),
            ("Pam", Some("09.03.1990")),
            ("Sam", Some("10.03.1990")),
        ]);
        let entries = upcoming_birthdays(&book, date(2024, 3, 4), 7);
        assert_eq!(entries.len(), 7);
        for entry in entries {
            assert!(!matches!(
                entry.congratulation_date.weekday(),
                Weekday::Sat | Weekday::Sun
            ));
        }
    }

    #[test]
    fn same_day_ties_keep_name_order() {
        let book = book(&[
            ("Zoe", Some("05.03.1990")),
            ("Anna", Some("05.03.1985")),
        ]);
        let entries = upcoming_birthdays(&book, date(2024, 3, 1), 7);
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        // The book iterates in name order; a stable sort keeps it.
        assert_eq!(names, ["Anna", "Zoe"]);
    }
}
