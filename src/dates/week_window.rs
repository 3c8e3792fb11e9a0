use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub friday: NaiveDate,
    pub saturday: NaiveDate,
}

impl WeekWindow {
    /**
    Returns the upcoming Friday/Saturday for `today`, with weeks running Monday to Sunday.

    On a Saturday or Sunday this is next week's pair, never the one just passed.
    */
    pub fn upcoming(today: NaiveDate) -> Self {
        let days_to_friday = (Weekday::Fri.num_days_from_monday() + 7
            - today.weekday().num_days_from_monday())
            % 7;

        let friday = today + Days::new(days_to_friday as u64);

        Self {
            friday,
            saturday: friday + Days::new(1),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date == self.friday || date == self.saturday
    }
}

impl Display for WeekWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "viernes {} y sábado {}", self.friday, self.saturday)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test_log::test]
    fn should_always_be_a_friday_followed_by_its_saturday() {
        let start = date(2024, 12, 20);

        for offset in 0..400 {
            let today = start + Days::new(offset);
            let window = WeekWindow::upcoming(today);

            assert_eq!(window.friday.weekday(), Weekday::Fri, "{today}");
            assert_eq!(window.saturday, window.friday + Days::new(1), "{today}");

            match today.weekday() {
                Weekday::Sat | Weekday::Sun => assert!(window.friday > today, "{today}"),
                _ => assert!(window.friday >= today, "{today}"),
            }
            assert!(window.friday - today < chrono::Duration::days(7), "{today}");
        }
    }

    #[test_log::test]
    fn when_it_is_midweek_should_use_this_weeks_friday() {
        let window = WeekWindow::upcoming(date(2025, 12, 17));

        assert_eq!(window.friday, date(2025, 12, 19));
        assert_eq!(window.saturday, date(2025, 12, 20));
    }

    #[test_log::test]
    fn when_it_is_friday_should_use_today() {
        let window = WeekWindow::upcoming(date(2025, 12, 19));

        assert_eq!(window.friday, date(2025, 12, 19));
    }

    #[test_log::test]
    fn when_it_is_the_weekend_should_jump_to_next_week() {
        assert_eq!(WeekWindow::upcoming(date(2025, 12, 20)).friday, date(2025, 12, 26));
        assert_eq!(WeekWindow::upcoming(date(2025, 12, 21)).friday, date(2025, 12, 26));
    }

    #[test_log::test]
    fn should_cross_year_boundaries() {
        let window = WeekWindow::upcoming(date(2025, 12, 29));

        assert_eq!(window.friday, date(2026, 1, 2));
        assert_eq!(window.saturday, date(2026, 1, 3));
    }

    #[test_log::test]
    fn should_only_contain_its_two_days() {
        let window = WeekWindow::upcoming(date(2025, 12, 17));

        assert!(window.contains(date(2025, 12, 19)));
        assert!(window.contains(date(2025, 12, 20)));
        assert!(!window.contains(date(2025, 12, 18)));
        assert!(!window.contains(date(2025, 12, 21)));
    }
}
