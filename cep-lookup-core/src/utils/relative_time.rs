//! Relative age text in Brazilian Portuguese ("há 3 minutos").
//!
//! Thresholds follow the date-fns `formatDistance` rules with seconds included.
//! Below two months a month is 30 days; from there on whole calendar months
//! decide between months and years.

use chrono::{DateTime, Datelike, Months, Utc};

const MINUTES_IN_DAY: i64 = 1_440;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

/// Distance between two instants, before wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Distance {
    LessThanSeconds(i64),
    HalfAMinute,
    LessThanAMinute,
    Minutes(i64),
    AboutHours(i64),
    Days(i64),
    AboutMonths(i64),
    Months(i64),
    AboutYears(i64),
    OverYears(i64),
    AlmostYears(i64),
}

/// Integer division rounding halves up (`Math.round` for non-negative values).
fn round_div(value: i64, divisor: i64) -> i64 {
    (value + divisor / 2) / divisor
}

/// Whole calendar months from `earlier` to `later`.
fn calendar_months(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let mut months = i64::from(later.year() - earlier.year()) * 12 + i64::from(later.month())
        - i64::from(earlier.month());
    let overshoots = u32::try_from(months)
        .ok()
        .and_then(|m| earlier.checked_add_months(Months::new(m)))
        .is_some_and(|reached| reached > later);
    if overshoots {
        months -= 1;
    }
    months.max(0)
}

fn distance(earlier: DateTime<Utc>, later: DateTime<Utc>) -> Distance {
    let seconds = (later - earlier).num_seconds();
    let minutes = round_div(seconds, 60);

    if minutes < 2 {
        return match seconds {
            s if s < 5 => Distance::LessThanSeconds(5),
            s if s < 10 => Distance::LessThanSeconds(10),
            s if s < 20 => Distance::LessThanSeconds(20),
            s if s < 40 => Distance::HalfAMinute,
            s if s < 60 => Distance::LessThanAMinute,
            _ => Distance::Minutes(1),
        };
    }

    if minutes < 45 {
        Distance::Minutes(minutes)
    } else if minutes < 90 {
        Distance::AboutHours(1)
    } else if minutes < MINUTES_IN_DAY {
        Distance::AboutHours(round_div(minutes, 60))
    } else if minutes < 2_520 {
        Distance::Days(1)
    } else if minutes < MINUTES_IN_MONTH {
        Distance::Days(round_div(minutes, MINUTES_IN_DAY))
    } else if minutes < MINUTES_IN_TWO_MONTHS {
        Distance::AboutMonths(round_div(minutes, MINUTES_IN_MONTH))
    } else {
        let months = calendar_months(earlier, later);
        if months < 12 {
            Distance::Months(round_div(minutes, MINUTES_IN_MONTH))
        } else {
            let years = months / 12;
            match months % 12 {
                m if m < 3 => Distance::AboutYears(years),
                m if m < 9 => Distance::OverYears(years),
                _ => Distance::AlmostYears(years + 1),
            }
        }
    }
}

fn plural(count: i64, one: &str, other: &str) -> String {
    if count == 1 {
        one.to_string()
    } else {
        other.replace("{}", &count.to_string())
    }
}

fn to_pt_br(distance: Distance) -> String {
    match distance {
        Distance::LessThanSeconds(n) => plural(n, "menos de um segundo", "menos de {} segundos"),
        Distance::HalfAMinute => "meio minuto".to_string(),
        Distance::LessThanAMinute => "menos de um minuto".to_string(),
        Distance::Minutes(n) => plural(n, "1 minuto", "{} minutos"),
        Distance::AboutHours(n) => plural(n, "cerca de 1 hora", "cerca de {} horas"),
        Distance::Days(n) => plural(n, "1 dia", "{} dias"),
        Distance::AboutMonths(n) => plural(n, "cerca de 1 mês", "cerca de {} meses"),
        Distance::Months(n) => plural(n, "1 mês", "{} meses"),
        Distance::AboutYears(n) => plural(n, "cerca de 1 ano", "cerca de {} anos"),
        Distance::OverYears(n) => plural(n, "mais de 1 ano", "mais de {} anos"),
        Distance::AlmostYears(n) => plural(n, "quase 1 ano", "quase {} anos"),
    }
}

/// Formats how long ago `then` was, seen from `now`, e.g. `há 3 minutos`.
///
/// Instants after `now` read as `em …`.
pub fn format_relative_pt_br(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if then > now {
        format!("em {}", to_pt_br(distance(now, then)))
    } else {
        format!("há {}", to_pt_br(distance(then, now)))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        let Ok(now) = "2024-06-15T12:00:00Z".parse::<DateTime<Utc>>() else {
            panic!("valid timestamp");
        };
        now
    }

    fn ago(seconds: i64) -> String {
        let now = fixed_now();
        format_relative_pt_br(now - Duration::seconds(seconds), now)
    }

    const MINUTE: i64 = 60;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;

    #[test]
    fn seconds_buckets() {
        assert_eq!(ago(0), "há menos de 5 segundos");
        assert_eq!(ago(7), "há menos de 10 segundos");
        assert_eq!(ago(15), "há menos de 20 segundos");
        assert_eq!(ago(30), "há meio minuto");
        assert_eq!(ago(50), "há menos de um minuto");
        assert_eq!(ago(75), "há 1 minuto");
    }

    #[test]
    fn minutes_and_hours() {
        assert_eq!(ago(3 * MINUTE), "há 3 minutos");
        assert_eq!(ago(44 * MINUTE), "há 44 minutos");
        assert_eq!(ago(60 * MINUTE), "há cerca de 1 hora");
        assert_eq!(ago(5 * HOUR), "há cerca de 5 horas");
    }

    #[test]
    fn days_months_years() {
        assert_eq!(ago(30 * HOUR), "há 1 dia");
        assert_eq!(ago(3 * DAY), "há 3 dias");
        assert_eq!(ago(31 * DAY), "há cerca de 1 mês");
        assert_eq!(ago(100 * DAY), "há 3 meses");
        assert_eq!(ago(362 * DAY), "há 12 meses");
        assert_eq!(ago(370 * DAY), "há cerca de 1 ano");
        assert_eq!(ago(540 * DAY), "há mais de 1 ano");
        assert_eq!(ago(700 * DAY), "há quase 2 anos");
        assert_eq!(ago(1_100 * DAY), "há cerca de 3 anos");
    }

    #[test]
    fn calendar_months_count_whole_months() {
        let now = fixed_now();
        assert_eq!(calendar_months(now - Duration::days(362), now), 11);
        assert_eq!(calendar_months(now - Duration::days(366), now), 12);
        assert_eq!(calendar_months(now - Duration::days(31), now), 1);
        assert_eq!(calendar_months(now - Duration::days(29), now), 0);
    }

    #[test]
    fn future_uses_em() {
        let now = fixed_now();
        let text = format_relative_pt_br(now + Duration::minutes(10), now);
        assert_eq!(text, "em 10 minutos");
    }
}
