use crate::common::*;

use crate::model::cost::report_window::*;

pub const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";

#[doc = "Parses a `+HH:MM` / `-HH:MM` offset such as `+09:00`."]
pub fn parse_utc_offset(offset: &str) -> anyhow::Result<FixedOffset> {
    offset
        .trim()
        .parse::<FixedOffset>()
        .map_err(|e| anyhow!("[parse_utc_offset] invalid UTC offset '{}': {}", offset, e))
}

#[doc = "`YYYY-MM-DD` 형식의 날짜 문자열로 변환"]
pub fn convert_date_to_str(date: NaiveDate) -> String {
    date.format(DATE_ONLY_FORMAT).to_string()
}

#[doc = "Calendar day of `time` as seen in `tz`."]
pub fn convert_local_date<Tz>(time: DateTime<Utc>, tz: &Tz) -> NaiveDate
where
    Tz: TimeZone,
{
    time.with_timezone(tz).date_naive()
}

#[doc = "Midnight of `date` in `tz`, expressed in UTC."]
pub fn start_of_day_utc(date: NaiveDate, tz: &FixedOffset) -> anyhow::Result<DateTime<Utc>> {
    tz.from_local_datetime(&date.and_time(NaiveTime::MIN))
        .single()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| anyhow!("[start_of_day_utc] {} has no unique midnight in {}", date, tz))
}

#[doc = r#"
    Resolves the report window from the optional configured bounds.

    * `to` - defaults to the day of `now` in `tz`
    * `from` - defaults to `period_days - 1` days before `to`, so the window spans `period_days` days
"#]
pub fn resolve_report_window(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    period_days: u32,
    tz: FixedOffset,
    now: DateTime<Utc>,
) -> anyhow::Result<ReportWindow> {
    let to: NaiveDate = to.unwrap_or_else(|| convert_local_date(now, &tz));

    let from: NaiveDate = match from {
        Some(from) => from,
        None => to
            .checked_sub_days(Days::new(u64::from(period_days.max(1) - 1)))
            .ok_or_else(|| anyhow!("[resolve_report_window] window start underflows before {}", to))?,
    };

    if from > to {
        return Err(anyhow!(
            "[resolve_report_window] from ({}) must not be after to ({})",
            from,
            to
        ));
    }

    Ok(ReportWindow::new(from, to, tz))
}
