use crate::common::*;

#[doc = "Inclusive calendar-day window `[from, to]`, both interpreted in `tz`."]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct ReportWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub tz: FixedOffset,
}

impl ReportWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}
