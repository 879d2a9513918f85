use crate::common::*;

use crate::model::chart::axis_label_sequence::*;
use crate::traits::service_traits::axis_label_service::*;
use crate::utils_modules::time_utils::*;

/* Label every 7th tick; remainder 1 puts the first label one day before `to` */
const LABEL_INTERVAL: usize = 7;
const LABEL_REMAINDER: usize = 1;

#[derive(Debug, Clone, Default, new)]
pub struct AxisLabelServiceImpl;

impl AxisLabelService for AxisLabelServiceImpl {
    fn build_labels<Tz: TimeZone>(
        &self,
        x_axis_points_count: usize,
        to: DateTime<Utc>,
        tz: &Tz,
    ) -> anyhow::Result<AxisLabelSequence> {
        let to_local: NaiveDate = convert_local_date(to, tz);

        let mut labels: Vec<String> = Vec::with_capacity(x_axis_points_count + 1);

        for days_ago in 0..=x_axis_points_count {
            let mut label: String = String::new();

            if days_ago % LABEL_INTERVAL == LABEL_REMAINDER {
                let date: NaiveDate = to_local
                    .checked_sub_days(Days::new(days_ago as u64))
                    .ok_or_else(|| {
                        anyhow!(
                            "[AxisLabelServiceImpl->build_labels] {} days before {} is out of range",
                            days_ago,
                            to_local
                        )
                    })?;

                label = convert_date_to_str(date);
                debug!("label: {}", label);
            }

            labels.push(label);
        }

        /* Oldest day leftmost */
        labels.reverse();

        Ok(AxisLabelSequence::new(labels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn length_is_count_plus_one() {
        let service: AxisLabelServiceImpl = AxisLabelServiceImpl::new();

        for count in [0usize, 1, 2, 6, 7, 8, 30] {
            let labels: AxisLabelSequence = service
                .build_labels(count, to_utc(2024, 5, 31, 0), &Utc)
                .unwrap();
            assert_eq!(labels.len(), count + 1);
        }
    }

    #[test]
    fn only_every_seventh_tick_is_labeled() {
        let service: AxisLabelServiceImpl = AxisLabelServiceImpl::new();
        let count: usize = 30;

        let labels: AxisLabelSequence = service
            .build_labels(count, to_utc(2024, 5, 31, 0), &Utc)
            .unwrap();

        for (position, label) in labels.labels().iter().enumerate() {
            let days_ago: usize = count - position;
            assert_eq!(!label.is_empty(), days_ago % 7 == 1, "position {}", position);
        }
    }

    #[test]
    fn labels_are_dates_before_to_oldest_first() {
        let service: AxisLabelServiceImpl = AxisLabelServiceImpl::new();

        let labels: AxisLabelSequence = service
            .build_labels(15, to_utc(2024, 5, 31, 0), &Utc)
            .unwrap();

        let visible: Vec<(usize, &str)> = labels.visible().collect();
        assert_eq!(
            visible,
            vec![(0, "2024-05-16"), (7, "2024-05-23"), (14, "2024-05-30")]
        );
    }

    #[test]
    fn dates_are_taken_in_requested_timezone() {
        let service: AxisLabelServiceImpl = AxisLabelServiceImpl::new();
        let seoul: FixedOffset = FixedOffset::east_opt(9 * 3600).unwrap();

        /* 2024-05-31 20:00 UTC is already 2024-06-01 in +09:00 */
        let labels: AxisLabelSequence = service
            .build_labels(2, to_utc(2024, 5, 31, 20), &seoul)
            .unwrap();
        assert_eq!(labels.labels(), &vec!["", "2024-05-31", ""]);

        let labels_utc: AxisLabelSequence = service
            .build_labels(2, to_utc(2024, 5, 31, 20), &Utc)
            .unwrap();
        assert_eq!(labels_utc.labels(), &vec!["", "2024-05-30", ""]);
    }

    #[test]
    fn zero_points_yields_single_empty_label() {
        let service: AxisLabelServiceImpl = AxisLabelServiceImpl::new();
        let labels: AxisLabelSequence = service
            .build_labels(0, to_utc(2024, 5, 31, 0), &Utc)
            .unwrap();

        assert_eq!(labels.labels(), &vec![String::new()]);
        assert_eq!(labels.visible().count(), 0);
    }
}
