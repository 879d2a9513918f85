use crate::common::*;

#[doc = "One label per x-axis tick, oldest day leftmost. Empty strings are unlabeled ticks."]
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, new)]
#[getset(get = "pub")]
pub struct AxisLabelSequence {
    labels: Vec<String>,
}

impl AxisLabelSequence {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[doc = "(tick position, label) of every non-empty label."]
    pub fn visible(&self) -> impl Iterator<Item = (usize, &str)> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, label)| !label.is_empty())
            .map(|(idx, label)| (idx, label.as_str()))
    }
}
