use crate::common::*;

#[doc = r#"
    Distinct service names, descending by total cost over the queried window.
    `totals[i]` is the summed cost of `services[i]`.
"#]
#[derive(Debug, Clone, PartialEq, Default, Getters, new)]
#[getset(get = "pub")]
pub struct ServiceOrdering {
    services: Vec<String>,
    totals: Vec<f64>,
}

impl ServiceOrdering {
    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.services.iter()
    }

    pub fn total_of(&self, service: &str) -> Option<f64> {
        self.services
            .iter()
            .position(|s| s == service)
            .map(|idx| self.totals[idx])
    }
}
