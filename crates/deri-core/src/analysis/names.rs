use crate::types::{StatusDuration, StatusId, StatusIncident};
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

/// Status id to display name, supplied wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusNames {
    names: HashMap<StatusId, String>,
}

impl StatusNames {
    pub fn from_statuses(statuses: &[StatusIncident]) -> Self {
        Self {
            names: statuses
                .iter()
                .map(|status| (status.id, status.name.clone()))
                .collect(),
        }
    }

    pub fn from_map(map: BTreeMap<i64, String>) -> Self {
        Self {
            names: map
                .into_iter()
                .map(|(id, name)| (StatusId::new(id), name))
                .collect(),
        }
    }

    pub fn resolve(&self, id: StatusId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Fills `status_name` on every row. Unknown ids stay `None`.
    pub fn label(&self, rows: &mut [StatusDuration]) {
        for row in rows {
            row.status_name = self.resolve(row.status_id).map(str::to_string);
            if row.status_name.is_none() {
                warn!(status_id = %row.status_id, "status id has no name in the catalogue");
            }
        }
    }
}
