use serde::{Deserialize, Serialize};

/// A task as the server represents it. `id` is assigned by the server on
/// creation, so a draft that has not been persisted yet carries `None` and
/// the field is left out of the JSON body entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl Task {
    /// Copy of this task with `completed` flipped, for the checkbox action.
    pub fn toggled(&self) -> Task {
        Task {
            completed: !self.completed,
            ..self.clone()
        }
    }

    // The create button is disabled exactly while the title is empty.
    pub fn can_submit(&self) -> bool {
        !self.title.is_empty()
    }

    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "COMPLETED"
        } else {
            "PENDING"
        }
    }
}
