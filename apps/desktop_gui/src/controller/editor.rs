//! Drawer state for creating and editing directory records.

use shared::{
    domain::Country,
    protocol::{UserDraft, UserRecord, UserUpdate},
};

use crate::backend_bridge::commands::BackendCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    FirstName,
    LastName,
    Age,
    PhoneNumber,
    Country,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorError {
    pub field: EditorField,
    pub message: &'static str,
}

/// Form drafts backing the drawer. `age` stays a string while typing and is
/// parsed on save. `baseline` is the record being edited; `None` means the
/// drawer is creating a new record.
#[derive(Debug, Clone)]
pub struct UserEditor {
    pub first_name: String,
    pub last_name: String,
    pub age: String,
    pub phone_number: String,
    pub country: Option<Country>,
    pub focus: Option<EditorField>,
    pub error: Option<EditorError>,
    baseline: Option<UserRecord>,
}

impl UserEditor {
    pub fn add() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            age: String::new(),
            phone_number: String::new(),
            country: None,
            focus: Some(EditorField::FirstName),
            error: None,
            baseline: None,
        }
    }

    pub fn edit(record: &UserRecord) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            age: record.age.to_string(),
            phone_number: record.phone_number.clone(),
            country: Some(record.country),
            focus: Some(EditorField::FirstName),
            error: None,
            baseline: Some(record.clone()),
        }
    }

    pub fn title(&self) -> &'static str {
        if self.baseline.is_some() {
            "Edit User"
        } else {
            "Add User"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.baseline.is_some() {
            "Update"
        } else {
            "Add"
        }
    }

    /// Drops anything a number input would refuse.
    pub fn sanitize_age_draft(&mut self) {
        self.age.retain(|c| c.is_ascii_digit());
    }

    /// Validates the drafts and builds the matching backend command. On the
    /// first failing field the requirement message is recorded, focus moves
    /// there, and no command is produced.
    pub fn save_command(&mut self) -> Option<BackendCommand> {
        let first_name = self.first_name.trim().to_string();
        if first_name.is_empty() {
            self.fail(EditorField::FirstName, "Please enter first name");
            return None;
        }
        let last_name = self.last_name.trim().to_string();
        if last_name.is_empty() {
            self.fail(EditorField::LastName, "Please enter last name");
            return None;
        }
        let age: u32 = match self.age.trim().parse() {
            Ok(age) => age,
            Err(_) => {
                self.fail(EditorField::Age, "Please enter age");
                return None;
            }
        };
        let phone_number = self.phone_number.trim().to_string();
        if phone_number.is_empty() {
            self.fail(EditorField::PhoneNumber, "Please enter phone number");
            return None;
        }
        let Some(country) = self.country else {
            self.fail(EditorField::Country, "Please enter country");
            return None;
        };

        self.error = None;
        match &self.baseline {
            None => Some(BackendCommand::CreateUser {
                draft: UserDraft {
                    first_name,
                    last_name,
                    age,
                    phone_number,
                    country,
                },
            }),
            Some(baseline) => {
                let mut changes = UserUpdate::default();
                if first_name != baseline.first_name {
                    changes.first_name = Some(first_name);
                }
                if last_name != baseline.last_name {
                    changes.last_name = Some(last_name);
                }
                if age != baseline.age {
                    changes.age = Some(age);
                }
                if phone_number != baseline.phone_number {
                    changes.phone_number = Some(phone_number);
                }
                if country != baseline.country {
                    changes.country = Some(country);
                }
                Some(BackendCommand::UpdateUser {
                    user_id: baseline.id,
                    changes,
                })
            }
        }
    }

    fn fail(&mut self, field: EditorField, message: &'static str) {
        self.focus = Some(field);
        self.error = Some(EditorError { field, message });
    }
}
