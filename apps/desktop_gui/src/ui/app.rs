//! Application shell: roster table, editor drawer, and status line.

use std::mem;

use client_core::roster::{self, RosterAction};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::{domain::Country, protocol::UserRecord};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::editor::{EditorField, UserEditor};
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;

pub struct UserDirectoryApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    roster: Vec<UserRecord>,
    editor: Option<UserEditor>,
    status: String,
}

impl UserDirectoryApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            roster: Vec::new(),
            editor: None,
            status: "Loading users...".to_string(),
        };
        app.request_initial_roster();
        app
    }

    fn request_initial_roster(&mut self) {
        dispatch_backend_command(&self.cmd_tx, BackendCommand::ListUsers, &mut self.status);
    }

    fn apply_roster_action(&mut self, action: RosterAction) {
        self.roster = roster::reduce(mem::take(&mut self.roster), action);
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::BackendStartupFailed(message) => {
                    self.status = message;
                }
                UiEvent::RosterLoaded(users) => {
                    self.status = format!("Loaded {} users", users.len());
                    self.apply_roster_action(RosterAction::Set(users));
                }
                UiEvent::UserCreated(user) => {
                    self.status = format!("Added {} {}", user.first_name, user.last_name);
                    self.apply_roster_action(RosterAction::Add(user));
                    self.editor = None;
                }
                UiEvent::UserUpdated { user_id, changes } => {
                    self.status = "User updated".to_string();
                    self.apply_roster_action(RosterAction::Edit {
                        id: user_id,
                        updates: changes,
                    });
                    self.editor = None;
                }
                UiEvent::UserDeleted(user_id) => {
                    self.status = "User deleted".to_string();
                    self.apply_roster_action(RosterAction::Delete { id: user_id });
                }
            }
        }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("User Management");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Add User").clicked() {
                        self.editor = Some(UserEditor::add());
                    }
                });
            });
            ui.add_space(6.0);
        });
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.weak(self.status.as_str());
            ui.add_space(4.0);
        });
    }

    fn show_editor_drawer(&mut self, ctx: &egui::Context) {
        let Some(mut editor) = self.editor.take() else {
            return;
        };
        let mut keep_open = true;
        let mut save_requested = false;

        egui::SidePanel::right("user_editor_panel")
            .resizable(false)
            .default_width(400.0)
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .inner_margin(egui::Margin::symmetric(14, 12))
                    .show(ui, |ui| {
                        ui.style_mut().spacing.item_spacing = egui::vec2(10.0, 10.0);

                        ui.horizontal(|ui| {
                            ui.heading(editor.title());
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.button("Close").clicked() {
                                        keep_open = false;
                                    }
                                },
                            );
                        });
                        ui.separator();

                        let focus = editor.focus.take();

                        editor_text_field(
                            ui,
                            "editor_first_name",
                            "First Name",
                            &mut editor.first_name,
                            focus == Some(EditorField::FirstName),
                        );
                        show_field_error(ui, &editor, EditorField::FirstName);

                        editor_text_field(
                            ui,
                            "editor_last_name",
                            "Last Name",
                            &mut editor.last_name,
                            focus == Some(EditorField::LastName),
                        );
                        show_field_error(ui, &editor, EditorField::LastName);

                        let age_response = editor_text_field(
                            ui,
                            "editor_age",
                            "Age",
                            &mut editor.age,
                            focus == Some(EditorField::Age),
                        );
                        if age_response.changed() {
                            editor.sanitize_age_draft();
                        }
                        show_field_error(ui, &editor, EditorField::Age);

                        editor_text_field(
                            ui,
                            "editor_phone_number",
                            "Phone Number",
                            &mut editor.phone_number,
                            focus == Some(EditorField::PhoneNumber),
                        );
                        show_field_error(ui, &editor, EditorField::PhoneNumber);

                        ui.label(egui::RichText::new("Country").strong());
                        let selected_label =
                            editor.country.map(Country::label).unwrap_or("Select country");
                        egui::ComboBox::from_id_salt("editor_country")
                            .width(ui.available_width())
                            .selected_text(selected_label)
                            .show_ui(ui, |ui| {
                                for country in Country::ALL {
                                    ui.selectable_value(
                                        &mut editor.country,
                                        Some(country),
                                        country.label(),
                                    );
                                }
                            });
                        show_field_error(ui, &editor, EditorField::Country);

                        ui.add_space(8.0);
                        let submit =
                            egui::Button::new(egui::RichText::new(editor.submit_label()).strong());
                        if ui.add_sized([ui.available_width(), 34.0], submit).clicked() {
                            save_requested = true;
                        }
                    });
            });

        if save_requested {
            if let Some(cmd) = editor.save_command() {
                dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status);
            }
        }
        if keep_open {
            self.editor = Some(editor);
        }
    }

    fn show_roster_table(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().auto_shrink(false).show(ui, |ui| {
                egui::Grid::new("user_rows")
                    .striped(true)
                    .num_columns(6)
                    .spacing([24.0, 8.0])
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new("First Name").strong());
                        ui.label(egui::RichText::new("Last Name").strong());
                        ui.label(egui::RichText::new("Age").strong());
                        ui.label(egui::RichText::new("Phone Number").strong());
                        ui.label(egui::RichText::new("Country").strong());
                        ui.label(egui::RichText::new("Actions").strong());
                        ui.end_row();

                        for user in &self.roster {
                            ui.label(user.first_name.as_str());
                            ui.label(user.last_name.as_str());
                            ui.label(user.age.to_string());
                            ui.label(user.phone_number.as_str());
                            ui.label(user.country.code());
                            ui.horizontal(|ui| {
                                if ui.button("Edit").clicked() {
                                    self.editor = Some(UserEditor::edit(user));
                                }
                                if ui.button("Delete").clicked() {
                                    dispatch_backend_command(
                                        &self.cmd_tx,
                                        BackendCommand::DeleteUser { user_id: user.id },
                                        &mut self.status,
                                    );
                                }
                            });
                            ui.end_row();
                        }

                        if self.roster.is_empty() {
                            ui.weak("No users yet");
                            ui.end_row();
                        }
                    });
            });
        });
    }
}

impl eframe::App for UserDirectoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        self.show_header(ctx);
        self.show_status_bar(ctx);
        self.show_editor_drawer(ctx);
        self.show_roster_table(ctx);

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

fn editor_text_field(
    ui: &mut egui::Ui,
    id: &'static str,
    label: &str,
    value: &mut String,
    should_focus: bool,
) -> egui::Response {
    ui.label(egui::RichText::new(label).strong());
    let edit = egui::TextEdit::singleline(value)
        .id_salt(id)
        .hint_text(
            egui::RichText::new(label).color(ui.visuals().weak_text_color().gamma_multiply(0.85)),
        )
        .desired_width(f32::INFINITY);

    let response = ui.add_sized([ui.available_width(), 34.0], edit);
    if should_focus {
        response.request_focus();
    }
    response
}

fn show_field_error(ui: &mut egui::Ui, editor: &UserEditor, field: EditorField) {
    if let Some(error) = &editor.error {
        if error.field == field {
            ui.colored_label(ui.visuals().error_fg_color, error.message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use shared::domain::UserId;
    use shared::protocol::UserUpdate;

    fn record(id: i64, first_name: &str) -> UserRecord {
        UserRecord {
            id: UserId(id),
            first_name: first_name.to_string(),
            last_name: "Smith".to_string(),
            age: 30,
            phone_number: "+1-202-555-0147".to_string(),
            country: Country::UnitedStates,
        }
    }

    fn app_with_roster(
        users: Vec<UserRecord>,
    ) -> (UserDirectoryApp, Sender<UiEvent>, Receiver<BackendCommand>) {
        let (cmd_tx, cmd_rx) = bounded(16);
        let (ui_tx, ui_rx) = bounded(16);
        let mut app = UserDirectoryApp::new(cmd_tx, ui_rx);
        app.roster = users;
        (app, ui_tx, cmd_rx)
    }

    #[test]
    fn startup_requests_the_user_list() {
        let (_app, _ui_tx, cmd_rx) = app_with_roster(Vec::new());
        match cmd_rx.try_recv() {
            Ok(BackendCommand::ListUsers) => {}
            _ => panic!("expected an initial list command"),
        }
    }

    #[test]
    fn roster_load_replaces_local_state() {
        let (mut app, ui_tx, _cmd_rx) = app_with_roster(vec![record(9, "Stale")]);
        ui_tx
            .send(UiEvent::RosterLoaded(vec![record(1, "Ada")]))
            .expect("send event");
        app.process_ui_events();
        assert_eq!(app.roster.len(), 1);
        assert_eq!(app.roster[0].id, UserId(1));
    }

    #[test]
    fn created_event_appends_and_closes_the_drawer() {
        let (mut app, ui_tx, _cmd_rx) = app_with_roster(vec![record(1, "Ada")]);
        app.editor = Some(UserEditor::add());
        ui_tx
            .send(UiEvent::UserCreated(record(2, "Mary")))
            .expect("send event");
        app.process_ui_events();
        assert_eq!(app.roster.len(), 2);
        assert_eq!(app.roster[1].first_name, "Mary");
        assert!(app.editor.is_none());
    }

    #[test]
    fn updated_event_replays_the_request_payload() {
        let (mut app, ui_tx, _cmd_rx) = app_with_roster(vec![record(1, "Ada")]);
        let baseline = app.roster[0].clone();
        app.editor = Some(UserEditor::edit(&baseline));
        ui_tx
            .send(UiEvent::UserUpdated {
                user_id: UserId(1),
                changes: UserUpdate {
                    first_name: Some("Adeline".to_string()),
                    ..Default::default()
                },
            })
            .expect("send event");
        app.process_ui_events();
        assert_eq!(app.roster[0].first_name, "Adeline");
        assert_eq!(app.roster[0].last_name, "Smith");
        assert!(app.editor.is_none());
    }

    #[test]
    fn deleted_event_removes_the_record() {
        let (mut app, ui_tx, _cmd_rx) = app_with_roster(vec![record(1, "Ada"), record(2, "Grace")]);
        ui_tx.send(UiEvent::UserDeleted(UserId(1))).expect("send event");
        app.process_ui_events();
        assert_eq!(app.roster.len(), 1);
        assert_eq!(app.roster[0].id, UserId(2));
    }

    #[test]
    fn startup_failure_reaches_the_status_line() {
        let (mut app, ui_tx, _cmd_rx) = app_with_roster(Vec::new());
        ui_tx
            .send(UiEvent::BackendStartupFailed(
                "backend worker startup failure: failed to build runtime: no threads".to_string(),
            ))
            .expect("send event");
        app.process_ui_events();
        assert!(app.status.contains("startup failure"));
    }
}
