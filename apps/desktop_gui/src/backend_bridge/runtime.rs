//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::DirectoryClient;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Spawns the backend worker thread. Commands are processed strictly in
/// order, one remote call at a time; the matching event is sent only when
/// the call succeeds. Failed calls are logged and produce no event.
pub fn launch(api_base_url: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::BackendStartupFailed(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let client = DirectoryClient::new(api_base_url);
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::ListUsers => {
                        tracing::info!("backend: list_users");
                        match client.list_users().await {
                            Ok(users) => {
                                let _ = ui_tx.try_send(UiEvent::RosterLoaded(users));
                            }
                            Err(err) => {
                                tracing::error!("backend: list_users failed: {err}");
                            }
                        }
                    }
                    BackendCommand::CreateUser { draft } => {
                        tracing::info!("backend: create_user");
                        match client.create_user(&draft).await {
                            Ok(created) => {
                                let _ = ui_tx.try_send(UiEvent::UserCreated(created));
                            }
                            Err(err) => {
                                tracing::error!("backend: create_user failed: {err}");
                            }
                        }
                    }
                    BackendCommand::UpdateUser { user_id, changes } => {
                        tracing::info!(user_id = user_id.0, "backend: update_user");
                        match client.update_user(user_id, &changes).await {
                            Ok(()) => {
                                let _ = ui_tx.try_send(UiEvent::UserUpdated { user_id, changes });
                            }
                            Err(err) => {
                                tracing::error!(
                                    user_id = user_id.0,
                                    "backend: update_user failed: {err}"
                                );
                            }
                        }
                    }
                    BackendCommand::DeleteUser { user_id } => {
                        tracing::info!(user_id = user_id.0, "backend: delete_user");
                        match client.delete_user(user_id).await {
                            Ok(()) => {
                                let _ = ui_tx.try_send(UiEvent::UserDeleted(user_id));
                            }
                            Err(err) => {
                                tracing::error!(
                                    user_id = user_id.0,
                                    "backend: delete_user failed: {err}"
                                );
                            }
                        }
                    }
                }
            }
        });
    });
}
