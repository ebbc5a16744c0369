//! Theme source message handlers (load, save, scan, upload, path)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::{Session, StatusTone};

/// Handle app messages
pub fn update_app(session: &mut Session, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Load => {
            let request = session.requests.begin_load();
            session.ui.is_loading = true;
            session.set_status("Loading...", StatusTone::Neutral);
            Some(Cmd::LoadTheme { request })
        }

        AppMsg::LoadCompleted { request, result } => {
            if !session.requests.finish_load(request) {
                tracing::debug!("Dropping superseded load {:?}", request);
                return None;
            }
            session.ui.is_loading = false;
            match result {
                Ok(doc) => {
                    session.load(doc);
                    session.set_status("Loaded", StatusTone::Ok);
                    if session.ui.upload_pending {
                        return Some(Cmd::batch(vec![Cmd::Redraw, Cmd::ScanThemes]));
                    }
                }
                Err(e) => {
                    tracing::warn!("Load failed: {}", e);
                    session.ui.upload_pending = false;
                    session.set_status(format!("Failed to load theme: {}", e), StatusTone::Error);
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::Save => {
            let Some(doc) = session.read_values() else {
                session.set_status("No theme loaded", StatusTone::Error);
                return Some(Cmd::Redraw);
            };
            session.ui.is_saving = true;
            session.set_status("Saving...", StatusTone::Neutral);
            Some(Cmd::SaveTheme { doc })
        }

        AppMsg::SaveCompleted(result) => {
            session.ui.is_saving = false;
            match result {
                Ok(()) => {
                    session.commit();
                    session.set_status("Saved", StatusTone::Ok);
                }
                Err(e) => {
                    tracing::error!("Save failed: {}", e);
                    session.set_status(format!("Save failed: {}", e), StatusTone::Error);
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::Scan => {
            session.set_status("Scanning...", StatusTone::Neutral);
            Some(Cmd::ScanThemes)
        }

        AppMsg::ScanCompleted(result) => {
            match result {
                Ok(paths) => {
                    session.set_status(format!("Found {} themes", paths.len()), StatusTone::Ok);
                    session.ui.candidates.paths = paths;
                    if std::mem::take(&mut session.ui.upload_pending) {
                        session.set_status("Uploaded", StatusTone::Ok);
                    }
                }
                Err(e) => {
                    tracing::warn!("Scan failed: {}", e);
                    session.ui.upload_pending = false;
                    session.set_status(format!("Scan failed: {}", e), StatusTone::Error);
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::Upload(source) => {
            session.set_status("Uploading...", StatusTone::Neutral);
            Some(Cmd::UploadTheme { source })
        }

        AppMsg::UploadCompleted(result) => match result {
            // Switch, reload, rescan; "Uploaded" is reported once the rescan lands
            Ok(path) => {
                tracing::info!("Uploaded theme to {}", path);
                session.ui.upload_pending = true;
                Some(Cmd::SetPath { path })
            }
            Err(e) => {
                session.set_status(format!("Upload failed: {}", e), StatusTone::Error);
                Some(Cmd::Redraw)
            }
        },

        AppMsg::FetchPath => Some(Cmd::FetchPath),

        AppMsg::PathFetched(path) => {
            session.ui.active_path = path;
            Some(Cmd::Redraw)
        }

        AppMsg::SetPath(path) => {
            let path = path.trim();
            if path.is_empty() {
                return None;
            }
            session.set_status("Switching path...", StatusTone::Neutral);
            Some(Cmd::SetPath {
                path: path.to_string(),
            })
        }

        AppMsg::PathSet(result) => match result {
            Ok(path) => {
                tracing::info!("Active theme path is now {}", path);
                session.ui.active_path = path;
                update_app(session, AppMsg::Load)
            }
            Err(e) => {
                session.ui.upload_pending = false;
                session.set_status(format!("Path error: {}", e), StatusTone::Error);
                Some(Cmd::Redraw)
            }
        },

        AppMsg::OpenCandidate(index) => {
            let path = session
                .ui
                .candidates
                .filtered()
                .get(index)
                .map(|p| p.to_string())?;
            update_app(session, AppMsg::SetPath(path))
        }

        AppMsg::Quit => Some(Cmd::Quit),
    }
}
