use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use anyhow::Result;

use theme_tweaker::commands::Cmd;
use theme_tweaker::input::{parse_line, Input, InputQueue, HELP};
use theme_tweaker::messages::{AppMsg, Msg};
use theme_tweaker::model::{Session, StatusTone};
use theme_tweaker::provider::{ActivePath, ProviderError, ThemeSource};
use theme_tweaker::storage::KeyValueStore;
use theme_tweaker::update::update;
use theme_tweaker::view::{render, ViewOptions};

/// Everything the event loop receives
enum Event {
    /// Typed at the prompt
    Input(Msg),
    /// Completion from a worker thread
    Msg(Msg),
    Help,
}

pub struct App<S> {
    session: Session,
    source: Arc<S>,
    store: Box<dyn KeyValueStore>,
    view: ViewOptions,
    input: InputQueue,
    msg_tx: Sender<Event>,
    msg_rx: Receiver<Event>,
}

impl<S> App<S>
where
    S: ThemeSource + ActivePath + 'static,
{
    pub fn new(
        session: Session,
        source: Arc<S>,
        store: Box<dyn KeyValueStore>,
        view: ViewOptions,
    ) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            session,
            source,
            store,
            view,
            input: InputQueue::new(),
            msg_tx,
            msg_rx,
        }
    }

    /// Run until `quit` or end of input
    pub fn run(mut self) -> Result<()> {
        self.spawn_reader();

        for msg in [
            Msg::App(AppMsg::FetchPath),
            Msg::App(AppMsg::Load),
            Msg::App(AppMsg::Scan),
        ] {
            if self.dispatch(msg) {
                return Ok(());
            }
        }
        self.render()?;

        'events: while let Ok(event) = self.msg_rx.recv() {
            match event {
                Event::Help => {
                    println!("{}", HELP);
                    prompt()?;
                }
                Event::Input(msg) => {
                    let Some(msg) = self.input.accept(&self.session, msg) else {
                        continue;
                    };
                    if self.handle(msg)? {
                        break;
                    }
                }
                Event::Msg(msg) => {
                    if self.handle(msg)? {
                        break;
                    }
                    while let Some(msg) = self.input.release(&self.session) {
                        if self.handle(msg)? {
                            break 'events;
                        }
                    }
                }
            }
        }

        if !self.input.is_empty() {
            tracing::warn!("Dropping {} unprocessed input lines", self.input.len());
        }
        tracing::info!("Exiting");
        Ok(())
    }

    /// Update, run the command and redraw if asked; true means quit
    fn handle(&mut self, msg: Msg) -> Result<bool> {
        let Some(cmd) = update(&mut self.session, msg) else {
            return Ok(false);
        };
        let redraw = cmd.needs_redraw();
        if self.process_cmd(cmd) {
            return Ok(true);
        }
        if redraw {
            self.render()?;
        }
        Ok(false)
    }

    /// Update and run the resulting command; true means quit
    fn dispatch(&mut self, msg: Msg) -> bool {
        match update(&mut self.session, msg) {
            Some(cmd) => self.process_cmd(cmd),
            None => false,
        }
    }

    fn render(&self) -> Result<()> {
        print!("\n{}", render(&self.session, self.view));
        prompt()
    }

    /// Turn stdin lines into events; end of input quits
    fn spawn_reader(&self) {
        let tx = self.msg_tx.clone();
        std::thread::spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let event = match line {
                    Ok(line) => match parse_line(&line) {
                        Ok(Input::Msg(msg)) => Event::Input(msg),
                        Ok(Input::Help) => Event::Help,
                        Ok(Input::Blank) => continue,
                        Err(e) => Event::Input(Msg::status(e, StatusTone::Error)),
                    },
                    Err(e) => {
                        tracing::error!("Failed to read input: {}", e);
                        break;
                    }
                };
                if tx.send(event).is_err() {
                    return;
                }
            }
            let _ = tx.send(Event::Input(Msg::App(AppMsg::Quit)));
        });
    }

    /// Execute a command; returns true when the app should exit
    fn process_cmd(&mut self, cmd: Cmd) -> bool {
        match cmd {
            Cmd::None | Cmd::Redraw => {}
            Cmd::LoadTheme { request } => {
                let tx = self.msg_tx.clone();
                let source = Arc::clone(&self.source);
                std::thread::spawn(move || {
                    let result = source.load().map_err(|e| e.to_string());
                    let _ = tx.send(Event::Msg(Msg::App(AppMsg::LoadCompleted {
                        request,
                        result,
                    })));
                });
            }
            Cmd::SaveTheme { doc } => {
                let tx = self.msg_tx.clone();
                let source = Arc::clone(&self.source);
                std::thread::spawn(move || {
                    let result = source.save(&doc).map_err(|e| e.to_string());
                    let _ = tx.send(Event::Msg(Msg::App(AppMsg::SaveCompleted(result))));
                });
            }
            Cmd::ScanThemes => {
                let tx = self.msg_tx.clone();
                let source = Arc::clone(&self.source);
                std::thread::spawn(move || {
                    let result = source.list_candidates().map_err(|e| e.to_string());
                    let _ = tx.send(Event::Msg(Msg::App(AppMsg::ScanCompleted(result))));
                });
            }
            Cmd::UploadTheme { source: file } => {
                let tx = self.msg_tx.clone();
                let source = Arc::clone(&self.source);
                std::thread::spawn(move || {
                    let result = upload_file(source.as_ref(), &file).map_err(|e| e.to_string());
                    let _ = tx.send(Event::Msg(Msg::App(AppMsg::UploadCompleted(result))));
                });
            }
            Cmd::FetchPath => {
                let path = self.source.get();
                let _ = self
                    .msg_tx
                    .send(Event::Msg(Msg::App(AppMsg::PathFetched(path))));
            }
            Cmd::SetPath { path } => {
                let tx = self.msg_tx.clone();
                let source = Arc::clone(&self.source);
                std::thread::spawn(move || {
                    let result = source.set(&path).map_err(|e| e.to_string());
                    let _ = tx.send(Event::Msg(Msg::App(AppMsg::PathSet(result))));
                });
            }
            Cmd::StoreValue { key, value } => {
                if let Err(e) = self.store.set(&key, value) {
                    tracing::error!("Failed to store {}: {}", key, e);
                    let _ = self.msg_tx.send(Event::Msg(Msg::status(
                        format!("Could not save preferences: {}", e),
                        StatusTone::Error,
                    )));
                }
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    if self.process_cmd(cmd) {
                        return true;
                    }
                }
            }
            Cmd::Quit => return true,
        }
        false
    }
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

/// Read a local file and hand it to the source under its own file name
fn upload_file<S: ThemeSource + ?Sized>(source: &S, file: &Path) -> Result<String, ProviderError> {
    let content = std::fs::read_to_string(file).map_err(|e| ProviderError::Read {
        path: file.to_path_buf(),
        source: e,
    })?;
    let name = file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    source.upload(&name, &content)
}
