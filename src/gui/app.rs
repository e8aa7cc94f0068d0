// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::options::{AppOptions, Source},
    data::TeamPage,
    progress::Progress,
    runner, web,
};

use super::{preview, progress::GuiProgress};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Team Sheet",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppOptions::default())))),
    )?;
    Ok(())
}

pub struct App {
    pub options: AppOptions,

    // text fields (mapped into options on action)
    pub url_text: String,
    pub out_path_text: String,

    // last successful scrape
    pub team: Option<TeamPage>,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(options: AppOptions) -> Self {
        let out_path_text = options.out_path.to_string_lossy().into_owned();
        Self {
            options,
            url_text: s!(),
            out_path_text,
            team: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
        }
    }

    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Scrape the page in the URL field into `self.team`.
    pub fn fetch(&mut self) {
        let url = match web::clean_url(&self.url_text) {
            Ok(url) => url,
            Err(msg) => {
                self.status(msg);
                return;
            }
        };
        let source = Source::Url(url);
        logf!("UI: Fetch {}", source.describe());

        match runner::load(&source) {
            Ok(team) => {
                self.status(format!(
                    "Found {} game(s), {} MMP, {} FMP",
                    team.schedule.len(),
                    team.mmp.len(),
                    team.fmp.len()
                ));
                self.options.source = Some(source);
                self.team = Some(team);
            }
            Err(e) => {
                loge!("UI: Fetch failed: {}", e);
                self.status(format!("Error: {e}"));
            }
        }
    }

    /// Write the workbook for the previewed page.
    pub fn save(&mut self) {
        let Some(team) = &self.team else { return };
        self.options.set_out_path(&self.out_path_text);

        let mut prog = GuiProgress::new(self.status.clone());
        match runner::save(team, &self.options.out_path) {
            Ok((path, bytes)) => {
                prog.log(&format!("Wrote {} ({} bytes)", path.display(), bytes));
                self.out_path_text = path.to_string_lossy().into_owned();
            }
            Err(e) => {
                loge!("UI: Save failed: {}", e);
                prog.log(&format!("Error: {e}"));
            }
        }
        prog.finish();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("source").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label("Team page URL:");
                let edit = ui.add(egui::TextEdit::singleline(&mut self.url_text).desired_width(480.0));
                let enter = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Fetch").clicked() || enter {
                    self.fetch();
                }
            });
            ui.horizontal(|ui| {
                ui.label("Save to:");
                ui.add(egui::TextEdit::singleline(&mut self.out_path_text).desired_width(480.0));
                if ui.add_enabled(self.team.is_some(), egui::Button::new("Save workbook")).clicked() {
                    self.save();
                }
            });
            ui.label(self.status_text());
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| match &self.team {
            Some(team) => preview::draw(ui, team),
            None => {
                ui.weak("Nothing fetched yet.");
            }
        });
    }
}
