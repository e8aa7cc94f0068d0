// src/gui/preview.rs
//
// Read-only view of what was scraped: both rosters, then the schedule grid.

use eframe::egui::{self, Align, Layout};
use egui_extras::{Column, TableBuilder};

use crate::data::{ScheduleColumn, TeamPage};

pub fn draw(ui: &mut egui::Ui, team: &TeamPage) {
    ui.horizontal_top(|ui| {
        roster_list(ui, "MMP", &team.mmp);
        ui.add_space(24.0);
        roster_list(ui, "FMP", &team.fmp);
    });

    ui.separator();
    ui.label(format!("{} game(s)", team.schedule.len()));

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .columns(Column::auto().at_least(70.0), ScheduleColumn::ALL.len())
        .header(20.0, |mut header| {
            for column in ScheduleColumn::ALL {
                header.col(|ui| {
                    ui.strong(column.label());
                });
            }
        })
        .body(|mut body| {
            for game in &team.schedule {
                body.row(18.0, |mut row| {
                    for column in ScheduleColumn::ALL {
                        row.col(|ui| {
                            ui.label(game.get(column));
                        });
                    }
                });
            }
        });
}

fn roster_list(ui: &mut egui::Ui, title: &str, names: &[String]) {
    ui.vertical(|ui| {
        ui.strong(format!("{title} ({})", names.len()));
        if names.is_empty() {
            ui.weak("none");
        }
        for name in names {
            ui.label(name);
        }
    });
}
