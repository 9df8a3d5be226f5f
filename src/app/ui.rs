use chrono::{Datelike, Local};
use eframe::egui::{self, Align, Color32, RichText};
use rfd::FileDialog;

use super::{Screen, TaskForgeApp};
use crate::export::{download_dir, export_to, exportable_tasks, task_row, HEADERS};
use crate::tasks::{DisplayResult, TaskStatus};
use crate::upload::{FileDescriptor, ACCEPTED_EXTENSIONS, MAX_FILES, MAX_FILE_SIZE_MB};
use crate::utils::color::ColorExt;
use crate::utils::file_size::format_size;

impl TaskForgeApp {
    pub(crate) fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let total_height = ui.available_height();
            let footer_height = 40.0;
            let content_height = total_height - footer_height;

            egui::ScrollArea::vertical()
                .max_height(content_height)
                .show(ui, |ui| {
                    if matches!(self.screen, Screen::Upload) {
                        self.render_upload(ui);
                    } else {
                        self.render_board(ui);
                    }
                    ui.add_space(20.0);
                });

            ui.with_layout(egui::Layout::bottom_up(Align::Center), |ui| {
                ui.add_space(10.0);
                render_footer(ui);
            });
        });
    }

    fn render_upload(&mut self, ui: &mut egui::Ui) {
        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            ui.heading("TaskForge");
            ui.add_space(5.0);
            ui.label(
                RichText::new("Turn meeting transcripts into an actionable task board")
                    .color(ui.visuals().text_color().gamma_multiply(0.7)),
            );
        });

        ui.add_space(20.0);

        ui.group(|ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.label(format!(
                    "Drag & Drop or Browse .vtt, .srt, .txt, .pdf, .docx files \
                     (Max {}MB each, {} files max)",
                    MAX_FILE_SIZE_MB, MAX_FILES
                ));
                ui.add_space(8.0);

                if ui.ctx().input(|input| !input.raw.hovered_files.is_empty()) {
                    ui.colored_label(
                        Color32::from_hex("#1e90ff").unwrap_or(Color32::LIGHT_BLUE),
                        "Drop files to select them",
                    );
                    ui.add_space(8.0);
                }

                if ui.button("📁 Browse Files").clicked() {
                    if let Some(paths) = FileDialog::new()
                        .add_filter("Transcripts", &ACCEPTED_EXTENSIONS)
                        .pick_files()
                    {
                        let files = paths
                            .iter()
                            .filter_map(|path| FileDescriptor::from_path(path).ok())
                            .collect();
                        self.session.select_files(files);
                    }
                }
                ui.add_space(10.0);
            });
        });

        if !self.session.selection().is_empty() {
            ui.add_space(10.0);
            ui.group(|ui| {
                ui.label(
                    RichText::new(format!(
                        "Selected files ({}):",
                        self.session.selection().len()
                    ))
                    .strong(),
                );
                for file in self.session.selection() {
                    ui.label(format!("{} ({})", file.name, format_size(file.size_bytes)));
                }
            });
        }

        if let Some(error) = self.session.error_text() {
            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                ui.colored_label(error_color(), error);
            });
        }

        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            let label = if self.session.is_processing() {
                format!("Processing... {}%", self.session.progress())
            } else {
                format!("Process {} File(s)", self.session.selection().len())
            };

            ui.add_enabled_ui(self.session.can_submit(), |ui| {
                let button = egui::Button::new(label).min_size(egui::vec2(200.0, 40.0));
                if ui.add(button).clicked() {
                    self.session.submit();
                }
            });
        });

        if self.session.is_processing() {
            ui.add_space(10.0);
            let progress = self.session.progress();
            let bar = egui::ProgressBar::new(progress as f32 / 100.0)
                .show_percentage()
                .fill(progress_color(progress));
            ui.add(bar);
        }
    }

    fn render_board(&mut self, ui: &mut egui::Ui) {
        let mut reset = false;

        if let Screen::Board {
            shaped,
            export_notice,
            exported_path,
        } = &mut self.screen
        {
            ui.add_space(20.0);
            ui.horizontal(|ui| {
                ui.heading("TaskForge");
                ui.label(
                    RichText::new("Task Board")
                        .color(ui.visuals().text_color().gamma_multiply(0.7)),
                );

                ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                    if ui.button("Process New File").clicked() {
                        reset = true;
                    }
                    ui.add_enabled_ui(exportable_tasks(shaped).is_ok(), |ui| {
                        if ui.button("Download .xlsx").clicked() {
                            match export_to(&download_dir(), shaped) {
                                Ok(path) => {
                                    *export_notice =
                                        Some(format!("Saved to {}", path.display()));
                                    *exported_path = Some(path);
                                }
                                Err(err) => *export_notice = Some(err.to_string()),
                            }
                        }
                    });
                });
            });
            ui.add_space(10.0);

            if let Some(notice) = export_notice.clone() {
                ui.horizontal(|ui| {
                    ui.label(notice);
                    if let Some(path) = exported_path.clone() {
                        if ui.button("Open").clicked() {
                            if let Err(err) = open::that(&path) {
                                tracing::warn!(
                                    "could not open {}: {err}",
                                    path.display()
                                );
                            }
                        }
                    }
                });
                ui.add_space(10.0);
            }

            match shaped {
                DisplayResult::Empty => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(40.0);
                        ui.label("No tasks were extracted from the transcript.");
                        ui.add_space(10.0);
                        if ui.button("Process Another File").clicked() {
                            reset = true;
                        }
                    });
                }
                DisplayResult::ExtractionFailed(task) => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(40.0);
                        ui.colored_label(
                            error_color(),
                            format!("Error: {} - {}", task.item, task.description),
                        );
                        ui.add_space(10.0);
                        if ui.button("Process Another File").clicked() {
                            reset = true;
                        }
                    });
                }
                DisplayResult::Tasks(tasks) => {
                    egui::ScrollArea::both().show(ui, |ui| {
                        egui::Grid::new("task_table")
                            .striped(true)
                            .min_col_width(60.0)
                            .show(ui, |ui| {
                                for header in HEADERS {
                                    ui.label(RichText::new(header).strong());
                                }
                                ui.end_row();

                                for task in tasks.iter() {
                                    let row = task_row(task);
                                    ui.label(&row[0]);
                                    ui.label(&row[1]);
                                    ui.label(&row[2]);
                                    ui.colored_label(status_color(task.status), &row[3]);
                                    ui.label(&row[4]);
                                    ui.label(&row[5]);
                                    ui.label(&row[6]);
                                    ui.end_row();
                                }
                            });
                    });
                }
            }
        }

        if reset {
            self.process_another();
        }
    }
}

fn render_footer(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(format!("© {} TaskForge", Local::now().year()))
                .color(ui.visuals().text_color().gamma_multiply(0.5)),
        );
    });
}

fn status_color(status: TaskStatus) -> Color32 {
    let hex = match status {
        TaskStatus::Done => "#2e8b57",
        TaskStatus::WorkingOnIt => "#1e90ff",
        TaskStatus::WaitingForReview => "#ffa500",
        TaskStatus::Stuck | TaskStatus::Error => "#dc3232",
        TaskStatus::Info => "#969696",
    };
    Color32::from_hex(hex).unwrap_or(Color32::GRAY)
}

fn progress_color(progress: u8) -> Color32 {
    let hex = if progress < 34 {
        "#ff6347"
    } else if progress < 67 {
        "#ffa500"
    } else if progress < 91 {
        "#90ee90"
    } else {
        "#2e8b57"
    };
    Color32::from_hex(hex).unwrap_or(Color32::GRAY)
}

fn error_color() -> Color32 {
    Color32::from_hex("#dc3232").unwrap_or(Color32::RED)
}
