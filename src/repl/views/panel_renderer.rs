//! # Panel Renderer
//!
//! Writes the current state of each panel: a global error banner, every field
//! with its inline message, the enabled state of the panel's actions and,
//! once a call has settled successfully, the result.

use crate::repl::command::HELP_TEXT;
use crate::repl::models::{Form, RemoteCallState};
use crate::repl::view_models::{BatchPanel, EfficiencyPanel, Panels, StabilityPanel};
use anyhow::Result;
use std::io::Write;

pub const PROMPT: &str = "bioline> ";

/// Text renderer over any writer
pub struct ViewRenderer<W: Write> {
    writer: W,
}

impl<W: Write> ViewRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn render_prompt(&mut self) -> Result<()> {
        write!(self.writer, "{PROMPT}")?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn render_message(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "{message}")?;
        Ok(())
    }

    pub fn render_help(&mut self) -> Result<()> {
        self.render_message(HELP_TEXT)
    }

    pub fn render_panels(&mut self, panels: &Panels) -> Result<()> {
        self.render_efficiency(&panels.efficiency)?;
        self.render_stability(&panels.stability)?;
        self.render_batch(&panels.batch)
    }

    pub fn render_efficiency(&mut self, panel: &EfficiencyPanel) -> Result<()> {
        let state = panel.call().state();
        self.render_header(EfficiencyPanel::TITLE, &state)?;
        self.render_form(panel.form())?;
        self.render_actions(&["calc", "reset"], panel.can_submit())?;

        if let (Some(data), false) = (&state.data, state.loading) {
            writeln!(self.writer, "  Results")?;
            writeln!(self.writer, "    Velocity: {}", data.velocity)?;
            writeln!(self.writer, "    Efficiency: {}", data.efficiency)?;
        }
        Ok(())
    }

    pub fn render_stability(&mut self, panel: &StabilityPanel) -> Result<()> {
        let state = panel.call().state();
        self.render_header(StabilityPanel::TITLE, &state)?;
        self.render_form(panel.form())?;
        self.render_actions(&["check", "reset"], panel.can_submit())?;

        if let (Some(data), false) = (&state.data, state.loading) {
            writeln!(self.writer, "  Result: {}", data.result)?;
        }
        Ok(())
    }

    pub fn render_batch(&mut self, panel: &BatchPanel) -> Result<()> {
        let state = panel.call().state();
        self.render_header(BatchPanel::TITLE, &state)?;
        match panel.file() {
            Some(path) => writeln!(self.writer, "  File: {}", path.display())?,
            None => writeln!(self.writer, "  File: (none)")?,
        }

        if let (Some(data), false) = (&state.data, state.loading) {
            writeln!(self.writer, "  Results ({} rows)", data.results.len())?;
            writeln!(self.writer, "    {:>12} {:>12} {:>12}", "s", "c", "eff")?;
            for row in &data.results {
                writeln!(self.writer, "    {:>12} {:>12} {:>12}", row.s, row.c, row.eff)?;
            }
        }
        Ok(())
    }

    fn render_header<T>(&mut self, title: &str, state: &RemoteCallState<T>) -> Result<()> {
        writeln!(self.writer, "== {title} ==")?;
        if let Some(error) = &state.error {
            writeln!(self.writer, "Error: {error}")?;
        }
        if state.loading {
            writeln!(self.writer, "  Loading...")?;
        }
        Ok(())
    }

    fn render_form(&mut self, form: &Form) -> Result<()> {
        for (spec, state) in form.fields() {
            writeln!(self.writer, "  {}: {}", spec.label, state.value)?;
            if state.has_error() {
                writeln!(self.writer, "    ! {}", state.error_message)?;
            }
        }
        Ok(())
    }

    fn render_actions(&mut self, actions: &[&str], enabled: bool) -> Result<()> {
        let status = if enabled { "" } else { " (disabled)" };
        writeln!(self.writer, "  [{}]{status}", actions.join("] ["))?;
        Ok(())
    }
}
