//! # Application Controller
//!
//! Runs the input loop: reads a line, parses it into a [`Command`], applies it
//! to the panels and renders the affected panel.

use crate::repl::{
    command::{Command, ResetTarget},
    io::{LineSource, StdinLineSource},
    models::ErrorClearPolicy,
    services::HttpService,
    view_models::Panels,
    views::ViewRenderer,
};
use crate::{cmd_args::CommandLineArgs, config};
use anyhow::Result;
use std::io::{self, Stdout, Write};
use std::path::PathBuf;

/// The main application controller
pub struct AppController<L: LineSource, W: Write> {
    panels: Panels,
    renderer: ViewRenderer<W>,
    line_source: L,
    should_quit: bool,
}

impl AppController<StdinLineSource, Stdout> {
    /// Create the controller for an interactive session on stdin/stdout
    pub fn new(cmd_args: &CommandLineArgs) -> Result<Self> {
        let profile_path = config::get_profile_path();
        let server = config::resolve_server(cmd_args, &profile_path)?;
        tracing::info!("Using analysis server {}", server);

        let service = HttpService::new(server)?;
        Ok(Self::with_io(
            service,
            ErrorClearPolicy::default(),
            StdinLineSource::new(),
            io::stdout(),
        ))
    }
}

impl<L: LineSource, W: Write> AppController<L, W> {
    /// Create a controller with injected I/O (dependency injection)
    pub fn with_io(
        service: HttpService,
        policy: ErrorClearPolicy,
        line_source: L,
        output: W,
    ) -> Self {
        Self {
            panels: Panels::new(service, policy),
            renderer: ViewRenderer::new(output),
            line_source,
            should_quit: false,
        }
    }

    pub fn panels(&self) -> &Panels {
        &self.panels
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Consume the controller, returning its output sink
    pub fn into_output(self) -> W {
        self.renderer.into_inner()
    }

    /// Run the main loop until `quit` or end of input
    pub async fn run(&mut self) -> Result<()> {
        let interactive = self.line_source.is_interactive();
        if interactive {
            self.renderer.render_panels(&self.panels)?;
        }

        while !self.should_quit {
            if interactive {
                self.renderer.render_prompt()?;
            }

            let Some(line) = self.line_source.read_line().await? else {
                tracing::debug!("End of input");
                break;
            };

            match line.parse::<Command>() {
                Ok(command) => self.handle_command(command).await?,
                Err(e) => self.renderer.render_message(&e.to_string())?,
            }
        }

        Ok(())
    }

    /// Apply one command to the panels and render the result
    pub async fn handle_command(&mut self, command: Command) -> Result<()> {
        tracing::debug!("Handling command: {:?}", command);

        match command {
            Command::Set { field, value } => self.set_field(&field, &value)?,
            Command::Calculate => self.calculate().await?,
            Command::Check => self.check().await?,
            Command::Upload(path) => self.upload(path).await?,
            Command::Reset(target) => self.reset(target)?,
            Command::Show => self.renderer.render_panels(&self.panels)?,
            Command::Help => self.renderer.render_help()?,
            Command::Quit => self.should_quit = true,
            Command::Empty => {}
        }

        Ok(())
    }

    fn set_field(&mut self, field: &str, value: &str) -> Result<()> {
        if let Err(e) = self.panels.handle_input(field, value) {
            return self.renderer.render_message(&e.to_string());
        }

        let name = crate::repl::view_models::canonical_field_name(field);
        if self.panels.efficiency.form().contains(&name) {
            self.renderer.render_efficiency(&self.panels.efficiency)
        } else {
            self.renderer.render_stability(&self.panels.stability)
        }
    }

    async fn calculate(&mut self) -> Result<()> {
        if !self.panels.efficiency.can_submit() {
            return self
                .renderer
                .render_message("calc is disabled until substrate concentration and cost are set");
        }
        if self.panels.efficiency.form().has_errors() {
            self.renderer
                .render_message("Warning: submitting with invalid fields")?;
        }

        self.panels.efficiency.submit().await;
        self.renderer.render_efficiency(&self.panels.efficiency)
    }

    async fn check(&mut self) -> Result<()> {
        if !self.panels.stability.can_submit() {
            return self
                .renderer
                .render_message("check is disabled until temperature and pH are set");
        }
        if self.panels.stability.form().has_errors() {
            self.renderer
                .render_message("Warning: submitting with invalid fields")?;
        }

        self.panels.stability.submit().await;
        self.renderer.render_stability(&self.panels.stability)
    }

    async fn upload(&mut self, path: PathBuf) -> Result<()> {
        self.panels.batch.select_file(path);
        self.panels.batch.submit().await;
        self.renderer.render_batch(&self.panels.batch)
    }

    fn reset(&mut self, target: ResetTarget) -> Result<()> {
        match target {
            ResetTarget::Efficiency => {
                if !self.panels.efficiency.can_submit() {
                    return self.renderer.render_message(
                        "reset is disabled until substrate concentration and cost are set",
                    );
                }
                self.panels.efficiency.reset();
                self.renderer.render_efficiency(&self.panels.efficiency)
            }
            ResetTarget::Stability => {
                if !self.panels.stability.can_submit() {
                    return self
                        .renderer
                        .render_message("reset is disabled until temperature and pH are set");
                }
                self.panels.stability.reset();
                self.renderer.render_stability(&self.panels.stability)
            }
            ResetTarget::Batch => {
                if !self.panels.batch.can_submit() {
                    return self
                        .renderer
                        .render_message("reset is disabled until a batch file is selected");
                }
                self.panels.batch.reset();
                self.renderer.render_batch(&self.panels.batch)
            }
            ResetTarget::All => {
                self.panels.reset_all();
                self.renderer.render_panels(&self.panels)
            }
        }
    }
}
