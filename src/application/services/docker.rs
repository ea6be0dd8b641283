//! Docker / docker-compose execution service
//!
//! Runs a family's template chain until one attempt exits zero, then
//! normalizes the captured output into a [`NormalizedResponse`].
//! Every call blocks for the whole chain; there is no timeout.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::application::ApplicationResult;
use crate::domain::{
    clean_text, parse_output, template_chain, CommandFamily, NormalizedResponse, Payload, Status,
    TemplateTable, COMMAND_TEMPLATES, DEFAULT_DELIMITER,
};
use crate::infrastructure::traits::{CommandOutput, CommandRunner};

/// Container tool wrapper.
pub struct DockerService {
    cmd: Arc<dyn CommandRunner>,
    templates: TemplateTable,
}

impl DockerService {
    /// Create a service using the built-in template table.
    pub fn new(cmd: Arc<dyn CommandRunner>) -> Self {
        Self::with_templates(cmd, COMMAND_TEMPLATES)
    }

    /// Create a service with a custom template table.
    pub fn with_templates(cmd: Arc<dyn CommandRunner>, templates: TemplateTable) -> Self {
        Self { cmd, templates }
    }

    /// `docker <command>`
    pub fn docker(&self, command: &str) -> ApplicationResult<NormalizedResponse> {
        self.execute(CommandFamily::Docker, command)
    }

    /// `docker-compose <command>`
    pub fn docker_compose(&self, command: &str) -> ApplicationResult<NormalizedResponse> {
        self.execute(CommandFamily::DockerCompose, command)
    }

    /// Run `command` for `family` and normalize the result.
    ///
    /// A non-zero exit on the last attempt is a `Failure` response, not an
    /// error. Only a missing template chain is reported as `Err`.
    #[instrument(level = "debug", skip(self))]
    pub fn execute(
        &self,
        family: CommandFamily,
        command: &str,
    ) -> ApplicationResult<NormalizedResponse> {
        let chain = template_chain(self.templates, family)?;
        let label = format!("{} {}", family.program(), command);

        let mut last_err = String::new();
        for template in chain {
            let line = template.render(command, DEFAULT_DELIMITER);
            debug!("attempt {}: {}", template.rank, line);

            let output = self.run_attempt(&line);
            if output.success() {
                let payload = parse_output(template.shape, &output.stdout, DEFAULT_DELIMITER);
                return Ok(NormalizedResponse::new(label, Status::Success, payload));
            }

            debug!(
                "attempt {} exited with {:?}, trying next template",
                template.rank, output.exit_code
            );
            last_err = output.stderr;
        }

        warn!("all attempts failed: {}", label);
        Ok(NormalizedResponse::new(
            label,
            Status::Failure,
            Payload::Freeform(clean_text(&last_err)),
        ))
    }

    /// Spawn failures count as a failed attempt whose error stream is the I/O error.
    fn run_attempt(&self, line: &str) -> CommandOutput {
        self.cmd.run_line(line).unwrap_or_else(|e| {
            debug!("failed to spawn '{}': {}", line, e);
            CommandOutput {
                exit_code: None,
                stdout: String::new(),
                stderr: e.to_string(),
            }
        })
    }

    /// Whether `docker -v` exits zero.
    pub fn is_docker_set(&self) -> bool {
        self.probe(CommandFamily::Docker)
    }

    /// Whether `docker-compose -v` exits zero.
    pub fn is_docker_compose_set(&self) -> bool {
        self.probe(CommandFamily::DockerCompose)
    }

    fn probe(&self, family: CommandFamily) -> bool {
        match self.cmd.run(family.program(), &["-v"]) {
            Ok(output) => output.success(),
            Err(e) => {
                debug!("{} not available: {}", family, e);
                false
            }
        }
    }
}
