//! Command template table and rendering
//!
//! Each family owns an ordered fallback chain. The table is closed and
//! known at build time.

use crate::domain::{CommandFamily, CommandTemplate, DomainError, ResponseShape};

/// Separator appended to structured commands and used to split their output.
pub const DEFAULT_DELIMITER: &str = "NL_CMD";

/// Fragments this short (or shorter) are noise between records, not records.
pub const MIN_FRAGMENT_LEN: usize = 3;

/// Template chains keyed by family.
pub type TemplateTable = &'static [(CommandFamily, &'static [CommandTemplate])];

const DOCKER_CHAIN: &[CommandTemplate] = &[
    CommandTemplate {
        rank: 1,
        shape: ResponseShape::Structured,
        format: r#"docker $command --format="{{json .}}"$delimiter"#,
    },
    CommandTemplate {
        rank: 2,
        shape: ResponseShape::Freeform,
        format: "docker $command",
    },
];

const DOCKER_COMPOSE_CHAIN: &[CommandTemplate] = &[CommandTemplate {
    rank: 1,
    shape: ResponseShape::Freeform,
    format: "docker-compose $command",
}];

/// The built-in table.
pub const COMMAND_TEMPLATES: TemplateTable = &[
    (CommandFamily::Docker, DOCKER_CHAIN),
    (CommandFamily::DockerCompose, DOCKER_COMPOSE_CHAIN),
];

/// Look up the chain for `family`, ordered by rank.
///
/// A missing or empty chain is a configuration error.
pub fn template_chain(
    table: TemplateTable,
    family: CommandFamily,
) -> Result<&'static [CommandTemplate], DomainError> {
    table
        .iter()
        .find(|(f, _)| *f == family)
        .map(|(_, chain)| *chain)
        .filter(|chain| !chain.is_empty())
        .ok_or(DomainError::MissingTemplates(family))
}

impl CommandTemplate {
    /// Substitute the delimiter and the user fragment into the format string.
    ///
    /// The delimiter slot is filled first so that a user fragment is never
    /// itself scanned for slots.
    pub fn render(&self, command: &str, delimiter: &str) -> String {
        self.format
            .replace("$delimiter", delimiter)
            .replace("$command", command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_docker_family_when_lookup_then_structured_first() {
        let chain = template_chain(COMMAND_TEMPLATES, CommandFamily::Docker).unwrap();

        assert_eq!(chain.len(), 2);
        assert_eq!(chain[0].rank, 1);
        assert_eq!(chain[0].shape, ResponseShape::Structured);
        assert_eq!(chain[1].shape, ResponseShape::Freeform);
    }

    #[test]
    fn given_structured_template_when_render_then_appends_format_and_delimiter() {
        let chain = template_chain(COMMAND_TEMPLATES, CommandFamily::Docker).unwrap();

        let line = chain[0].render("ps -a", DEFAULT_DELIMITER);

        assert_eq!(line, r#"docker ps -a --format="{{json .}}"NL_CMD"#);
    }

    #[test]
    fn given_fragment_with_slot_text_when_render_then_fragment_kept_verbatim() {
        let chain = template_chain(COMMAND_TEMPLATES, CommandFamily::DockerCompose).unwrap();

        let line = chain[0].render("echo $delimiter", DEFAULT_DELIMITER);

        assert_eq!(line, "docker-compose echo $delimiter");
    }

    #[test]
    fn given_table_without_family_when_lookup_then_missing_templates() {
        const ONLY_DOCKER: TemplateTable = &[(CommandFamily::Docker, DOCKER_CHAIN)];

        let result = template_chain(ONLY_DOCKER, CommandFamily::DockerCompose);

        assert_eq!(
            result,
            Err(DomainError::MissingTemplates(CommandFamily::DockerCompose))
        );
    }

    #[test]
    fn given_empty_chain_when_lookup_then_missing_templates() {
        const EMPTY: TemplateTable = &[(CommandFamily::Docker, &[])];

        assert!(template_chain(EMPTY, CommandFamily::Docker).is_err());
    }
}
