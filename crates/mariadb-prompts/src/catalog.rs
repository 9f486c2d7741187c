//! Prompt catalog: wire names, argument descriptors and by-name rendering.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::{render_query_tuning, render_table_analysis, PromptError};

/// The prompts this crate can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptKind {
    #[serde(rename = "explain_table")]
    TableAnalysis,
    QueryTuning,
}

/// Describes one argument a prompt accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PromptArgumentSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

/// Catalog entry for one prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PromptSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub arguments: &'static [PromptArgumentSpec],
}

const TABLE_NAME_ARG: PromptArgumentSpec = PromptArgumentSpec {
    name: "table_name",
    description: "Name of the table to analyze",
    required: true,
};

const ORIGINAL_QUERY_ARG: PromptArgumentSpec = PromptArgumentSpec {
    name: "original_query",
    description: "Original SQL query to analyze",
    required: true,
};

impl PromptKind {
    /// Every prompt, in catalog order.
    pub const ALL: [PromptKind; 2] = [PromptKind::TableAnalysis, PromptKind::QueryTuning];

    /// Stable name used on the wire and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            PromptKind::TableAnalysis => "explain_table",
            PromptKind::QueryTuning => "query_tuning",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PromptKind::TableAnalysis => {
                "Document a table's schema, relationships and key indexes as Markdown"
            }
            PromptKind::QueryTuning => {
                "Analyze a query's execution plan and propose indexes and an improved query"
            }
        }
    }

    pub fn arguments(self) -> &'static [PromptArgumentSpec] {
        match self {
            PromptKind::TableAnalysis => &[TABLE_NAME_ARG],
            PromptKind::QueryTuning => &[ORIGINAL_QUERY_ARG],
        }
    }

    pub fn spec(self) -> PromptSpec {
        PromptSpec {
            name: self.name(),
            description: self.description(),
            arguments: self.arguments(),
        }
    }

    /// Render from an untyped argument map.
    ///
    /// Required arguments must be present; their values are used verbatim,
    /// including empty strings. Unrecognized keys are ignored.
    pub fn render_with(self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        let required = move |spec: PromptArgumentSpec| {
            arguments
                .get(spec.name)
                .map(String::as_str)
                .ok_or(PromptError::MissingArgument {
                    prompt: self.name(),
                    argument: spec.name,
                })
        };

        match self {
            PromptKind::TableAnalysis => Ok(render_table_analysis(required(TABLE_NAME_ARG)?)),
            PromptKind::QueryTuning => Ok(render_query_tuning(required(ORIGINAL_QUERY_ARG)?)),
        }
    }
}

impl fmt::Display for PromptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PromptKind {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PromptKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| PromptError::UnknownPrompt(s.to_string()))
    }
}

/// Specs for every prompt, in catalog order.
pub fn catalog() -> Vec<PromptSpec> {
    PromptKind::ALL.into_iter().map(PromptKind::spec).collect()
}
