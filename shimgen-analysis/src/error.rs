//! Data-integrity faults raised by the analysis pipeline.
//!
//! These indicate broken upstream registry data and abort the generation
//! pass: emitting declarations from an incomplete containment map would
//! silently under-generate wrapping code. There is no retry policy;
//! generation is deterministic, so a retry would reproduce the fault.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error(
        "member '{member}' of structure '{structure}' references unknown structure type '{ty}'"
    )]
    MissingType {
        structure: String,
        member: String,
        ty: String,
    },

    #[error("parameter '{param}' of command '{command}' references unknown structure type '{ty}'")]
    MissingParamType {
        command: String,
        param: String,
        ty: String,
    },

    #[error("alias '{alias}' resolves to unknown structure '{target}'")]
    MissingAliasTarget { alias: String, target: String },

    #[error("alias chain starting at '{alias}' forms a cycle")]
    AliasCycle { alias: String },
}
