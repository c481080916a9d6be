use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Clinical note categories kept on a case file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    Diagnosis,
    Observation,
    Treatment,
}

impl fmt::Display for NoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteKind::Diagnosis => write!(f, "diagnosis"),
            NoteKind::Observation => write!(f, "observation"),
            NoteKind::Treatment => write!(f, "treatment"),
        }
    }
}

impl FromStr for NoteKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "diagnosis" => Ok(NoteKind::Diagnosis),
            "observation" => Ok(NoteKind::Observation),
            "treatment" => Ok(NoteKind::Treatment),
            _ => Err(format!("Unknown note kind: {s}")),
        }
    }
}
