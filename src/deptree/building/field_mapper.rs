//! Token to field mapping
//!
//! Maven prints four legal artifact shapes; which one a line uses is decided by the token
//! count alone, except at six tokens where a classifier and a description would otherwise
//! be indistinguishable:
//!
//! | tokens | free text | layout                                            |
//! |--------|-----------|---------------------------------------------------|
//! | 4      | any       | group:artifact:packaging:version                  |
//! | 5      | any       | group:artifact:packaging:version:scope            |
//! | 6      | yes       | group:artifact:packaging:version:scope desc       |
//! | 6      | no        | group:artifact:packaging:classifier:version:scope |
//! | 7      | any       | group:artifact:packaging:classifier:version:scope desc |

use crate::deptree::error::ArtifactError;
use crate::deptree::lexing::ArtifactTokens;

/// The artifact schema, filled from one line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactFields {
    pub group_id: String,
    pub artifact_id: String,
    pub packaging: String,
    pub classifier: Option<String>,
    pub version: String,
    pub scope: Option<String>,
    pub description: Option<String>,
    pub omitted: bool,
}

#[derive(Debug, Clone, Copy)]
enum Field {
    GroupId,
    ArtifactId,
    Packaging,
    Classifier,
    Version,
    Scope,
    Description,
}

use Field::*;

const FOUR: &[Field] = &[GroupId, ArtifactId, Packaging, Version];
const FIVE: &[Field] = &[GroupId, ArtifactId, Packaging, Version, Scope];
const SIX_DESCRIBED: &[Field] = &[GroupId, ArtifactId, Packaging, Version, Scope, Description];
const SIX_CLASSIFIED: &[Field] = &[GroupId, ArtifactId, Packaging, Classifier, Version, Scope];
const SEVEN: &[Field] = &[
    GroupId,
    ArtifactId,
    Packaging,
    Classifier,
    Version,
    Scope,
    Description,
];

fn layout(count: usize, has_description: bool) -> Option<&'static [Field]> {
    match (count, has_description) {
        (4, _) => Some(FOUR),
        (5, _) => Some(FIVE),
        (6, true) => Some(SIX_DESCRIBED),
        (6, false) => Some(SIX_CLASSIFIED),
        (7, _) => Some(SEVEN),
        _ => None,
    }
}

/// Map tokenizer output onto the artifact fields.
///
/// `line` is only used to build error messages.
pub fn map_tokens(line: &str, tokens: ArtifactTokens) -> Result<ArtifactFields, ArtifactError> {
    let ArtifactTokens {
        tokens,
        has_description,
        omitted,
    } = tokens;

    let layout = layout(tokens.len(), has_description).ok_or_else(|| {
        ArtifactError::WrongTokenCount {
            line: line.to_string(),
            count: tokens.len(),
        }
    })?;

    let mut fields = ArtifactFields {
        omitted,
        ..ArtifactFields::default()
    };
    for (field, value) in layout.iter().zip(tokens) {
        match field {
            GroupId => fields.group_id = value,
            ArtifactId => fields.artifact_id = value,
            Packaging => fields.packaging = value,
            Classifier => fields.classifier = Some(value),
            Version => fields.version = value,
            Scope => fields.scope = Some(value),
            Description => fields.description = Some(value),
        }
    }

    let required = [
        ("groupId", &fields.group_id),
        ("artifactId", &fields.artifact_id),
        ("packaging", &fields.packaging),
        ("version", &fields.version),
    ];
    if let Some(&(field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
        return Err(ArtifactError::EmptyField {
            field,
            line: line.to_string(),
        });
    }

    Ok(fields)
}
