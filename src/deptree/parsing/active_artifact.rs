//! Active project artifacts
//!
//! When `dependency:tree` runs inside a multi-module build, a module that is itself part of
//! the reactor may be printed as a placeholder instead of a coordinate:
//!
//! ```text
//! active project artifact:
//!     artifact = active project artifact:
//!     artifact = active project artifact:
//!     artifact = com.acme.org:foobar:jar:1.0.41-SNAPSHOT:compile;
//!     project: MavenProject: com.acme.org:foobar:1.0.41-SNAPSHOT @ /work/foobar/pom.xml;
//!     project: MavenProject: com.acme.org:foobar:1.0.41-SNAPSHOT @ /work/foobar/pom.xml
//! ```
//!
//! The only real coordinate is the one `artifact = ` line that does not nest another
//! placeholder. A placeholder is the marker phrase followed by `:`; the phrase comes from
//! [`GraphmlOptions::active_artifact_marker`].
//!
//! [`GraphmlOptions::active_artifact_marker`]: crate::deptree::config::GraphmlOptions

use once_cell::sync::Lazy;
use regex::Regex;

static ARTIFACT_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"artifact = (.+);").expect("artifact line pattern is valid"));

/// Find the coordinate embedded in an active project artifact label.
///
/// `marker` is the placeholder phrase without its trailing colon. Returns `None` when every
/// `artifact = ...;` entry is another placeholder.
pub fn extract_active_project_artifact<'a>(content: &'a str, marker: &str) -> Option<&'a str> {
    let mut start = 0;
    while let Some(captures) = ARTIFACT_LINE.captures_at(content, start) {
        let entry = captures.get(0)?;
        let coordinate = captures.get(1)?.as_str();
        let nested = coordinate
            .strip_prefix(marker)
            .is_some_and(|rest| rest.starts_with(':'));
        if !nested {
            return Some(coordinate);
        }
        // "artifact = " is ASCII, so one byte past its start is a char boundary
        start = entry.start() + 1;
    }
    None
}
