//! Roadmap file discovery.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::Roadmap;

/// File name looked up in the working directory and the config directory
pub const ROADMAP_FILE: &str = "roadmap.json";

/// Where the loaded roadmap came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoadmapSource {
    Explicit(PathBuf),
    Local(PathBuf),
    Global(PathBuf),
    Embedded,
}

impl fmt::Display for RoadmapSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoadmapSource::Explicit(path)
            | RoadmapSource::Local(path)
            | RoadmapSource::Global(path) => write!(f, "{}", path.display()),
            RoadmapSource::Embedded => write!(f, "built-in"),
        }
    }
}

/// `<config_dir>/roadmap-tui/roadmap.json`, if the platform has a config dir
pub fn global_roadmap_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("roadmap-tui").join(ROADMAP_FILE))
}

/// Find the roadmap in order of priority:
/// 1. explicit path from the command line (errors are returned)
/// 2. ./roadmap.json (local project customization)
/// 3. <config_dir>/roadmap-tui/roadmap.json (global user config)
/// 4. Embedded fallback
pub fn find_roadmap(explicit: Option<&Path>) -> Result<(Roadmap, RoadmapSource)> {
    resolve_roadmap(explicit, Path::new(ROADMAP_FILE), global_roadmap_path())
}

/// Lookup chain with the candidate locations supplied by the caller
pub fn resolve_roadmap(
    explicit: Option<&Path>,
    local: &Path,
    global: Option<PathBuf>,
) -> Result<(Roadmap, RoadmapSource)> {
    if let Some(path) = explicit {
        let roadmap = Roadmap::load(path)?;
        return Ok((roadmap, RoadmapSource::Explicit(path.to_path_buf())));
    }

    if let Some(roadmap) = try_load(local) {
        return Ok((roadmap, RoadmapSource::Local(local.to_path_buf())));
    }

    if let Some(global) = global {
        if let Some(roadmap) = try_load(&global) {
            return Ok((roadmap, RoadmapSource::Global(global)));
        }
    }

    tracing::debug!("no roadmap file found, using built-in roadmap");
    Ok((Roadmap::embedded()?, RoadmapSource::Embedded))
}

/// Load a discovered file; a broken file is skipped rather than fatal
fn try_load(path: &Path) -> Option<Roadmap> {
    if !path.exists() {
        return None;
    }
    match Roadmap::load(path) {
        Ok(roadmap) => Some(roadmap),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "skipping unreadable roadmap");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RoadmapError;
    use std::fs;
    use tempfile::tempdir;

    const CUSTOM: &str = r#"{
        "title": "Custom",
        "phases": [{
            "id": 7, "title": "Only", "duration": "Months 1-1", "focus": "all",
            "color": "red", "icon": "book",
            "months": {"1-1": {"title": "One", "skills": []}}
        }]
    }"#;

    #[test]
    fn test_falls_back_to_embedded() {
        let dir = tempdir().unwrap();
        let (roadmap, source) =
            resolve_roadmap(None, &dir.path().join(ROADMAP_FILE), None).unwrap();
        assert_eq!(source, RoadmapSource::Embedded);
        assert_eq!(roadmap.title, "ML Engineering Roadmap");
    }

    #[test]
    fn test_prefers_local_over_global() {
        let dir = tempdir().unwrap();
        let local = dir.path().join("local.json");
        let global = dir.path().join("global.json");
        fs::write(&local, CUSTOM).unwrap();
        fs::write(&global, CUSTOM.replace("Custom", "Global")).unwrap();

        let (roadmap, source) = resolve_roadmap(None, &local, Some(global)).unwrap();
        assert_eq!(source, RoadmapSource::Local(local));
        assert_eq!(roadmap.title, "Custom");
    }

    #[test]
    fn test_uses_global_when_local_missing() {
        let dir = tempdir().unwrap();
        let global = dir.path().join("global.json");
        fs::write(&global, CUSTOM).unwrap();

        let (_, source) =
            resolve_roadmap(None, &dir.path().join("missing.json"), Some(global.clone())).unwrap();
        assert_eq!(source, RoadmapSource::Global(global));
    }

    #[test]
    fn test_broken_local_is_skipped() {
        let dir = tempdir().unwrap();
        let local = dir.path().join(ROADMAP_FILE);
        fs::write(&local, "not json").unwrap();

        let (_, source) = resolve_roadmap(None, &local, None).unwrap();
        assert_eq!(source, RoadmapSource::Embedded);
    }

    #[test]
    fn test_explicit_path_wins_and_errors_surface() {
        let dir = tempdir().unwrap();
        let explicit = dir.path().join("mine.json");
        fs::write(&explicit, CUSTOM).unwrap();

        let (roadmap, source) =
            resolve_roadmap(Some(&explicit), Path::new(ROADMAP_FILE), None).unwrap();
        assert_eq!(source, RoadmapSource::Explicit(explicit));
        assert!(roadmap.phase(7).is_some());

        let missing = dir.path().join("nope.json");
        let result = resolve_roadmap(Some(&missing), Path::new(ROADMAP_FILE), None);
        assert!(matches!(result, Err(RoadmapError::Io { .. })));
    }

    #[test]
    fn test_source_display() {
        assert_eq!(RoadmapSource::Embedded.to_string(), "built-in");
        assert_eq!(
            RoadmapSource::Local(PathBuf::from("roadmap.json")).to_string(),
            "roadmap.json"
        );
    }
}
