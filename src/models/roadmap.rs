//! Roadmap data structures
//!
//! This module contains the nested phase → month → {skills, projects,
//! resources, videos} table and the loaders that build it from JSON.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{Result, RoadmapError};

/// Roadmap compiled into the binary, used when no file is found on disk
const EMBEDDED_ROADMAP: &str = include_str!("../../assets/roadmap.json");

/// Pseudo-path reported for the embedded roadmap in errors
pub const EMBEDDED_PATH: &str = "<embedded>";

/// Project difficulty badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Complexity {
    Beginner,
    Intermediate,
    Advanced,
}

impl Complexity {
    pub fn label(&self) -> &'static str {
        match self {
            Complexity::Beginner => "Beginner",
            Complexity::Intermediate => "Intermediate",
            Complexity::Advanced => "Advanced",
        }
    }
}

/// Kind of learning resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ResourceKind {
    Book,
    Platform,
    Course,
}

/// Accent color of a phase card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseColor {
    Blue,
    Purple,
    Green,
    Orange,
    Red,
    Cyan,
}

/// Icon shown in a phase card header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseIcon {
    Code,
    Brain,
    Rocket,
    Book,
    Chart,
    Database,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Skill {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub details: String,
    pub complexity: Complexity,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Resource {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl Resource {
    /// Secondary line: "By <author>" and/or "Category: <category>"
    pub fn subtitle(&self) -> String {
        let mut parts = Vec::new();
        if let Some(author) = &self.author {
            parts.push(format!("By {}", author));
        }
        if let Some(category) = &self.category {
            parts.push(format!("Category: {}", category));
        }
        parts.join(" ")
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub duration: String,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

impl Video {
    /// Author takes precedence over platform, followed by the duration
    pub fn subtitle(&self) -> String {
        match self.author.as_deref().or(self.platform.as_deref()) {
            Some(source) => format!("{} • {}", source, self.duration),
            None => self.duration.clone(),
        }
    }
}

/// Content for one month range of a phase
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MonthData {
    pub title: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub resources: Option<Vec<Resource>>,
    #[serde(default)]
    pub videos: Option<Vec<Video>>,
}

impl MonthData {
    /// Number of checkable items (skills + projects)
    pub fn item_count(&self) -> usize {
        self.skills.len() + self.projects.len()
    }

    /// Identifiers of checkable items, skills first
    pub fn item_ids(&self) -> impl Iterator<Item = &str> {
        self.skills
            .iter()
            .map(|s| s.id.as_str())
            .chain(self.projects.iter().map(|p| p.id.as_str()))
    }

    pub fn has_learning_material(&self) -> bool {
        self.resources.is_some() || self.videos.is_some()
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Phase {
    pub id: u32,
    pub title: String,
    pub duration: String,
    pub focus: String,
    pub color: PhaseColor,
    pub icon: PhaseIcon,
    /// Month range label (e.g. "1-2") to content, in authored order
    pub months: IndexMap<String, MonthData>,
}

impl Phase {
    pub fn month(&self, range: &str) -> Option<&MonthData> {
        self.months.get(range)
    }

    pub fn month_ranges(&self) -> impl Iterator<Item = &str> {
        self.months.keys().map(String::as_str)
    }

    pub fn first_month(&self) -> Option<&str> {
        self.month_ranges().next()
    }
}

fn default_title() -> String {
    "Learning Roadmap".to_string()
}

/// The whole roadmap table
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Roadmap {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub phases: Vec<Phase>,
}

impl Roadmap {
    /// Load a roadmap from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| RoadmapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content, path)
    }

    /// Roadmap shipped with the binary
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_ROADMAP, Path::new(EMBEDDED_PATH))
    }

    fn from_json(content: &str, path: &Path) -> Result<Self> {
        let roadmap: Roadmap =
            serde_json::from_str(content).map_err(|source| RoadmapError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        if roadmap.phases.is_empty() {
            return Err(RoadmapError::Empty(PathBuf::from(path)));
        }
        Ok(roadmap)
    }

    pub fn phase(&self, id: u32) -> Option<&Phase> {
        self.phases.iter().find(|p| p.id == id)
    }

    /// Position of a phase in authored order
    pub fn phase_index(&self, id: u32) -> Option<usize> {
        self.phases.iter().position(|p| p.id == id)
    }

    /// First phase id and its first month key
    pub fn default_selection(&self) -> (u32, String) {
        match self.phases.first() {
            Some(phase) => (
                phase.id,
                phase.first_month().unwrap_or_default().to_string(),
            ),
            None => (1, String::new()),
        }
    }

    /// Total number of checkable items across every phase and month
    pub fn item_count(&self) -> usize {
        self.phases
            .iter()
            .flat_map(|p| p.months.values())
            .map(MonthData::item_count)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;
    use std::io::Write;

    fn create_temp_roadmap_file(content: &str) -> (tempfile::NamedTempFile, PathBuf) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        let path = file.path().to_path_buf();
        (file, path)
    }

    const MINIMAL: &str = r#"{
        "phases": [
            {
                "id": 3,
                "title": "Ship It",
                "duration": "Months 13-18",
                "focus": "Production systems",
                "color": "green",
                "icon": "rocket",
                "months": {
                    "13-14": {
                        "title": "Serving",
                        "skills": [{"id": "s1", "name": "Docker", "topics": ["Images"]}]
                    },
                    "15-16": {
                        "title": "Monitoring",
                        "skills": [],
                        "projects": [
                            {"id": "pr1", "name": "Dashboards", "details": "Grafana", "complexity": "Beginner"}
                        ]
                    }
                }
            }
        ]
    }"#;

    #[test]
    fn test_embedded_roadmap_parses() {
        let roadmap = Roadmap::embedded().unwrap();
        assert_eq!(roadmap.title, "ML Engineering Roadmap");
        assert_eq!(roadmap.phases.len(), 2);
        assert_eq!(roadmap.default_selection(), (1, "1-2".to_string()));
    }

    #[test]
    fn test_embedded_roadmap_ids_are_unique() {
        let roadmap = Roadmap::embedded().unwrap();
        let mut seen = HashSet::new();
        for month in roadmap.phases.iter().flat_map(|p| p.months.values()) {
            let ids = month
                .item_ids()
                .map(str::to_string)
                .chain(month.resources.iter().flatten().map(|r| r.id.clone()))
                .chain(month.videos.iter().flatten().map(|v| v.id.clone()));
            for id in ids {
                assert!(seen.insert(id.clone()), "duplicate id {}", id);
            }
        }
    }

    #[test]
    fn test_months_keep_authored_order() {
        let roadmap = Roadmap::embedded().unwrap();
        let phase = roadmap.phase(1).unwrap();
        let ranges: Vec<&str> = phase.month_ranges().collect();
        assert_eq!(ranges, vec!["1-2", "3-4", "5-6"]);
    }

    #[test]
    fn test_load_defaults_missing_sections() {
        let (_file, path) = create_temp_roadmap_file(MINIMAL);
        let roadmap = Roadmap::load(&path).unwrap();
        assert_eq!(roadmap.title, "Learning Roadmap");

        let phase = roadmap.phase(3).unwrap();
        assert_eq!(phase.color, PhaseColor::Green);
        assert_eq!(phase.icon, PhaseIcon::Rocket);

        let serving = phase.month("13-14").unwrap();
        assert!(serving.projects.is_empty());
        assert_eq!(serving.resources, None);
        assert!(!serving.has_learning_material());
        assert_eq!(serving.item_count(), 1);

        let monitoring = phase.month("15-16").unwrap();
        assert_eq!(monitoring.projects[0].complexity, Complexity::Beginner);
    }

    #[test]
    fn test_missing_lookups_yield_none() {
        let roadmap = Roadmap::embedded().unwrap();
        assert!(roadmap.phase(99).is_none());
        assert!(roadmap.phase(2).unwrap().month("1-2").is_none());
    }

    #[test]
    fn test_load_file_not_found() {
        let result = Roadmap::load(Path::new("/nonexistent/path/roadmap.json"));
        assert!(matches!(result, Err(RoadmapError::Io { .. })));
    }

    #[test]
    fn test_load_invalid_json() {
        let (_file, path) = create_temp_roadmap_file("{ invalid json }");
        let result = Roadmap::load(&path);
        assert!(matches!(result, Err(RoadmapError::Parse { .. })));
    }

    #[test]
    fn test_load_unknown_complexity_is_rejected() {
        let json = MINIMAL.replace("Beginner", "Expert");
        let (_file, path) = create_temp_roadmap_file(&json);
        assert!(matches!(
            Roadmap::load(&path),
            Err(RoadmapError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_empty_phases() {
        let (_file, path) = create_temp_roadmap_file(r#"{"phases": []}"#);
        assert!(matches!(Roadmap::load(&path), Err(RoadmapError::Empty(_))));
    }

    #[test]
    fn test_item_ids_skills_then_projects() {
        let roadmap = Roadmap::embedded().unwrap();
        let month = roadmap.phase(1).unwrap().month("1-2").unwrap();
        let ids: Vec<&str> = month.item_ids().collect();
        assert_eq!(
            ids,
            vec![
                "p1-1-2-skill-python",
                "p1-1-2-skill-sql",
                "p1-1-2-skill-git",
                "p1-1-2-project-tasks",
                "p1-1-2-project-titanic",
            ]
        );
    }

    #[test]
    fn test_resource_and_video_subtitles() {
        let roadmap = Roadmap::embedded().unwrap();
        let phase = roadmap.phase(1).unwrap();
        let resources = phase.month("1-2").unwrap().resources.as_ref().unwrap();
        assert_eq!(resources[0].subtitle(), "By Wes McKinney");
        assert_eq!(resources[1].subtitle(), "Category: Interactive Learning");

        let videos = phase.month("3-4").unwrap().videos.as_ref().unwrap();
        assert_eq!(videos[0].subtitle(), "3Blue1Brown • 12:47");
        assert_eq!(videos[1].subtitle(), "Samson Zhang • 31:28");
    }
}
