use serde::{Deserialize, Serialize};

/// The sole externally visible artifact: always fully populated, with
/// empty strings and empty lists standing in for anything not found.
/// Wire field names are camelCase (`workExperience` etc.) for the
/// downstream formatter and generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParsedResume {
    pub summary: String,
    pub work_experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkExperience {
    pub position: String,
    pub company: String,
    pub duration: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    /// Bare-name projects carry no year; the field is omitted from JSON
    /// rather than serialized as null.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    pub description: String,
    pub technologies: Vec<String>,
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_field_names() {
        let json = serde_json::to_string(&ParsedResume::default()).unwrap();
        for field in ["summary", "workExperience", "education", "skills", "projects"] {
            assert!(json.contains(&format!("\"{}\"", field)), "missing {}", field);
        }
    }

    #[test]
    fn empty_resume_is_fully_shaped() {
        let value = serde_json::to_value(ParsedResume::default()).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 5);
        assert!(obj["workExperience"].as_array().unwrap().is_empty());
        assert_eq!(obj["summary"], "");
    }

    #[test]
    fn round_trip_preserves_fields() {
        let resume = ParsedResume {
            summary: "Engineer.".into(),
            work_experience: vec![WorkExperience {
                position: "Senior Engineer".into(),
                company: "Acme Corp".into(),
                duration: "2019-2022".into(),
                responsibilities: vec!["Shipped things".into()],
            }],
            education: vec![Education {
                degree: "B.S.".into(),
                institution: "State".into(),
                year: "2015".into(),
            }],
            skills: vec!["Go".into(), "Rust".into()],
            projects: vec![Project {
                name: "Launch App".into(),
                year: Some("2021".into()),
                description: "A dashboard".into(),
                technologies: vec!["React".into()],
            }],
        };
        let json = serde_json::to_string(&resume).unwrap();
        let back: ParsedResume = serde_json::from_str(&json).unwrap();
        assert_eq!(resume, back);
    }

    #[test]
    fn missing_year_omitted_from_json() {
        let project = Project {
            name: "FREIGHTVIEW".into(),
            ..Default::default()
        };
        let json = serde_json::to_string(&project).unwrap();
        assert!(!json.contains("year"));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let resume: ParsedResume = serde_json::from_str(r#"{"summary": "Hi"}"#).unwrap();
        assert_eq!(resume.summary, "Hi");
        assert!(resume.work_experience.is_empty());
        assert!(resume.skills.is_empty());
    }
}
