//! Resume parser — heuristic extraction of contact details and sections from plain text.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::resume::ParsedResume;

const UNKNOWN_NAME: &str = "Unknown";
const NOT_FOUND: &str = "Not found";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("Invalid email regex")
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d{3}[-.\s]?\d{3}[-.\s]?\d{4}\b").expect("Invalid phone regex")
});

#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    Education,
    WorkExperience,
    LeadershipExperience,
    Skills,
}

impl Section {
    /// Classifies a line as a section heading. Order matters: a line mentioning
    /// both education and skills is an education heading.
    fn from_heading(line: &str) -> Option<Self> {
        let upper = line.to_uppercase();
        if upper.contains("EDUCATION") {
            Some(Section::Education)
        } else if upper.contains("WORK EXPERIENCE") {
            Some(Section::WorkExperience)
        } else if upper.contains("LEADERSHIP EXPERIENCE") {
            Some(Section::LeadershipExperience)
        } else if upper.contains("SKILLS") {
            // also covers "CERTIFICATIONS & SKILLS"
            Some(Section::Skills)
        } else {
            None
        }
    }
}

#[derive(Default)]
struct SectionBuffers {
    education: Vec<String>,
    work_experience: Vec<String>,
    leadership_experience: Vec<String>,
    skills: Vec<String>,
}

impl SectionBuffers {
    fn push(&mut self, section: Section, line: &str) {
        let buf = match section {
            Section::Education => &mut self.education,
            Section::WorkExperience => &mut self.work_experience,
            Section::LeadershipExperience => &mut self.leadership_experience,
            Section::Skills => &mut self.skills,
        };
        buf.push(line.to_string());
    }
}

/// Extracts structured resume fields from raw document text.
///
/// - name: first non-empty line
/// - email / phone: first pattern match anywhere in the text
/// - sections: heading lines switch the active section and are dropped;
///   lines before the first heading belong to no section
pub fn parse_resume(text: &str) -> ParsedResume {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let name = lines.first().copied().unwrap_or(UNKNOWN_NAME).to_string();
    let email = first_match(&EMAIL_RE, text);
    let phone = first_match(&PHONE_RE, text);

    let mut buffers = SectionBuffers::default();
    let mut current: Option<Section> = None;
    for line in &lines {
        if let Some(section) = Section::from_heading(line) {
            current = Some(section);
            continue;
        }
        if let Some(section) = current {
            buffers.push(section, line);
        }
    }

    ParsedResume {
        name,
        email,
        phone,
        education: buffers.education.join(" "),
        work_experience: buffers.work_experience.join(" "),
        leadership_experience: buffers.leadership_experience.join(" "),
        skills: buffers.skills.join(" "),
    }
}

fn first_match(re: &Regex, text: &str) -> String {
    re.find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_FOUND.to_string())
}
