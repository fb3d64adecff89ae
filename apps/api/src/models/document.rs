use serde::{Deserialize, Serialize};

use crate::models::record::{IdGenerator, Record, RecordId};

// ────────────────────────────────────────────────────────────────────────────
// Résumé
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
}

impl PersonalInfo {
    pub const FIELDS: &'static [&'static str] =
        &["fullName", "email", "phone", "location", "summary"];

    /// Replaces one named field. Returns `false` for an unknown field name.
    pub fn set_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "fullName" => &mut self.full_name,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "location" => &mut self.location,
            "summary" => &mut self.summary,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: RecordId,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub description: String,
}

impl Record for Experience {
    const KIND: &'static str = "experience";
    const FIELDS: &'static [&'static str] =
        &["company", "position", "startDate", "endDate", "description"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn blank(id: RecordId) -> Self {
        Self {
            id,
            company: String::new(),
            position: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
        }
    }

    fn set_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "company" => &mut self.company,
            "position" => &mut self.position,
            "startDate" => &mut self.start_date,
            "endDate" => &mut self.end_date,
            "description" => &mut self.description,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: RecordId,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub graduation_date: String,
}

impl Record for Education {
    const KIND: &'static str = "education";
    const FIELDS: &'static [&'static str] = &["school", "degree", "field", "graduationDate"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn blank(id: RecordId) -> Self {
        Self {
            id,
            school: String::new(),
            degree: String::new(),
            field: String::new(),
            graduation_date: String::new(),
        }
    }

    fn set_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "school" => &mut self.school,
            "degree" => &mut self.degree,
            "field" => &mut self.field,
            "graduationDate" => &mut self.graduation_date,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}

/// A skill in an editable collection. Read-only contexts use the bare name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
}

impl Record for Skill {
    const KIND: &'static str = "skill";
    const FIELDS: &'static [&'static str] = &["name"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn blank(id: RecordId) -> Self {
        Self {
            id,
            name: String::new(),
        }
    }

    fn set_field(&mut self, field: &str, value: &str) -> bool {
        if field != "name" {
            return false;
        }
        self.name = value.to_string();
        true
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    pub personal: PersonalInfo,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
}

impl ResumeDocument {
    /// The document every new session starts from. Seed records draw their
    /// ids from `ids`, so later additions can never collide with them.
    pub fn seed(ids: &IdGenerator) -> Self {
        Self {
            personal: PersonalInfo {
                full_name: "John Doe".to_string(),
                email: "john@example.com".to_string(),
                phone: "+1 (555) 123-4567".to_string(),
                location: "San Francisco, CA".to_string(),
                summary: "Creative and results-driven professional with expertise in web development and design.".to_string(),
            },
            experience: vec![Experience {
                id: ids.next_id(),
                company: "Tech Company".to_string(),
                position: "Senior Developer".to_string(),
                start_date: "2022".to_string(),
                end_date: "Present".to_string(),
                description: "Led development of scalable web applications and mentored junior developers.".to_string(),
            }],
            education: vec![Education {
                id: ids.next_id(),
                school: "University Name".to_string(),
                degree: "Bachelor of Science".to_string(),
                field: "Computer Science".to_string(),
                graduation_date: "2020".to_string(),
            }],
            skills: ["React", "TypeScript", "Node.js", "Web Design"]
                .into_iter()
                .map(|name| Skill {
                    id: ids.next_id(),
                    name: name.to_string(),
                })
                .collect(),
        }
    }

    /// Bare skill names, in display order.
    pub fn skill_names(&self) -> Vec<&str> {
        self.skills.iter().map(|s| s.name.as_str()).collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Portfolio
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: RecordId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub image: String,
}

impl Record for Project {
    const KIND: &'static str = "project";
    const FIELDS: &'static [&'static str] = &["title", "description", "link", "image"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn blank(id: RecordId) -> Self {
        Self {
            id,
            title: String::new(),
            description: String::new(),
            link: String::new(),
            image: String::new(),
        }
    }

    fn set_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "title" => &mut self.title,
            "description" => &mut self.description,
            "link" => &mut self.link,
            "image" => &mut self.image,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
}

impl SocialLinks {
    pub const FIELDS: &'static [&'static str] = &["github", "linkedin", "twitter"];

    pub fn set_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "github" => &mut self.github,
            "linkedin" => &mut self.linkedin,
            "twitter" => &mut self.twitter,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }

    /// `(network, url)` pairs in fixed display order.
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("github", self.github.as_str()),
            ("linkedin", self.linkedin.as_str()),
            ("twitter", self.twitter.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioDocument {
    pub full_name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub projects: Vec<Project>,
    /// Read-only tag list; edited by value, never by identity.
    pub skills: Vec<String>,
    pub social_links: SocialLinks,
}

impl PortfolioDocument {
    pub const PROFILE_FIELDS: &'static [&'static str] =
        &["fullName", "title", "bio", "email", "phone"];

    pub fn seed(ids: &IdGenerator) -> Self {
        Self {
            full_name: "Your Name".to_string(),
            title: "Full Stack Developer".to_string(),
            bio: "I build beautiful and functional web experiences.".to_string(),
            email: "hello@example.com".to_string(),
            phone: "+1 (555) 000-0000".to_string(),
            projects: vec![Project {
                id: ids.next_id(),
                title: "Project 1".to_string(),
                description: "Description here".to_string(),
                link: "#".to_string(),
                image: "/project-management-team.png".to_string(),
            }],
            skills: ["React", "Next.js", "TypeScript", "Tailwind CSS"]
                .into_iter()
                .map(String::from)
                .collect(),
            social_links: SocialLinks {
                github: "#".to_string(),
                linkedin: "#".to_string(),
                twitter: "#".to_string(),
            },
        }
    }

    /// Replaces one top-level profile field. Returns `false` for an unknown name.
    pub fn set_profile_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "fullName" => &mut self.full_name,
            "title" => &mut self.title,
            "bio" => &mut self.bio,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}
