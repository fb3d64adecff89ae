//! Document edits: add / update / remove over the résumé's and portfolio's ordered
//! record lists, plus single-field and tag edits.
//!
//! Every operation is a pure function from the old collection to a new one.
//! Inputs are never mutated, so a session can detect change by
//! comparison and keep prior snapshots around.
//!
//! A record id that is not present makes `update_field` and `remove` a no-op:
//! an edit racing a removal of the same record is expected and must not fail.

pub mod handlers;

use serde::Deserialize;
use tracing::debug;

use crate::models::document::{PortfolioDocument, ResumeDocument};
use crate::models::record::{IdGenerator, Record, RecordId};

// ────────────────────────────────────────────────────────────────────────────
// Generic collection operations
// ────────────────────────────────────────────────────────────────────────────

/// Appends a blank record with a fresh id. Returns the new collection and the id.
pub fn add<R: Record>(records: &[R], ids: &IdGenerator) -> (Vec<R>, RecordId) {
    let id = ids.next_id();
    let mut next = Vec::with_capacity(records.len() + 1);
    next.extend_from_slice(records);
    next.push(R::blank(id));
    debug!("Added {} record {id}", R::KIND);
    (next, id)
}

/// Replaces exactly one field of the record matching `id`.
pub fn update_field<R: Record>(records: &[R], id: RecordId, field: &str, value: &str) -> Vec<R> {
    if !records.iter().any(|r| r.id() == id) {
        debug!("Ignoring update of missing {} record {id}", R::KIND);
        return records.to_vec();
    }

    records
        .iter()
        .map(|record| {
            if record.id() != id {
                return record.clone();
            }
            let mut updated = record.clone();
            if !updated.set_field(field, value) {
                debug!("Ignoring unknown {} field '{field}'", R::KIND);
            }
            updated
        })
        .collect()
}

/// Drops the record matching `id`, keeping the order of the rest.
pub fn remove<R: Record>(records: &[R], id: RecordId) -> Vec<R> {
    let next: Vec<R> = records.iter().filter(|r| r.id() != id).cloned().collect();
    if next.len() == records.len() {
        debug!("Ignoring removal of missing {} record {id}", R::KIND);
    }
    next
}

// ────────────────────────────────────────────────────────────────────────────
// Value-addressed tag lists (portfolio skills)
// ────────────────────────────────────────────────────────────────────────────

/// Appends `tag` (trimmed) unless it is blank or already present.
pub fn add_tag(tags: &[String], tag: &str) -> Vec<String> {
    let tag = tag.trim();
    let mut next = tags.to_vec();
    if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
        next.push(tag.to_string());
    }
    next
}

/// Drops every occurrence of `tag`.
pub fn remove_tag(tags: &[String], tag: &str) -> Vec<String> {
    tags.iter().filter(|t| *t != tag).cloned().collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Document-level edits
// ────────────────────────────────────────────────────────────────────────────

/// The repeatable collections of a résumé, addressed by their path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeCollection {
    Experience,
    Education,
    Skills,
}

impl ResumeCollection {
    pub fn fields(self) -> &'static [&'static str] {
        use crate::models::document::{Education, Experience, Skill};
        match self {
            ResumeCollection::Experience => Experience::FIELDS,
            ResumeCollection::Education => Education::FIELDS,
            ResumeCollection::Skills => Skill::FIELDS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResumeCollection::Experience => "experience",
            ResumeCollection::Education => "education",
            ResumeCollection::Skills => "skills",
        }
    }

    pub fn add(self, doc: &ResumeDocument, ids: &IdGenerator) -> (ResumeDocument, RecordId) {
        let mut next = doc.clone();
        let id = match self {
            ResumeCollection::Experience => {
                let (records, id) = add(&doc.experience, ids);
                next.experience = records;
                id
            }
            ResumeCollection::Education => {
                let (records, id) = add(&doc.education, ids);
                next.education = records;
                id
            }
            ResumeCollection::Skills => {
                let (records, id) = add(&doc.skills, ids);
                next.skills = records;
                id
            }
        };
        (next, id)
    }

    pub fn update_field(
        self,
        doc: &ResumeDocument,
        id: RecordId,
        field: &str,
        value: &str,
    ) -> ResumeDocument {
        let mut next = doc.clone();
        match self {
            ResumeCollection::Experience => {
                next.experience = update_field(&doc.experience, id, field, value)
            }
            ResumeCollection::Education => {
                next.education = update_field(&doc.education, id, field, value)
            }
            ResumeCollection::Skills => next.skills = update_field(&doc.skills, id, field, value),
        }
        next
    }

    pub fn remove(self, doc: &ResumeDocument, id: RecordId) -> ResumeDocument {
        let mut next = doc.clone();
        match self {
            ResumeCollection::Experience => next.experience = remove(&doc.experience, id),
            ResumeCollection::Education => next.education = remove(&doc.education, id),
            ResumeCollection::Skills => next.skills = remove(&doc.skills, id),
        }
        next
    }
}

pub fn update_personal(doc: &ResumeDocument, field: &str, value: &str) -> ResumeDocument {
    let mut next = doc.clone();
    next.personal.set_field(field, value);
    next
}

pub fn update_profile(doc: &PortfolioDocument, field: &str, value: &str) -> PortfolioDocument {
    let mut next = doc.clone();
    next.set_profile_field(field, value);
    next
}

pub fn update_social(doc: &PortfolioDocument, field: &str, value: &str) -> PortfolioDocument {
    let mut next = doc.clone();
    next.social_links.set_field(field, value);
    next
}

pub fn add_project(doc: &PortfolioDocument, ids: &IdGenerator) -> (PortfolioDocument, RecordId) {
    let (projects, id) = add(&doc.projects, ids);
    (
        PortfolioDocument {
            projects,
            ..doc.clone()
        },
        id,
    )
}

pub fn update_project(
    doc: &PortfolioDocument,
    id: RecordId,
    field: &str,
    value: &str,
) -> PortfolioDocument {
    PortfolioDocument {
        projects: update_field(&doc.projects, id, field, value),
        ..doc.clone()
    }
}

pub fn remove_project(doc: &PortfolioDocument, id: RecordId) -> PortfolioDocument {
    PortfolioDocument {
        projects: remove(&doc.projects, id),
        ..doc.clone()
    }
}

pub fn add_portfolio_skill(doc: &PortfolioDocument, skill: &str) -> PortfolioDocument {
    PortfolioDocument {
        skills: add_tag(&doc.skills, skill),
        ..doc.clone()
    }
}

pub fn remove_portfolio_skill(doc: &PortfolioDocument, skill: &str) -> PortfolioDocument {
    PortfolioDocument {
        skills: remove_tag(&doc.skills, skill),
        ..doc.clone()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::models::document::{Education, Experience, Project, Skill};

    fn seeded() -> (IdGenerator, ResumeDocument, PortfolioDocument) {
        let ids = IdGenerator::new();
        let resume = ResumeDocument::seed(&ids);
        let portfolio = PortfolioDocument::seed(&ids);
        (ids, resume, portfolio)
    }

    fn assert_add_then_remove_restores<R: Record + PartialEq + std::fmt::Debug>(
        records: &[R],
        ids: &IdGenerator,
    ) {
        let (grown, id) = add(records, ids);
        assert_eq!(grown.len(), records.len() + 1);
        assert_eq!(grown.last().map(|r| r.id()), Some(id));
        assert_eq!(remove(&grown, id), records.to_vec());
    }

    #[test]
    fn test_add_then_remove_restores_every_collection() {
        let (ids, resume, portfolio) = seeded();
        assert_add_then_remove_restores(&resume.experience, &ids);
        assert_add_then_remove_restores(&resume.education, &ids);
        assert_add_then_remove_restores(&resume.skills, &ids);
        assert_add_then_remove_restores(&portfolio.projects, &ids);
        assert_add_then_remove_restores::<Experience>(&[], &ids);
    }

    #[test]
    fn test_add_appends_blank_record() {
        let (ids, resume, _) = seeded();
        let (next, id) = add(&resume.experience, &ids);
        assert_eq!(next[0], resume.experience[0]);
        assert_eq!(next[1], Experience::blank(id));
    }

    #[test]
    fn test_update_missing_id_is_noop_for_every_collection() {
        let (ids, resume, portfolio) = seeded();
        let missing = ids.next_id();

        assert_eq!(
            update_field(&resume.experience, missing, "company", "Acme"),
            resume.experience
        );
        assert_eq!(
            update_field(&resume.education, missing, "school", "MIT"),
            resume.education
        );
        assert_eq!(
            update_field(&resume.skills, missing, "name", "Rust"),
            resume.skills
        );
        assert_eq!(
            update_field(&portfolio.projects, missing, "title", "X"),
            portfolio.projects
        );
    }

    #[test]
    fn test_update_touches_only_target_record_and_field() {
        let (ids, resume, _) = seeded();
        let (two, new_id) = add(&resume.experience, &ids);
        let updated = update_field(&two, new_id, "position", "Staff Engineer");

        assert_eq!(updated[0], two[0]);
        assert_eq!(updated[1].position, "Staff Engineer");
        assert_eq!(
            Experience {
                position: String::new(),
                ..updated[1].clone()
            },
            Experience::blank(new_id)
        );
        // input untouched
        assert!(two[1].position.is_empty());
    }

    #[test]
    fn test_update_unknown_field_leaves_record_unchanged() {
        let (_, resume, _) = seeded();
        let id = resume.education[0].id;
        assert_eq!(
            update_field(&resume.education, id, "gpa", "4.0"),
            resume.education
        );
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let (ids, resume, _) = seeded();
        let missing = ids.next_id();
        assert_eq!(remove(&resume.skills, missing), resume.skills);
    }

    #[test]
    fn test_remove_preserves_order() {
        let (_, resume, _) = seeded();
        let second = resume.skills[1].id;
        let next = remove(&resume.skills, second);
        let names: Vec<&str> = next.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["React", "Node.js", "Web Design"]);
    }

    #[test]
    fn test_ids_never_collide_across_add_remove_sequences() {
        let (ids, resume, _) = seeded();
        let mut seen: HashSet<RecordId> = resume.skills.iter().map(|s| s.id).collect();
        let mut skills: Vec<Skill> = resume.skills.clone();

        for round in 0..50 {
            let (next, id) = add(&skills, &ids);
            assert!(seen.insert(id), "id {id} reused in round {round}");
            skills = next;
            if round % 3 == 0 {
                let first = skills[0].id;
                skills = remove(&skills, first);
            }
        }
    }

    #[test]
    fn test_resume_collection_ops() {
        let (ids, resume, _) = seeded();
        let (doc, id) = ResumeCollection::Education.add(&resume, &ids);
        assert_eq!(doc.education.len(), 2);
        assert_eq!(doc.experience, resume.experience);

        let doc = ResumeCollection::Education.update_field(&doc, id, "degree", "MSc");
        assert_eq!(doc.education[1].degree, "MSc");

        let doc = ResumeCollection::Education.remove(&doc, id);
        assert_eq!(doc, resume);
    }

    #[test]
    fn test_collection_fields() {
        assert_eq!(ResumeCollection::Skills.fields(), &["name"]);
        assert!(ResumeCollection::Education
            .fields()
            .contains(&"graduationDate"));
        assert_eq!(Education::FIELDS.len(), 4);
        assert_eq!(Project::FIELDS.len(), 4);
    }

    #[test]
    fn test_resume_collection_deserializes_from_path_segment() {
        let c: ResumeCollection = serde_json::from_str(r#""skills""#).unwrap();
        assert_eq!(c, ResumeCollection::Skills);
        assert!(serde_json::from_str::<ResumeCollection>(r#""awards""#).is_err());
    }

    #[test]
    fn test_personal_and_profile_updates() {
        let (_, resume, portfolio) = seeded();
        let doc = update_personal(&resume, "location", "Berlin");
        assert_eq!(doc.personal.location, "Berlin");
        assert_eq!(resume.personal.location, "San Francisco, CA");

        let p = update_profile(&portfolio, "title", "SRE");
        assert_eq!(p.title, "SRE");
        let p = update_social(&p, "github", "https://github.com/ada");
        assert_eq!(p.social_links.github, "https://github.com/ada");
    }

    #[test]
    fn test_tags_deduplicate_and_trim() {
        let (_, _, portfolio) = seeded();
        let p = add_portfolio_skill(&portfolio, "  Rust ");
        assert_eq!(p.skills.last().map(String::as_str), Some("Rust"));
        let again = add_portfolio_skill(&p, "Rust");
        assert_eq!(again.skills, p.skills);
        let blank = add_portfolio_skill(&p, "   ");
        assert_eq!(blank.skills, p.skills);

        let removed = remove_portfolio_skill(&p, "React");
        assert!(!removed.skills.contains(&"React".to_string()));
        assert_eq!(removed.skills.len(), p.skills.len() - 1);
    }

    #[test]
    fn test_project_ops() {
        let (ids, _, portfolio) = seeded();
        let (p, id) = add_project(&portfolio, &ids);
        let p = update_project(&p, id, "link", "https://example.com");
        assert_eq!(p.projects[1].link, "https://example.com");
        assert_eq!(remove_project(&p, id).projects, portfolio.projects);
    }
}
