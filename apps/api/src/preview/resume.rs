use serde::Serialize;

use crate::models::document::{Education, Experience, ResumeDocument};
use crate::models::record::RecordId;
use crate::preview::{contact_line, visible_section, visible_text, Layout, Project, TemplateId};

/// Shown when the résumé has no name yet.
pub const NAME_PLACEHOLDER: &str = "Your Name";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeView {
    pub template: TemplateId,
    pub layout: Layout,
    pub full_name: String,
    pub contact_line: String,
    pub summary: Option<String>,
    pub experience: Option<Vec<ExperienceView>>,
    pub education: Option<Vec<EducationView>>,
    pub skills: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceView {
    pub id: RecordId,
    pub company: String,
    pub position: String,
    pub date_range: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationView {
    pub id: RecordId,
    pub school: String,
    pub degree: String,
    pub field: Option<String>,
    pub graduation_date: String,
}

impl Project for ResumeDocument {
    type View = ResumeView;

    fn project(&self, template: TemplateId) -> ResumeView {
        let personal = &self.personal;
        ResumeView {
            template,
            layout: template.layout(),
            full_name: visible_text(&personal.full_name)
                .unwrap_or_else(|| NAME_PLACEHOLDER.to_string()),
            contact_line: contact_line(&[&personal.email, &personal.phone, &personal.location]),
            summary: visible_text(&personal.summary),
            experience: visible_section(self.experience.iter().map(experience_view).collect()),
            education: visible_section(self.education.iter().map(education_view).collect()),
            // Section visibility follows the collection; blank names are not tagged.
            skills: (!self.skills.is_empty()).then(|| {
                self.skills
                    .iter()
                    .filter_map(|s| visible_text(&s.name))
                    .collect()
            }),
        }
    }
}

fn experience_view(exp: &Experience) -> ExperienceView {
    ExperienceView {
        id: exp.id,
        company: exp.company.clone(),
        position: exp.position.clone(),
        date_range: date_range(&exp.start_date, &exp.end_date),
        description: exp.description.clone(),
    }
}

fn education_view(edu: &Education) -> EducationView {
    EducationView {
        id: edu.id,
        school: edu.school.clone(),
        degree: edu.degree.clone(),
        field: visible_text(&edu.field),
        graduation_date: edu.graduation_date.clone(),
    }
}

/// `start - end`. The start always shows, even when blank; ` - end` is
/// appended only when an end date is set.
fn date_range(start: &str, end: &str) -> String {
    let (start, end) = (start.trim(), end.trim());
    if end.is_empty() {
        start.to_string()
    } else {
        format!("{start} - {end}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::{update_field, update_personal, ResumeCollection};
    use crate::models::record::IdGenerator;

    fn seed() -> (IdGenerator, ResumeDocument) {
        let ids = IdGenerator::new();
        let doc = ResumeDocument::seed(&ids);
        (ids, doc)
    }

    #[test]
    fn test_projection_is_deterministic() {
        let (_, doc) = seed();
        assert_eq!(
            doc.project(TemplateId::Minimal),
            doc.project(TemplateId::Minimal)
        );
    }

    #[test]
    fn test_single_field_change_touches_only_that_view_field() {
        let (_, doc) = seed();
        let before = doc.project(TemplateId::Minimal);
        let after = update_personal(&doc, "phone", "").project(TemplateId::Minimal);

        assert_ne!(before.contact_line, after.contact_line);
        assert_eq!(
            ResumeView {
                contact_line: before.contact_line.clone(),
                ..after
            },
            before
        );
    }

    #[test]
    fn test_seed_projection() {
        let (_, doc) = seed();
        let view = doc.project(TemplateId::Minimal);
        assert_eq!(view.full_name, "John Doe");
        assert_eq!(
            view.contact_line,
            "john@example.com • +1 (555) 123-4567 • San Francisco, CA"
        );
        let exp = view.experience.unwrap();
        assert_eq!(exp[0].date_range, "2022 - Present");
        assert_eq!(view.skills.unwrap().len(), 4);
    }

    #[test]
    fn test_empty_document_hides_every_section() {
        let view = ResumeDocument::default().project(TemplateId::Minimal);
        assert_eq!(view.full_name, NAME_PLACEHOLDER);
        assert_eq!(view.contact_line, "");
        assert!(view.summary.is_none());
        assert!(view.experience.is_none());
        assert!(view.education.is_none());
        assert!(view.skills.is_none());
    }

    #[test]
    fn test_whitespace_summary_is_hidden() {
        let (_, doc) = seed();
        let view = update_personal(&doc, "summary", "  \n ").project(TemplateId::Minimal);
        assert!(view.summary.is_none());
    }

    #[test]
    fn test_add_experience_then_set_company() {
        let (ids, doc) = seed();
        let doc = ResumeDocument {
            experience: vec![],
            ..doc
        };
        let (doc, id) = ResumeCollection::Experience.add(&doc, &ids);
        let doc = ResumeCollection::Experience.update_field(&doc, id, "company", "Acme");

        let entries = doc.project(TemplateId::Minimal).experience.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0],
            ExperienceView {
                id,
                company: "Acme".to_string(),
                position: String::new(),
                date_range: String::new(),
                description: String::new(),
            }
        );
    }

    #[test]
    fn test_seed_plus_added_experience_keeps_insertion_order() {
        let (ids, doc) = seed();
        let (doc, id) = ResumeCollection::Experience.add(&doc, &ids);
        let doc = ResumeCollection::Experience.update_field(&doc, id, "company", "Acme");
        let entries = doc.project(TemplateId::Minimal).experience.unwrap();
        let acme: Vec<_> = entries.iter().filter(|e| e.company == "Acme").collect();
        assert_eq!(acme.len(), 1);
        assert_eq!(entries.last().map(|e| e.id), Some(id));
    }

    #[test]
    fn test_date_range_variants() {
        assert_eq!(date_range("2020", ""), "2020");
        assert_eq!(date_range("", "Present"), " - Present");
        assert_eq!(date_range("", ""), "");
        assert_eq!(date_range("2019", "2021"), "2019 - 2021");
    }

    #[test]
    fn test_blank_skills_are_not_tagged() {
        let (ids, doc) = seed();
        let (doc, _) = ResumeCollection::Skills.add(&doc, &ids);
        let view = doc.project(TemplateId::Minimal);
        assert_eq!(view.skills.unwrap().len(), 4);
    }

    #[test]
    fn test_education_field_optional() {
        let (_, doc) = seed();
        let id = doc.education[0].id;
        let doc = ResumeDocument {
            education: update_field(&doc.education, id, "field", ""),
            ..doc
        };
        let edu = doc.project(TemplateId::Minimal).education.unwrap();
        assert!(edu[0].field.is_none());
    }

    #[test]
    fn test_placeholder_template_keeps_full_view() {
        let (_, doc) = seed();
        let minimal = doc.project(TemplateId::Minimal);
        let modern = doc.project(TemplateId::Modern);
        assert!(matches!(modern.layout, Layout::Placeholder { .. }));
        assert_eq!(modern.experience, minimal.experience);
        assert_eq!(modern.skills, minimal.skills);
        assert_eq!(modern.contact_line, minimal.contact_line);
    }
}
