use serde::Serialize;

use crate::models::document::{PortfolioDocument, Project as PortfolioProject};
use crate::models::record::RecordId;
use crate::preview::{contact_line, visible_section, visible_text, Layout, Project, TemplateId};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioView {
    pub template: TemplateId,
    pub layout: Layout,
    pub full_name: String,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub contact_line: String,
    pub skills: Option<Vec<String>>,
    pub projects: Option<Vec<ProjectView>>,
    pub social_links: Option<Vec<SocialLinkView>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub link: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinkView {
    pub network: &'static str,
    pub url: String,
}

impl Project for PortfolioDocument {
    type View = PortfolioView;

    fn project(&self, template: TemplateId) -> PortfolioView {
        PortfolioView {
            template,
            layout: template.layout(),
            full_name: self.full_name.clone(),
            title: visible_text(&self.title),
            bio: visible_text(&self.bio),
            contact_line: contact_line(&[&self.email, &self.phone]),
            skills: visible_section(self.skills.iter().filter_map(|s| visible_text(s)).collect()),
            projects: visible_section(self.projects.iter().map(project_view).collect()),
            social_links: visible_section(
                self.social_links
                    .entries()
                    .into_iter()
                    .filter_map(|(network, url)| {
                        visible_text(url).map(|url| SocialLinkView { network, url })
                    })
                    .collect(),
            ),
        }
    }
}

fn project_view(project: &PortfolioProject) -> ProjectView {
    ProjectView {
        id: project.id,
        title: project.title.clone(),
        description: project.description.clone(),
        link: visible_text(&project.link),
        image: visible_text(&project.image),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::{add_project, remove_project, update_social};
    use crate::models::record::IdGenerator;

    fn seed() -> (IdGenerator, PortfolioDocument) {
        let ids = IdGenerator::new();
        let doc = PortfolioDocument::seed(&ids);
        (ids, doc)
    }

    #[test]
    fn test_seed_projection() {
        let (_, doc) = seed();
        let view = doc.project(TemplateId::Minimal);
        assert_eq!(view.layout, Layout::Rendered);
        assert_eq!(view.full_name, "Your Name");
        assert_eq!(view.contact_line, "hello@example.com • +1 (555) 000-0000");
        assert_eq!(view.projects.unwrap().len(), 1);
        assert_eq!(view.social_links.unwrap().len(), 3);
    }

    #[test]
    fn test_social_links_hidden_when_all_blank() {
        let (_, doc) = seed();
        let doc = ["github", "linkedin", "twitter"]
            .into_iter()
            .fold(doc, |d, field| update_social(&d, field, ""));
        assert!(doc.project(TemplateId::Minimal).social_links.is_none());
    }

    #[test]
    fn test_partial_social_links_keep_order() {
        let (_, doc) = seed();
        let doc = update_social(&doc, "linkedin", "");
        let links = doc.project(TemplateId::Minimal).social_links.unwrap();
        let networks: Vec<_> = links.iter().map(|l| l.network).collect();
        assert_eq!(networks, vec!["github", "twitter"]);
    }

    #[test]
    fn test_projects_section_hidden_when_empty() {
        let (_, doc) = seed();
        let id = doc.projects[0].id;
        let view = remove_project(&doc, id).project(TemplateId::Minimal);
        assert!(view.projects.is_none());
    }

    #[test]
    fn test_new_project_has_no_link_or_image() {
        let (ids, doc) = seed();
        let (doc, id) = add_project(&doc, &ids);
        let projects = doc.project(TemplateId::Minimal).projects.unwrap();
        let added = projects.iter().find(|p| p.id == id).unwrap();
        assert!(added.link.is_none());
        assert!(added.image.is_none());
    }

    #[test]
    fn test_placeholder_templates_still_populated() {
        let (_, doc) = seed();
        let view = doc.project(TemplateId::Portfolio);
        assert!(matches!(view.layout, Layout::Placeholder { .. }));
        assert_eq!(view.skills.as_ref().map(Vec::len), Some(4));
        assert_eq!(
            view,
            PortfolioView {
                template: TemplateId::Portfolio,
                layout: TemplateId::Portfolio.layout(),
                ..doc.project(TemplateId::Minimal)
            }
        );
    }
}
