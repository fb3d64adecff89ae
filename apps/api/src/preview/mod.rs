// Live preview: pure transforms from a document snapshot to what the preview pane shows.
// No transform can fail for a structurally valid document.

pub mod analysis;
pub mod portfolio;
pub mod resume;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Separator placed between present members of a contact line.
pub const CONTACT_SEPARATOR: &str = " • ";

/// Shown in place of a layout that has no projection yet.
pub const PLACEHOLDER_MESSAGE: &str = "Preview coming for other templates";

/// Closed set of presentation templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    #[default]
    Minimal,
    Modern,
    Portfolio,
}

impl TemplateId {
    /// Resolves a template name, falling back to the default for unknown names.
    pub fn parse_or_default(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "minimal" => TemplateId::Minimal,
            "modern" => TemplateId::Modern,
            "portfolio" => TemplateId::Portfolio,
            other => {
                debug!("Unknown template '{other}', using default");
                TemplateId::default()
            }
        }
    }

    /// The layout this template renders with.
    pub fn layout(self) -> Layout {
        match self {
            TemplateId::Minimal => Layout::Rendered,
            TemplateId::Modern | TemplateId::Portfolio => Layout::Placeholder {
                message: PLACEHOLDER_MESSAGE.to_string(),
            },
        }
    }
}

/// Whether the chosen template can draw the view. A placeholder layout still
/// ships the complete view model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Layout {
    Rendered,
    Placeholder { message: String },
}

/// A document that can be projected for display.
pub trait Project {
    type View: Clone + PartialEq + Serialize;

    fn project(&self, template: TemplateId) -> Self::View;
}

/// `Some(text)` when `text` has content after trimming.
pub fn visible_text(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// `Some(items)` when there is at least one item.
pub fn visible_section<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

/// Joins the non-blank parts with [`CONTACT_SEPARATOR`], never leaving a
/// dangling separator.
pub fn contact_line(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(CONTACT_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_line_single_member_has_no_separator() {
        let line = contact_line(&["ada@example.com", "", ""]);
        assert_eq!(line, "ada@example.com");
        assert!(!line.contains('•'));
    }

    #[test]
    fn test_contact_line_two_members_one_separator() {
        let line = contact_line(&["ada@example.com", "", "London"]);
        assert_eq!(line, "ada@example.com • London");
        assert_eq!(line.matches(CONTACT_SEPARATOR).count(), 1);
    }

    #[test]
    fn test_contact_line_empty() {
        assert_eq!(contact_line(&["", "  ", ""]), "");
    }

    #[test]
    fn test_visible_text_trims() {
        assert_eq!(visible_text("   "), None);
        assert_eq!(visible_text(" hi "), Some(" hi ".to_string()));
    }

    #[test]
    fn test_template_fallback() {
        assert_eq!(TemplateId::parse_or_default("Modern"), TemplateId::Modern);
        assert_eq!(TemplateId::parse_or_default("brutalist"), TemplateId::Minimal);
        assert_eq!(TemplateId::parse_or_default(""), TemplateId::Minimal);
    }

    #[test]
    fn test_unimplemented_templates_get_placeholder() {
        assert_eq!(TemplateId::Minimal.layout(), Layout::Rendered);
        assert_eq!(
            TemplateId::Portfolio.layout(),
            Layout::Placeholder {
                message: PLACEHOLDER_MESSAGE.to_string()
            }
        );
    }
}
