use crate::profile::Project;

/// Which project, if any, the detail modal is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectSelection(Option<&'static Project>);

impl ProjectSelection {
    pub fn select(&mut self, project: &'static Project) {
        self.0 = Some(project);
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    pub fn current(&self) -> Option<&'static Project> {
        self.0
    }

    /// Whether `project` is the one shown in the modal. Compares identity,
    /// since every selection comes from the profile's project list.
    pub fn is_selected(&self, project: &Project) -> bool {
        self.current().is_some_and(|p| std::ptr::eq(p, project))
    }

    pub fn is_open(&self) -> bool {
        self.0.is_some()
    }

    /// What the modal renders for the current selection. `None` hides it.
    pub fn modal(&self) -> Option<ModalContent> {
        self.0.map(ModalContent::from)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub image_href: String,
}

impl From<&'static Project> for ModalContent {
    fn from(project: &'static Project) -> Self {
        Self {
            title: project.title,
            description: project.description,
            tags: project.tags,
            image_href: project.image.href(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::PROFILE;

    fn project(title: &str) -> &'static Project {
        PROFILE
            .projects
            .iter()
            .find(|p| p.title == title)
            .expect("project should exist")
    }

    #[test]
    fn test_starts_empty() {
        let selection = ProjectSelection::default();
        assert!(!selection.is_open());
        assert_eq!(selection.current(), None);
        assert_eq!(selection.modal(), None);
    }

    #[test]
    fn test_select_then_clear_hides_modal() {
        let mut selection = ProjectSelection::default();
        selection.select(project("Glow Learning Payroll System"));
        assert!(selection.is_open());
        selection.clear();
        assert!(!selection.is_open());
        assert_eq!(selection.modal(), None);
    }

    #[test]
    fn test_last_selection_wins() {
        let mut selection = ProjectSelection::default();
        selection.select(project("Personal Portfolio Website"));
        selection.select(project("Interactive Learning"));
        assert_eq!(selection.current(), Some(project("Interactive Learning")));

        let modal = selection.modal().expect("modal should be open");
        assert_eq!(modal.title, "Interactive Learning");
        assert_ne!(modal.tags, project("Personal Portfolio Website").tags);
    }

    #[test]
    fn test_is_selected_tracks_current_project() {
        let mut selection = ProjectSelection::default();
        let first = project("Personal Portfolio Website");
        let second = project("Interactive Learning");
        assert!(!selection.is_selected(first));

        selection.select(first);
        assert!(selection.is_selected(first));
        assert!(!selection.is_selected(second));

        selection.select(second);
        assert!(!selection.is_selected(first));
        assert!(selection.is_selected(second));

        selection.clear();
        assert!(!selection.is_selected(second));
    }

    #[test]
    fn test_modal_shows_selected_project() {
        let mut selection = ProjectSelection::default();
        selection.select(project("Interactive Learning"));
        let modal = selection.modal().expect("modal should be open");
        assert_eq!(
            modal,
            ModalContent {
                title: "Interactive Learning",
                description: "A web-based interactive learning game for teachers towards the vision of students' activities.",
                tags: &["React", "Redux", "TailwindCSS"],
                image_href: "/images/interact.svg".to_string(),
            }
        );
    }

    #[test]
    fn test_selection_always_points_into_profile() {
        let mut selection = ProjectSelection::default();
        for p in PROFILE.projects {
            selection.select(p);
            let current = selection.current().expect("should be selected");
            assert!(PROFILE.projects.iter().any(|q| std::ptr::eq(q, current)));
        }
    }
}
