use crate::profile::Profile;

/// Year the site was built, stamped by build.rs.
pub const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Education,
    Achievements,
    Contact,
}

impl Section {
    /// Sections linked from the nav bar. Home is reached through the brand link.
    pub const NAV: [Section; 7] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Education,
        Section::Achievements,
        Section::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::Achievements => "Achievements",
            Section::Contact => "Contact",
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Achievements => "achievements",
            Section::Contact => "contact",
        }
    }

    pub fn anchor(&self) -> String {
        format!("#{}", self.id())
    }
}

pub fn mailto_href(email: &str) -> String {
    format!("mailto:{email}")
}

/// `tel:` link for a formatted phone number; whitespace and `+` are dropped.
pub fn tel_href(phone: &str) -> String {
    let digits = phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '+')
        .collect::<String>();
    format!("tel:{digits}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: String,
    pub text: &'static str,
}

/// Entries of the contact section, in display order.
pub fn contact_links(profile: &Profile) -> Vec<ContactLink> {
    vec![
        ContactLink {
            label: "Email",
            href: mailto_href(profile.email),
            text: profile.email,
        },
        ContactLink {
            label: "Phone",
            href: tel_href(profile.phone),
            text: profile.phone,
        },
        ContactLink {
            label: "LinkedIn",
            href: profile.links.linkedin.to_string(),
            text: "LinkedIn",
        },
        ContactLink {
            label: "GitHub",
            href: profile.links.github.to_string(),
            text: "GitHub",
        },
    ]
}

pub fn copyright_line(year: &str, name: &str) -> String {
    format!("© {year} {name}. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::PROFILE;

    #[test]
    fn test_nav_anchors() {
        let anchors = Section::NAV.iter().map(Section::anchor).collect::<Vec<_>>();
        assert_eq!(
            anchors,
            vec![
                "#about",
                "#skills",
                "#projects",
                "#experience",
                "#education",
                "#achievements",
                "#contact"
            ]
        );
        assert_eq!(Section::Home.anchor(), "#home");
    }

    #[test]
    fn test_ids_are_lowercase_labels() {
        for section in Section::NAV.iter().chain([Section::Home].iter()) {
            assert_eq!(section.id(), section.label().to_lowercase());
        }
    }

    #[test]
    fn test_tel_href_strips_spaces_and_plus() {
        assert_eq!(tel_href("+63 963 509 5073"), "tel:639635095073");
        assert_eq!(tel_href("555\t0100"), "tel:5550100");
        assert_eq!(tel_href(""), "tel:");
    }

    #[test]
    fn test_mailto_href() {
        assert_eq!(
            mailto_href("robert.llemit@gmail.com"),
            "mailto:robert.llemit@gmail.com"
        );
    }

    #[test]
    fn test_contact_links_from_profile() {
        let links = contact_links(&PROFILE);
        let labels = links.iter().map(|l| l.label).collect::<Vec<_>>();
        assert_eq!(labels, vec!["Email", "Phone", "LinkedIn", "GitHub"]);
        assert_eq!(links[1].href, "tel:639635095073");
        assert_eq!(links[1].text, "+63 963 509 5073");
        assert_eq!(links[2].href, "#");
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line("2025", PROFILE.name),
            "© 2025 ROBERT JOHNN C. LLEMIT. All rights reserved."
        );
        assert_eq!(BUILD_YEAR.len(), 4);
    }
}
