//! Static page content: profile text, projects, services and contact links

use crate::types::{ProjectRecord, SocialLink};

pub const OWNER_NAME: &str = "Shiva Rama Krishna Reddy";

pub const HEADLINE: &str = "Motivated Computer Science student with strong programming skills, expertise in Data Structures and Algorithms, \
and a passion for real-time data analysis. Proficient in Machine Learning with hands-on project experience, eager to \
apply skills and learn through an internship.";

pub const ABOUT: &[&str] = &[
    "I'm a passionate data analyst who thrives on transforming raw data into actionable insights. \
I specialize in data cleaning, visualization, and statistical analysis using tools like Python, Pandas, NumPy, SQL, and Excel. \
I build compelling dashboards with Power BI and apply machine learning techniques with Scikit-learn to uncover trends and patterns.",
    "I enjoy turning complex datasets into clear, meaningful stories that support smart decision-making. \
Always curious, always learning something new.",
    "Let's build amazing together!",
];

pub const SERVICES: &str = "I offer responsive web development, full-stack solutions, and UI/UX \
design tailored to your business needs.";

pub const CONTACT_BLURB: &str = "Feel free to reach out to me via email or through my social media.";

pub const EMAIL: &str = "shivaramakrishnareddykeshi@gmail.com";

pub const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        title: "Chat Bot for Food Stories",
        date: "Aug 2024 - Nov 2024",
        description: &[
            "Developed a user-friendly food ordering chatbot enabling direct customer-chef communication,reducing wait times and enhancing efficiency.",
        ],
        technologies: "Python, HTML, CSS, Dialogflow",
        repo_link: "https://github.com/shivaram-2004/chat-bot-food-stories",
    },
    ProjectRecord {
        title: "Cash It",
        date: "Feb 2024",
        description: &[
            "Designed a user-friendly web application, Cash It, enabling users to exchange liquid cash for online amounts and vice versa.",
        ],
        technologies: "HTML, CSS, JSP, MySQL",
        repo_link: "https://github.com/shivaram-2004/CASH_IT",
    },
    ProjectRecord {
        title: "Product and Return Sales Dashboard",
        date: "Feb 2025",
        description: &[
            "Developed an interactive Power BI dashboard for Product and Return Sales analysis, integrating data from multiple sources to track sales performance",
        ],
        technologies: "Power BI",
        // Same link as the chat bot entry; reported at startup by duplicate_repo_links()
        repo_link: "https://github.com/shivaram-2004/chat-bot-food-stories",
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/shiva-rama-krishna-reddy/",
        icon: egui_phosphor::regular::LINKEDIN_LOGO,
        color: 0x0e76a8,
    },
    SocialLink {
        label: "GitHub",
        url: "https://github.com/shivaram-2004",
        icon: egui_phosphor::regular::GITHUB_LOGO,
        color: 0x333333,
    },
    SocialLink {
        label: "Instagram",
        url: "https://www.instagram.com/your-username",
        icon: egui_phosphor::regular::INSTAGRAM_LOGO,
        color: 0xe1306c,
    },
];

/// Repository links shared by more than one project, with the titles using each.
pub fn duplicate_repo_links() -> Vec<(&'static str, Vec<&'static str>)> {
    let mut seen: Vec<(&'static str, Vec<&'static str>)> = Vec::new();
    for project in PROJECTS {
        match seen.iter_mut().find(|(url, _)| *url == project.repo_link) {
            Some((_, titles)) => titles.push(project.title),
            None => seen.push((project.repo_link, vec![project.title])),
        }
    }
    seen.retain(|(_, titles)| titles.len() > 1);
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_list_matches_fixed_data() {
        assert_eq!(PROJECTS.len(), 3);

        let first = &PROJECTS[0];
        assert_eq!(first.title, "Chat Bot for Food Stories");
        assert_eq!(first.date, "Aug 2024 - Nov 2024");
        assert_eq!(first.technologies, "Python, HTML, CSS, Dialogflow");
        assert_eq!(
            first.repo_link,
            "https://github.com/shivaram-2004/chat-bot-food-stories"
        );
        assert_eq!(first.description.len(), 1);

        let titles: Vec<_> = PROJECTS.iter().map(|p| p.title).collect();
        assert_eq!(
            titles,
            [
                "Chat Bot for Food Stories",
                "Cash It",
                "Product and Return Sales Dashboard"
            ]
        );
        assert_eq!(PROJECTS[1].technologies, "HTML, CSS, JSP, MySQL");
        assert_eq!(PROJECTS[1].repo_link, "https://github.com/shivaram-2004/CASH_IT");
        assert_eq!(PROJECTS[2].date, "Feb 2025");
        assert_eq!(PROJECTS[2].technologies, "Power BI");
    }

    #[test]
    fn every_link_is_https() {
        let urls = PROJECTS
            .iter()
            .map(|p| p.repo_link)
            .chain(SOCIAL_LINKS.iter().map(|s| s.url));
        for url in urls {
            assert!(url.starts_with("https://"), "{url}");
        }
    }

    #[test]
    fn shared_repo_link_is_reported() {
        let dups = duplicate_repo_links();
        assert_eq!(dups.len(), 1);
        let (url, titles) = &dups[0];
        assert_eq!(*url, "https://github.com/shivaram-2004/chat-bot-food-stories");
        assert_eq!(
            titles,
            &["Chat Bot for Food Stories", "Product and Return Sales Dashboard"]
        );
    }
}
