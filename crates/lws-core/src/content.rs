//! Static site copy
//!
//! Everything here is plain data; the front end decides how it looks.
//! [`render`] is the single place that maps a [`Page`] to its content.

use chrono::Datelike;

use crate::page::Page;

pub const COMPANY_NAME: &str = "Lokhand Wala Web Solutions";
pub const COMPANY_LEGAL_NAME: &str = "Lokhand Wala Web Solution House";
pub const COMPANY_PITCH: &str =
    "Transforming ideas into digital reality through innovative web solutions.";

/// Heading block for a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageContent {
    pub page: Page,
    /// Document title
    pub title: &'static str,
    pub heading: &'static str,
    pub tagline: &'static str,
}

static HOME: PageContent = PageContent {
    page: Page::Home,
    title: "Lokhand Wala Web Solutions | Home",
    heading: "Transform Your Digital Presence",
    tagline: "Professional web solutions tailored to your business needs",
};

static SERVICES: PageContent = PageContent {
    page: Page::Services,
    title: "Lokhand Wala Web Solutions | Services",
    heading: "Our Services",
    tagline: "We offer a comprehensive range of web solutions to help your business grow",
};

static ABOUT: PageContent = PageContent {
    page: Page::About,
    title: "Lokhand Wala Web Solutions | About",
    heading: "About Us",
    tagline: "Learn about our journey, values, and the team behind Lokhand Wala Web Solutions",
};

static CONTACT: PageContent = PageContent {
    page: Page::Contact,
    title: "Lokhand Wala Web Solutions | Contact",
    heading: "Contact Us",
    tagline: "Get in touch with us for inquiries, quotes, or collaborations",
};

/// Content for the given page
pub fn render(page: Page) -> &'static PageContent {
    match page {
        Page::Services => &SERVICES,
        Page::About => &ABOUT,
        Page::Contact => &CONTACT,
        Page::Home => &HOME,
    }
}

// ─────────────────────────────────────────────────────────────────
// Home
// ─────────────────────────────────────────────────────────────────

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub fn features() -> Vec<Feature> {
    vec![
        Feature {
            icon: "\u{1F680}",
            title: "Fast Delivery",
            desc: "We deliver projects on time without compromising quality",
        },
        Feature {
            icon: "\u{1F48E}",
            title: "Quality Assurance",
            desc: "Rigorous testing ensures bug-free and responsive websites",
        },
        Feature {
            icon: "\u{1F6E0}\u{FE0F}",
            title: "Support & Maintenance",
            desc: "Continuous support even after project completion",
        },
    ]
}

pub struct Testimonial {
    pub quote: &'static str,
    pub client: &'static str,
    pub company: &'static str,
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: "Lokhand Wala Web Solutions transformed our online presence completely. Highly recommended!",
            client: "Rajesh Mehta",
            company: "Mehta Enterprises",
        },
        Testimonial {
            quote: "Professional team with excellent technical skills. Delivered beyond our expectations.",
            client: "Priya Singh",
            company: "Singh Consultancy",
        },
    ]
}

// ─────────────────────────────────────────────────────────────────
// Services
// ─────────────────────────────────────────────────────────────────

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub highlights: [&'static str; 3],
}

pub fn services() -> Vec<Service> {
    vec![
        Service {
            icon: "\u{1F4BB}",
            title: "Web Development",
            desc: "Custom websites and web applications built with modern technologies like React, Node.js, and more.",
            highlights: [
                "Responsive Design",
                "E-commerce Solutions",
                "Content Management Systems",
            ],
        },
        Service {
            icon: "\u{1F4F1}",
            title: "Mobile App Development",
            desc: "iOS and Android applications that provide seamless user experiences.",
            highlights: [
                "Native iOS & Android Apps",
                "Cross-Platform Solutions",
                "UI/UX Focused Design",
            ],
        },
        Service {
            icon: "\u{1F3A8}",
            title: "UI/UX Design",
            desc: "User-centered designs that enhance engagement and conversion.",
            highlights: [
                "Wireframing & Prototyping",
                "User Research & Testing",
                "Brand Identity Design",
            ],
        },
        Service {
            icon: "\u{1F50D}",
            title: "SEO Optimization",
            desc: "Increase your visibility and rank higher in search results.",
            highlights: [
                "Keyword Research",
                "On-Page Optimization",
                "Performance Analytics",
            ],
        },
        Service {
            icon: "\u{2601}\u{FE0F}",
            title: "Cloud Solutions",
            desc: "Scalable and secure cloud infrastructure for your applications.",
            highlights: [
                "AWS & Azure Deployment",
                "Serverless Architecture",
                "Database Management",
            ],
        },
        Service {
            icon: "\u{1F6D2}",
            title: "E-commerce Solutions",
            desc: "Complete online store development with payment integration.",
            highlights: [
                "Shopping Cart Systems",
                "Payment Gateway Integration",
                "Inventory Management",
            ],
        },
    ]
}

// ─────────────────────────────────────────────────────────────────
// About
// ─────────────────────────────────────────────────────────────────

pub const STORY: [&str; 2] = [
    "Founded in 2015, Lokhand Wala Web Solution House started as a small team of passionate developers with a vision to deliver exceptional digital experiences. Today, we've grown into a full-service web development agency serving clients across various industries.",
    "Our mission is to empower businesses with cutting-edge technology and innovative design that sets them apart from the competition. We believe in building long-term relationships with our clients based on trust, quality, and mutual success.",
];

pub const APPROACH_INTRO: &str =
    "We follow a client-centric approach where we focus on understanding your business goals and challenges before proposing solutions. Our process involves:";

pub const APPROACH_STEPS: [&str; 5] = [
    "Thorough requirement analysis",
    "Agile development methodology",
    "Continuous client collaboration",
    "Rigorous quality assurance",
    "Post-launch support and maintenance",
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub fn stats() -> Vec<Stat> {
    vec![
        Stat {
            value: "50+",
            label: "Projects Completed",
        },
        Stat {
            value: "30+",
            label: "Happy Clients",
        },
        Stat {
            value: "5+",
            label: "Years Experience",
        },
        Stat {
            value: "15+",
            label: "Team Members",
        },
    ]
}

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
}

pub fn team() -> Vec<TeamMember> {
    vec![
        TeamMember {
            name: "Rahul Lokhand Wala",
            role: "Founder & CEO",
        },
        TeamMember {
            name: "Priya Sharma",
            role: "Lead Designer",
        },
        TeamMember {
            name: "Vikram Singh",
            role: "Senior Developer",
        },
        TeamMember {
            name: "Anjali Patel",
            role: "Project Manager",
        },
    ]
}

// ─────────────────────────────────────────────────────────────────
// Contact
// ─────────────────────────────────────────────────────────────────

pub const CONTACT_INTRO: &str =
    "We're here to answer any questions you may have about our services. Reach out to us and we'll respond as soon as we can.";

pub struct ContactDetail {
    pub icon: &'static str,
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

pub fn contact_details() -> Vec<ContactDetail> {
    vec![
        ContactDetail {
            icon: "\u{1F4E7}",
            title: "Email",
            lines: &["info@lokhandwalawebsolutions.com"],
        },
        ContactDetail {
            icon: "\u{1F4DE}",
            title: "Phone",
            lines: &["+91 1234567890"],
        },
        ContactDetail {
            icon: "\u{1F3E2}",
            title: "Address",
            lines: &["123 Business Street, Mumbai, India - 400001"],
        },
        ContactDetail {
            icon: "\u{1F552}",
            title: "Business Hours",
            lines: &["Monday - Friday: 9AM - 6PM", "Saturday: 10AM - 4PM"],
        },
    ]
}

// ─────────────────────────────────────────────────────────────────
// Footer
// ─────────────────────────────────────────────────────────────────

pub const SOCIAL_ICONS: [&str; 4] = [
    "\u{1F4F1}",
    "\u{1F4AC}",
    "\u{1F4F8}",
    "\u{1F468}\u{200D}\u{1F4BC}",
];

pub fn copyright_notice_for(year: i32) -> String {
    format!("\u{00A9} {year} {COMPANY_LEGAL_NAME}. All rights reserved.")
}

/// Copyright line for the current local year
pub fn copyright_notice() -> String {
    copyright_notice_for(chrono::Local::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_render_matches_requested_page() {
        for page in Page::ALL {
            assert_eq!(render(page).page, page);
        }
    }

    #[test]
    fn test_each_page_has_unique_content() {
        let headings: HashSet<_> = Page::ALL.iter().map(|p| render(*p).heading).collect();
        let titles: HashSet<_> = Page::ALL.iter().map(|p| render(*p).title).collect();
        assert_eq!(headings.len(), Page::ALL.len());
        assert_eq!(titles.len(), Page::ALL.len());
    }

    #[test]
    fn test_unknown_fragment_renders_home() {
        assert_eq!(render(Page::from_slug("#careers")), render(Page::Home));
        assert_eq!(render(Page::from_slug("")), render(Page::Home));
        assert_eq!(render(Page::from_slug("#about")).page, Page::About);
    }

    #[test]
    fn test_collections_are_populated() {
        assert_eq!(features().len(), 3);
        assert_eq!(testimonials().len(), 2);
        assert_eq!(services().len(), 6);
        assert_eq!(stats().len(), 4);
        assert_eq!(team().len(), 4);
        assert_eq!(contact_details().len(), 4);
    }

    #[test]
    fn test_copyright_notice_for_year() {
        assert_eq!(
            copyright_notice_for(2031),
            "\u{00A9} 2031 Lokhand Wala Web Solution House. All rights reserved."
        );
        assert!(copyright_notice().contains(COMPANY_LEGAL_NAME));
    }
}
