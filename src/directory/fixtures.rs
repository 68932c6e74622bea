//! Sample directory data used when the backend is unreachable, and as the
//! deterministic dataset for tests.

use super::{CandidatePool, Founder, Member, Organization, Project, ProjectStage, ProjectType};

/// The default candidate pool: ten members, three projects, one organization.
#[must_use]
pub fn default_pool() -> CandidatePool {
    CandidatePool {
        members: members(),
        projects: projects(),
        organizations: organizations(),
    }
}

fn member(
    id: u64,
    (first_name, last_name): (&str, &str),
    location: &str,
    pod: &str,
    skills: &str,
    additional_info: &str,
) -> Member {
    Member {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!(
            "{}.{}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        region: "NA".to_string(),
        location: location.to_string(),
        session: "S1".to_string(),
        pod: pod.to_string(),
        internship: None,
        skills: skills.to_string(),
        additional_info: additional_info.to_string(),
        slug: Some(format!(
            "{}-{}",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        )),
    }
}

fn members() -> Vec<Member> {
    vec![
        member(
            1,
            ("Alex", "Chen"),
            "San Francisco, CA",
            "Stripe",
            "Graphic Design, UI/UX, Social Media Marketing, Brand Identity, Logo Design, Video Editing",
            "Experienced in creating brand identities and marketing materials for startups. Specializes in logo design and social media graphics.",
        ),
        member(
            2,
            ("Emma", "Rodriguez"),
            "New York, NY",
            "Zoom",
            "Visual Design, Illustration, Digital Marketing, Content Creation, Brand Strategy, Presentations",
            "Specializes in social media graphics and marketing campaigns. Has worked with multiple startups on branding projects.",
        ),
        member(
            3,
            ("David", "Kim"),
            "Austin, TX",
            "Google",
            "Product Management, Startup Strategy, User Research, Growth Hacking, MVP Development, Business Strategy",
            "Former founder looking to join early-stage startups. Experienced in building and launching MVPs.",
        ),
        member(
            4,
            ("Sarah", "Johnson"),
            "Boston, MA",
            "Zoom",
            "Marketing, Content Creation, Brand Strategy, Event Planning, Networking, Soft Skills",
            "Based in Boston and available for local collaborations. Active in the local startup community.",
        ),
        member(
            5,
            ("James", "Wilson"),
            "Seattle, WA",
            "Microsoft",
            "Mobile Development, React Native, iOS, Android, Full Stack Development, JavaScript, Engineering",
            "Experienced mobile developer with 3+ years building iOS and Android apps. Strong background in React Native.",
        ),
        member(
            6,
            ("Lisa", "Zhang"),
            "San Francisco, CA",
            "Stripe",
            "Full Stack Development, React, Node.js, Python, Database Design, PostgreSQL, Web Development",
            "Full stack developer with experience in startup environments. Proficient in React, Node.js, and PostgreSQL.",
        ),
        member(
            7,
            ("Rachel", "Thompson"),
            "Los Angeles, CA",
            "Google",
            "Digital Marketing, Growth Marketing, Brand Strategy, Customer Acquisition, Content Creation, Social Media Strategy",
            "Marketing specialist with experience in B2B and B2C campaigns. Expert in content creation and social media strategy.",
        ),
        member(
            8,
            ("Kevin", "Park"),
            "New York, NY",
            "Stripe",
            "Data Analysis, Market Research, Business Strategy, Financial Modeling, Venture Capital, Math",
            "Currently interning at Rove, interested in venture capital and startup ecosystem.",
        ),
        member(
            9,
            ("Amanda", "Foster"),
            "Chicago, IL",
            "Zoom",
            "Fintech, Blockchain, Financial Services, Product Strategy, Networking, Foreign Languages",
            "Active member of FinTech Nexus community. Always happy to connect with other fintech professionals.",
        ),
        member(
            10,
            ("Taylor", "Brown"),
            "Denver, CO",
            "Microsoft",
            "Full Stack Development, React, Node.js, PostgreSQL, No-Code Platforms, Web Development",
            "Experienced in both traditional web development and no-code solutions. Can help evaluate different approaches for MVPs.",
        ),
    ]
}

fn founder(first_name: &str, last_name: &str) -> Founder {
    Founder {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: Some(format!(
            "{}.{}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        )),
    }
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "Founder Dashboard".to_string(),
            project_type: ProjectType::Startup,
            stage: ProjectStage::Mvp,
            what_are_they_looking_for: "Looking for marketing and design talent to help with branding and user acquisition. Also need developers familiar with React and Node.js.".to_string(),
            additional_info: "A comprehensive dashboard for young founders to track projects, goals, startup progress, and even prep for apps or pitches.".to_string(),
            founders: vec![founder("Mike", "Davis")],
            slug: Some("founder-dashboard".to_string()),
        },
        Project {
            id: 2,
            title: "TeachShare".to_string(),
            project_type: ProjectType::Startup,
            stage: ProjectStage::Launched,
            what_are_they_looking_for: "Seeking educators and content creators to help develop educational materials and expand our platform.".to_string(),
            additional_info: "Educational platform connecting teachers and students globally.".to_string(),
            founders: vec![founder("Caleb", "Lu")],
            slug: Some("teachshare".to_string()),
        },
        Project {
            id: 3,
            title: "EcoConnect".to_string(),
            project_type: ProjectType::NonProfit,
            stage: ProjectStage::Idea,
            what_are_they_looking_for: "Looking for developers and designers to help build a platform for connecting environmental organizations.".to_string(),
            additional_info: "A platform to connect environmental organizations and volunteers for sustainability projects.".to_string(),
            founders: vec![founder("Sarah", "Green")],
            slug: Some("ecoconnect".to_string()),
        },
    ]
}

fn organizations() -> Vec<Organization> {
    vec![Organization {
        id: 1,
        name: "FinTech Nexus".to_string(),
        org_type: Some("CM".to_string()),
        description: "A community of fintech professionals and enthusiasts. Great place to network and learn about the latest in financial technology.".to_string(),
        website: Some("https://fintechnexus.com".to_string()),
    }]
}
