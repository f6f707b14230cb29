//! Built-in content shown when the store is unconfigured or unreachable.

use crate::entities::{certificate::Certificate, project::Project};

const DASHBOARD_IMAGE: &str =
    "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&w=800&q=80";
const SECURITY_IMAGE: &str =
    "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?auto=format&fit=crop&w=800&q=80";
const PORTFOLIO_IMAGE: &str =
    "https://images.unsplash.com/photo-1507238691740-187a5b1d37b8?auto=format&fit=crop&w=800&q=80";
const GOOGLE_CERT_IMAGE: &str =
    "https://images.unsplash.com/photo-1573164713988-8665fc963095?auto=format&fit=crop&w=800&q=80";
const META_CERT_IMAGE: &str =
    "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?auto=format&fit=crop&w=800&q=80";

fn project(id: i64, title: &str, description: &str, stack: &[&str], image: &str, category: &str) -> Project {
    Project {
        id,
        title: title.to_string(),
        description: description.to_string(),
        tech_stack: stack.iter().map(|s| s.to_string()).collect(),
        demo_url: "#".to_string(),
        repo_url: "#".to_string(),
        image_url: image.to_string(),
        category: category.to_string(),
        created_at: None,
    }
}

fn certificate(id: i64, name: &str, issuer: &str, date: &str, image: &str) -> Certificate {
    Certificate {
        id,
        name: name.to_string(),
        issuer: issuer.to_string(),
        date: date.to_string(),
        credential_url: "#".to_string(),
        image_url: image.to_string(),
        created_at: None,
    }
}

pub fn sample_projects() -> Vec<Project> {
    vec![
        project(
            1,
            "E-Commerce Dashboard",
            "A comprehensive dashboard for managing online stores, featuring real-time analytics and inventory management.",
            &["React", "TypeScript", "Tailwind", "Supabase"],
            DASHBOARD_IMAGE,
            "Web App",
        ),
        project(
            2,
            "Network Security Scanner",
            "A python-based tool for scanning network vulnerabilities and generating detailed reports.",
            &["Python", "Flask", "Docker"],
            SECURITY_IMAGE,
            "Security",
        ),
        project(
            3,
            "Portfolio Website",
            "Modern personal portfolio with dark theme and smooth animations.",
            &["React", "GSAP", "Tailwind"],
            PORTFOLIO_IMAGE,
            "Web App",
        ),
    ]
}

pub fn sample_certificates() -> Vec<Certificate> {
    vec![
        certificate(1, "Certified Ethical Hacker (CEH)", "EC-Council", "2024", SECURITY_IMAGE),
        certificate(2, "Google Cybersecurity Professional", "Google", "2023", GOOGLE_CERT_IMAGE),
        certificate(3, "Meta Frontend Developer", "Meta", "2023", META_CERT_IMAGE),
    ]
}
