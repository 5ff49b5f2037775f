use super::filter::JobFilter;
use serde::{Deserialize, Serialize};

/// Working arrangement for a job listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkType {
    Remote,
    Hybrid,
    Onsite,
}

/// A single job listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Listing identifier
    pub id: String,

    /// Role title
    pub title: String,

    pub company: String,

    pub location: String,

    pub work_type: WorkType,

    /// Required experience band (e.g., "3-5 years")
    pub experience: String,

    /// Salary range in thousands of USD per year
    pub salary_min_k: u32,
    pub salary_max_k: u32,

    /// Short role description
    pub description: String,

    /// Skill tags used for text search
    pub skills: Vec<String>,

    /// Human-readable posting age label (demo data, not a timestamp)
    pub posted_at: String,
}

/// In-memory job catalog
///
/// Listings are fixed demo data loaded at startup; there is no
/// persistence behind this.
#[derive(Debug, Clone)]
pub struct JobCatalog {
    jobs: Vec<Job>,
}

impl JobCatalog {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }

    /// Catalog seeded with the demo listings
    pub fn with_demo_listings() -> Self {
        Self::new(demo_listings())
    }

    /// All listings in catalog order
    pub fn all(&self) -> &[Job] {
        &self.jobs
    }

    pub fn get(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    /// Listings matching the filter, in catalog order
    pub fn search(&self, filter: &JobFilter) -> Vec<Job> {
        self.jobs
            .iter()
            .filter(|j| filter.matches(j))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

fn demo_listings() -> Vec<Job> {
    vec![
        Job {
            id: "1".to_string(),
            title: "Senior Frontend Engineer".to_string(),
            company: "TechVision Inc.".to_string(),
            location: "San Francisco, CA".to_string(),
            work_type: WorkType::Remote,
            experience: "5+ years".to_string(),
            salary_min_k: 140,
            salary_max_k: 180,
            description: "Build and own user-facing features across our analytics platform, working closely with design and product.".to_string(),
            skills: vec!["React".into(), "TypeScript".into(), "CSS".into(), "GraphQL".into()],
            posted_at: "2 days ago".to_string(),
        },
        Job {
            id: "2".to_string(),
            title: "Full Stack Developer".to_string(),
            company: "CloudScale Solutions".to_string(),
            location: "New York, NY".to_string(),
            work_type: WorkType::Hybrid,
            experience: "3-5 years".to_string(),
            salary_min_k: 120,
            salary_max_k: 160,
            description: "Ship features end to end across a Node.js and PostgreSQL stack powering our infrastructure dashboard.".to_string(),
            skills: vec!["Node.js".into(), "PostgreSQL".into(), "React".into(), "Docker".into()],
            posted_at: "4 days ago".to_string(),
        },
        Job {
            id: "3".to_string(),
            title: "Machine Learning Engineer".to_string(),
            company: "DataMind AI".to_string(),
            location: "Remote".to_string(),
            work_type: WorkType::Remote,
            experience: "3-5 years".to_string(),
            salary_min_k: 150,
            salary_max_k: 200,
            description: "Design, train, and deploy models for our recommendation pipeline; own the path from notebook to production.".to_string(),
            skills: vec!["Python".into(), "PyTorch".into(), "MLOps".into(), "SQL".into()],
            posted_at: "1 week ago".to_string(),
        },
        Job {
            id: "4".to_string(),
            title: "Backend Engineer".to_string(),
            company: "BrightPath Labs".to_string(),
            location: "Austin, TX".to_string(),
            work_type: WorkType::Onsite,
            experience: "1-2 years".to_string(),
            salary_min_k: 90,
            salary_max_k: 120,
            description: "Grow our payments API alongside a small senior team; strong mentorship and code review culture.".to_string(),
            skills: vec!["Go".into(), "gRPC".into(), "Kubernetes".into()],
            posted_at: "3 days ago".to_string(),
        },
        Job {
            id: "5".to_string(),
            title: "DevOps Engineer".to_string(),
            company: "NovaSoft".to_string(),
            location: "Chicago, IL".to_string(),
            work_type: WorkType::Hybrid,
            experience: "3-5 years".to_string(),
            salary_min_k: 110,
            salary_max_k: 150,
            description: "Own CI/CD and infrastructure-as-code for a platform serving millions of daily requests.".to_string(),
            skills: vec!["Terraform".into(), "AWS".into(), "Kubernetes".into(), "Python".into()],
            posted_at: "5 days ago".to_string(),
        },
        Job {
            id: "6".to_string(),
            title: "Junior Software Engineer".to_string(),
            company: "Vertex Systems".to_string(),
            location: "Los Angeles, CA".to_string(),
            work_type: WorkType::Onsite,
            experience: "Entry Level".to_string(),
            salary_min_k: 70,
            salary_max_k: 95,
            description: "Start your career on our internal tools team; pair daily with experienced engineers across the stack.".to_string(),
            skills: vec!["JavaScript".into(), "Python".into(), "Git".into()],
            posted_at: "1 day ago".to_string(),
        },
    ]
}
