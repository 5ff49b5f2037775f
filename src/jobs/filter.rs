use super::catalog::Job;
use serde::Deserialize;

/// Search criteria for the job catalog
///
/// All criteria are conjunctive; an empty filter matches every listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobFilter {
    /// Case-insensitive free-text match against title, company, and skills
    pub query: Option<String>,

    /// Acceptable experience bands; empty means any
    pub experience: Vec<String>,

    /// Acceptable locations; empty means any
    pub locations: Vec<String>,

    /// Salary band in thousands of USD; a listing matches if its range
    /// overlaps the requested band
    pub salary_min_k: Option<u32>,
    pub salary_max_k: Option<u32>,
}

impl JobFilter {
    pub fn matches(&self, job: &Job) -> bool {
        if let Some(query) = &self.query {
            let query = query.trim().to_lowercase();
            if !query.is_empty() {
                let in_title = job.title.to_lowercase().contains(&query);
                let in_company = job.company.to_lowercase().contains(&query);
                let in_skills = job
                    .skills
                    .iter()
                    .any(|s| s.to_lowercase().contains(&query));
                if !(in_title || in_company || in_skills) {
                    return false;
                }
            }
        }

        if !self.experience.is_empty()
            && !self
                .experience
                .iter()
                .any(|e| e.eq_ignore_ascii_case(&job.experience))
        {
            return false;
        }

        if !self.locations.is_empty()
            && !self
                .locations
                .iter()
                .any(|l| l.eq_ignore_ascii_case(&job.location))
        {
            return false;
        }

        if let Some(min) = self.salary_min_k {
            if job.salary_max_k < min {
                return false;
            }
        }

        if let Some(max) = self.salary_max_k {
            if job.salary_min_k > max {
                return false;
            }
        }

        true
    }
}
