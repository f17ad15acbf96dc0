//! Sample job catalog
//!
//! The fixed set of postings the Job Source searches. Both the server and
//! the client's offline fallback read from here, so the two can never drift.

use crate::domain::criteria::SearchCriteria;
use crate::domain::job::{JobRecord, Source};

/// An ordered, in-memory collection of job records
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<JobRecord>,
}

impl Catalog {
    /// Wrap an arbitrary list of records
    pub fn new(records: Vec<JobRecord>) -> Self {
        Self { records }
    }

    /// The built-in demonstration catalog
    pub fn sample() -> Self {
        Self::new(sample_records())
    }

    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First id that appears more than once, if any
    pub fn duplicate_id(&self) -> Option<u32> {
        let mut seen = std::collections::HashSet::new();
        self.records
            .iter()
            .map(|job| job.id)
            .find(|id| !seen.insert(*id))
    }

    /// Records matching the criteria's terms and filters, in catalog order
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<JobRecord> {
        criteria.select(&self.records)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn sample_records() -> Vec<JobRecord> {
    vec![
        JobRecord {
            id: 1,
            title: "Frontend Developer".to_string(),
            company: "TechCorp".to_string(),
            location: "San Francisco, CA".to_string(),
            salary: "$100,000 - $130,000".to_string(),
            job_type: "Full-time".to_string(),
            date_posted: "2 days ago".to_string(),
            description: "We are looking for a skilled Frontend Developer to join our team. You will be responsible for building user interfaces using React, implementing responsive designs, and collaborating with backend developers.".to_string(),
            requirements: strings(&[
                "Proficient in JavaScript, HTML, CSS",
                "3+ years of experience with React",
                "Experience with state management libraries",
                "Understanding of responsive design principles",
            ]),
            source: Source::Indeed,
            url: "#".to_string(),
        },
        JobRecord {
            id: 2,
            title: "Backend Engineer".to_string(),
            company: "DataSystems Inc.".to_string(),
            location: "Remote".to_string(),
            salary: "$120,000 - $150,000".to_string(),
            job_type: "Full-time".to_string(),
            date_posted: "1 day ago".to_string(),
            description: "Join our engineering team to build scalable backend services. You will design and implement APIs, optimize database queries, and ensure high performance of our systems.".to_string(),
            requirements: strings(&[
                "Strong experience with Node.js or Python",
                "Knowledge of SQL and NoSQL databases",
                "Experience with cloud services (AWS, GCP)",
                "Understanding of microservices architecture",
            ]),
            source: Source::Glassdoor,
            url: "#".to_string(),
        },
        JobRecord {
            id: 3,
            title: "Full Stack Developer".to_string(),
            company: "WebSolutions".to_string(),
            location: "New York, NY".to_string(),
            salary: "$110,000 - $140,000".to_string(),
            job_type: "Contract".to_string(),
            date_posted: "3 days ago".to_string(),
            description: "We are seeking a Full Stack Developer to join our team. You will work on both frontend and backend aspects of our applications, implementing new features and maintaining existing ones.".to_string(),
            requirements: strings(&[
                "Experience with JavaScript frameworks (React, Angular, or Vue)",
                "Backend experience with Node.js, Python, or Java",
                "Database design and management",
                "Experience with RESTful APIs",
            ]),
            source: Source::Indeed,
            url: "#".to_string(),
        },
        JobRecord {
            id: 4,
            title: "DevOps Engineer".to_string(),
            company: "CloudTech".to_string(),
            location: "Seattle, WA".to_string(),
            salary: "$130,000 - $160,000".to_string(),
            job_type: "Full-time".to_string(),
            date_posted: "Just now".to_string(),
            description: "As a DevOps Engineer, you will be responsible for maintaining our cloud infrastructure, implementing CI/CD pipelines, and ensuring the reliability and scalability of our systems.".to_string(),
            requirements: strings(&[
                "Experience with AWS, Azure, or GCP",
                "Knowledge of containerization (Docker, Kubernetes)",
                "Experience with CI/CD tools (Jenkins, GitLab CI)",
                "Infrastructure as Code (Terraform, CloudFormation)",
            ]),
            source: Source::Glassdoor,
            url: "#".to_string(),
        },
        JobRecord {
            id: 5,
            title: "UI/UX Designer".to_string(),
            company: "CreativeMinds".to_string(),
            location: "Austin, TX".to_string(),
            salary: "$90,000 - $120,000".to_string(),
            job_type: "Full-time".to_string(),
            date_posted: "1 week ago".to_string(),
            description: "We are looking for a talented UI/UX Designer to create amazing user experiences. You will collaborate with product managers and engineers to design intuitive interfaces for our web and mobile applications.".to_string(),
            requirements: strings(&[
                "Portfolio demonstrating UI/UX projects",
                "Proficiency in design tools (Figma, Sketch)",
                "Understanding of user-centered design principles",
                "Experience with design systems",
            ]),
            source: Source::Indeed,
            url: "#".to_string(),
        },
        JobRecord {
            id: 6,
            title: "Data Scientist".to_string(),
            company: "AnalyticsPro".to_string(),
            location: "Chicago, IL".to_string(),
            salary: "$115,000 - $145,000".to_string(),
            job_type: "Full-time".to_string(),
            date_posted: "3 days ago".to_string(),
            description: "Join our data science team to analyze complex datasets and build predictive models. You will work on machine learning algorithms and collaborate with cross-functional teams to drive data-informed decisions.".to_string(),
            requirements: strings(&[
                "Strong background in statistics and mathematics",
                "Experience with Python and data science libraries",
                "Knowledge of machine learning algorithms",
                "Experience with big data technologies",
            ]),
            source: Source::Glassdoor,
            url: "#".to_string(),
        },
        JobRecord {
            id: 7,
            title: "Product Manager".to_string(),
            company: "InnovateTech".to_string(),
            location: "Boston, MA".to_string(),
            salary: "$125,000 - $155,000".to_string(),
            job_type: "Full-time".to_string(),
            date_posted: "5 days ago".to_string(),
            description: "We are seeking an experienced Product Manager to lead the development of our software products. You will define product vision, gather requirements, and work closely with engineering and design teams.".to_string(),
            requirements: strings(&[
                "3+ years of product management experience",
                "Strong analytical and problem-solving skills",
                "Excellent communication and stakeholder management",
                "Technical background preferred",
            ]),
            source: Source::Indeed,
            url: "#".to_string(),
        },
        JobRecord {
            id: 8,
            title: "QA Engineer".to_string(),
            company: "QualitySoft".to_string(),
            location: "Denver, CO".to_string(),
            salary: "$85,000 - $110,000".to_string(),
            job_type: "Full-time".to_string(),
            date_posted: "2 days ago".to_string(),
            description: "As a QA Engineer, you will be responsible for ensuring the quality of our software products. You will design and execute test plans, identify bugs, and collaborate with developers to resolve issues.".to_string(),
            requirements: strings(&[
                "Experience with manual and automated testing",
                "Knowledge of testing methodologies",
                "Familiarity with test management tools",
                "Strong attention to detail",
            ]),
            source: Source::Glassdoor,
            url: "#".to_string(),
        },
        JobRecord {
            id: 9,
            title: "Mobile Developer (iOS)".to_string(),
            company: "AppWorks".to_string(),
            location: "Los Angeles, CA".to_string(),
            salary: "$110,000 - $140,000".to_string(),
            job_type: "Full-time".to_string(),
            date_posted: "1 week ago".to_string(),
            description: "We are looking for an iOS Developer to join our mobile team. You will be responsible for developing and maintaining iOS applications, implementing new features, and ensuring app performance.".to_string(),
            requirements: strings(&[
                "Proficiency in Swift and iOS SDK",
                "Experience with iOS frameworks and APIs",
                "Understanding of mobile app architecture",
                "Knowledge of App Store submission process",
            ]),
            source: Source::Indeed,
            url: "#".to_string(),
        },
        JobRecord {
            id: 10,
            title: "Technical Project Manager".to_string(),
            company: "ProjectPro".to_string(),
            location: "Remote".to_string(),
            salary: "$100,000 - $130,000".to_string(),
            job_type: "Contract".to_string(),
            date_posted: "4 days ago".to_string(),
            description: "As a Technical Project Manager, you will oversee the planning and execution of software development projects. You will coordinate team activities, manage timelines, and ensure project success.".to_string(),
            requirements: strings(&[
                "PMP certification preferred",
                "Experience managing software development projects",
                "Strong leadership and communication skills",
                "Technical background in software development",
            ]),
            source: Source::Glassdoor,
            url: "#".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_has_unique_ids() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.duplicate_id(), None);
    }

    #[test]
    fn test_duplicate_id_detected() {
        let mut records = sample_records();
        records[3].id = 1;
        assert_eq!(Catalog::new(records).duplicate_id(), Some(1));
    }

    #[test]
    fn test_sample_covers_both_sources() {
        let catalog = Catalog::sample();
        for source in Source::ALL {
            assert!(catalog.records().iter().any(|job| job.source == source));
        }
    }

    #[test]
    fn test_search_keeps_catalog_order() {
        let catalog = Catalog::sample();
        let hits = catalog.search(&SearchCriteria::new("engineer", ""));
        let ids: Vec<u32> = hits.iter().map(|job| job.id).collect();
        assert_eq!(ids, vec![2, 4, 5, 7, 8]);
    }
}
