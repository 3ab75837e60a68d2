//! Job categories and keyword matching of free-form job positions.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobCategory {
    SoftwareEngineer,
    DataScientist,
    ProductManager,
    Marketing,
    Sales,
    CustomerService,
    Finance,
    HumanResources,
    Design,
    Operations,
}

impl JobCategory {
    /// Declaration order; direct matches are tried in this order.
    pub const ALL: [JobCategory; 10] = [
        JobCategory::SoftwareEngineer,
        JobCategory::DataScientist,
        JobCategory::ProductManager,
        JobCategory::Marketing,
        JobCategory::Sales,
        JobCategory::CustomerService,
        JobCategory::Finance,
        JobCategory::HumanResources,
        JobCategory::Design,
        JobCategory::Operations,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            JobCategory::SoftwareEngineer => "Software Engineer",
            JobCategory::DataScientist    => "Data Scientist",
            JobCategory::ProductManager   => "Product Manager",
            JobCategory::Marketing        => "Marketing",
            JobCategory::Sales            => "Sales",
            JobCategory::CustomerService  => "Customer Service",
            JobCategory::Finance          => "Finance",
            JobCategory::HumanResources   => "Human Resources",
            JobCategory::Design           => "Design/UX",
            JobCategory::Operations       => "Operations",
        }
    }
}

impl fmt::Display for JobCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Keyword rules applied after direct name matches, in priority order.
const KEYWORD_RULES: &[(&[&str], JobCategory)] = &[
    (&["develop", "software", "program", "code"], JobCategory::SoftwareEngineer),
    (&["data", "machine learning", "analytics"],  JobCategory::DataScientist),
    (&["market"],                                 JobCategory::Marketing),
    (&["sale"],                                   JobCategory::Sales),
    (&["design", "ux", "user experience"],        JobCategory::Design),
];

/// Pick the category whose question bank best fits `job_position`.
///
/// A category name contained in the position wins; otherwise the first
/// matching keyword rule; otherwise Software Engineer.
pub fn find_closest_category(job_position: &str) -> JobCategory {
    let position = job_position.to_lowercase();

    if let Some(category) = JobCategory::ALL
        .iter()
        .find(|c| position.contains(&c.display_name().to_lowercase()))
    {
        return *category;
    }

    KEYWORD_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| position.contains(k)))
        .map(|(_, category)| *category)
        .unwrap_or(JobCategory::SoftwareEngineer)
}
