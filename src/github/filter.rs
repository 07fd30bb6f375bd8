use std::str::FromStr;

use crate::core::models::RepositorySummary;
use crate::errors::ApiError;

/// Project categories offered by the Projects section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    React,
    Typescript,
    Vanilla,
}

impl FromStr for ProjectFilter {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(ProjectFilter::All),
            "react" => Ok(ProjectFilter::React),
            "typescript" => Ok(ProjectFilter::Typescript),
            "vanilla" => Ok(ProjectFilter::Vanilla),
            _ => Err(ApiError::BadRequest(format!("Unknown project filter: {s}"))),
        }
    }
}

impl ProjectFilter {
    #[must_use]
    pub fn matches(self, repo: &RepositorySummary) -> bool {
        let language = repo.language.as_deref().unwrap_or("").to_lowercase();
        let has_tag = |t: &str| repo.tags.iter().any(|tag| tag.to_lowercase() == t);
        let mentions = |t: &str| {
            language.contains(t) || has_tag(t) || repo.name.to_lowercase().contains(t)
        };

        match self {
            ProjectFilter::All => true,
            ProjectFilter::React => mentions("react"),
            ProjectFilter::Typescript => mentions("typescript"),
            ProjectFilter::Vanilla => {
                language.contains("javascript")
                    && !language.contains("typescript")
                    && !has_tag("react")
            }
        }
    }

    #[must_use]
    pub fn apply(self, repos: Vec<RepositorySummary>) -> Vec<RepositorySummary> {
        if self == ProjectFilter::All {
            return repos;
        }
        repos.into_iter().filter(|r| self.matches(r)).collect()
    }
}
