//! # Project Request
//!
//! File: cli/src/commands/scaffold/request.rs
//! Author: Christi Mahu
//!
//! The user's input after normalization, plus the values derived from it that
//! the templates need.
//!
use crate::core::error::{Result, ScaffoldError};

/// What the user asked for: a project name and an optional competition URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    dir_name: String,
    competition_url: String,
}

impl ProjectRequest {
    /// Normalizes `project_name` (lowercase, spaces to underscores). The URL
    /// is kept as given; an empty string means "no competition".
    pub fn new(project_name: &str, competition_url: &str) -> Result<Self> {
        let dir_name = normalize_project_name(project_name);
        if dir_name.is_empty() {
            anyhow::bail!(ScaffoldError::ArgumentParsing(
                "project name must not be empty".to_string()
            ));
        }
        Ok(Self {
            dir_name,
            competition_url: competition_url.to_string(),
        })
    }

    /// Directory name of the project root.
    pub fn dir_name(&self) -> &str {
        &self.dir_name
    }

    pub fn competition_url(&self) -> &str {
        &self.competition_url
    }

    /// Heading used in the README, e.g. `house_prices` -> `House Prices`.
    pub fn title(&self) -> String {
        title_case(&self.dir_name).replace('_', " ")
    }

    /// Last path segment of the competition URL, used as `COMPETITION_NAME`.
    pub fn competition_name(&self) -> &str {
        competition_name_from_url(&self.competition_url)
    }
}

fn normalize_project_name(raw: &str) -> String {
    raw.to_lowercase().replace(' ', "_")
}

/// Uppercases each letter that starts a run of letters and lowercases the rest.
fn title_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut prev_is_letter = false;
    for c in input.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            result.push(c);
            prev_is_letter = false;
        }
    }
    result
}

fn competition_name_from_url(url: &str) -> &str {
    url.trim_end_matches('/').rsplit('/').next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_project_name() {
        assert_eq!(normalize_project_name("titanic"), "titanic");
        assert_eq!(normalize_project_name("House Prices"), "house_prices");
        assert_eq!(normalize_project_name("My  Big Comp"), "my__big_comp");
        assert_eq!(normalize_project_name("Already_Snake-Case"), "already_snake-case");
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = ProjectRequest::new("", "").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::ArgumentParsing(_))
        ));
        // Whitespace still produces a usable directory name.
        assert_eq!(ProjectRequest::new(" ", "").unwrap().dir_name(), "_");
    }

    #[test]
    fn test_title() {
        let title = |name: &str| ProjectRequest::new(name, "").unwrap().title();
        assert_eq!(title("titanic"), "Titanic");
        assert_eq!(title("House Prices"), "House Prices");
        assert_eq!(title("house_prices"), "House Prices");
        assert_eq!(title("spaceship-titanic"), "Spaceship-Titanic");
        assert_eq!(title("m5 forecasting2accuracy"), "M5 Forecasting2Accuracy");
    }

    #[test]
    fn test_competition_name_from_url() {
        assert_eq!(
            competition_name_from_url("https://www.kaggle.com/competitions/titanic"),
            "titanic"
        );
        assert_eq!(
            competition_name_from_url("https://www.kaggle.com/competitions/titanic/"),
            "titanic"
        );
        assert_eq!(
            competition_name_from_url("https://www.kaggle.com/c/house-prices//"),
            "house-prices"
        );
        assert_eq!(competition_name_from_url("titanic"), "titanic");
        assert_eq!(competition_name_from_url(""), "");
        assert_eq!(competition_name_from_url("/"), "");
    }

    #[test]
    fn test_request_accessors() {
        let request =
            ProjectRequest::new("Titanic", "https://www.kaggle.com/competitions/titanic").unwrap();
        assert_eq!(request.dir_name(), "titanic");
        assert_eq!(request.competition_name(), "titanic");
        assert_eq!(
            request.competition_url(),
            "https://www.kaggle.com/competitions/titanic"
        );
    }
}
