//! Category catalog
//!
//! Categories are a fixed editorial taxonomy with display metadata, not a
//! dynamic entity: posts reference them by slug and unknown references fall
//! back to the default entry.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// A blog category with display metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogCategory {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub color: String,
    pub icon: String,
    pub order: u32,
}

impl BlogCategory {
    fn new(
        id: &str,
        name: &str,
        slug: &str,
        description: &str,
        color: &str,
        icon: &str,
        order: u32,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            slug: slug.to_string(),
            description: description.to_string(),
            color: color.to_string(),
            icon: icon.to_string(),
            order,
        }
    }
}

lazy_static! {
    /// The editorial category catalog, in canonical display order
    pub static ref CATEGORIES: Vec<BlogCategory> = vec![
        BlogCategory::new(
            "parent-communication",
            "Parent Communication",
            "parent-communication",
            "Building strong home-school partnerships through clear, consistent messaging",
            "#4F86F7",
            "message-circle",
            1,
        ),
        BlogCategory::new(
            "teaching-strategies",
            "Teaching Strategies",
            "teaching-strategies",
            "Practical instructional techniques for everyday classrooms",
            "#34C759",
            "lightbulb",
            2,
        ),
        BlogCategory::new(
            "classroom-management",
            "Classroom Management",
            "classroom-management",
            "Routines, expectations, and behavior systems that work",
            "#FF9500",
            "layout-grid",
            3,
        ),
        BlogCategory::new(
            "student-engagement",
            "Student Engagement",
            "student-engagement",
            "Keeping learners curious, motivated, and involved",
            "#AF52DE",
            "sparkles",
            4,
        ),
        BlogCategory::new(
            "education-technology",
            "Education Technology",
            "education-technology",
            "Tools and workflows that save teachers time",
            "#00C7BE",
            "monitor",
            5,
        ),
        BlogCategory::new(
            "assessment-feedback",
            "Assessment & Feedback",
            "assessment-feedback",
            "Grading, rubrics, and feedback students actually read",
            "#FF2D55",
            "clipboard-check",
            6,
        ),
        BlogCategory::new(
            "professional-development",
            "Professional Development",
            "professional-development",
            "Growing as an educator, one semester at a time",
            "#5856D6",
            "graduation-cap",
            7,
        ),
        BlogCategory::new(
            "teacher-wellbeing",
            "Teacher Wellbeing",
            "teacher-wellbeing",
            "Workload, boundaries, and staying well in the profession",
            "#FFCC00",
            "heart",
            8,
        ),
    ];
}

/// Look up a category by its slug
pub fn category_by_slug(slug: &str) -> Option<&'static BlogCategory> {
    CATEGORIES.iter().find(|c| c.slug == slug)
}

/// The fallback category for posts with a missing or unknown category
pub fn default_category() -> &'static BlogCategory {
    &CATEGORIES[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size_and_order() {
        assert_eq!(CATEGORIES.len(), 8);
        for (i, cat) in CATEGORIES.iter().enumerate() {
            assert_eq!(cat.order as usize, i + 1);
        }
    }

    #[test]
    fn test_default_is_teaching_strategies() {
        assert_eq!(default_category().slug, "teaching-strategies");
    }

    #[test]
    fn test_lookup() {
        assert_eq!(
            category_by_slug("classroom-management").map(|c| c.name.as_str()),
            Some("Classroom Management")
        );
        assert!(category_by_slug("does-not-exist").is_none());
    }
}
