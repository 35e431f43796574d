//! Mentor discovery: free-text search plus the structured filter panel.
//!
//! All predicates are pure and preserve fixture order. Dimensions are ANDed:
//! a mentor must match the text, at least one selected skill and the minimum
//! rating. The availability selection is kept in [`MentorFilter`] and counted
//! as an active filter, but it does not narrow results.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::models::Mentor;

pub const SKILL_OPTIONS: [&str; 10] = [
    "React",
    "JavaScript",
    "Python",
    "Data Science",
    "Machine Learning",
    "Product Management",
    "UX Design",
    "Marketing",
    "Leadership",
    "Career Growth",
];

pub const AVAILABILITY_OPTIONS: [&str; 5] =
    ["Weekdays", "Weekends", "Mornings", "Evenings", "Flexible"];

pub const RATING_OPTIONS: [f32; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

/// Structured filters from the search panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MentorFilter {
    pub skills: BTreeSet<String>,
    pub min_rating: Option<f32>,
    pub availability: BTreeSet<String>,
}

impl MentorFilter {
    pub fn toggle_skill(&mut self, skill: &str) {
        toggle(&mut self.skills, skill);
    }

    pub fn toggle_availability(&mut self, slot: &str) {
        toggle(&mut self.availability, slot);
    }

    /// Selects `rating` as the minimum, or clears it when already selected.
    pub fn toggle_rating(&mut self, rating: f32) {
        self.min_rating = match self.min_rating {
            Some(current) if (current - rating).abs() < f32::EPSILON => None,
            _ => Some(rating),
        };
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Badge count on the filter button.
    pub fn active_count(&self) -> usize {
        self.skills.len() + usize::from(self.min_rating.is_some()) + self.availability.len()
    }

    pub fn is_active(&self) -> bool {
        self.active_count() > 0
    }

    /// Skill and rating predicates. Availability is not evaluated.
    pub fn matches(&self, mentor: &Mentor) -> bool {
        let skills = self.skills.is_empty() || mentor.skills.iter().any(|s| self.skills.contains(s));
        let rating = self.min_rating.is_none_or(|min| mentor.rating >= min);
        skills && rating
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}

/// Case-insensitive substring match on name, title, company or any skill.
/// Only an empty query matches every mentor; surrounding spaces are part of the needle.
pub fn matches_text(mentor: &Mentor, query: &str) -> bool {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    let hit = |field: &str| field.to_lowercase().contains(&needle);
    hit(&mentor.name)
        || hit(&mentor.title)
        || mentor.company.as_deref().is_some_and(hit)
        || mentor.skills.iter().any(|skill| hit(skill))
}

/// Mentors matching `query` and `filter`, in their original order.
pub fn search_mentors<'a>(
    mentors: &'a [Mentor],
    query: &str,
    filter: &MentorFilter,
) -> Vec<&'a Mentor> {
    mentors
        .iter()
        .filter(|mentor| matches_text(mentor, query) && filter.matches(mentor))
        .collect()
}

/// Browse categories on the Find Mentors page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
pub enum Category {
    SoftwareDevelopment,
    Design,
    ProductManagement,
    Marketing,
    DataScience,
    CareerDevelopment,
    Leadership,
}

impl Category {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SoftwareDevelopment => "Software Development",
            Self::Design => "Design",
            Self::ProductManagement => "Product Management",
            Self::Marketing => "Marketing",
            Self::DataScience => "Data Science",
            Self::CareerDevelopment => "Career Development",
            Self::Leadership => "Leadership",
        }
    }

    /// Skills that place a mentor in this category.
    #[must_use]
    pub const fn skills(self) -> &'static [&'static str] {
        match self {
            Self::SoftwareDevelopment => &[
                "React",
                "JavaScript",
                "Full-Stack Development",
                "System Architecture",
            ],
            Self::Design => &["UI/UX Design", "Design Systems"],
            Self::ProductManagement => &["Product Strategy", "Roadmapping", "Agile Methodologies"],
            Self::Marketing => &[
                "Digital Marketing",
                "Brand Strategy",
                "Content Creation",
                "Analytics",
            ],
            Self::DataScience => &["Machine Learning", "Python", "Data Analysis", "AI Ethics"],
            Self::CareerDevelopment => &["Career Growth", "Mentorship"],
            Self::Leadership => &["Leadership"],
        }
    }

    pub fn matches(self, mentor: &Mentor) -> bool {
        mentor
            .skills
            .iter()
            .any(|skill| self.skills().contains(&skill.as_str()))
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::iter().find(|category| category.label() == label)
    }
}

/// Full state of a mentor listing: text, filter panel and browse category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MentorQuery {
    pub text: String,
    pub filter: MentorFilter,
    pub category: Option<Category>,
}

impl MentorQuery {
    /// Selects `category`, or clears it when it is already selected.
    pub fn toggle_category(&mut self, category: Category) {
        self.category = if self.category == Some(category) {
            None
        } else {
            Some(category)
        };
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn run<'a>(&self, mentors: &'a [Mentor]) -> Vec<&'a Mentor> {
        let results: Vec<_> = search_mentors(mentors, &self.text, &self.filter)
            .into_iter()
            .filter(|mentor| self.category.is_none_or(|category| category.matches(mentor)))
            .collect();
        tracing::debug!(
            query = %self.text,
            filters = self.filter.active_count(),
            category = ?self.category,
            results = results.len(),
            "mentor search evaluated"
        );
        results
    }

    /// Line above the result grid, e.g. `Showing 2 mentors for "react" in Design`.
    pub fn results_summary(&self, count: usize) -> String {
        let noun = if count == 1 { "mentor" } else { "mentors" };
        let mut summary = format!("Showing {count} {noun}");
        let text = self.text.trim();
        if !text.is_empty() {
            summary.push_str(&format!(" for \"{text}\""));
        }
        if let Some(category) = self.category {
            summary.push_str(" in ");
            summary.push_str(category.label());
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn mentor(id: &str, name: &str, company: Option<&str>, skills: &[&str], rating: f32) -> Mentor {
        Mentor {
            id: id.into(),
            name: name.into(),
            title: "Engineer".into(),
            company: company.map(str::to_string),
            skills: skills.iter().map(|s| (*s).to_string()).collect(),
            rating,
            review_count: 10,
            featured: false,
            location: "Remote".into(),
            hourly_rate: 50,
            availability: "Weekends".into(),
        }
    }

    fn mentors() -> Vec<Mentor> {
        vec![
            mentor("1", "Sarah Johnson", Some("Google"), &["UI/UX Design", "Leadership"], 4.9),
            mentor("2", "Michael Chen", Some("Microsoft"), &["React", "Mentorship"], 4.8),
            mentor("3", "Emily Rodriguez", None, &["Digital Marketing"], 4.7),
        ]
    }

    fn ids<'a>(found: &[&'a Mentor]) -> Vec<&'a str> {
        found.iter().map(|m| m.id.as_str()).collect()
    }

    #[test_case("", &["1", "2", "3"] ; "empty query")]
    #[test_case("   ", &[] ; "blank query")]
    #[test_case(" react", &[] ; "leading space")]
    #[test_case("sarah johnson", &["1"] ; "inner space")]
    #[test_case("MICRO", &["2"] ; "company")]
    #[test_case("react", &["2"] ; "skill")]
    #[test_case("engineer", &["1", "2", "3"] ; "title")]
    #[test_case("emily", &["3"] ; "name")]
    #[test_case("kubernetes", &[] ; "no match")]
    fn test_text_search(query: &str, expected: &[&str]) {
        let mentors = mentors();
        let found = search_mentors(&mentors, query, &MentorFilter::default());
        assert_eq!(ids(&found), expected);
    }

    #[test]
    fn test_skill_filter_uses_or_semantics() {
        let mentors = mentors();
        let mut filter = MentorFilter::default();
        filter.toggle_skill("React");
        filter.toggle_skill("Leadership");
        assert_eq!(ids(&search_mentors(&mentors, "", &filter)), ["1", "2"]);
    }

    #[test]
    fn test_rating_filter_is_inclusive() {
        let mentors = mentors();
        let filter = MentorFilter {
            min_rating: Some(4.8),
            ..MentorFilter::default()
        };
        assert_eq!(ids(&search_mentors(&mentors, "", &filter)), ["1", "2"]);
    }

    #[test]
    fn test_dimensions_are_anded() {
        let mentors = mentors();
        let mut filter = MentorFilter::default();
        filter.toggle_skill("React");
        filter.toggle_rating(5.0);
        assert!(search_mentors(&mentors, "", &filter).is_empty());
    }

    #[test]
    fn test_availability_is_counted_but_not_applied() {
        let mentors = mentors();
        let mut filter = MentorFilter::default();
        filter.toggle_availability("Mornings");
        assert_eq!(filter.active_count(), 1);
        assert_eq!(search_mentors(&mentors, "", &filter).len(), 3);
    }

    #[test]
    fn test_toggles_and_clear() {
        let mut filter = MentorFilter::default();
        filter.toggle_skill("Python");
        filter.toggle_rating(4.0);
        filter.toggle_availability("Weekends");
        assert_eq!(filter.active_count(), 3);

        filter.toggle_skill("Python");
        filter.toggle_rating(4.0);
        assert_eq!(filter.active_count(), 1);
        assert!(filter.min_rating.is_none());

        filter.toggle_rating(3.0);
        filter.toggle_rating(5.0);
        assert_eq!(filter.min_rating, Some(5.0));

        filter.clear();
        assert!(!filter.is_active());
    }

    #[test]
    fn test_category_narrows_results() {
        let mentors = mentors();
        let mut query = MentorQuery::default();
        query.toggle_category(Category::CareerDevelopment);
        assert_eq!(ids(&query.run(&mentors)), ["2"]);

        query.toggle_category(Category::CareerDevelopment);
        assert_eq!(query.category, None);
        assert_eq!(query.run(&mentors).len(), 3);
    }

    #[test]
    fn test_category_labels_round_trip() {
        for category in Category::iter() {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
        assert_eq!(Category::from_label("Cooking"), None);
    }

    #[test]
    fn test_results_summary() {
        let mut query = MentorQuery::default();
        assert_eq!(query.results_summary(6), "Showing 6 mentors");
        query.text = " react ".into();
        query.category = Some(Category::SoftwareDevelopment);
        assert_eq!(
            query.results_summary(1),
            "Showing 1 mentor for \"react\" in Software Development"
        );
    }
}
