//! Presentation ordering
//!
//! The public site renders lists in a fixed order: skills by proficiency
//! then priority, experiences newest first, projects featured first then
//! by date. Sorting happens server-side so every client sees the same
//! arrangement.

use std::cmp::Reverse;

use crate::models::{Experience, Project, SkillCategory};

/// Sort each category's skills by proficiency (highest first), breaking
/// ties by priority (highest first).
pub fn sort_skills(categories: &mut [SkillCategory]) {
    for category in categories {
        category
            .skills
            .sort_by_key(|s| (Reverse(s.proficiency), Reverse(s.priority)));
    }
}

/// Parse an ISO-like period start ("2021" or "2021-03") into a sortable
/// (year, month) pair. Unparseable values sort last.
fn period_key(start: &str) -> (i32, u8) {
    let mut parts = start.splitn(2, '-');
    let year = parts.next().and_then(|y| y.trim().parse().ok()).unwrap_or(i32::MIN);
    let month = parts.next().and_then(|m| m.trim().parse().ok()).unwrap_or(0);
    (year, month)
}

/// Sort experiences most recent first. Ongoing roles (end == "Present")
/// are pinned ahead of finished ones.
pub fn sort_experiences(experiences: &mut [Experience]) {
    experiences.sort_by_key(|e| {
        let ongoing = e.period.end.eq_ignore_ascii_case("present");
        (Reverse(ongoing), Reverse(period_key(&e.period.start)))
    });
}

/// Sort projects featured-first, then by date descending. Projects
/// without a date sort after dated ones within their group.
pub fn sort_projects(projects: &mut [Project]) {
    projects.sort_by_key(|p| {
        let featured = p.featured.unwrap_or(false);
        let date = p.date.as_deref().map(period_key).unwrap_or((i32::MIN, 0));
        (Reverse(featured), Reverse(date))
    });
}
