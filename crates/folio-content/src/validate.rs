//! Content batch validation
//!
//! Every record in a batch is checked independently and the whole batch is
//! rejected on the first violation, so a failed write never lands
//! partially. Messages are specific on purpose: the caller is already
//! authenticated when these run (except the public contact form, where the
//! message text is the only free-form field worth explaining).

use thiserror::Error;

use crate::models::{Experience, PersonalInfo, Project, SkillCategory};

/// Minimum length of a contact message body
pub const MIN_MESSAGE_LENGTH: usize = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(pub String);

fn require(condition: bool, message: impl Into<String>) -> Result<(), ValidationError> {
    if condition {
        Ok(())
    } else {
        Err(ValidationError(message.into()))
    }
}

fn non_empty(value: &str, field: &str) -> Result<(), ValidationError> {
    require(!value.trim().is_empty(), format!("{} must not be empty", field))
}

/// Validate the personal-info document
pub fn validate_personal_info(info: &PersonalInfo) -> Result<(), ValidationError> {
    non_empty(&info.name, "name")?;
    non_empty(&info.title, "title")?;
    non_empty(&info.description, "description")?;
    non_empty(&info.contact.email, "contact.email")?;
    non_empty(&info.contact.phone, "contact.phone")?;
    Ok(())
}

/// Validate a batch of experience records
pub fn validate_experiences(experiences: &[Experience]) -> Result<(), ValidationError> {
    for exp in experiences {
        non_empty(&exp.id, "experience id")?;
        non_empty(&exp.company, &format!("company of experience '{}'", exp.id))?;
        non_empty(&exp.role, &format!("role of experience '{}'", exp.id))?;
        non_empty(&exp.period.start, &format!("period.start of experience '{}'", exp.id))?;
        non_empty(&exp.period.end, &format!("period.end of experience '{}'", exp.id))?;
        require(
            !exp.achievements.is_empty(),
            format!("experience '{}' needs at least one achievement", exp.id),
        )?;
        for achievement in &exp.achievements {
            non_empty(achievement, &format!("achievement of experience '{}'", exp.id))?;
        }
        if let Some(technologies) = &exp.technologies {
            for tech in technologies {
                non_empty(tech, &format!("technology of experience '{}'", exp.id))?;
            }
        }
    }
    Ok(())
}

/// Validate a batch of project records
pub fn validate_projects(projects: &[Project]) -> Result<(), ValidationError> {
    for project in projects {
        non_empty(&project.id, "project id")?;
        non_empty(&project.title, &format!("title of project '{}'", project.id))?;
        non_empty(&project.description, &format!("description of project '{}'", project.id))?;
        require(
            !project.technologies.is_empty(),
            format!("project '{}' needs at least one technology", project.id),
        )?;
        for tech in &project.technologies {
            non_empty(tech, &format!("technology of project '{}'", project.id))?;
        }
        if let Some(images) = &project.images {
            for image in images {
                non_empty(&image.url, &format!("image url of project '{}'", project.id))?;
            }
        }
        if let Some(achievements) = &project.achievements {
            for achievement in achievements {
                non_empty(achievement, &format!("achievement of project '{}'", project.id))?;
            }
        }
        if let Some(metrics) = &project.metrics {
            for metric in metrics {
                non_empty(&metric.label, &format!("metric label of project '{}'", project.id))?;
                non_empty(&metric.value, &format!("metric value of project '{}'", project.id))?;
            }
        }
    }
    Ok(())
}

/// Validate a batch of skill categories, including the category/skill
/// referential check: a skill's categoryId must equal its parent's id.
pub fn validate_skill_categories(categories: &[SkillCategory]) -> Result<(), ValidationError> {
    for category in categories {
        non_empty(&category.id, "skill category id")?;
        non_empty(&category.name, &format!("name of skill category '{}'", category.id))?;
        for skill in &category.skills {
            non_empty(&skill.id, &format!("skill id in category '{}'", category.id))?;
            non_empty(&skill.name, &format!("name of skill '{}'", skill.id))?;
            require(
                skill.category_id == category.id,
                format!(
                    "skill '{}' has categoryId '{}' but belongs to category '{}'",
                    skill.id, skill.category_id, category.id
                ),
            )?;
        }
    }
    Ok(())
}

/// Validate a submitted contact-form payload
pub fn validate_new_message(
    name: &str,
    email: &str,
    message: &str,
) -> Result<(), ValidationError> {
    non_empty(name, "name")?;
    non_empty(email, "email")?;
    require(email.contains('@'), "email must be a valid address")?;
    require(
        message.chars().count() >= MIN_MESSAGE_LENGTH,
        format!("message must be at least {} characters", MIN_MESSAGE_LENGTH),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::*;

    fn project(id: &str) -> Project {
        Project {
            id: id.to_string(),
            title: "Folio".to_string(),
            description: "A portfolio backend".to_string(),
            technologies: vec!["rust".to_string()],
            featured: Some(true),
            date: Some("2025-11".to_string()),
            images: None,
            achievements: None,
            metrics: None,
            links: None,
        }
    }

    fn skill(id: &str, category_id: &str) -> Skill {
        Skill {
            id: id.to_string(),
            name: id.to_string(),
            category_id: category_id.to_string(),
            proficiency: None,
            priority: None,
        }
    }

    #[test]
    fn test_valid_project_batch_passes() {
        assert!(validate_projects(&[project("a"), project("b")]).is_ok());
    }

    #[test]
    fn test_project_without_technologies_rejected() {
        let mut p = project("a");
        p.technologies.clear();
        let err = validate_projects(&[p]).unwrap_err();
        assert!(err.0.contains("at least one technology"));
    }

    #[test]
    fn test_project_metric_needs_label_and_value() {
        let mut p = project("a");
        p.metrics = Some(vec![ProjectMetric {
            label: "Users".to_string(),
            value: "".to_string(),
        }]);
        assert!(validate_projects(&[p]).is_err());
    }

    #[test]
    fn test_one_bad_record_rejects_whole_batch() {
        let mut bad = project("b");
        bad.title = String::new();
        assert!(validate_projects(&[project("a"), bad]).is_err());
    }

    #[test]
    fn test_skill_category_referential_integrity() {
        let good = SkillCategory {
            id: "languages".to_string(),
            name: "Languages".to_string(),
            skills: vec![skill("rust", "languages")],
        };
        assert!(validate_skill_categories(std::slice::from_ref(&good)).is_ok());

        let stray = SkillCategory {
            id: "tools".to_string(),
            name: "Tools".to_string(),
            skills: vec![skill("git", "languages")],
        };
        let err = validate_skill_categories(&[good, stray]).unwrap_err();
        assert!(err.0.contains("categoryId"));
    }

    #[test]
    fn test_experience_needs_achievements() {
        let exp = Experience {
            id: "acme".to_string(),
            company: "Acme".to_string(),
            role: "Engineer".to_string(),
            period: Period {
                start: "2021-03".to_string(),
                end: "Present".to_string(),
            },
            description: None,
            achievements: vec![],
            technologies: None,
        };
        assert!(validate_experiences(&[exp]).is_err());
    }

    #[test]
    fn test_personal_info_required_fields() {
        let mut info = PersonalInfo {
            name: "Ada".to_string(),
            title: "Engineer".to_string(),
            description: "Builds things".to_string(),
            contact: ContactDetails {
                email: "ada@example.com".to_string(),
                phone: "+1 555 0100".to_string(),
                location: None,
            },
            social_links: None,
        };
        assert!(validate_personal_info(&info).is_ok());
        info.contact.phone = "  ".to_string();
        assert!(validate_personal_info(&info).is_err());
    }

    #[test]
    fn test_message_length_boundary() {
        let nine = "123456789";
        let ten = "1234567890";
        let err = validate_new_message("Ada", "ada@example.com", nine).unwrap_err();
        assert!(err.0.contains("at least 10 characters"));
        assert!(validate_new_message("Ada", "ada@example.com", ten).is_ok());
    }

    #[test]
    fn test_message_email_shape() {
        assert!(validate_new_message("Ada", "not-an-email", "long enough text").is_err());
    }
}
