//! Fixed store keys, one per content document

pub const PERSONAL_INFO_KEY: &str = "personal-info";
pub const EXPERIENCES_KEY: &str = "experiences";
pub const PROJECTS_KEY: &str = "projects";
pub const SKILLS_KEY: &str = "skills";
pub const CONTACT_MESSAGES_KEY: &str = "contact-messages";
