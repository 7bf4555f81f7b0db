// Static configuration: section registry, resume route table, page copy.

pub mod profile;
pub mod resumes;
pub mod sections;

pub use profile::{Profile, PROFILE};
pub use resumes::{resolve, ResumeConfig, UnknownResume};
pub use sections::{Section, SectionRegistry, SECTIONS};
