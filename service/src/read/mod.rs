//! Read entities definitions.

pub mod dashboard;
pub mod email;
pub mod job_seeker;
pub mod notification;
pub mod recruiter;
