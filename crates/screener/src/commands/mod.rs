pub mod job;
pub mod rank;
pub mod report;
pub mod screen;
pub mod skills;
pub mod version;
