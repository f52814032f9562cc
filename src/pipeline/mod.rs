mod builder;
mod generator;

pub use builder::ReportBuilder;
pub use generator::ReportGenerator;
