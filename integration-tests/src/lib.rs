/// JSON fixture loading for the integration suite.
pub mod fixtures;
