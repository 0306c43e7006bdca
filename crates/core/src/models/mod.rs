pub mod chart;
pub mod comparison;
pub mod market;
pub mod portfolio;
pub mod request;
pub mod settings;
pub mod view;
