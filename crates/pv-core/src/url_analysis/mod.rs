pub mod url_analyzer;
pub mod url_components;
