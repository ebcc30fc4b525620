pub mod anchor_extractor;
pub mod entities;
pub mod fragment_parser;
pub mod node;
