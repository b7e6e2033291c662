use errors::ParseError;
use models::{Coordinate, LocationFile};

pub mod consts;
pub mod errors;
pub mod models;

/// Scales every E7 record to decimal degrees, keeping the input order.
pub fn parse(file_content: &LocationFile) -> Vec<Coordinate> {
    file_content
        .locations
        .iter()
        .map(|record| record.to_coordinate())
        .collect()
}

pub fn parse_text(file_text: &str) -> Result<Vec<Coordinate>, ParseError> {
    let file_content: LocationFile = serde_json::from_str(file_text)?;
    Ok(parse(&file_content))
}
