use crate::locations::models::Coordinate;
use crate::map::consts::{
    HEAT_DEFAULT_BLUR, HEAT_DEFAULT_MAX_ZOOM, HEAT_DEFAULT_RADIUS, OSM_ATTRIBUTION, OSM_MAX_ZOOM,
    OSM_TILE_URL_TEMPLATE,
};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq)]
pub struct MapView {
    pub container_id: String,
    pub center: Coordinate,
    pub zoom: u8,
    pub tiles: TileLayerOptions,
    pub heat: HeatLayerOptions,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayerOptions {
    #[serde(skip_serializing)]
    pub url_template: String,
    pub attribution: String,
    pub max_zoom: u8,
}

impl Default for TileLayerOptions {
    fn default() -> Self {
        Self {
            url_template: OSM_TILE_URL_TEMPLATE.to_string(),
            attribution: OSM_ATTRIBUTION.to_string(),
            max_zoom: OSM_MAX_ZOOM,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatLayerOptions {
    pub radius: u32,
    pub blur: u32,
    pub max_zoom: u8,
}

impl Default for HeatLayerOptions {
    fn default() -> Self {
        Self {
            radius: HEAT_DEFAULT_RADIUS,
            blur: HEAT_DEFAULT_BLUR,
            max_zoom: HEAT_DEFAULT_MAX_ZOOM,
        }
    }
}
