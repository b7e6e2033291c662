pub const LEAFLET_STYLESHEET_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
pub const LEAFLET_SCRIPT_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
pub const LEAFLET_HEAT_SCRIPT_URL: &str =
    "https://unpkg.com/leaflet.heat@0.2.0/dist/leaflet-heat.js";

pub const OSM_TILE_URL_TEMPLATE: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
pub const OSM_MAX_ZOOM: u8 = 19;

pub const HEAT_DEFAULT_RADIUS: u32 = 25;
pub const HEAT_DEFAULT_BLUR: u32 = 15;
pub const HEAT_DEFAULT_MAX_ZOOM: u8 = 18;
