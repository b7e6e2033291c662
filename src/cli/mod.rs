use crate::locations::models::Coordinate;
use crate::map::consts::{HEAT_DEFAULT_BLUR, HEAT_DEFAULT_RADIUS, OSM_TILE_URL_TEMPLATE};
use crate::map::models::{HeatLayerOptions, MapView, TileLayerOptions};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Renders a location history export as a heatmap page.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// URL or path of the location history file.
    #[arg(long)]
    pub input: String,
    #[arg(long)]
    #[arg(default_value = "heatmap.html")]
    pub output: PathBuf,
    #[arg(long)]
    #[arg(default_value = "map")]
    pub container_id: String,
    #[arg(long, allow_hyphen_values = true)]
    #[arg(default_value_t = 37.7749)]
    pub center_lat: f64,
    #[arg(long, allow_hyphen_values = true)]
    #[arg(default_value_t = -122.4194)]
    pub center_lon: f64,
    #[arg(long)]
    #[arg(default_value_t = 11)]
    pub zoom: u8,
    #[arg(long)]
    #[arg(default_value = OSM_TILE_URL_TEMPLATE)]
    pub tile_url: String,
    #[arg(long)]
    #[arg(default_value_t = HEAT_DEFAULT_RADIUS)]
    pub radius: u32,
    #[arg(long)]
    #[arg(default_value_t = HEAT_DEFAULT_BLUR)]
    pub blur: u32,
    /// Seconds to wait on a request that finished without status 200. `0` waits forever.
    #[arg(long)]
    #[arg(default_value_t = 30)]
    pub stall_timeout_secs: u64,
}

impl Args {
    pub fn stall_timeout(&self) -> Option<Duration> {
        match self.stall_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn map_view(&self) -> MapView {
        MapView {
            container_id: self.container_id.clone(),
            center: Coordinate::new(self.center_lat, self.center_lon),
            zoom: self.zoom,
            tiles: TileLayerOptions {
                url_template: self.tile_url.clone(),
                ..TileLayerOptions::default()
            },
            heat: HeatLayerOptions {
                radius: self.radius,
                blur: self.blur,
                ..HeatLayerOptions::default()
            },
        }
    }
}
