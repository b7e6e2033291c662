use crate::locations::models::Coordinate;
use crate::map::models::{HeatLayerOptions, TileLayerOptions};

pub trait MapHandle {
    type Layer;

    fn set_view(&mut self, center: Coordinate, zoom: u8) -> &mut Self;

    fn add_layer(&mut self, layer: Self::Layer) -> &mut Self;
}

/// A mapping library able to host a heat overlay.
pub trait MapBackend {
    type Handle: MapHandle;
    type Error: std::error::Error;

    fn map(&self, container_id: &str) -> Result<Self::Handle, Self::Error>;

    fn tile_layer(
        &self,
        url_template: &str,
        options: &TileLayerOptions,
    ) -> <Self::Handle as MapHandle>::Layer;

    fn heat_layer(
        &self,
        coordinates: &[Coordinate],
        options: &HeatLayerOptions,
    ) -> <Self::Handle as MapHandle>::Layer;
}
