use crate::locations::models::Coordinate;
use backend::{MapBackend, MapHandle};
use models::MapView;

pub mod backend;
pub mod consts;
pub mod errors;
pub mod leaflet;
pub mod models;
#[cfg(test)]
pub mod tests;

pub struct MapRenderer<B: MapBackend> {
    backend: B,
}

impl<B> MapRenderer<B>
where
    B: MapBackend,
{
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn create_map(
        &self,
        container_id: &str,
        center: Coordinate,
        zoom: u8,
    ) -> Result<B::Handle, B::Error> {
        let mut handle = self.backend.map(container_id)?;
        handle.set_view(center, zoom);
        Ok(handle)
    }

    /// Creates the map, then stacks the base tiles and the heat overlay on it, in that order.
    pub fn draw_heatmap(
        &self,
        view: &MapView,
        coordinates: &[Coordinate],
    ) -> Result<B::Handle, B::Error> {
        let mut handle = self.create_map(&view.container_id, view.center, view.zoom)?;
        let tiles = self
            .backend
            .tile_layer(&view.tiles.url_template, &view.tiles);
        let heat = self.backend.heat_layer(coordinates, &view.heat);
        handle.add_layer(tiles).add_layer(heat);
        tracing::debug!(
            task = "render",
            container_id = %view.container_id,
            points = coordinates.len(),
            "Heat layer attached."
        );
        Ok(handle)
    }
}
