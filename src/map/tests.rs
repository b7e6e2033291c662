use crate::locations::models::Coordinate;
use crate::map::backend::{MapBackend, MapHandle};
use crate::map::errors::RenderError;
use crate::map::leaflet::{LeafletBackend, LeafletLayer};
use crate::map::models::{HeatLayerOptions, MapView, TileLayerOptions};
use crate::map::MapRenderer;
use std::cell::RefCell;

#[derive(Debug, thiserror::Error)]
#[error("Fake map library failure.")]
pub struct FakeMapError;

#[derive(Debug, PartialEq)]
pub enum FakeLayer {
    Tile(String),
    Heat(Vec<Coordinate>),
}

#[derive(Debug, Default)]
pub struct FakeHandle {
    pub set_view_calls: Vec<(Coordinate, u8)>,
    pub layers: Vec<FakeLayer>,
}

impl MapHandle for FakeHandle {
    type Layer = FakeLayer;

    fn set_view(&mut self, center: Coordinate, zoom: u8) -> &mut Self {
        self.set_view_calls.push((center, zoom));
        self
    }

    fn add_layer(&mut self, layer: FakeLayer) -> &mut Self {
        self.layers.push(layer);
        self
    }
}

#[derive(Default)]
pub struct FakeBackend {
    pub map_calls: RefCell<Vec<String>>,
    pub fails: bool,
}

impl MapBackend for FakeBackend {
    type Handle = FakeHandle;
    type Error = FakeMapError;

    fn map(&self, container_id: &str) -> Result<FakeHandle, FakeMapError> {
        self.map_calls.borrow_mut().push(container_id.to_string());
        if self.fails {
            return Err(FakeMapError);
        }
        Ok(FakeHandle::default())
    }

    fn tile_layer(&self, url_template: &str, _options: &TileLayerOptions) -> FakeLayer {
        FakeLayer::Tile(url_template.to_string())
    }

    fn heat_layer(&self, coordinates: &[Coordinate], _options: &HeatLayerOptions) -> FakeLayer {
        FakeLayer::Heat(coordinates.to_vec())
    }
}

fn view(container_id: &str) -> MapView {
    MapView {
        container_id: container_id.to_string(),
        center: Coordinate::new(37.7749, -122.4194),
        zoom: 11,
        tiles: TileLayerOptions::default(),
        heat: HeatLayerOptions::default(),
    }
}

#[test]
fn test_create_map_delegates_once() {
    let renderer = MapRenderer::new(FakeBackend::default());
    let center = Coordinate::new(40.4, -3.7);

    let handle = renderer
        .create_map("anyId", center, 7)
        .expect("Fake backend should not fail.");

    assert_eq!(*renderer.backend().map_calls.borrow(), vec!["anyId".to_string()]);
    assert_eq!(handle.set_view_calls, vec![(center, 7)]);
    assert!(handle.layers.is_empty());
}

#[test]
fn test_create_map_propagates_backend_failure() {
    let renderer = MapRenderer::new(FakeBackend {
        fails: true,
        ..FakeBackend::default()
    });

    let result = renderer.create_map("anyId", Coordinate::new(0.0, 0.0), 1);

    assert!(matches!(result, Err(FakeMapError)));
    assert_eq!(renderer.backend().map_calls.borrow().len(), 1);
}

#[test]
fn test_draw_heatmap_adds_tiles_then_heat() {
    let renderer = MapRenderer::new(FakeBackend::default());
    let coordinates = vec![Coordinate::new(1.0, 2.0), Coordinate::new(3.0, 4.0)];
    let view = view("anyId");

    let handle = renderer
        .draw_heatmap(&view, &coordinates)
        .expect("Fake backend should not fail.");

    assert_eq!(handle.set_view_calls, vec![(view.center, view.zoom)]);
    assert_eq!(
        handle.layers,
        vec![
            FakeLayer::Tile(view.tiles.url_template.clone()),
            FakeLayer::Heat(coordinates),
        ]
    );
}

#[test]
fn test_leaflet_map_script() {
    let renderer = MapRenderer::new(LeafletBackend::new());
    let coordinates = vec![Coordinate::new(37.5, -122.25)];

    let map = renderer
        .draw_heatmap(&view("map"), &coordinates)
        .expect("Failed to draw the heatmap.");
    let script = map.script().expect("Failed to render the script.");

    assert_eq!(map.container_id(), "map");
    assert_eq!(map.layers().len(), 2);
    assert!(matches!(map.layers()[1], LeafletLayer::Heat { .. }));
    assert_eq!(
        script.lines().collect::<Vec<_>>(),
        vec![
            r#"const map = L.map("map");"#,
            "map.setView([37.7749,-122.4194], 11);",
            r#"L.tileLayer("https://tile.openstreetmap.org/{z}/{x}/{y}.png", {"attribution":"&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap<\/a> contributors","maxZoom":19}).addTo(map);"#,
            r#"L.heatLayer([[37.5,-122.25]], {"radius":25,"blur":15,"maxZoom":18}).addTo(map);"#,
        ]
    );
}

#[test]
fn test_leaflet_html_embeds_container_and_libraries() {
    let renderer = MapRenderer::new(LeafletBackend::new());

    let html = renderer
        .draw_heatmap(&view("heatmap"), &[])
        .expect("Failed to draw the heatmap.")
        .to_html()
        .expect("Failed to render HTML.");

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<div id="heatmap"></div>"#));
    assert!(html.contains("leaflet-heat.js"));
    assert!(html.contains("L.heatLayer([], "));
}

#[test]
fn test_leaflet_script_cannot_close_script_element() {
    let mut view = view("map");
    view.tiles.url_template = String::from("</script><script>alert(1)</script>");
    let renderer = MapRenderer::new(LeafletBackend::new());

    let script = renderer
        .draw_heatmap(&view, &[])
        .expect("Failed to draw the heatmap.")
        .script()
        .expect("Failed to render the script.");

    assert!(!script.contains("</script>"));
}

#[test]
fn test_leaflet_accepts_plain_identifiers() {
    let renderer = MapRenderer::new(LeafletBackend::new());

    for container_id in ["map", "anyId", "heat_map-2", "M"] {
        let map = renderer
            .create_map(container_id, Coordinate::new(0.0, 0.0), 3)
            .expect("Plain identifiers must be accepted.");

        assert_eq!(map.container_id(), container_id);
    }
}

#[test]
fn test_leaflet_rejects_unusable_container_ids() {
    let renderer = MapRenderer::new(LeafletBackend::new());

    for container_id in [
        "",
        "two words",
        "quo\"te",
        "<div>",
        "a}body{display:none",
        "a.b",
        "a:hover",
        "1map",
        "-map",
        "kart\u{e9}",
    ] {
        let result = renderer.create_map(container_id, Coordinate::new(0.0, 0.0), 3);

        assert!(matches!(result, Err(RenderError::InvalidContainerId(_))));
    }
}
