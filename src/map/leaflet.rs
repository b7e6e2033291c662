use crate::locations::models::Coordinate;
use crate::map::backend::{MapBackend, MapHandle};
use crate::map::consts::{LEAFLET_HEAT_SCRIPT_URL, LEAFLET_SCRIPT_URL, LEAFLET_STYLESHEET_URL};
use crate::map::errors::RenderError;
use crate::map::models::{HeatLayerOptions, TileLayerOptions};
use serde::Serialize;

/// Backend that writes the map out as a standalone Leaflet page.
#[derive(Clone, Debug, Default)]
pub struct LeafletBackend {}

impl LeafletBackend {
    pub fn new() -> Self {
        Self {}
    }
}

impl MapBackend for LeafletBackend {
    type Handle = LeafletMap;
    type Error = RenderError;

    fn map(&self, container_id: &str) -> Result<LeafletMap, RenderError> {
        if !container_id_is_valid(container_id) {
            return Err(RenderError::InvalidContainerId(container_id.to_string()));
        }
        Ok(LeafletMap {
            container_id: container_id.to_string(),
            view: None,
            layers: Vec::new(),
        })
    }

    fn tile_layer(&self, url_template: &str, options: &TileLayerOptions) -> LeafletLayer {
        LeafletLayer::Tile {
            url_template: url_template.to_string(),
            options: options.clone(),
        }
    }

    fn heat_layer(&self, coordinates: &[Coordinate], options: &HeatLayerOptions) -> LeafletLayer {
        LeafletLayer::Heat {
            coordinates: coordinates.to_vec(),
            options: options.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LeafletLayer {
    Tile {
        url_template: String,
        options: TileLayerOptions,
    },
    Heat {
        coordinates: Vec<Coordinate>,
        options: HeatLayerOptions,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeafletMap {
    container_id: String,
    view: Option<(Coordinate, u8)>,
    layers: Vec<LeafletLayer>,
}

impl MapHandle for LeafletMap {
    type Layer = LeafletLayer;

    fn set_view(&mut self, center: Coordinate, zoom: u8) -> &mut Self {
        self.view = Some((center, zoom));
        self
    }

    fn add_layer(&mut self, layer: LeafletLayer) -> &mut Self {
        self.layers.push(layer);
        self
    }
}

impl LeafletMap {
    #[cfg(test)]
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    #[cfg(test)]
    pub fn layers(&self) -> &[LeafletLayer] {
        &self.layers
    }

    pub fn script(&self) -> Result<String, RenderError> {
        let mut statements = vec![format!("const map = L.map({});", js(&self.container_id)?)];
        if let Some((center, zoom)) = self.view {
            statements.push(format!("map.setView({}, {});", js(&center)?, zoom));
        }
        for layer in &self.layers {
            let statement = match layer {
                LeafletLayer::Tile {
                    url_template,
                    options,
                } => format!(
                    "L.tileLayer({}, {}).addTo(map);",
                    js(url_template)?,
                    js(options)?
                ),
                LeafletLayer::Heat {
                    coordinates,
                    options,
                } => format!(
                    "L.heatLayer({}, {}).addTo(map);",
                    js(coordinates)?,
                    js(options)?
                ),
            };
            statements.push(statement);
        }
        Ok(statements.join("\n"))
    }

    pub fn to_html(&self) -> Result<String, RenderError> {
        let script = self.script()?;
        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Location history heatmap</title>
<link rel="stylesheet" href="{stylesheet}">
<style>html, body, #{id} {{ height: 100%; margin: 0; }}</style>
</head>
<body>
<div id="{id}"></div>
<script src="{leaflet}"></script>
<script src="{leaflet_heat}"></script>
<script>
{script}
</script>
</body>
</html>
"#,
            stylesheet = LEAFLET_STYLESHEET_URL,
            leaflet = LEAFLET_SCRIPT_URL,
            leaflet_heat = LEAFLET_HEAT_SCRIPT_URL,
            id = self.container_id,
            script = script,
        ))
    }
}

/// The id lands unescaped in an HTML attribute and a CSS selector, so only plain identifiers
/// (`[A-Za-z][A-Za-z0-9_-]*`) are accepted.
fn container_id_is_valid(container_id: &str) -> bool {
    let mut chars = container_id.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
        }
        _ => false,
    }
}

/// JSON literal safe to inline into a `<script>` element.
fn js<V: ?Sized + Serialize>(value: &V) -> Result<String, RenderError> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}
