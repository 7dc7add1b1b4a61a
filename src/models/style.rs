use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Tipo de capa que renderiza iconografía/etiquetas puntuales.
pub const SYMBOL_LAYER_TYPE: &str = "symbol";

/// Una capa dentro del documento de estilo. Solo tipamos `id` y `type`; el
/// resto de campos (source, paint, layout, ...) se conservan tal cual en
/// `extra` para reenviarlos intactos a la superficie de render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleLayer {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub layer_type: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StyleLayer {
    pub fn is_symbol(&self) -> bool {
        self.layer_type == SYMBOL_LAYER_TYPE
    }
}

/// Documento de estilo descargado del endpoint remoto. Se parsea una vez por
/// montaje y es de solo lectura una vez almacenado.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleDocument {
    #[serde(default)]
    pub layers: Vec<StyleLayer>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StyleDocument {
    /// Elimina las capas de tipo "symbol" (flag `hide_symbol`).
    pub fn without_symbol_layers(mut self) -> Self {
        self.layers.retain(|layer| !layer.is_symbol());
        self
    }

    pub fn symbol_layer_ids(&self) -> Vec<String> {
        symbol_layer_ids(&self.layers)
    }
}

/// Ids de las capas "symbol": son las únicas que responden a interacción de
/// puntero (hover/click) en la superficie.
pub fn symbol_layer_ids(layers: &[StyleLayer]) -> Vec<String> {
    layers
        .iter()
        .filter(|layer| layer.is_symbol())
        .map(|layer| layer.id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style_with(types: &[(&str, &str)]) -> StyleDocument {
        let layers = types
            .iter()
            .map(|(id, ty)| StyleLayer {
                id: (*id).to_string(),
                layer_type: (*ty).to_string(),
                extra: Map::new(),
            })
            .collect();
        StyleDocument {
            layers,
            extra: Map::new(),
        }
    }

    #[test]
    fn without_symbol_layers_drops_only_symbols() {
        let filtered =
            style_with(&[("f", "fill"), ("s", "symbol"), ("l", "line")]).without_symbol_layers();
        let types: Vec<&str> = filtered
            .layers
            .iter()
            .map(|l| l.layer_type.as_str())
            .collect();
        assert_eq!(types, vec!["fill", "line"]);
    }

    #[test]
    fn symbol_layer_ids_picks_symbol_layers() {
        let style = style_with(&[("a", "fill"), ("b", "symbol")]);
        assert_eq!(style.symbol_layer_ids(), vec!["b".to_string()]);
    }

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let raw = serde_json::json!({
            "version": 8,
            "sources": { "base": { "type": "vector" } },
            "layers": [
                { "id": "bg", "type": "background", "paint": { "background-color": "#fff" } },
                { "id": "poi", "type": "symbol", "source": "base" }
            ]
        });
        let style: StyleDocument = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(style.layers.len(), 2);
        assert!(style.extra.contains_key("sources"));

        let back = serde_json::to_value(&style).unwrap();
        assert_eq!(back["version"], 8);
        assert_eq!(back["layers"][0]["paint"]["background-color"], "#fff");
    }

    #[test]
    fn layers_field_is_optional() {
        let style: StyleDocument = serde_json::from_str(r#"{ "version": 8 }"#).unwrap();
        assert!(style.layers.is_empty());
    }
}
