// ============================================================================
// STYLE SERVICE - SOLO descarga del documento de estilo (stateless)
// ============================================================================
// Un único GET por montaje. Sin reintentos, sin estilo de respaldo: un fallo
// de red o parseo se propaga como Err al caller.
// ============================================================================

use gloo_net::http::Request;
use web_sys::AbortSignal;

use crate::models::StyleDocument;

/// Descarga y parsea el documento de estilo.
///
/// Con `hide_symbol` activo se eliminan las capas de tipo "symbol" antes de
/// devolver el documento. La señal de aborto permite cancelar el fetch si el
/// componente se desmonta con la descarga en vuelo.
pub async fn fetch_style(
    url: &str,
    hide_symbol: bool,
    signal: Option<&AbortSignal>,
) -> Result<StyleDocument, String> {
    log::info!("🗺️ Descargando estilo de mapa: {}", url);

    let response = Request::get(url)
        .abort_signal(signal)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "HTTP {}: {}",
            response.status(),
            response.status_text()
        ));
    }

    let style = response
        .json::<StyleDocument>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    let style = if hide_symbol {
        let before = style.layers.len();
        let filtered = style.without_symbol_layers();
        log::info!(
            "🔇 Capas symbol ocultadas: {} -> {} capas",
            before,
            filtered.layers.len()
        );
        filtered
    } else {
        style
    };

    log::info!("✅ Estilo cargado: {} capas", style.layers.len());
    Ok(style)
}
