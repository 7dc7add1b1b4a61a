/// Cantidad de capas ancla de fondo que se instalan tras el `load` de la
/// superficie. Son capas `background` con opacidad 0 cuyo único propósito es
/// servir de puntos con nombre para ordenar capas insertadas por el caller.
pub const ANCHOR_LAYER_COUNT: usize = 8;

/// Prefijo de id de las capas ancla: index_0 .. index_7.
pub const ANCHOR_LAYER_PREFIX: &str = "index_";
