/// Máquina de estados de carga del mapa.
///
/// La disponibilidad de estilo, contenedor y superficie no se infiere del
/// producto cruzado de valores opcionales: las transiciones son explícitas y
/// con guardas. No hay vuelta atrás a `Unloaded`; ante una carga atascada la
/// única recuperación es re-montar el componente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Unloaded,
    /// El documento de estilo se descargó y parseó correctamente.
    StyleReady,
    /// La superficie de render señaló `load` con el estilo actual; las capas
    /// interactivas ya están calculadas.
    LayersReady,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadEvent {
    StyleFetched,
    SurfaceLoaded,
}

impl LoadPhase {
    /// Aplica un evento. Pares estado/evento no contemplados son no-ops: la
    /// guarda conserva el estado actual.
    pub fn advance(self, event: LoadEvent) -> Self {
        match (self, event) {
            (LoadPhase::Unloaded, LoadEvent::StyleFetched) => LoadPhase::StyleReady,
            (LoadPhase::StyleReady, LoadEvent::SurfaceLoaded) => LoadPhase::LayersReady,
            (phase, _) => phase,
        }
    }

    pub fn is_surface_ready(&self) -> bool {
        matches!(self, LoadPhase::LayersReady)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_reaches_layers_ready() {
        let phase = LoadPhase::default()
            .advance(LoadEvent::StyleFetched)
            .advance(LoadEvent::SurfaceLoaded);
        assert_eq!(phase, LoadPhase::LayersReady);
        assert!(phase.is_surface_ready());
    }

    #[test]
    fn surface_load_before_style_is_ignored() {
        let phase = LoadPhase::Unloaded.advance(LoadEvent::SurfaceLoaded);
        assert_eq!(phase, LoadPhase::Unloaded);
    }

    #[test]
    fn duplicate_events_do_not_regress() {
        let phase = LoadPhase::LayersReady.advance(LoadEvent::StyleFetched);
        assert_eq!(phase, LoadPhase::LayersReady);
        let phase = phase.advance(LoadEvent::SurfaceLoaded);
        assert_eq!(phase, LoadPhase::LayersReady);
    }
}
