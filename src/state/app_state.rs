// ============================================================================
// APP STATE - Estado mutable del mapa
// ============================================================================
// Solo dos piezas de estado real: el basemap y el dataset cargado.
// Las capas se derivan en cada render (ver MapViewModel).
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use serde_json::Value;
use crate::models::Basemap;
use crate::services::{parse_upload, UploadError};

/// Tipo de actualización del DOM
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UpdateType {
    /// Actualización incremental (el mapa no se destruye)
    Incremental(IncrementalUpdate),
    /// Re-render completo (reconstruye DOM y mapa)
    FullRender,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IncrementalUpdate {
    /// Cambiar el estilo del mapa base
    Basemap,
    /// Recalcular y enviar capas a deck.gl
    Layers,
}

/// Identifica una lectura de archivo. Solo la más reciente puede aplicarse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadTicket(u64);

#[derive(Debug, PartialEq)]
pub enum UploadOutcome {
    Applied,
    /// Otra selección de archivo empezó después de esta lectura
    Superseded,
}

type Subscriber = Rc<dyn Fn(UpdateType)>;

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub basemap: Rc<RefCell<Basemap>>,
    pub uploaded_data: Rc<RefCell<Option<Value>>>,
    latest_upload: Rc<Cell<u64>>,
    change_subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            basemap: Rc::new(RefCell::new(Basemap::default())),
            uploaded_data: Rc::new(RefCell::new(None)),
            latest_upload: Rc::new(Cell::new(0)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn get_basemap(&self) -> Basemap {
        *self.basemap.borrow()
    }

    pub fn has_uploaded_data(&self) -> bool {
        self.uploaded_data.borrow().is_some()
    }

    /// Alternar basemap y notificar. Devuelve el nuevo valor.
    pub fn toggle_basemap(&self) -> Basemap {
        let next = {
            let mut basemap = self.basemap.borrow_mut();
            *basemap = basemap.toggled();
            *basemap
        };
        log::info!("🗺️ [STATE] Basemap -> {:?}", next);
        self.notify_subscribers_with_type(UpdateType::Incremental(IncrementalUpdate::Basemap));
        next
    }

    /// Registrar el inicio de una lectura de archivo
    pub fn begin_upload(&self) -> UploadTicket {
        let ticket = self.latest_upload.get() + 1;
        self.latest_upload.set(ticket);
        UploadTicket(ticket)
    }

    /// Aplicar el resultado de una lectura.
    /// Reemplaza el dataset solo si el contenido es JSON válido y la lectura sigue vigente;
    /// en cualquier otro caso el estado queda intacto.
    pub fn complete_upload(
        &self,
        ticket: UploadTicket,
        read_result: Result<String, UploadError>,
    ) -> Result<UploadOutcome, UploadError> {
        if ticket.0 != self.latest_upload.get() {
            log::warn!(
                "⚠️ [STATE] Lectura {} descartada (vigente: {})",
                ticket.0,
                self.latest_upload.get()
            );
            return Ok(UploadOutcome::Superseded);
        }

        let data = parse_upload(&read_result?)?;
        *self.uploaded_data.borrow_mut() = Some(data);
        log::info!("✅ [STATE] Dataset cargado (lectura {})", ticket.0);

        self.notify_subscribers_with_type(UpdateType::Incremental(IncrementalUpdate::Layers));
        Ok(UploadOutcome::Applied)
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn(UpdateType) + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn notify_subscribers_with_type(&self, update_type: UpdateType) {
        // Copia de la lista: un subscriber puede registrar otro durante la notificación
        let subscribers: Vec<Subscriber> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback(update_type);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_FC: &str = r#"{"type":"FeatureCollection","features":[]}"#;

    fn recorded(state: &AppState) -> Rc<RefCell<Vec<UpdateType>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        state.subscribe_to_changes(move |update| sink.borrow_mut().push(update));
        log
    }

    #[test]
    fn test_toggle_basemap_round_trip() {
        let state = AppState::new();
        let updates = recorded(&state);
        let original = state.get_basemap();

        assert_eq!(state.toggle_basemap(), Basemap::DarkMatter);
        assert_eq!(state.toggle_basemap(), original);
        assert_eq!(
            *updates.borrow(),
            vec![UpdateType::Incremental(IncrementalUpdate::Basemap); 2]
        );
    }

    #[test]
    fn test_valid_upload_is_applied() {
        let state = AppState::new();
        let updates = recorded(&state);

        let ticket = state.begin_upload();
        let outcome = state.complete_upload(ticket, Ok(EMPTY_FC.to_string()));

        assert_eq!(outcome, Ok(UploadOutcome::Applied));
        assert!(state.has_uploaded_data());
        assert_eq!(
            *updates.borrow(),
            vec![UpdateType::Incremental(IncrementalUpdate::Layers)]
        );
    }

    #[test]
    fn test_invalid_upload_leaves_state_untouched() {
        let state = AppState::new();
        let updates = recorded(&state);
        state.toggle_basemap();

        let ticket = state.begin_upload();
        let outcome = state.complete_upload(ticket, Ok("not json".to_string()));

        assert!(matches!(outcome, Err(UploadError::InvalidJson(_))));
        assert!(!state.has_uploaded_data());
        assert_eq!(state.get_basemap(), Basemap::DarkMatter);
        assert_eq!(updates.borrow().len(), 1);
    }

    #[test]
    fn test_invalid_upload_keeps_previous_dataset() {
        let state = AppState::new();
        let first = state.begin_upload();
        state.complete_upload(first, Ok(EMPTY_FC.to_string())).unwrap();

        let second = state.begin_upload();
        assert!(state.complete_upload(second, Ok("{".to_string())).is_err());

        let data = state.uploaded_data.borrow();
        assert_eq!(data.as_ref().unwrap()["type"], "FeatureCollection");
    }

    #[test]
    fn test_second_upload_replaces_first() {
        let state = AppState::new();
        let first = state.begin_upload();
        state
            .complete_upload(first, Ok(r#"{"type":"FeatureCollection","features":[{"id":1}]}"#.to_string()))
            .unwrap();

        let second = state.begin_upload();
        state.complete_upload(second, Ok(EMPTY_FC.to_string())).unwrap();

        let data = state.uploaded_data.borrow();
        assert_eq!(data.as_ref().unwrap()["features"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_read_failure_is_reported() {
        let state = AppState::new();
        let ticket = state.begin_upload();
        let outcome = state.complete_upload(ticket, Err(UploadError::ReadFailed("NotReadableError".into())));

        assert!(matches!(outcome, Err(UploadError::ReadFailed(_))));
        assert!(!state.has_uploaded_data());
    }

    #[test]
    fn test_superseded_read_is_discarded() {
        let state = AppState::new();
        let updates = recorded(&state);

        let slow = state.begin_upload();
        let fast = state.begin_upload();
        state
            .complete_upload(fast, Ok(r#"{"type":"FeatureCollection","features":[],"name":"fast"}"#.to_string()))
            .unwrap();

        // La lectura lenta termina después, incluso con contenido inválido no afecta nada
        assert_eq!(state.complete_upload(slow, Ok(EMPTY_FC.to_string())), Ok(UploadOutcome::Superseded));
        assert_eq!(state.complete_upload(slow, Ok("basura".to_string())), Ok(UploadOutcome::Superseded));

        assert_eq!(state.uploaded_data.borrow().as_ref().unwrap()["name"], "fast");
        assert_eq!(updates.borrow().len(), 1);
    }
}
