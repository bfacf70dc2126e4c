use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::WizardError;

/// Payload tipado con destino fijo y valores de respaldo documentados.
///
/// Conviene declarar el struct con `#[serde(default)]` para que un payload
/// parcial complete los campos que falten con `fallback()`.
pub trait HandoffPayload: Serialize + DeserializeOwned {
    const DESTINATION: &'static str;

    fn fallback() -> Self;
}

/// Transición de navegación: destino + payload opaco opcional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Navigation {
    pub destination: String,
    pub payload: Option<Value>,
}

impl Navigation {
    pub fn to(destination: impl Into<String>) -> Self {
        Self { destination: destination.into(),
               payload: None }
    }

    pub fn with_payload<T: HandoffPayload>(payload: &T) -> Result<Self, WizardError> {
        Ok(Self { destination: T::DESTINATION.to_string(),
                  payload: Some(serde_json::to_value(payload)?) })
    }
}

/// Resultado depositado para un destino.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Handoff {
    pub id: Uuid,
    pub destination: String,
    pub payload: Value,
    pub created_at: DateTime<Utc>,
}

/// Almacén compartido de entregas; clonar comparte el mismo contenido.
///
/// Un slot por destino: un `put` nuevo reemplaza al anterior no leído.
#[derive(Debug, Clone, Default)]
pub struct HandoffStore {
    slots: Arc<DashMap<String, Handoff>>,
}

impl HandoffStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_value(&self, destination: &str, payload: Value) -> Uuid {
        let handoff = Handoff { id: Uuid::new_v4(),
                                destination: destination.to_string(),
                                payload,
                                created_at: Utc::now() };
        let id = handoff.id;
        if self.slots.insert(destination.to_string(), handoff).is_some() {
            debug!("handoff for '{}' replaced before being read", destination);
        }
        id
    }

    pub fn put<T: HandoffPayload>(&self, payload: &T) -> Result<Uuid, WizardError> {
        Ok(self.put_value(T::DESTINATION, serde_json::to_value(payload)?))
    }

    /// Deposita el payload de una navegación, si lo trae.
    pub fn dispatch(&self, navigation: &Navigation) -> Option<Uuid> {
        navigation.payload
                  .as_ref()
                  .map(|p| self.put_value(&navigation.destination, p.clone()))
    }

    /// Retira el payload (lectura única).
    pub fn take_value(&self, destination: &str) -> Option<Value> {
        self.slots.remove(destination).map(|(_, h)| h.payload)
    }

    /// Retira y deserializa el payload; sin payload, o con uno ilegible,
    /// devuelve `default`.
    pub fn take<T: DeserializeOwned>(&self, destination: &str, default: T) -> T {
        match self.take_value(destination) {
            None => {
                debug!("no handoff for '{}', using fallback", destination);
                default
            }
            Some(v) => serde_json::from_value(v).unwrap_or_else(|e| {
                                                    warn!("unreadable handoff for '{}': {}", destination, e);
                                                    default
                                                }),
        }
    }

    pub fn take_payload<T: HandoffPayload>(&self) -> T {
        self.take(T::DESTINATION, T::fallback())
    }

    pub fn contains(&self, destination: &str) -> bool {
        self.slots.contains_key(destination)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
