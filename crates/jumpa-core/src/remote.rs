//! Operaciones remotas asíncronas.
//!
//! El producto no tiene backend: cada "llamada a la API" es un temporizador
//! de duración fija seguido de una decisión local. `RemoteOperation` aísla
//! ese punto para que un backend real pueda sustituir a `SimulatedRemote`
//! sin tocar el controlador de steps.
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::model::FieldValues;

/// Fallo devuelto por una operación remota (simulado o real).
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("remote operation `{operation}` failed: {reason}")]
pub struct RemoteFailure {
    pub operation: String,
    pub reason: String,
}

/// Lo que el wizard entrega al backend al enviar.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionRequest {
    pub wizard_id: Uuid,
    pub wizard: String,
    pub definition_hash: String,
    pub fingerprint: String,
    pub values: FieldValues,
}

impl SubmissionRequest {
    /// Texto del campo o "" si no existe.
    pub fn text(&self, field: &str) -> &str {
        self.values.get(field).and_then(|v| v.as_text()).unwrap_or("")
    }
}

#[async_trait]
pub trait RemoteOperation: Send + Sync {
    fn name(&self) -> &str;

    async fn execute(&self, request: &SubmissionRequest) -> Result<Value, RemoteFailure>;
}

/// Backend simulado: espera `delay` y delega el resultado en `decide`.
///
/// Si el future se descarta antes de terminar (pantalla desmontada), el
/// temporizador se cancela con él.
pub struct SimulatedRemote<F> {
    name: String,
    delay: Duration,
    decide: F,
}

impl<F> SimulatedRemote<F> where F: Fn(&SubmissionRequest) -> Result<Value, String> + Send + Sync
{
    pub fn new(name: impl Into<String>, delay: Duration, decide: F) -> Self {
        Self { name: name.into(),
               delay,
               decide }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<F> fmt::Debug for SimulatedRemote<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulatedRemote")
         .field("name", &self.name)
         .field("delay", &self.delay)
         .finish()
    }
}

#[async_trait]
impl<F> RemoteOperation for SimulatedRemote<F> where F: Fn(&SubmissionRequest) -> Result<Value, String> + Send + Sync
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn execute(&self, request: &SubmissionRequest) -> Result<Value, RemoteFailure> {
        debug!("remote '{}' for wizard {} (delay {:?})", self.name, request.wizard_id, self.delay);
        tokio::time::sleep(self.delay).await;
        (self.decide)(request).map_err(|reason| {
                                  warn!("remote '{}' failed: {}", self.name, reason);
                                  RemoteFailure { operation: self.name.clone(),
                                                  reason }
                              })
    }
}

/// Backend simulado que siempre acepta y devuelve `{"status": "ok"}`.
pub fn always_ok(name: impl Into<String>,
                 delay: Duration)
                 -> SimulatedRemote<impl Fn(&SubmissionRequest) -> Result<Value, String> + Send + Sync> {
    SimulatedRemote::new(name, delay, |_req: &SubmissionRequest| Ok(serde_json::json!({ "status": "ok" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldValue;

    fn request(pin: &str) -> SubmissionRequest {
        let mut values = FieldValues::new();
        values.insert("pin".into(), FieldValue::text(pin));
        SubmissionRequest { wizard_id: Uuid::new_v4(),
                            wizard: "login".into(),
                            definition_hash: "h".into(),
                            fingerprint: "f".into(),
                            values }
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_remote_waits_then_decides() {
        let remote = SimulatedRemote::new("login", Duration::from_secs(1), |req: &SubmissionRequest| {
            if req.text("pin") == "1234" { Ok(serde_json::json!({"token": "t"})) } else { Err("wrong pin".into()) }
        });
        let start = tokio::time::Instant::now();
        let ok = remote.execute(&request("1234")).await.unwrap();
        assert_eq!(ok["token"], "t");
        assert!(start.elapsed() >= Duration::from_secs(1));

        let err = remote.execute(&request("0000")).await.unwrap_err();
        assert_eq!(err, RemoteFailure { operation: "login".into(), reason: "wrong pin".into() });
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_future_cancels_the_call() {
        let remote = always_ok("slow", Duration::from_secs(60));
        let req = request("1");
        let res = tokio::time::timeout(Duration::from_secs(1), remote.execute(&req)).await;
        assert!(res.is_err(), "timeout must win over a 60s simulated call");
    }

    #[test]
    fn zero_delay_resolves_on_a_plain_runtime() {
        let remote = always_ok("instant", Duration::ZERO);
        let res = tokio_test::block_on(remote.execute(&request("1"))).unwrap();
        assert_eq!(res["status"], "ok");
        assert_eq!(remote.delay(), Duration::ZERO);
    }
}
