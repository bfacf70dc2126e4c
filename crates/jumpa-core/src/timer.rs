//! Cuenta regresiva de expiración de códigos de un solo uso.
//!
//! `Countdown` es la parte pura (segundos restantes + formato `m:ss`);
//! `spawn_countdown` la hace avanzar en una tarea tokio. La tarea se aborta
//! cuando se descarta su `CountdownHandle`, igual que un intervalo se limpia
//! al desmontar la pantalla.
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Formato de reloj: 267 -> "4:27", 5 -> "0:05".
pub fn format_clock(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u64,
}

impl Countdown {
    pub fn new(seconds: u64) -> Self {
        Self { remaining: seconds }
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Resta un segundo; devuelve `true` si quedó expirada.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.is_expired()
    }

    pub fn display(&self) -> String {
        format_clock(self.remaining)
    }
}

/// Handle de una cuenta regresiva en curso.
#[derive(Debug)]
pub struct CountdownHandle {
    rx: watch::Receiver<u64>,
    task: JoinHandle<()>,
}

impl CountdownHandle {
    pub fn remaining(&self) -> u64 {
        *self.rx.borrow()
    }

    pub fn display(&self) -> String {
        format_clock(self.remaining())
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.rx.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Lanza una cuenta regresiva de `seconds` que descuenta uno cada `period`.
///
/// Debe llamarse dentro de un runtime tokio.
pub fn spawn_countdown(seconds: u64, period: Duration) -> CountdownHandle {
    let (tx, rx) = watch::channel(seconds);
    let task = tokio::spawn(async move {
        let mut countdown = Countdown::new(seconds);
        let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
        while !countdown.is_expired() {
            interval.tick().await;
            countdown.tick();
            if tx.send(countdown.remaining()).is_err() {
                break;
            }
        }
    });
    CountdownHandle { rx, task }
}
