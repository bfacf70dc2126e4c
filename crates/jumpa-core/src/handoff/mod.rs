//! Transient Result Store: entrega efímera de resultados entre pantallas.
//!
//! Un wizard que termina produce una `Navigation` (destino con nombre +
//! payload opcional). El destino lee el payload una sola vez con
//! `HandoffStore::take`; si llega sin payload (enlace directo, recarga)
//! recibe los valores por defecto que él mismo documenta. La ausencia de
//! payload es una entrada válida, nunca un error.

mod store;

pub use store::{Handoff, HandoffPayload, HandoffStore, Navigation};
