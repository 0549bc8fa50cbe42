//! Modelos del sistema
//!
//! Este módulo contiene los modelos de dominio: coches, repostajes
//! y las estadísticas derivadas de consumo.

pub mod car;
pub mod fuel_entry;
pub mod fuel_stats;
