//! Repositorios de almacenamiento
//!
//! El trait CarRepository es la frontera con la persistencia; la
//! implementación en memoria es la única del sistema por ahora.

pub mod car_repository;
