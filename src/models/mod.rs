//! Modelos de datos
//!
//! Este módulo contiene las entidades administrables, la envoltura de
//! respuesta del backend y la identidad de sesión.

pub mod banner;
pub mod collection;
pub mod component;
pub mod concept;
pub mod entity;
pub mod envelope;
pub mod session;

pub use banner::*;
pub use collection::*;
pub use component::*;
pub use concept::*;
pub use entity::*;
pub use envelope::*;
pub use session::*;
