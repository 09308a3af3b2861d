//! Инфраструктурный слой вокруг движка домино:
//! - генерация ID;
//! - RNG-реализации для движка;
//! - маппинги между domain и API;
//! - инициализация логирования.

pub mod ids;
pub mod logging;
pub mod mapping;
pub mod rng;

pub use ids::*;
pub use logging::init_logging;
pub use mapping::*;
pub use rng::*;
