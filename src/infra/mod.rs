//! Инфраструктурный слой вокруг каталога турниров:
//! - генерация ID;
//! - абстракция blob-хранилища и репозиторий коллекции;
//! - кодек легаси-записей (wire <-> domain).

pub mod codec;
pub mod ids;
pub mod persistence;

pub use codec::*;
pub use ids::*;
pub use persistence::*;
