mod cors;
mod path;
mod validate;

pub use self::cors::cors_layer;
pub use self::path::SimplePath;
pub use self::validate::SimpleValidatedJson;
