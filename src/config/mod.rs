pub mod defaults;
pub mod settings;
pub mod source;
pub mod types;
pub mod validator;

pub use defaults::*;
pub use settings::*;
pub use source::*;
pub use types::*;
pub use validator::*;
