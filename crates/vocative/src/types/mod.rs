mod confidence;
mod gender;
mod inflection;
mod language;
mod request;

pub use confidence::Confidence;
pub use gender::Gender;
pub use inflection::{InflectionResult, NameEntry};
pub use language::Language;
pub use request::{GreetingRequest, GreetingResponse};
