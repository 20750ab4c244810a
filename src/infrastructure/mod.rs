pub mod driver;
pub mod logging;
pub mod serializer;
