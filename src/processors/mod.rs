mod field_injector;

pub use field_injector::FieldInjector;
