pub(crate) mod loader;
pub(crate) mod registry;

pub(crate) use loader::load_city;
pub(crate) use registry::city_info;
