mod sale_lifecycle;

#[cfg(feature = "wasm")]
mod factory_deployment;
