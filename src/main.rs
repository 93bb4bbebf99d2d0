// Natively these modules are reached only by tests and the server.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod decor;
mod logging;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod motion;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod site;

#[cfg(not(target_arch = "wasm32"))]
mod backend;
#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() {
    if let Err(error) = backend::run().await {
        logging::log_event(
            logging::LogLevel::Info,
            "server_failed",
            serde_json::json!({ "error": error.to_string() }),
        );
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
