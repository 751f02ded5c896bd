//! The greeting API on a local port.
//!
//! Run with:
//!   RUST_LOG=remapi=debug cargo run --example greet
//!
//! Try:
//!   curl -X POST http://localhost:5000/hello \
//!        -H 'content-type: application/json' \
//!        -d '{"name":"Tarou","family":"Yamada"}'
//!   curl -X POST http://localhost:5000/seeyou \
//!        -H 'content-type: application/json' \
//!        -d '{"key1":"Tarou","key2":"Yamada"}'
//!   curl -X POST http://localhost:5000/thankyou \
//!        -H 'content-type: application/json' \
//!        -d '{"name":"Tarou","key2":"Yamada"}'

use remapi::{Server, greet, logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init("info");

    let app = greet::routes()?;
    Server::bind("127.0.0.1:5000".parse()?).await?.serve(app).await?;
    Ok(())
}
