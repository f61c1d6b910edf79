#![allow(rustdoc::invalid_rust_codeblocks)]
#![doc = r#"
# coffee-shop-environment

Build-time environment settings for the coffee shop client: the backend API base URL, a production flag and the identity provider settings used by the login flow.

The settings are literal values compiled into the binary. They are never read from disk or the process environment and never change after start. The `production` cargo feature selects which variant is active.

# Getting started

Read the settings anywhere:

```rust
use coffee_shop_environment::environment::EnvironmentSettings;

let settings = EnvironmentSettings::get();
println!("{}", settings.api_server_url);
println!("{}", settings.auth.client_id);
```

## Actix web

Register the state once as app data and let handlers extract it, instead of reaching for the global:

```rust,ignore
use actix_web::{get, App, HttpResponse, HttpServer, Responder};
use coffee_shop_environment::web::EnvironmentState;

#[get("/api-url")]
async fn api_url(environment: EnvironmentState) -> impl Responder {
    HttpResponse::Ok().body(environment.api_server_url)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let environment = EnvironmentState::setup();

    HttpServer::new(move || {
        App::new()
            // Register the settings as app data such that handlers can extract them.
            .app_data(environment)
            // Serves the settings as JSON on `GET /environment`.
            .configure(EnvironmentState::web_configurations)
            .service(api_url)
    })
    .bind(("127.0.0.1", 8100))?
    .run()
    .await
}
```

A handler extracting `EnvironmentState` from an app without it registered responds with `500 Internal Server Error`.
"#]

pub mod environment;
pub mod web;
