use actix_web::{get, App, HttpResponse, HttpServer, Responder};
use coffee_shop_environment::web::EnvironmentState;
use dotenv::dotenv;
use env_logger::Env;

#[get("/api-url")]
async fn api_url(environment: EnvironmentState) -> impl Responder {
    HttpResponse::Ok().body(environment.api_server_url)
}

#[get("/login-client")]
async fn login_client(environment: EnvironmentState) -> impl Responder {
    HttpResponse::Ok().body(format!(
        "{} ({}) for {}",
        environment.auth.client_id,
        environment.auth.provider_domain_prefix,
        environment.auth.audience
    ))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let environment = EnvironmentState::setup();

    HttpServer::new(move || {
        App::new()
            // Register the settings as app data, making them available for handlers.
            .app_data(environment)
            // Register the settings route
            .configure(EnvironmentState::web_configurations)
            .service(api_url)
            .service(login_client)
    })
    .bind(("127.0.0.1", 8123))?
    .run()
    .await
}
