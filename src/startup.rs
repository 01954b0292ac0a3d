use crate::configuration::Settings;
use crate::database::get_connection_pool;
use crate::middleware::SaveRequestResponse;
use crate::routes::main_route;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use sqlx::PgPool;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}
impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let connection_pool = get_connection_pool(&configuration.database);
        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        tracing::info!("Listening on {}:{}", configuration.application.host, port);
        let server = run(listener, connection_pool, configuration.application.workers)?;
        // We "save" the bound port in one of `Application`'s fields
        Ok(Self { port, server })
    }
    pub fn port(&self) -> u16 {
        self.port
    }
    // A more expressive name that makes it clear that
    // this function only returns when the application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

fn run(listener: TcpListener, db_pool: PgPool, workers: usize) -> Result<Server, anyhow::Error> {
    let db_pool = web::Data::new(db_pool);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(SaveRequestResponse)
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            // Register the connection as part of the application state
            .app_data(db_pool.clone())
            .configure(main_route)
    })
    .workers(workers)
    .listen(listener)?
    .run();

    Ok(server)
}
