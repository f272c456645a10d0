use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use elijah_portal::{
    config::Settings,
    routes,
    services::{quick_contact::QuickContact, whatsapp::ContactTarget},
};
use tracing::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let settings = Settings::load().context("loading configuration")?;
    let target = ContactTarget::new(&settings.contact.whatsapp_number)
        .context("invalid contact number in configuration")?;
    let quick = QuickContact::new(target.clone(), settings.contact.quick_messages.clone());

    let host = settings.server.host.clone();
    let port = settings.server.port;
    info!("Starting portal on {}:{}", host, port);

    let settings = web::Data::new(settings);
    let target = web::Data::new(target);
    let quick = web::Data::new(quick);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(settings.clone())
            .app_data(target.clone())
            .app_data(quick.clone())
            .service(web::scope("/api").configure(routes::api::scoped_config))
    })
    .bind((host, port))?
    .run()
    .await?;

    Ok(())
}
