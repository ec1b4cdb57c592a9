use crate::{
    config::Settings,
    domain::{DocumentRoot, ENTRY_DOCUMENT, RESUME_FILE},
    email_client::EmailClient,
    routes::*,
};
use actix_cors::Cors;
use actix_files::Files;
use actix_web::{dev::Server, web::Data, HttpServer};
use core::net::SocketAddr;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct App {
    server: Server,
    socket_addr: SocketAddr,
}

impl App {
    pub fn build(config: &Settings) -> anyhow::Result<Self> {
        // create the app dependencies
        let listener =
            TcpListener::bind((config.application.host.clone(), config.application.port))?;
        let socket_addr = listener.local_addr()?;
        let document_root = DocumentRoot::new(&config.application.document_root)?;
        let email_client = config.email_client.client()?;

        log_startup(socket_addr, &document_root, email_client.is_none());

        // create the app runner
        let server = Self::get_server_runner(listener, document_root, email_client)?;

        Ok(Self {
            server,
            socket_addr,
        })
    }

    fn get_server_runner(
        listener: TcpListener,
        document_root: DocumentRoot,
        email_client: Option<EmailClient>,
    ) -> anyhow::Result<Server> {
        let static_root = document_root.as_ref().to_path_buf();
        let document_root = Data::new(document_root);
        let email_client = Data::new(email_client);
        let server = HttpServer::new(move || {
            actix_web::App::new()
                .wrap(Cors::permissive())
                .wrap(TracingLogger::default())
                .service(home)
                .service(submit_contact)
                .service(download_resume)
                .service(resume)
                .service(health_check)
                .service(check_files)
                // Must stay last: it claims every path the routes above leave over.
                .service(Files::new("/", static_root.clone()))
                .app_data(Data::clone(&document_root))
                .app_data(Data::clone(&email_client))
        })
        .listen(listener)?
        .run();

        Ok(server)
    }

    pub fn addr(&self) -> SocketAddr {
        self.socket_addr
    }

    pub async fn run_until_stopped(self) -> anyhow::Result<()> {
        self.server.await?;
        Ok(())
    }
}

fn log_startup(addr: SocketAddr, document_root: &DocumentRoot, demo_mode: bool) {
    tracing::info!(
        %addr,
        document_root = %document_root.as_ref().display(),
        entry_document = ENTRY_DOCUMENT,
        demo_mode,
        "Portfolio server starting",
    );

    let resume_file = document_root.resume();
    if resume_file.path.exists() {
        tracing::info!(file = RESUME_FILE, "Resume file found");
    } else {
        tracing::warn!(
            file = RESUME_FILE,
            path = %resume_file.path.display(),
            "Resume file not found, downloads will answer 404",
        );
    }
}
