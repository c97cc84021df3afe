use std::net::{IpAddr, SocketAddr};

use tracing_subscriber::EnvFilter;

#[derive(clap::Parser)]
#[clap(name = "blog", about = "Serve the people blog pages")]
pub struct Args {
    #[clap(subcommand)]
    pub cmd: Cmd,
}

impl Args {
    pub fn run(self) -> Result<(), anyhow::Error> {
        match self.cmd {
            Cmd::Serve(cmd) => cmd.run(),
        }
    }
}

#[derive(clap::Subcommand)]
pub enum Cmd {
    /// Start the HTTP server.
    Serve(CmdServe),
}

#[derive(clap::Parser)]
pub struct CmdServe {
    /// Address to bind to.
    #[clap(long, env = "BLOG_HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    #[clap(long, env = "BLOG_PORT", default_value_t = people_blog::server::DEFAULT_PORT)]
    port: u16,
}

impl CmdServe {
    #[tokio::main]
    pub async fn run(self) -> Result<(), anyhow::Error> {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt().with_env_filter(filter).init();

        people_blog::server::Ctx::default()
            .run_server(SocketAddr::new(self.host, self.port))
            .await?;

        Ok(())
    }
}
