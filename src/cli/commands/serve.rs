use clap::Args;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind, overrides [server].bind
    #[arg(long)]
    pub bind: Option<String>,

    /// Serve without the backend, from the bundled directory
    #[arg(long)]
    pub offline: bool,
}

pub fn run(ctx: &AppContext, args: &ServeArgs) -> Result<()> {
    let mut config = ctx.config.clone();
    if let Some(bind) = &args.bind {
        config.server.bind.clone_from(bind);
    }
    if args.offline {
        config.backend.enabled = false;
    }
    crate::server::serve(&config)
}
