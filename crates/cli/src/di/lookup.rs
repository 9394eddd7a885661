use dnslookup_application::use_cases::LookupUseCase;
use dnslookup_domain::Config;
use dnslookup_infrastructure::dns::transport::resolve_server;
use dnslookup_infrastructure::dns::{IterativeResolver, UdpTransport};
use std::sync::Arc;
use tracing::info;

pub struct LookupServices {
    pub lookup: Arc<LookupUseCase>,
}

impl LookupServices {
    /// Binds the one socket used for the whole run, sized for the starting
    /// server's address family.
    pub async fn new(config: &Config, root_server: &str, tracing_on: bool) -> anyhow::Result<Self> {
        let resolver_config = &config.resolver;

        let root_addr = resolve_server(
            root_server,
            resolver_config.port,
            resolver_config.query_timeout(),
        )
        .await?;

        let transport =
            Arc::new(UdpTransport::bind_for(&root_addr, resolver_config.max_response_size).await?);

        info!(root = %root_addr, local = ?transport.local_addr().ok(), "Transport ready");

        let resolver = Arc::new(IterativeResolver::new(transport, resolver_config.clone()));
        let lookup = Arc::new(LookupUseCase::new(resolver, tracing_on));

        Ok(Self { lookup })
    }
}
