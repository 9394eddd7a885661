use super::state::{ResolutionState, Step};
use crate::dns::transport::DnsTransport;
use crate::dns::wire::{QueryEncoder, ResponseDecoder};
use async_trait::async_trait;
use dnslookup_application::ports::{DnsResolver, LookupReport, LookupRequest};
use dnslookup_domain::{
    DnsMessage, DomainError, FailureCode, LookupOutcome, RecordType, ResolverConfig,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Walks the delegation hierarchy itself, one query in flight at a time.
pub struct IterativeResolver {
    transport: Arc<dyn DnsTransport>,
    decoder: ResponseDecoder,
    config: ResolverConfig,
}

impl IterativeResolver {
    pub fn new(transport: Arc<dyn DnsTransport>, config: ResolverConfig) -> Self {
        info!(
            transport = transport.protocol_name(),
            max_attempts = config.max_attempts,
            timeout_secs = config.query_timeout_secs,
            strict_id = config.strict_transaction_id,
            "Iterative resolver created"
        );

        Self {
            transport,
            decoder: ResponseDecoder::new(config.max_pointer_hops),
            config,
        }
    }

    /// Sends one round and decides the next step from the response.
    ///
    /// Only setup errors (an unusable server address) are returned as `Err`;
    /// everything else ends in `Step::Done`.
    async fn round(
        &self,
        state: &mut ResolutionState,
        server: String,
        name: String,
    ) -> Result<Step, DomainError> {
        state.attempts += 1;
        if state.attempts >= self.config.max_attempts {
            warn!(attempts = state.attempts, "Attempt limit reached");
            return Ok(Step::fail(FailureCode::AttemptLimit));
        }

        let addr = self
            .transport
            .resolve_server(&server, self.config.port, self.config.query_timeout())
            .await?;

        let nameserver_lookup = state.in_nameserver_lookup();
        let record_type = RecordType::for_query(state.want_ipv6, nameserver_lookup);
        let query = match QueryEncoder::build_for(&name, state.want_ipv6, nameserver_lookup) {
            Ok(query) => query,
            Err(e) => return Ok(failed(e)),
        };

        debug!(
            server = %server,
            name = %name,
            record_type = %record_type,
            id = query.id,
            attempt = state.attempts,
            depth = state.depth(),
            "Sending query"
        );

        let bytes = match self
            .transport
            .exchange(&query.bytes, addr, self.config.query_timeout())
            .await
        {
            Ok(bytes) => bytes,
            Err(DomainError::QueryTimeout) => {
                state.timeouts += 1;
                if state.timeouts < self.config.max_timeouts {
                    warn!(server = %server, name = %name, "Query timed out, retrying");
                    return Ok(Step::Query { server, name });
                }
                warn!(server = %server, timeouts = state.timeouts, "Timeout limit reached");
                return Ok(Step::fail(FailureCode::Timeout));
            }
            Err(e) => return Ok(failed(e)),
        };

        let response = match self.decoder.decode(&bytes, query.qname_len) {
            Ok(response) => response,
            Err(e) => return Ok(failed(e)),
        };

        if self.config.strict_transaction_id && response.header.id != query.id {
            return Ok(failed(DomainError::TransactionIdMismatch {
                sent: query.id,
                received: response.header.id,
            }));
        }
        if response.header.response_code != 0 {
            return Ok(failed(DomainError::UnexpectedResponseCode(
                response.header.response_code,
            )));
        }

        state
            .trace
            .record_round(query.id, &name, record_type, addr.ip(), &response);

        Ok(classify(state, &response))
    }
}

/// Maps a response onto the next step, in this order: CNAME, nameserver
/// address found, final answer, referral with glue, referral without glue.
fn classify(state: &ResolutionState, response: &DnsMessage) -> Step {
    if response.has_cname_answer() {
        return match response.first_answer_data() {
            Ok(alias) => Step::FollowCname(alias),
            Err(e) => failed(e),
        };
    }

    if response.is_authoritative() {
        if state.in_nameserver_lookup() {
            return Step::NameServerResolved(response.first_answer_data().ok());
        }

        return match (
            response.first_answer_ttl(),
            response.first_answer_type(),
            response.all_answer_addresses(),
        ) {
            (Ok(ttl), Ok(record_type), Ok(addresses)) => Step::Done(LookupOutcome::Answered {
                ttl,
                record_type,
                addresses,
            }),
            _ => Step::fail(FailureCode::NoAnswer),
        };
    }

    if let Some(glue) = response.find_glue_address() {
        return Step::FollowGlue(glue);
    }

    match response.first_authority_data() {
        Ok(ns_name) => Step::ResolveNameServer(ns_name),
        Err(_) => Step::fail(FailureCode::ServerFailure),
    }
}

fn failed(error: DomainError) -> Step {
    debug!(error = %error, "Resolution failed");
    Step::fail(error.failure_code().unwrap_or(FailureCode::ServerFailure))
}

#[async_trait]
impl DnsResolver for IterativeResolver {
    async fn resolve(&self, request: &LookupRequest) -> Result<LookupReport, DomainError> {
        let mut state =
            ResolutionState::new(request.server.clone(), &request.name, request.want_ipv6);

        let mut step = Step::Query {
            server: request.server.to_string(),
            name: request.name.to_string(),
        };

        loop {
            step = match step {
                Step::Query { server, name } => self.round(&mut state, server, name).await?,
                Step::FollowCname(alias) => {
                    debug!(alias = %alias, "Following CNAME from the starting server");
                    state.current_mut().name = alias.clone();
                    state.alias = Some(alias.clone());
                    Step::Query {
                        server: state.origin_server.to_string(),
                        name: alias,
                    }
                }
                Step::FollowGlue(address) => {
                    debug!(glue = %address, "Following referral with glue");
                    Step::Query {
                        server: address,
                        name: state.current().name.clone(),
                    }
                }
                Step::ResolveNameServer(ns_name) => {
                    debug!(nameserver = %ns_name, "Referral without glue, resolving nameserver");
                    state.push_nameserver(ns_name.clone());
                    Step::Query {
                        server: state.origin_server.to_string(),
                        name: ns_name,
                    }
                }
                Step::NameServerResolved(address) => {
                    state.pop();
                    match address.filter(|address| !address.is_empty()) {
                        Some(address) => {
                            debug!(nameserver_address = %address, "Nameserver address learned");
                            Step::Query {
                                server: address,
                                name: state.resume_name().to_string(),
                            }
                        }
                        None => Step::fail(FailureCode::ServerFailure),
                    }
                }
                Step::Done(outcome) => {
                    info!(
                        name = %request.name,
                        alias = state.alias.as_deref().unwrap_or("-"),
                        attempts = state.attempts,
                        answered = outcome.is_answered(),
                        "Resolution finished"
                    );
                    return Ok(LookupReport::new(outcome, state.into_trace()));
                }
            };
        }
    }
}
