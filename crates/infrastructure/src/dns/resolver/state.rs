use dnslookup_domain::{FailureCode, LookupOutcome, TraceLog};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Purpose {
    /// Resolving the requested name (or the alias it led to).
    Target,
    /// Learning the address of a nameserver named by a glueless referral.
    NameServerAddress,
}

/// One level of resolution. The bottom frame is the requested name; each
/// glueless referral pushes a frame for the nameserver's own address.
#[derive(Debug, Clone)]
pub(super) struct Frame {
    pub name: String,
    pub purpose: Purpose,
}

/// What the resolver does next.
#[derive(Debug)]
pub(super) enum Step {
    /// Send `name` to `server` and classify the response.
    Query { server: String, name: String },
    /// Authoritative CNAME: restart the current frame at the starting server.
    FollowCname(String),
    /// Referral with glue: ask the glue address next.
    FollowGlue(String),
    /// Referral without glue: resolve this nameserver name first.
    ResolveNameServer(String),
    /// A nameserver sub-resolution finished, with or without an address.
    NameServerResolved(Option<String>),
    Done(LookupOutcome),
}

impl Step {
    pub fn fail(code: FailureCode) -> Self {
        Step::Done(LookupOutcome::Failed(code))
    }
}

/// Everything one resolution mutates. Counters are shared by every query of
/// the run and never reset.
#[derive(Debug)]
pub(super) struct ResolutionState {
    pub origin_server: Arc<str>,
    /// Requested name, fixed for the whole resolution.
    pub fqdn: String,
    pub want_ipv6: bool,
    pub alias: Option<String>,
    pub attempts: u32,
    pub timeouts: u32,
    pub trace: TraceLog,
    frames: Vec<Frame>,
    root: Frame,
}

impl ResolutionState {
    pub fn new(origin_server: Arc<str>, fqdn: &str, want_ipv6: bool) -> Self {
        Self {
            origin_server,
            fqdn: fqdn.to_string(),
            want_ipv6,
            alias: None,
            attempts: 0,
            timeouts: 0,
            trace: TraceLog::new(),
            frames: Vec::new(),
            root: Frame {
                name: fqdn.to_string(),
                purpose: Purpose::Target,
            },
        }
    }

    pub fn current(&self) -> &Frame {
        self.frames.last().unwrap_or(&self.root)
    }

    pub fn current_mut(&mut self) -> &mut Frame {
        self.frames.last_mut().unwrap_or(&mut self.root)
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn push_nameserver(&mut self, ns_name: String) {
        self.frames.push(Frame {
            name: ns_name,
            purpose: Purpose::NameServerAddress,
        });
    }

    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    /// Name to ask for once a nameserver sub-resolution has been popped.
    /// Back at the bottom the requested name replaces any alias followed earlier.
    pub fn resume_name(&mut self) -> &str {
        if self.frames.is_empty() {
            self.root.name.clone_from(&self.fqdn);
        }
        &self.current().name
    }

    pub fn in_nameserver_lookup(&self) -> bool {
        self.current().purpose == Purpose::NameServerAddress
    }

    pub fn into_trace(self) -> TraceLog {
        self.trace
    }
}
